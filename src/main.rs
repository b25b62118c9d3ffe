mod archiver;
mod error;
mod fetcher;
mod models;
mod parser;
mod report;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LISTING_BASE_URL: &str = "https://www.ebay.com/itm/";
const ITEM_ID: &str = "166864551603";
const OUTPUT_FILE: &str = "productInfo.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let url = get_listing_url(ITEM_ID);
    match run(&url, Path::new(OUTPUT_FILE)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(url = %url, "scrape aborted: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Fetch, extract, print and archive one listing. Only a failed fetch or
/// write ends the run early; missing fields are reported as N/A.
fn run(url: &str, output: &Path) -> Result<()> {
    info!(url, "fetching listing");
    let html = fetcher::fetch_html(url)?;

    let listing = parser::parse_listing(url, &html);
    print!("{}", report::render_listing(&listing));

    archiver::save_to_file(&listing, output)?;
    println!("Data has been saved to '{}'", output.display());
    Ok(())
}

fn get_listing_url(item_id: &str) -> String {
    format!("{LISTING_BASE_URL}{item_id}")
}
