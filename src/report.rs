//! Console report for an extracted listing, drawn as bordered grid tables.

use std::fmt::Write;

use crate::models::Listing;

/// Renders main, details and seller tables, each preceded by a heading line.
pub fn render_listing(listing: &Listing) -> String {
    let main = &listing.main_information;
    let seller = &listing.seller_information;
    let mut out = String::new();

    out.push_str("\nMain Information:\n");
    out.push_str(&grid(
        None,
        &[
            ["Name", main.name.as_str()],
            ["Price", main.price.as_str()],
            ["Shipping Price", main.shipping_price.as_str()],
            ["Photo URL", main.photo_url.as_str()],
            ["URL", main.url.as_str()],
        ],
    ));

    out.push_str("\nAbout this Item:\n");
    if main.details.is_empty() {
        out.push_str("No details available for this item.\n");
    } else {
        let rows: Vec<[&str; 2]> = main
            .details
            .iter()
            .map(|(label, value)| [label.as_str(), value.as_str()])
            .collect();
        out.push_str(&grid(Some(["Attribute", "Value"]), &rows));
    }

    out.push_str("\nSeller Information:\n");
    out.push_str(&grid(
        None,
        &[
            ["Name", seller.name.as_str()],
            ["Items Link", seller.items_link.as_str()],
        ],
    ));

    out
}

/// Two-column grid table. A header row, when given, is separated by `=`.
fn grid(header: Option<[&str; 2]>, rows: &[[&str; 2]]) -> String {
    let mut widths = [0usize; 2];
    for row in header.iter().chain(rows) {
        for (col, cell) in row.iter().enumerate() {
            let widest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            widths[col] = widths[col].max(widest);
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in widths {
            line.extend(std::iter::repeat_n(fill, w + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut out = rule('-');
    if let Some(header) = header {
        push_row(&mut out, &header, &widths);
        out.push_str(&rule('='));
    }
    for row in rows {
        push_row(&mut out, row, &widths);
        out.push_str(&rule('-'));
    }
    out
}

fn push_row(out: &mut String, row: &[&str; 2], widths: &[usize; 2]) {
    let cells: Vec<Vec<&str>> = row.iter().map(|c| c.lines().collect()).collect();
    let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for i in 0..height {
        out.push('|');
        for (col, lines) in cells.iter().enumerate() {
            let text = lines.get(i).copied().unwrap_or("");
            let pad = widths[col] - text.chars().count();
            let _ = write!(out, " {text}{} |", " ".repeat(pad));
        }
        out.push('\n');
    }
}
