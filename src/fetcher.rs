use reqwest::redirect;
use tracing::debug;

use crate::error::FetchError;

const MAX_REDIRECTS: usize = 10;

/// Single GET of `url`. Non-2xx statuses are errors; nothing is retried.
pub fn fetch_html(url: &str) -> Result<String, FetchError> {
    let redirect_policy = redirect::Policy::custom(|attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            attempt.error(format!("Too many redirects (>{MAX_REDIRECTS})"))
        } else {
            attempt.follow()
        }
    });

    let client = reqwest::blocking::Client::builder()
        .redirect(redirect_policy)
        .build()
        .map_err(FetchError::Client)?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| FetchError::from_request(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().map_err(|e| FetchError::from_request(url, e))?;
    debug!(url, bytes = body.len(), "fetched listing page");
    Ok(body)
}
