use crate::error::FetchError;
use super::feargreed::parse_selector;
use super::fetch_html;
use reqwest::Client;
use scraper::Html;

/// Scrape the latest CBOE equity put/call ratio from `url`.
pub async fn fetch_put_call_ratio(client: &Client, url: &str, selector: &str) -> Result<f64, FetchError> {
    tracing::info!("Put/Call: scraping live data from {}", url);

    let body = fetch_html(client, url).await?;
    let ratio = parse_put_call_ratio(&body, selector)?;

    tracing::debug!(ratio, "Put/Call: ratio found");
    Ok(ratio)
}

/// First cell matching `selector`, in document order, that reads as a number.
///
/// The data table mixes headers and dates into the same column class, so
/// non-numeric cells are skipped rather than treated as failures.
pub fn parse_put_call_ratio(html: &str, selector: &str) -> Result<f64, FetchError> {
    let document = Html::parse_document(html);
    let css = parse_selector(selector)?;

    let mut matched = 0;
    for cell in document.select(&css) {
        matched += 1;
        let raw = cell.text().collect::<String>();
        // "1,234.5" -> "1234.5"
        let cleaned = raw.trim().replace(',', "");
        if let Ok(value) = cleaned.parse::<f64>() {
            return Ok(value);
        }
    }

    if matched == 0 {
        Err(FetchError::MissingElement(selector.to_string()))
    } else {
        Err(FetchError::NotNumeric(format!("{} '{}' cells, none numeric", matched, selector)))
    }
}
