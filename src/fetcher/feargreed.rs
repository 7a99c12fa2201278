use crate::error::FetchError;
use super::fetch_html;
use reqwest::Client;
use scraper::{Html, Selector};

/// Scrape the current Fear & Greed score (0 - 100) from `url`.
pub async fn fetch_fear_greed(client: &Client, url: &str, selector: &str) -> Result<u32, FetchError> {
    tracing::info!("Fear & Greed: scraping live data from {}", url);

    let html_content = fetch_html(client, url).await?;
    let score = parse_fear_greed(&html_content, selector)?;

    tracing::debug!(score, "Fear & Greed: score found");
    Ok(score)
}

/// Pull the score out of the page. Only a plain run of digits counts; signs,
/// decimals or stray characters mean the markup is not what we expect.
pub fn parse_fear_greed(html: &str, selector: &str) -> Result<u32, FetchError> {
    let document = Html::parse_document(html);
    let css = parse_selector(selector)?;

    let element = document
        .select(&css)
        .next()
        .ok_or_else(|| FetchError::MissingElement(selector.to_string()))?;

    let text = element.text().collect::<String>();
    let text = text.trim();

    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(FetchError::NotNumeric(text.to_string()));
    }

    text.parse::<u32>().map_err(|_| FetchError::NotNumeric(text.to_string()))
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector, FetchError> {
    Selector::parse(selector).map_err(|e| FetchError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
