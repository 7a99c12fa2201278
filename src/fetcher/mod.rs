use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use crate::error::FetchError;
use crate::models::DataPoint;

pub mod yahoo;
pub mod feargreed;
pub mod put_call;

/// A daily close-price history provider.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn name(&self) -> &str;

    /// Daily closes for `symbol` over the last `lookback_days` calendar days, oldest first.
    async fn fetch_data(&self, symbol: &str, lookback_days: i64) -> Result<Vec<DataPoint>, FetchError>;
}

/// HTTP client used by the page scrapers: browser-like UA plus a hard timeout.
pub fn build_scrape_client(user_agent: &str, timeout: Duration) -> Result<Client, FetchError> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// GET a page and return its body. Non-2xx responses are errors.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(FetchError::Status(resp.status()));
    }
    Ok(resp.text().await?)
}

/// Collapse a fetch result into an optional reading, logging what went wrong.
pub fn or_unavailable<T>(indicator: &str, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                indicator,
                kind = e.kind().as_str(),
                error = %e,
                "fetch failed, reporting as unavailable"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_unavailable() {
        assert_eq!(or_unavailable("fgi", Ok::<u32, FetchError>(42)), Some(42));
        assert_eq!(
            or_unavailable::<u32>("fgi", Err(FetchError::MissingElement("div".into()))),
            None
        );
    }
}
