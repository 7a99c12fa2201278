use crate::analysis::technicals::calculate_sma;
use crate::error::FetchError;
use crate::models::DataPoint;
use super::DataSource;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use yahoo_finance_api as yahoo;
use time::OffsetDateTime;

/// Window for "latest close" lookups. Wide enough to span a long weekend.
pub const RECENT_LOOKBACK_DAYS: i64 = 7;
/// Calendar days requested for the moving average. ~280 trading days.
pub const TRAILING_LOOKBACK_DAYS: i64 = 400;

pub struct YahooFetcher;

impl YahooFetcher {
    pub fn new() -> Self {
        YahooFetcher
    }
}

impl Default for YahooFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for YahooFetcher {
    fn name(&self) -> &str {
        "Yahoo"
    }

    async fn fetch_data(&self, symbol: &str, lookback_days: i64) -> Result<Vec<DataPoint>, FetchError> {
        let provider = yahoo::YahooConnector::new()?;

        // Yahoo API uses 'time' crate instead of 'chrono'
        let now = OffsetDateTime::now_utc();
        let start = now - time::Duration::days(lookback_days);

        let resp = provider.get_quote_history(symbol, start, now).await?;
        let quotes = resp.quotes()?;

        let mut data_points: Vec<DataPoint> = quotes
            .into_iter()
            .filter_map(|quote| {
                Utc.timestamp_opt(quote.timestamp as i64, 0)
                    .single()
                    .map(|timestamp| DataPoint { timestamp, value: quote.close })
            })
            .collect();

        data_points.sort_by_key(|p| p.timestamp);
        tracing::debug!(symbol, points = data_points.len(), "Yahoo history received");

        Ok(data_points)
    }
}

/// Latest close and the `window`-sample moving average for `symbol`.
///
/// Both values come back together or not at all: a fresh price without a
/// full averaging window is reported as a failure.
pub async fn fetch_index_trend(
    source: &dyn DataSource,
    symbol: &str,
    window: usize,
) -> Result<(f64, f64), FetchError> {
    // 1. Current price
    let price = fetch_latest_close(source, symbol).await?;

    // 2. Trailing history for the average
    let history = source.fetch_data(symbol, TRAILING_LOOKBACK_DAYS).await?;
    let closes: Vec<f64> = history.iter().map(|p| p.value).collect();

    let sma = calculate_sma(&closes, window).ok_or_else(|| FetchError::InsufficientHistory {
        symbol: symbol.to_string(),
        required: window,
        available: closes.len(),
    })?;

    Ok((price, sma))
}

/// Most recent daily close for `symbol`.
pub async fn fetch_latest_close(source: &dyn DataSource, symbol: &str) -> Result<f64, FetchError> {
    let recent = source.fetch_data(symbol, RECENT_LOOKBACK_DAYS).await?;
    recent
        .last()
        .map(|p| p.value)
        .ok_or_else(|| FetchError::EmptyHistory(symbol.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// Serves canned closes: `recent` for short lookbacks, `trailing` for long ones.
    struct StubSource {
        recent: Vec<f64>,
        trailing: Vec<f64>,
    }

    fn to_points(values: &[f64]) -> Vec<DataPoint> {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint { timestamp: start + Duration::days(i as i64), value: *v })
            .collect()
    }

    #[async_trait]
    impl DataSource for StubSource {
        fn name(&self) -> &str {
            "stub"
        }

        async fn fetch_data(&self, _symbol: &str, lookback_days: i64) -> Result<Vec<DataPoint>, FetchError> {
            if lookback_days <= RECENT_LOOKBACK_DAYS {
                Ok(to_points(&self.recent))
            } else {
                Ok(to_points(&self.trailing))
            }
        }
    }

    struct DownSource;

    #[async_trait]
    impl DataSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn fetch_data(&self, symbol: &str, _lookback_days: i64) -> Result<Vec<DataPoint>, FetchError> {
            Err(FetchError::EmptyHistory(symbol.to_string()))
        }
    }

    #[tokio::test]
    async fn test_index_trend_with_full_history() {
        // 50 old closes at 1.0 followed by 200 at 2.0; only the trailing 200 count
        let mut trailing = vec![1.0; 50];
        trailing.extend(vec![2.0; 200]);
        let source = StubSource { recent: vec![505.0, 510.5], trailing };

        let (price, sma) = fetch_index_trend(&source, "QQQ", 200).await.unwrap();
        assert_eq!(price, 510.5);
        assert!((sma - 2.0).abs() < 1e-9, "Expected 2.0, got {}", sma);
    }

    #[tokio::test]
    async fn test_short_history_drops_both_values() {
        let source = StubSource { recent: vec![510.5], trailing: vec![500.0; 199] };

        let result = fetch_index_trend(&source, "QQQ", 200).await;
        match result {
            Err(FetchError::InsufficientHistory { required, available, .. }) => {
                assert_eq!(required, 200);
                assert_eq!(available, 199);
            }
            other => panic!("expected InsufficientHistory, got {:?}", other),
        }

        // The pipeline sees the pair as absent even though the price fetch worked
        let pair = crate::fetcher::or_unavailable("index", fetch_index_trend(&source, "QQQ", 200).await);
        assert!(pair.is_none());
    }

    #[tokio::test]
    async fn test_empty_recent_history() {
        let source = StubSource { recent: vec![], trailing: vec![500.0; 250] };
        let result = fetch_index_trend(&source, "QQQ", 200).await;
        assert!(matches!(result, Err(FetchError::EmptyHistory(_))));
    }

    #[tokio::test]
    async fn test_latest_close() {
        let source = StubSource { recent: vec![18.2, 17.4, 16.9], trailing: vec![] };
        assert_eq!(fetch_latest_close(&source, "^VIX").await.unwrap(), 16.9);

        assert!(fetch_latest_close(&DownSource, "^VIX").await.is_err());
    }
}
