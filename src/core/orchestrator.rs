use chrono::Utc;
use reqwest::Client;
use crate::config::Settings;
use crate::fetcher::feargreed::fetch_fear_greed;
use crate::fetcher::put_call::fetch_put_call_ratio;
use crate::fetcher::yahoo::{fetch_index_trend, fetch_latest_close};
use crate::fetcher::{build_scrape_client, or_unavailable, DataSource};
use crate::models::MarketSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// All four sources in flight at once.
    #[default]
    Concurrent,
    /// One source at a time, in display order.
    Sequential,
}

/// Run one fetch round. Never fails: every source that errors is simply absent.
pub async fn collect_snapshot(
    settings: &Settings,
    quotes: &dyn DataSource,
    mode: FetchMode,
) -> MarketSnapshot {
    log_round_start(settings, quotes, mode);

    let client = match build_scrape_client(&settings.user_agent, settings.http_timeout) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!(error = %e, "could not build HTTP client, scraped indicators unavailable");
            None
        }
    };

    let (trend, fear_greed, put_call, volatility) = match mode {
        FetchMode::Concurrent => tokio::join!(
            read_index_trend(settings, quotes),
            read_fear_greed(settings, client.as_ref()),
            read_put_call(settings, client.as_ref()),
            read_volatility(settings, quotes),
        ),
        FetchMode::Sequential => {
            let trend = read_index_trend(settings, quotes).await;
            let fear_greed = read_fear_greed(settings, client.as_ref()).await;
            let put_call = read_put_call(settings, client.as_ref()).await;
            let volatility = read_volatility(settings, quotes).await;
            (trend, fear_greed, put_call, volatility)
        }
    };

    let (index_price, index_sma) = match trend {
        Some((price, sma)) => (Some(price), Some(sma)),
        None => (None, None),
    };

    let snapshot = MarketSnapshot {
        index_symbol: settings.index_symbol.clone(),
        index_price,
        index_sma,
        volatility,
        fear_greed,
        put_call_ratio: put_call,
        fetched_at: Utc::now(),
    };

    tracing::info!(available = snapshot.available_count(), "fetch round complete");
    snapshot
}

fn log_round_start(settings: &Settings, quotes: &dyn DataSource, mode: FetchMode) {
    tracing::debug!(
        index = %settings.index_symbol,
        volatility = %settings.volatility_symbol,
        quote_source = quotes.name(),
        ?mode,
        "starting fetch round"
    );
}

async fn read_index_trend(settings: &Settings, quotes: &dyn DataSource) -> Option<(f64, f64)> {
    or_unavailable(
        "index_trend",
        fetch_index_trend(quotes, &settings.index_symbol, settings.sma_window).await,
    )
}

async fn read_volatility(settings: &Settings, quotes: &dyn DataSource) -> Option<f64> {
    or_unavailable(
        "volatility",
        fetch_latest_close(quotes, &settings.volatility_symbol).await,
    )
}

async fn read_fear_greed(settings: &Settings, client: Option<&Client>) -> Option<u32> {
    let client = client?;
    or_unavailable(
        "fear_greed",
        fetch_fear_greed(client, &settings.fgi_url, &settings.fgi_selector).await,
    )
}

async fn read_put_call(settings: &Settings, client: Option<&Client>) -> Option<f64> {
    let client = client?;
    or_unavailable(
        "put_call_ratio",
        fetch_put_call_ratio(client, &settings.pcr_url, &settings.pcr_selector).await,
    )
}
