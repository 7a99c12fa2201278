use crate::error::ConfigError;
use std::time::Duration;

// Upstream pages are scraped by class name. These break whenever the sites
// restyle, so they are kept here instead of inline in the fetchers.
pub const DEFAULT_INDEX_SYMBOL: &str = "QQQ";
pub const DEFAULT_VOLATILITY_SYMBOL: &str = "^VIX";
pub const DEFAULT_FGI_URL: &str = "https://feargreedmeter.com/";
pub const DEFAULT_FGI_SELECTOR: &str = "div.text-center.text-4xl.font-semibold.mb-1.text-white";
pub const DEFAULT_PCR_URL: &str = "https://ycharts.com/indicators/cboe_equity_put_call_ratio";
pub const DEFAULT_PCR_SELECTOR: &str = "td.col-6";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SMA_WINDOW: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub index_symbol: String,
    pub volatility_symbol: String,
    pub fgi_url: String,
    pub fgi_selector: String,
    pub pcr_url: String,
    pub pcr_selector: String,
    pub user_agent: String,
    pub http_timeout: Duration,
    pub sma_window: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index_symbol: DEFAULT_INDEX_SYMBOL.to_string(),
            volatility_symbol: DEFAULT_VOLATILITY_SYMBOL.to_string(),
            fgi_url: DEFAULT_FGI_URL.to_string(),
            fgi_selector: DEFAULT_FGI_SELECTOR.to_string(),
            pcr_url: DEFAULT_PCR_URL.to_string(),
            pcr_selector: DEFAULT_PCR_SELECTOR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            sma_window: DEFAULT_SMA_WINDOW,
        }
    }
}

impl Settings {
    /// Load settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Missing or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Settings::default();

        if let Some(v) = get("SENTIMENT_INDEX_SYMBOL") {
            settings.index_symbol = v;
        }
        if let Some(v) = get("SENTIMENT_VOLATILITY_SYMBOL") {
            settings.volatility_symbol = v;
        }
        if let Some(v) = get("SENTIMENT_FGI_URL") {
            settings.fgi_url = v;
        }
        if let Some(v) = get("SENTIMENT_FGI_SELECTOR") {
            settings.fgi_selector = v;
        }
        if let Some(v) = get("SENTIMENT_PCR_URL") {
            settings.pcr_url = v;
        }
        if let Some(v) = get("SENTIMENT_PCR_SELECTOR") {
            settings.pcr_selector = v;
        }
        if let Some(v) = get("SENTIMENT_USER_AGENT") {
            settings.user_agent = v;
        }
        if let Some(v) = get("SENTIMENT_HTTP_TIMEOUT_SECS") {
            let secs = parse_positive("SENTIMENT_HTTP_TIMEOUT_SECS", &v)?;
            settings.http_timeout = Duration::from_secs(secs as u64);
        }
        if let Some(v) = get("SENTIMENT_SMA_WINDOW") {
            settings.sma_window = parse_positive("SENTIMENT_SMA_WINDOW", &v)?;
        }

        Ok(settings)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
