use thiserror::Error;

/// Broad category of a fetch failure. Every kind ends up as an absent reading,
/// the category only exists so the logs say *why* an indicator shows N/A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Schema,
    InsufficientData,
    Parse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Schema => "schema",
            FailureKind::InsufficientData => "insufficient_data",
            FailureKind::Parse => "parse",
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Yahoo API error: {0}")]
    Quote(#[from] yahoo_finance_api::YahooError),

    #[error("No data returned for symbol: {0}")]
    EmptyHistory(String),

    #[error("Not enough history for {symbol}: required {required}, got {available}")]
    InsufficientHistory {
        symbol: String,
        required: usize,
        available: usize,
    },

    #[error("No element matched selector '{0}' (page layout changed?)")]
    MissingElement(String),

    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Could not parse '{0}' as a number")]
    NotNumeric(String),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Http(_) | FetchError::Status(_) | FetchError::Quote(_) => FailureKind::Network,
            FetchError::MissingElement(_) | FetchError::InvalidSelector { .. } => FailureKind::Schema,
            FetchError::EmptyHistory(_) | FetchError::InsufficientHistory { .. } => {
                FailureKind::InsufficientData
            }
            FetchError::NotNumeric(_) => FailureKind::Parse,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidNumber { key: String, value: String },
}
