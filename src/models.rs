use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Everything one fetch round produced. Each reading is independent and
/// `None` means that source was unavailable this round.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub index_symbol: String,
    pub index_price: Option<f64>,
    pub index_sma: Option<f64>,
    pub volatility: Option<f64>,
    pub fear_greed: Option<u32>,
    pub put_call_ratio: Option<f64>,
    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    pub fn available_count(&self) -> usize {
        [
            self.index_price.is_some(),
            self.index_sma.is_some(),
            self.volatility.is_some(),
            self.fear_greed.is_some(),
            self.put_call_ratio.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
