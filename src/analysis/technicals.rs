use serde::Serialize;
use crate::analysis::sentiment::UNAVAILABLE;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TrendPosition {
    AboveAverage,
    BelowAverage,
}

impl TrendPosition {
    pub fn evaluate(price: f64, sma: f64) -> Self {
        if price >= sma {
            TrendPosition::AboveAverage
        } else {
            TrendPosition::BelowAverage
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendPosition::AboveAverage => "Above 200-Day Average (Uptrend)",
            TrendPosition::BelowAverage => "Below 200-Day Average (Downtrend)",
        }
    }
}

/// Simple moving average over the trailing `period` values.
pub fn calculate_sma(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let sum: f64 = data.iter().rev().take(period).sum();
    Some(sum / period as f64)
}

/// Price vs. long-run average. Both sides must be present.
pub fn interpret_trend(price: Option<f64>, sma: Option<f64>) -> &'static str {
    match (price, sma) {
        (Some(p), Some(s)) => TrendPosition::evaluate(p, s).label(),
        _ => UNAVAILABLE,
    }
}
