use serde::Serialize;

/// Label shown for any indicator whose source was unavailable.
pub const UNAVAILABLE: &str = "N/A";

// ============================================================================
// Fear & Greed Index (0 - 100)
// ============================================================================
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum FearGreedZone {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
}

impl FearGreedZone {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=25 => FearGreedZone::ExtremeFear,
            26..=45 => FearGreedZone::Fear,
            46..=55 => FearGreedZone::Neutral,
            56..=75 => FearGreedZone::Greed,
            _ => FearGreedZone::ExtremeGreed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FearGreedZone::ExtremeFear => "Extreme Fear (Possible Buy Signal)",
            FearGreedZone::Fear => "Fear (Possible Buy Signal)",
            FearGreedZone::Neutral => "Neutral (Hold or Wait)",
            FearGreedZone::Greed => "Greed (Possible Sell Signal)",
            FearGreedZone::ExtremeGreed => "Extreme Greed (Possible Sell Signal)",
        }
    }
}

pub fn interpret_fear_greed(score: Option<u32>) -> &'static str {
    score.map_or(UNAVAILABLE, |s| FearGreedZone::from_score(s).label())
}

// ============================================================================
// Equity Put/Call Ratio (contrarian)
// ============================================================================
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PutCallSentiment {
    Bearish, // > 0.95, crowd hedged
    Neutral,
    Bullish, // < 0.65, crowd complacent
}

impl PutCallSentiment {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.95 {
            PutCallSentiment::Bearish
        } else if ratio < 0.65 {
            PutCallSentiment::Bullish
        } else {
            PutCallSentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PutCallSentiment::Bearish => "Bearish Sentiment (Possible Buy Signal)",
            PutCallSentiment::Bullish => "Bullish Sentiment (Possible Sell Signal)",
            PutCallSentiment::Neutral => "Neutral Sentiment (Hold or Wait)",
        }
    }
}

pub fn interpret_put_call(ratio: Option<f64>) -> &'static str {
    ratio.map_or(UNAVAILABLE, |r| PutCallSentiment::from_ratio(r).label())
}

// ============================================================================
// VIX
// ============================================================================
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum VolatilityRegime {
    Low,
    Moderate,
    High,
}

impl VolatilityRegime {
    pub fn from_level(level: f64) -> Self {
        if level < 15.0 {
            VolatilityRegime::Low
        } else if level < 25.0 {
            VolatilityRegime::Moderate
        } else {
            VolatilityRegime::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VolatilityRegime::Low => "Low Volatility (Bullish)",
            VolatilityRegime::Moderate => "Moderate Volatility (Neutral)",
            VolatilityRegime::High => "High Volatility (Bearish)",
        }
    }
}

pub fn interpret_volatility(level: Option<f64>) -> &'static str {
    level.map_or(UNAVAILABLE, |v| VolatilityRegime::from_level(v).label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_unavailable() {
        assert_eq!(interpret_fear_greed(None), "N/A");
        assert_eq!(interpret_put_call(None), "N/A");
        assert_eq!(interpret_volatility(None), "N/A");
    }

    #[test]
    fn test_fear_greed_boundaries() {
        let cases = [
            (0, FearGreedZone::ExtremeFear),
            (25, FearGreedZone::ExtremeFear),
            (26, FearGreedZone::Fear),
            (45, FearGreedZone::Fear),
            (46, FearGreedZone::Neutral),
            (55, FearGreedZone::Neutral),
            (56, FearGreedZone::Greed),
            (75, FearGreedZone::Greed),
            (76, FearGreedZone::ExtremeGreed),
            (100, FearGreedZone::ExtremeGreed),
        ];
        for (score, expected) in cases {
            assert_eq!(FearGreedZone::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_fear_greed_labels() {
        assert_eq!(interpret_fear_greed(Some(42)), "Fear (Possible Buy Signal)");
        assert_eq!(interpret_fear_greed(Some(10)), "Extreme Fear (Possible Buy Signal)");
        assert_eq!(interpret_fear_greed(Some(50)), "Neutral (Hold or Wait)");
        assert_eq!(interpret_fear_greed(Some(60)), "Greed (Possible Sell Signal)");
        assert_eq!(interpret_fear_greed(Some(90)), "Extreme Greed (Possible Sell Signal)");
    }

    #[test]
    fn test_put_call_boundaries() {
        // Both thresholds are strict
        assert_eq!(PutCallSentiment::from_ratio(0.95), PutCallSentiment::Neutral);
        assert_eq!(PutCallSentiment::from_ratio(0.96), PutCallSentiment::Bearish);
        assert_eq!(PutCallSentiment::from_ratio(0.65), PutCallSentiment::Neutral);
        assert_eq!(PutCallSentiment::from_ratio(0.64), PutCallSentiment::Bullish);

        assert_eq!(interpret_put_call(Some(1.2)), "Bearish Sentiment (Possible Buy Signal)");
        assert_eq!(interpret_put_call(Some(0.5)), "Bullish Sentiment (Possible Sell Signal)");
        assert_eq!(interpret_put_call(Some(0.8)), "Neutral Sentiment (Hold or Wait)");
    }

    #[test]
    fn test_volatility_boundaries() {
        assert_eq!(VolatilityRegime::from_level(14.99), VolatilityRegime::Low);
        assert_eq!(VolatilityRegime::from_level(15.0), VolatilityRegime::Moderate);
        assert_eq!(VolatilityRegime::from_level(24.99), VolatilityRegime::Moderate);
        assert_eq!(VolatilityRegime::from_level(25.0), VolatilityRegime::High);

        assert_eq!(interpret_volatility(Some(12.0)), "Low Volatility (Bullish)");
        assert_eq!(interpret_volatility(Some(40.0)), "High Volatility (Bearish)");
    }

    #[test]
    fn test_classifiers_are_idempotent() {
        for score in [0, 25, 42, 55, 76] {
            assert_eq!(interpret_fear_greed(Some(score)), interpret_fear_greed(Some(score)));
        }
        for ratio in [0.5, 0.65, 0.95, 1.1] {
            assert_eq!(interpret_put_call(Some(ratio)), interpret_put_call(Some(ratio)));
        }
        for level in [9.0, 15.0, 25.0] {
            assert_eq!(interpret_volatility(Some(level)), interpret_volatility(Some(level)));
        }
    }
}
