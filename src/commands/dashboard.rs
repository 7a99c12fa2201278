use serde::Serialize;
use crate::analysis::sentiment::{interpret_fear_greed, interpret_put_call, interpret_volatility};
use crate::analysis::technicals::interpret_trend;
use crate::models::MarketSnapshot;

pub const FOOTER: &str = "These market sentiment indicators help time ETF rebalancing decisions.";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricRow {
    pub section: String,
    pub name: String,
    pub value: Option<f64>,
    #[serde(skip)]
    pub decimals: usize,
    pub signal: Option<String>,
}

impl MetricRow {
    fn new(section: &str, name: &str, value: Option<f64>, decimals: usize, signal: Option<&str>) -> Self {
        Self {
            section: section.to_string(),
            name: name.to_string(),
            value,
            decimals,
            signal: signal.map(str::to_string),
        }
    }

    pub fn formatted_value(&self) -> String {
        match self.value {
            Some(v) => format!("{:.*}", self.decimals, v),
            None => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub snapshot: MarketSnapshot,
    pub rows: Vec<MetricRow>,
}

/// Pair every reading with its classification, in display order.
pub fn build_report(snapshot: MarketSnapshot) -> DashboardReport {
    let index = snapshot.index_symbol.clone();
    let rows = vec![
        MetricRow::new(&index, "Price", snapshot.index_price, 2, None),
        MetricRow::new(
            &index,
            "200-Day Average",
            snapshot.index_sma,
            2,
            Some(interpret_trend(snapshot.index_price, snapshot.index_sma)),
        ),
        MetricRow::new(
            "Fear & Greed",
            "FGI",
            snapshot.fear_greed.map(f64::from),
            0,
            Some(interpret_fear_greed(snapshot.fear_greed)),
        ),
        MetricRow::new(
            "Fear & Greed",
            "Put/Call Ratio",
            snapshot.put_call_ratio,
            2,
            Some(interpret_put_call(snapshot.put_call_ratio)),
        ),
        MetricRow::new(
            "Fear & Greed",
            "VIX",
            snapshot.volatility,
            2,
            Some(interpret_volatility(snapshot.volatility)),
        ),
    ];

    DashboardReport { snapshot, rows }
}

pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "📊 Market Sentiment ETF Strategy ({})\n",
        report.snapshot.fetched_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("{}\n", "-".repeat(72)));

    let mut current_section: Option<&str> = None;
    for row in &report.rows {
        if current_section != Some(row.section.as_str()) {
            let icon = if row.section == report.snapshot.index_symbol { "📈" } else { "🧠" };
            out.push_str(&format!("{} {}\n", icon, row.section));
            current_section = Some(row.section.as_str());
        }
        out.push_str(&format!(
            "  {:<16} | {:>10} | {}\n",
            row.name,
            row.formatted_value(),
            row.signal.as_deref().unwrap_or("")
        ));
    }

    out.push_str(&format!("{}\n", "-".repeat(72)));
    out.push_str(&format!("ℹ️  {}\n", FOOTER));
    out
}

pub fn render_json(report: &DashboardReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
