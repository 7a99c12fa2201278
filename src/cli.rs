use clap::Parser;
use crate::commands::dashboard::{build_report, render_json, render_text};
use crate::config::Settings;
use crate::core::orchestrator::{collect_snapshot, FetchMode};
use crate::fetcher::yahoo::YahooFetcher;

#[derive(Parser, Debug)]
#[command(name = "sentiment-dashboard")]
#[command(about = "Market sentiment indicators for ETF rebalancing timing", long_about = None)]
pub struct Cli {
    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Fetch sources one at a time instead of concurrently
    #[arg(long)]
    pub sequential: bool,
}

impl Cli {
    pub fn fetch_mode(&self) -> FetchMode {
        if self.sequential {
            FetchMode::Sequential
        } else {
            FetchMode::Concurrent
        }
    }
}

/// Log to stderr so the rendered dashboard on stdout stays clean.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    let snapshot = collect_snapshot(&settings, &YahooFetcher::new(), cli.fetch_mode()).await;
    let report = build_report(snapshot);

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["sentiment-dashboard"]);
        assert!(!cli.json);
        assert_eq!(cli.fetch_mode(), FetchMode::Concurrent);

        let cli = Cli::parse_from(["sentiment-dashboard", "--json", "--sequential"]);
        assert!(cli.json);
        assert_eq!(cli.fetch_mode(), FetchMode::Sequential);
    }
}
