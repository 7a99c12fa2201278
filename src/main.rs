use clap::Parser;
use sentiment_dashboard_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::init_tracing();
    cli::run(Cli::parse()).await
}
