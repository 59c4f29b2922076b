mod lookup;

use clap::{Parser, Subcommand};
use hyoffers_core::CoercionPolicy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hyoffers-cli")]
#[command(about = "Query Hyundai featured offers for a postal code")]
struct Cli {
    /// Postal code to look up (e.g., 92708)
    #[arg(long, env = "HYOFFERS_ZIP")]
    zip: String,
    /// Override HYOFFERS_COERCION_POLICY (fail-fast or skip-record)
    #[arg(long)]
    policy: Option<CoercionPolicy>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every offer as a flat JSON array
    Offers,
    /// Print offers whose type matches loosely (e.g., lease)
    ByType {
        offer_type: String,
    },
    /// Print sorted distinct model names
    Models,
    /// Print offers that carry a monthly payment
    Payments {
        /// Exact model name, case-insensitive
        #[arg(long)]
        model: Option<String>,
        /// Highest monthly payment to include
        #[arg(long)]
        max_price: Option<f64>,
    },
}

/// `RUST_LOG` wins when it parses; otherwise the configured log level.
fn build_env_filter(
    rust_log: Option<&str>,
    log_level: &str,
) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(|| EnvFilter::try_new(log_level), Ok)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = hyoffers_core::load_app_config()?;
    let env_filter = build_env_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        &config.log_level,
    )?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let policy = cli.policy.unwrap_or(config.coercion_policy);
    lookup::run(&config, &cli.zip, policy, cli.command).await
}

#[cfg(test)]
mod tests;
