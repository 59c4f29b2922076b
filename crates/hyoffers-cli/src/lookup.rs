//! Command handlers: each one fetches a fresh offer document and prints
//! the result as pretty JSON on stdout.

use hyoffers_core::{AppConfig, CoercionPolicy};
use hyoffers_scraper::{IncentiveClient, ZipOffers};
use serde::Serialize;

use crate::Commands;

/// Runs one lookup command against the configured incentive service.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the upstream request
/// fails, an offer carries a malformed payment under fail-fast, or the
/// result cannot be serialized.
pub(crate) async fn run(
    config: &AppConfig,
    zip: &str,
    policy: CoercionPolicy,
    command: Commands,
) -> anyhow::Result<()> {
    let client = IncentiveClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build incentive client: {e}"))?;
    let offers = ZipOffers::new(&client, zip, policy);

    match command {
        Commands::Offers => print_json(&offers.extract_offers().await?),
        Commands::ByType { offer_type } => {
            print_json(&offers.get_offers_by_type(&offer_type).await?)
        }
        Commands::Models => print_json(&offers.get_all_model_names().await?),
        Commands::Payments { model, max_price } => {
            if max_price.is_some_and(|p| !p.is_finite()) {
                anyhow::bail!("--max-price must be a finite number");
            }
            print_json(
                &offers
                    .get_available_payment_offers(model.as_deref(), max_price)
                    .await?,
            )
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
