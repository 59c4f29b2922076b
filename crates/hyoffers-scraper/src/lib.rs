pub mod agent;
pub mod client;
pub mod error;
pub mod extract;
pub mod node;
pub mod query;

pub use agent::ZipOffers;
pub use client::{IncentiveClient, BRAND};
pub use error::ScraperError;
pub use extract::extract_offers;
pub use query::{all_model_names, available_payment_offers, offers_by_type};
