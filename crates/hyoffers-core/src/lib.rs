pub mod app_config;
pub mod config;
pub mod offers;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use offers::{CoercionPolicy, OfferRecord, OfferType};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown coercion policy \"{0}\" (expected \"fail-fast\" or \"skip-record\")")]
    UnknownCoercionPolicy(String),
}
