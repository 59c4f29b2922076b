//! Flattened offer records produced from the upstream incentive document.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::CoreError;

/// The `cardOrder` slot an offer was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OfferType {
    #[serde(rename = "lease1")]
    Lease1,
    #[serde(rename = "lease2")]
    Lease2,
    #[serde(rename = "lowApr")]
    LowApr,
    #[serde(rename = "savings")]
    Savings,
}

impl OfferType {
    /// All slots in the order they are read from a vehicle's `cardOrder`.
    pub const ALL: [OfferType; 4] = [
        OfferType::Lease1,
        OfferType::Lease2,
        OfferType::LowApr,
        OfferType::Savings,
    ];

    /// The upstream tag, e.g. `"lowApr"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OfferType::Lease1 => "lease1",
            OfferType::Lease2 => "lease2",
            OfferType::LowApr => "lowApr",
            OfferType::Savings => "savings",
        }
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One promotional offer, flattened out of a vehicle's `cardOrder` slot.
///
/// Every key is always serialized; absent values come out as `null`.
/// `model_year`, `term`, `apr` and `price` keep whatever JSON type the
/// upstream used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    pub model: Option<String>,
    pub model_year: Option<Value>,
    pub trim: Option<String>,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub monthly_payment: Option<f64>,
    pub term: Option<Value>,
    pub apr: Option<Value>,
    pub price: Option<Value>,
    pub description: Option<String>,
    pub disclaimer: Option<String>,
    pub fuel: Option<String>,
    pub group_code: Option<String>,
}

/// What to do when a monthly payment cannot be read as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoercionPolicy {
    /// Abort the whole extraction with a data-format error.
    #[default]
    FailFast,
    /// Drop the offending record, log it, and keep going.
    SkipRecord,
}

impl FromStr for CoercionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "fail_fast" => Ok(CoercionPolicy::FailFast),
            "skip-record" | "skip_record" => Ok(CoercionPolicy::SkipRecord),
            _ => Err(CoreError::UnknownCoercionPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for CoercionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionPolicy::FailFast => f.write_str("fail-fast"),
            CoercionPolicy::SkipRecord => f.write_str("skip-record"),
        }
    }
}
