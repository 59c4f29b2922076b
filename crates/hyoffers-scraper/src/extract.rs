//! Flattening of the featured-offer document into [`OfferRecord`]s.
//!
//! The upstream nests offers as `data[] → years[] → vehicles[] → cardOrder`,
//! where `cardOrder` holds up to four offer slots. Output order mirrors that
//! nesting, with slots read in [`OfferType::ALL`] order, so the same
//! document always yields the same sequence.

use hyoffers_core::{CoercionPolicy, OfferRecord, OfferType};
use serde_json::Value;

use crate::error::ScraperError;
use crate::node::Node;

const MONTHLY_PAYMENT_FIELD: &str = "offerMonthlyPayment";

/// Vehicle-level fields copied onto every offer under that vehicle.
struct VehicleContext<'a> {
    model: Option<&'a str>,
    fuel: Option<&'a str>,
    group_code: Option<&'a str>,
    year_model_year: Option<&'a Value>,
}

/// Flattens a raw featured-offer document into offer records.
///
/// Absent or wrong-shaped containers at any level contribute no records.
/// A slot contributes a record only when it is a non-empty object.
///
/// # Errors
///
/// Returns [`ScraperError::DataFormat`] when an offer's monthly payment is
/// present but not numeric and `policy` is [`CoercionPolicy::FailFast`].
/// Under [`CoercionPolicy::SkipRecord`] that offer is logged and dropped.
pub fn extract_offers(
    document: &Value,
    policy: CoercionPolicy,
) -> Result<Vec<OfferRecord>, ScraperError> {
    let mut offers = Vec::new();

    for entry in Node::new(document).children("data") {
        for year in entry.children("years") {
            for vehicle in year.children("vehicles") {
                let context = VehicleContext {
                    model: vehicle.str("modelName"),
                    fuel: vehicle.str("vehicleFuelType"),
                    group_code: vehicle.str("modelGroupCode"),
                    year_model_year: year.value("modelYear"),
                };
                let card_order = vehicle.child("cardOrder");

                for offer_type in OfferType::ALL {
                    let offer = card_order.child(offer_type.as_str());
                    if !offer.is_populated() {
                        if let Some(slot) = card_order
                            .value(offer_type.as_str())
                            .filter(|v| !v.is_object())
                        {
                            tracing::warn!(
                                model = context.model.unwrap_or_default(),
                                offer_type = offer_type.as_str(),
                                slot = %slot,
                                "ignoring cardOrder slot that is not an object"
                            );
                        }
                        continue;
                    }

                    match build_record(&context, offer_type, offer) {
                        Ok(record) => offers.push(record),
                        Err(e @ ScraperError::DataFormat { .. })
                            if policy == CoercionPolicy::SkipRecord =>
                        {
                            tracing::warn!(error = %e, "skipping offer with malformed data");
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }
    }

    Ok(offers)
}

fn build_record(
    context: &VehicleContext<'_>,
    offer_type: OfferType,
    offer: Node<'_>,
) -> Result<OfferRecord, ScraperError> {
    // An explicit key on the offer wins, even when null.
    let model_year = if offer.has("modelYear") {
        offer.value("modelYear")
    } else {
        context.year_model_year
    };

    let monthly_payment = match offer.raw(MONTHLY_PAYMENT_FIELD) {
        None => None,
        Some(raw) => Some(coerce_number(raw).ok_or_else(|| ScraperError::DataFormat {
            model: context.model.unwrap_or("<unknown>").to_owned(),
            offer_type: offer_type.as_str().to_owned(),
            field: MONTHLY_PAYMENT_FIELD,
            value: raw.to_string(),
        })?),
    };

    Ok(OfferRecord {
        model: context.model.map(str::to_owned),
        model_year: model_year.cloned(),
        trim: offer.str("trimName").map(str::to_owned),
        offer_type,
        monthly_payment,
        term: offer.value("term").cloned(),
        apr: offer.value("apr").cloned(),
        price: offer.value("price").cloned(),
        description: offer.str("shortDescription").map(str::to_owned),
        disclaimer: offer.str("disclaimer").map(str::to_owned),
        fuel: context.fuel.map(str::to_owned),
        group_code: context.group_code.map(str::to_owned),
    })
}

/// Reads a JSON number or a numeric-looking string as a finite `f64`.
///
/// `null`, booleans, containers, and non-finite values are rejected.
fn coerce_number(raw: &Value) -> Option<f64> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
