//! Filtered views over an extracted offer sequence.
//!
//! All functions are pure and keep the relative order of their input.

use std::collections::BTreeSet;

use hyoffers_core::OfferRecord;

/// Offers whose tag loosely matches `offer_type`, compared case-insensitively.
///
/// This is substring containment, not equality: a tag matches when it
/// occurs inside the input (`"lease1,lease2"` matches both lease slots) or
/// the tag starts with the input (`"lease"` matches `lease1` and `lease2`).
/// Fragments from the middle of a tag (`"apr"`, `"a"`) match nothing, and
/// neither does a blank input.
#[must_use]
pub fn offers_by_type(offers: &[OfferRecord], offer_type: &str) -> Vec<OfferRecord> {
    let needle = offer_type.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    offers
        .iter()
        .filter(|o| {
            let tag = o.offer_type.as_str().to_lowercase();
            needle.contains(&tag) || tag.starts_with(&needle)
        })
        .cloned()
        .collect()
}

/// Distinct non-empty model names, sorted ascending.
#[must_use]
pub fn all_model_names(offers: &[OfferRecord]) -> Vec<String> {
    offers
        .iter()
        .filter_map(|o| o.model.as_deref())
        .filter(|m| !m.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Offers with a numeric monthly payment, optionally narrowed to one model
/// (case-insensitive exact match) and to payments at or under `max_price`.
///
/// An empty `model` applies no model filter.
#[must_use]
pub fn available_payment_offers(
    offers: &[OfferRecord],
    model: Option<&str>,
    max_price: Option<f64>,
) -> Vec<OfferRecord> {
    let model = model.filter(|m| !m.is_empty()).map(str::to_lowercase);

    offers
        .iter()
        .filter(|o| {
            let Some(payment) = o.monthly_payment else {
                return false;
            };
            if let Some(wanted) = &model {
                if o.model.as_deref().map(str::to_lowercase).as_ref() != Some(wanted) {
                    return false;
                }
            }
            max_price.is_none_or(|ceiling| payment <= ceiling)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use hyoffers_core::OfferType;

    use super::*;

    fn offer(model: Option<&str>, offer_type: OfferType, payment: Option<f64>) -> OfferRecord {
        OfferRecord {
            model: model.map(str::to_owned),
            model_year: None,
            trim: None,
            offer_type,
            monthly_payment: payment,
            term: None,
            apr: None,
            price: None,
            description: None,
            disclaimer: None,
            fuel: None,
            group_code: None,
        }
    }

    fn sample() -> Vec<OfferRecord> {
        vec![
            offer(Some("Kona"), OfferType::Lease1, Some(249.0)),
            offer(Some("Kona"), OfferType::Lease2, Some(299.0)),
            offer(Some("Tucson"), OfferType::LowApr, None),
            offer(Some("Elantra"), OfferType::Savings, None),
            offer(Some("Elantra"), OfferType::Lease1, Some(199.0)),
            offer(None, OfferType::Lease1, Some(150.0)),
            offer(Some(""), OfferType::Lease2, Some(175.0)),
        ]
    }

    // -----------------------------------------------------------------------
    // offers_by_type
    // -----------------------------------------------------------------------

    #[test]
    fn exact_tag_matches_only_that_tag() {
        let result = offers_by_type(&sample(), "lease1");
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|o| o.offer_type == OfferType::Lease1));
    }

    #[test]
    fn loose_lease_input_returns_both_lease_slots() {
        let tags: Vec<OfferType> = offers_by_type(&sample(), "lease")
            .into_iter()
            .map(|o| o.offer_type)
            .collect();
        assert_eq!(
            tags,
            [
                OfferType::Lease1,
                OfferType::Lease2,
                OfferType::Lease1,
                OfferType::Lease1,
                OfferType::Lease2
            ]
        );
    }

    #[test]
    fn blank_input_matches_nothing() {
        assert!(offers_by_type(&sample(), "").is_empty());
        assert!(offers_by_type(&sample(), "   ").is_empty());
    }

    #[test]
    fn lease2_input_does_not_match_lease1() {
        let result = offers_by_type(&sample(), "lease2");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|o| o.offer_type == OfferType::Lease2));
    }

    #[test]
    fn input_containing_both_lease_tags_returns_their_union() {
        let tags: Vec<OfferType> = offers_by_type(&sample(), "Lease1,Lease2")
            .into_iter()
            .map(|o| o.offer_type)
            .collect();
        assert_eq!(
            tags,
            [
                OfferType::Lease1,
                OfferType::Lease2,
                OfferType::Lease1,
                OfferType::Lease1,
                OfferType::Lease2
            ]
        );
    }

    #[test]
    fn camel_case_tag_matches_case_insensitively() {
        let result = offers_by_type(&sample(), "LOWAPR");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].model.as_deref(), Some("Tucson"));
    }

    #[test]
    fn short_input_matches_only_tag_prefixes() {
        let tags = |input: &str| -> Vec<OfferType> {
            offers_by_type(&sample(), input)
                .into_iter()
                .map(|o| o.offer_type)
                .collect()
        };
        assert!(tags("a").is_empty());
        assert!(tags("apr").is_empty());
        assert_eq!(tags("s"), [OfferType::Savings]);
        assert_eq!(tags("low"), [OfferType::LowApr]);
    }

    #[test]
    fn unrelated_type_matches_nothing() {
        assert!(offers_by_type(&sample(), "finance").is_empty());
        assert!(offers_by_type(&sample(), "rebate").is_empty());
    }

    // -----------------------------------------------------------------------
    // all_model_names
    // -----------------------------------------------------------------------

    #[test]
    fn model_names_are_sorted_distinct_and_non_empty() {
        assert_eq!(all_model_names(&sample()), ["Elantra", "Kona", "Tucson"]);
    }

    #[test]
    fn model_names_of_empty_input_is_empty() {
        assert!(all_model_names(&[]).is_empty());
    }

    // -----------------------------------------------------------------------
    // available_payment_offers
    // -----------------------------------------------------------------------

    #[test]
    fn payment_offers_exclude_records_without_payment() {
        let result = available_payment_offers(&sample(), None, None);
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|o| o.monthly_payment.is_some()));
    }

    #[test]
    fn payment_offers_filter_model_case_insensitively() {
        let result = available_payment_offers(&sample(), Some("KONA"), None);
        let payments: Vec<f64> = result.iter().filter_map(|o| o.monthly_payment).collect();
        assert_eq!(payments, [249.0, 299.0]);
    }

    #[test]
    fn payment_offers_model_filter_is_exact_not_substring() {
        assert!(available_payment_offers(&sample(), Some("Kon"), None).is_empty());
    }

    #[test]
    fn payment_offers_empty_model_applies_no_filter() {
        assert_eq!(available_payment_offers(&sample(), Some(""), None).len(), 5);
    }

    #[test]
    fn payment_offers_respect_inclusive_ceiling() {
        let result = available_payment_offers(&sample(), None, Some(199.0));
        let payments: Vec<f64> = result.iter().filter_map(|o| o.monthly_payment).collect();
        assert_eq!(payments, [199.0, 150.0, 175.0]);
    }

    #[test]
    fn payment_offers_combine_model_and_ceiling() {
        let result = available_payment_offers(&sample(), Some("kona"), Some(250.0));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].offer_type, OfferType::Lease1);
    }

    #[test]
    fn payment_offers_never_exceed_ceiling() {
        for ceiling in [0.0, 100.0, 175.0, 250.0, 1_000.0] {
            for o in available_payment_offers(&sample(), None, Some(ceiling)) {
                assert!(o.monthly_payment.is_some_and(|p| p <= ceiling));
            }
        }
    }
}
