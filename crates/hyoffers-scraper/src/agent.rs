//! Offer operations bound to a single postal code.

use hyoffers_core::{CoercionPolicy, OfferRecord};

use crate::client::IncentiveClient;
use crate::error::ScraperError;
use crate::extract::extract_offers;
use crate::query;

/// The offer operations for one postal code.
///
/// Holds no document: every call fetches a fresh one from the incentive
/// service, flattens it, and discards it.
pub struct ZipOffers<'a> {
    client: &'a IncentiveClient,
    zip: String,
    policy: CoercionPolicy,
}

impl<'a> ZipOffers<'a> {
    #[must_use]
    pub fn new(client: &'a IncentiveClient, zip: impl Into<String>, policy: CoercionPolicy) -> Self {
        Self {
            client,
            zip: zip.into(),
            policy,
        }
    }

    /// Fetches the document for this postal code and flattens it.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures from
    /// [`IncentiveClient::fetch_offers_document`] and data-format failures
    /// from [`extract_offers`].
    pub async fn extract_offers(&self) -> Result<Vec<OfferRecord>, ScraperError> {
        let document = self.client.fetch_offers_document(&self.zip).await?;
        let offers = extract_offers(&document, self.policy)?;
        tracing::debug!(zip = %self.zip, count = offers.len(), "extracted offers");
        Ok(offers)
    }

    /// Offers whose tag loosely matches `offer_type`; see [`query::offers_by_type`].
    ///
    /// # Errors
    ///
    /// Same as [`ZipOffers::extract_offers`].
    pub async fn get_offers_by_type(
        &self,
        offer_type: &str,
    ) -> Result<Vec<OfferRecord>, ScraperError> {
        let offers = self.extract_offers().await?;
        Ok(query::offers_by_type(&offers, offer_type))
    }

    /// Sorted distinct model names across all offers.
    ///
    /// # Errors
    ///
    /// Same as [`ZipOffers::extract_offers`].
    pub async fn get_all_model_names(&self) -> Result<Vec<String>, ScraperError> {
        let offers = self.extract_offers().await?;
        Ok(query::all_model_names(&offers))
    }

    /// Offers with a numeric monthly payment, filtered by model and ceiling;
    /// see [`query::available_payment_offers`].
    ///
    /// # Errors
    ///
    /// Same as [`ZipOffers::extract_offers`].
    pub async fn get_available_payment_offers(
        &self,
        model: Option<&str>,
        max_price: Option<f64>,
    ) -> Result<Vec<OfferRecord>, ScraperError> {
        let offers = self.extract_offers().await?;
        Ok(query::available_payment_offers(&offers, model, max_price))
    }
}
