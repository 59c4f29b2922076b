//! HTTP client for the manufacturer's featured-offer incentive service.

use std::time::Duration;

use hyoffers_core::AppConfig;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ScraperError;

/// Brand constant sent as the `brand` query parameter on every request.
pub const BRAND: &str = "hyundai";

/// Longest slice of an error response body kept on [`ScraperError::UpstreamStatus`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Client for the featured-offers-by-zip endpoint.
///
/// One GET per call, no retries. Non-2xx statuses and non-JSON bodies come
/// back as typed errors so the HTTP layer can surface them as upstream
/// failures.
pub struct IncentiveClient {
    client: Client,
    base_url: Url,
}

impl IncentiveClient {
    /// Creates a client for `base_url` with explicit timeouts and user agent.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let base_url = Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Creates a client from the upstream settings in [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`IncentiveClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.upstream_base_url,
            config.upstream_timeout_secs,
            config.upstream_connect_timeout_secs,
            &config.upstream_user_agent,
        )
    }

    /// Fetches the raw featured-offer document for one postal code.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network/TLS failure or timeout.
    /// - [`ScraperError::UpstreamStatus`] on any non-2xx status.
    /// - [`ScraperError::Deserialize`] if the body is not valid JSON.
    pub async fn fetch_offers_document(&self, zip: &str) -> Result<Value, ScraperError> {
        let url = self.offers_url(zip);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        tracing::debug!(zip, status = status.as_u16(), "incentive service responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(zip, status = status.as_u16(), "incentive service returned an error status");
            return Err(ScraperError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body: truncate_body(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::warn!(zip, error = %e, "incentive service body is not valid JSON");
            ScraperError::Deserialize {
                context: format!("featured offers for zip {zip}"),
                source: e,
            }
        })
    }

    /// Builds the request URL with `brand` and `zip` query parameters,
    /// preserving any query the base URL already carries.
    fn offers_url(&self, zip: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("brand", BRAND)
            .append_pair("zip", zip);
        url
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_owned(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
