use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status} from {url}: {body}")]
    UpstreamStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read {field} {value} as a number ({offer_type} offer for {model})")]
    DataFormat {
        model: String,
        offer_type: String,
        field: &'static str,
        value: String,
    },

    #[error("invalid upstream base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ScraperError {
    /// True for failures caused by the incentive service itself: transport
    /// errors, non-success statuses, and bodies that are not JSON.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ScraperError::Http(_)
                | ScraperError::UpstreamStatus { .. }
                | ScraperError::Deserialize { .. }
        )
    }
}
