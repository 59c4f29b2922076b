use std::net::SocketAddr;

use crate::offers::CoercionPolicy;

/// Default manufacturer incentive endpoint queried for featured offers.
pub const DEFAULT_UPSTREAM_BASE_URL: &str =
    "https://www.hyundaiusa.com/var/hyundai/services/incentiveAws.featuredOfferByZip.service";

/// Browser-like user agent; the incentive service rejects obvious bot agents.
pub const DEFAULT_UPSTREAM_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub upstream_base_url: String,
    pub upstream_timeout_secs: u64,
    pub upstream_connect_timeout_secs: u64,
    pub upstream_user_agent: String,
    pub coercion_policy: CoercionPolicy,
    /// Public URL advertised in the OpenAPI `servers` list, if any.
    pub public_base_url: Option<String>,
}
