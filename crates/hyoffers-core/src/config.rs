use crate::app_config::{AppConfig, DEFAULT_UPSTREAM_BASE_URL, DEFAULT_UPSTREAM_USER_AGENT};
use crate::offers::CoercionPolicy;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be greater than zero".to_string()));
        }
        Ok(value)
    };

    let bind_addr = or_default("HYOFFERS_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("HYOFFERS_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("HYOFFERS_LOG_LEVEL", "info");

    let upstream_base_url = or_default("HYOFFERS_UPSTREAM_BASE_URL", DEFAULT_UPSTREAM_BASE_URL);
    if !upstream_base_url.starts_with("http://") && !upstream_base_url.starts_with("https://") {
        return Err(invalid(
            "HYOFFERS_UPSTREAM_BASE_URL",
            "must start with http:// or https://".to_string(),
        ));
    }

    let upstream_timeout_secs = parse_u64("HYOFFERS_UPSTREAM_TIMEOUT_SECS", "30")?;
    let upstream_connect_timeout_secs = parse_u64("HYOFFERS_UPSTREAM_CONNECT_TIMEOUT_SECS", "10")?;
    let upstream_user_agent = or_default("HYOFFERS_UPSTREAM_USER_AGENT", DEFAULT_UPSTREAM_USER_AGENT);

    let coercion_policy = or_default("HYOFFERS_COERCION_POLICY", "fail-fast")
        .parse::<CoercionPolicy>()
        .map_err(|e| invalid("HYOFFERS_COERCION_POLICY", e.to_string()))?;

    let public_base_url = lookup("HYOFFERS_PUBLIC_BASE_URL")
        .ok()
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty());

    Ok(AppConfig {
        bind_addr,
        log_level,
        upstream_base_url,
        upstream_timeout_secs,
        upstream_connect_timeout_secs,
        upstream_user_agent,
        coercion_policy,
        public_base_url,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
