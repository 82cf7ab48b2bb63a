//! Server configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the backend-as-a-service, without a trailing slash.
    pub backend_url: String,
    /// Public API key sent as the `apikey` header.
    pub anon_key: String,
    pub port: u16,
    pub cookie_secure: bool,
    /// Where confirmation emails send the user back to.
    pub site_url: Option<String>,
    pub timeouts: BackendTimeouts,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `BACKEND_URL`
    /// - `BACKEND_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: inferred from the `SITE_URL` (else `BACKEND_URL`) scheme
    /// - `SITE_URL`: email-confirmation redirect for sign-up
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or `PORT`
    /// is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let backend_url = get("BACKEND_URL")
            .ok_or(ConfigError::Missing { var: "BACKEND_URL" })?
            .trim_end_matches('/')
            .to_owned();
        let anon_key = get("BACKEND_ANON_KEY").ok_or(ConfigError::Missing { var: "BACKEND_ANON_KEY" })?;

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let site_url = get("SITE_URL").map(|url| url.trim_end_matches('/').to_owned());
        let cookie_secure = get("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or_else(|| site_url.as_deref().unwrap_or(&backend_url).starts_with("https://"));

        let timeouts = BackendTimeouts {
            request_secs: parse_u64_or(get("BACKEND_REQUEST_TIMEOUT_SECS"), DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64_or(get("BACKEND_CONNECT_TIMEOUT_SECS"), DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { backend_url, anon_key, port, cookie_secure, site_url, timeouts })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_u64_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
