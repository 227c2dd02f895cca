//! Analysis API endpoint: validated base URL plus the fixed route paths.

use crate::config::ConfigError;
use url::Url;

/// Path of the URL analysis route, appended to the base URL.
pub const ANALYZE_PATH: &str = "/api/v1/analyze/url";

/// Path of the backend health route.
pub const HEALTH_PATH: &str = "/health";

/// Base URL of the analysis service, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    /// Parses an absolute http(s) base URL. Trailing slashes are dropped so
    /// `http://host/` and `http://host` resolve to the same routes.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidApiBaseUrl {
            value: raw.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiBaseUrl {
                value: raw.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }
        if !parsed.has_host() {
            return Err(ConfigError::InvalidApiBaseUrl {
                value: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidApiBaseUrl {
                value: raw.to_string(),
                reason: "base URL must not carry a query or fragment".to_string(),
            });
        }
        Ok(Self {
            base: trimmed.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base, ANALYZE_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base, HEALTH_PATH)
    }
}
