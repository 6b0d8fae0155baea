//! Client configuration.
//!
//! The only externally supplied value is the backend base URL. It is kept as
//! a string so endpoint paths are appended by concatenation, which preserves
//! any path prefix on the base (`https://host/api` + `/coupon`).

use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "DINEDESK_API_URL";

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalise a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Read the base URL from [`API_URL_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] when the variable is unset, or a
    /// validation error from [`ClientConfig::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(API_URL_ENV).map_err(|_| ConfigError::MissingEnv(API_URL_ENV))?;
        Self::new(&value)
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path beginning with `/`.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Browser login page on the backend.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.url_for("/auth/login")
    }
}
