//! Error types surfaced by the dispatcher and the session store.

use std::io;

use thiserror::Error;

/// Failure of a single dispatcher call.
///
/// The taxonomy stays flat: every non-2xx response becomes [`ApiError::Status`]
/// regardless of class. The remaining variants cover failures that happen
/// before or after the HTTP exchange itself.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("Failed to {action}: {status} {status_text}")]
    Status {
        /// Human label of the attempted action, e.g. `get dishes`.
        action: &'static str,
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase for the status code.
        status_text: String,
    },
    /// The call needs a bearer token and none is held by the session.
    #[error("Authentication required")]
    AuthenticationRequired,
    /// The request never produced a response.
    #[error("request to {path} failed: {source}")]
    Transport {
        /// Request path relative to the base URL.
        path: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The response body did not match the declared shape.
    #[error("failed to decode {action} response: {source}")]
    Decode {
        /// Human label of the attempted action.
        action: &'static str,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The request could not be assembled.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// HTTP status carried by a [`ApiError::Status`] failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias for dispatcher results.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reading or writing persisted session state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("session store I/O failed for {path}: {source}")]
    Io {
        /// Store location.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Stored contents were not a JSON object of strings.
    #[error("session store at {path} is malformed: {source}")]
    Format {
        /// Store location.
        path: String,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL was missing from the environment.
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    /// Base URL could not be parsed.
    #[error("invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        /// Offending value.
        value: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
    /// Base URL used a scheme other than http/https.
    #[error("unsupported base URL scheme '{0}'")]
    UnsupportedScheme(String),
    /// HTTP client construction failed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
