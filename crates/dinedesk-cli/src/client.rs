//! Shared client wiring and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::anyhow;
use dinedesk_client::{ApiClient, ApiError, ClientConfig, FileTokenStore, SessionHolder};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::cli::Cli;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";
pub(crate) const STATE_FILE_ENV: &str = "DINEDESK_STATE_FILE";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationRequired => {
                Self::validation("not signed in (run `dinedesk auth verify` first)")
            }
            ApiError::InvalidRequest(message) => Self::validation(message),
            other => Self::failure(other),
        }
    }
}

/// Application context passed to command handlers.
pub(crate) struct AppContext {
    pub(crate) api: ApiClient,
    pub(crate) sessions: SessionHolder,
}

impl AppContext {
    /// Construct the API client and session holder from CLI options.
    ///
    /// Every request carries `trace_id` as its `x-request-id`.
    pub(crate) fn from_cli(cli: &Cli, trace_id: &str) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let http = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        let config = ClientConfig::new(&cli.api_url)
            .map_err(|err| CliError::validation(err.to_string()))?;

        let state_file = cli.state_file.clone().unwrap_or_else(default_state_file);
        tracing::debug!(path = %state_file.display(), "using session state file");
        let sessions = SessionHolder::new(Arc::new(FileTokenStore::new(state_file)));

        Ok(Self {
            api: ApiClient::with_http_client(http, config, sessions.get_instance()),
            sessions,
        })
    }
}

/// `$HOME/.config/dinedesk/session.json`, or a file in the working directory
/// when no home directory is known.
pub(crate) fn default_state_file() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".dinedesk-session.json"),
        |home| {
            PathBuf::from(home)
                .join(".config")
                .join("dinedesk")
                .join("session.json")
        },
    )
}
