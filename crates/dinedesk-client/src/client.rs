//! The dispatcher: one generic request path shared by every remote action.

use hyper::ext::ReasonPhrase;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, ConfigError};
use crate::request::{AuthPolicy, Endpoint, Payload};
use crate::session::Session;

const JSON_CONTENT_TYPE: &str = "application/json";

/// REST client for the admin API.
///
/// Cheap to clone; clones share the HTTP connection pool and the session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Session,
}

impl ApiClient {
    /// Build a client with a default transport. No timeout is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] when the transport cannot be built.
    pub fn new(config: ClientConfig, session: Session) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self::with_http_client(http, config, session))
    }

    /// Build a client around an existing transport.
    #[must_use]
    pub fn with_http_client(
        http: reqwest::Client,
        config: ClientConfig,
        session: Session,
    ) -> Self {
        Self {
            http,
            config,
            session,
        }
    }

    /// Session consulted for every request.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the bearer token used by subsequent requests.
    pub fn set_access_token(&self, token: Option<String>) {
        self.session.set_access_token(token);
    }

    /// Perform `endpoint` and decode the JSON response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses (the body is not
    /// read), [`ApiError::Decode`] when the body does not match `T`, and the
    /// transport/auth failures described on [`ApiError`].
    pub async fn send<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        payload: Payload,
    ) -> ApiResult<T> {
        let response = self.execute(&endpoint, payload).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                path: endpoint.path().to_string(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            action: endpoint.action(),
            source,
        })
    }

    /// Perform `endpoint` and discard the response body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`], minus decoding failures.
    pub async fn send_unit(&self, endpoint: Endpoint, payload: Payload) -> ApiResult<()> {
        self.execute(&endpoint, payload).await.map(drop)
    }

    async fn execute(&self, endpoint: &Endpoint, payload: Payload) -> ApiResult<reqwest::Response> {
        let authorization = self.authorization(endpoint)?;
        let url = self.config.url_for(&endpoint.path_and_query());

        let mut request = self.http.request(endpoint.method().clone(), url);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }
        request = match payload {
            Payload::Empty => request.header(CONTENT_TYPE, JSON_CONTENT_TYPE),
            Payload::Json(body) => request.json(&body),
            Payload::Multipart(form) => request.multipart(form.into_form()?),
        };

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: endpoint.path().to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(
            method = %endpoint.method(),
            path = endpoint.path(),
            status = status.as_u16(),
            "api call completed"
        );

        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                action: endpoint.action(),
                status: status.as_u16(),
                status_text: status_text(&response),
            })
        }
    }

    fn authorization(&self, endpoint: &Endpoint) -> ApiResult<Option<HeaderValue>> {
        let value = match endpoint.auth() {
            AuthPolicy::Anonymous => return Ok(None),
            AuthPolicy::Required if !self.session.is_authenticated() => {
                tracing::error!(action = endpoint.action(), "no access token available");
                return Err(ApiError::AuthenticationRequired);
            }
            AuthPolicy::Required | AuthPolicy::Bearer => self.session.bearer_header(),
        };
        HeaderValue::from_str(&value)
            .map(Some)
            .map_err(|_| ApiError::InvalidRequest("access token contains invalid characters".into()))
    }
}

/// Reason phrase as sent by the server; hyper only records it when it differs
/// from the canonical one.
fn status_text(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::{Value, json};

    fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
        let config = ClientConfig::new(&server.base_url()).expect("valid URL");
        ApiClient::new(config, Session::new(token.map(str::to_string))).expect("client")
    }

    #[tokio::test]
    async fn missing_token_sends_literal_bearer_null() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/coupon")
                .header("authorization", "Bearer null")
                .header("content-type", "application/json");
            then.status(200).json_body(json!([]));
        });

        let client = client_for(&server, None);
        let body: Value = client
            .send(Endpoint::get("/coupon", "get coupons"), Payload::Empty)
            .await
            .expect("request succeeds");
        assert_eq!(body, json!([]));
        mock.assert();
    }

    #[tokio::test]
    async fn anonymous_endpoints_send_no_authorization() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/auth/login-request")
                .header_missing("authorization");
            then.status(200).json_body(json!({"message": "sent"}));
        });

        let client = client_for(&server, Some("secret"));
        client
            .send_unit(
                Endpoint::post("/auth/login-request", "login request").anonymous(),
                Payload::Empty,
            )
            .await
            .expect("request succeeds");
        mock.assert();
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn required_token_fails_before_any_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(200);
        });

        let client = client_for(&server, None);
        let err = client
            .send::<Value>(Endpoint::get("/auth/user", "get user").requires_token(), Payload::Empty)
            .await
            .expect_err("token is required");
        assert!(matches!(err, ApiError::AuthenticationRequired));
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn error_status_skips_body_parsing() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/coupon/c1");
            then.status(404).body("<html>not json</html>");
        });

        let client = client_for(&server, Some("t"));
        let err = client
            .send::<Value>(Endpoint::delete("/coupon/c1", "delete coupon"), Payload::Empty)
            .await
            .expect_err("404 is a failure");
        assert_eq!(err.to_string(), "Failed to delete coupon: 404 Not Found");
    }

    #[tokio::test]
    async fn mismatched_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/product/count");
            then.status(200).json_body(json!({"total": 3}));
        });

        let client = client_for(&server, Some("t"));
        let err = client
            .send::<dinedesk_api_models::ProductCount>(
                Endpoint::get("/product/count", "get product count"),
                Payload::Empty,
            )
            .await
            .expect_err("shape mismatch");
        assert!(matches!(err, ApiError::Decode { action: "get product count", .. }));
    }

    #[tokio::test]
    async fn invalid_token_characters_are_rejected_locally() {
        let server = MockServer::start_async().await;
        let client = client_for(&server, Some("bad\ntoken"));
        let err = client
            .send_unit(Endpoint::get("/banner", "get banners"), Payload::Empty)
            .await
            .expect_err("header value invalid");
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}
