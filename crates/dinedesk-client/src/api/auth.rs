//! Account and one-time-password login.

use dinedesk_api_models::{AccessGrant, LoginRequest, MessageResponse, User, VerifyAccessRequest};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload};

impl ApiClient {
    /// Profile of the signed-in user.
    ///
    /// Fails with [`crate::ApiError::AuthenticationRequired`] without sending
    /// anything when the session holds no token.
    pub async fn get_user(&self) -> ApiResult<User> {
        self.send(
            Endpoint::get("/auth/user", "get user").requires_token(),
            Payload::Empty,
        )
        .await
    }

    /// Ask the backend to send a one-time password to a phone number.
    pub async fn login_request(&self, body: &LoginRequest) -> ApiResult<MessageResponse> {
        self.send(
            Endpoint::post("/auth/login-request", "login request").anonymous(),
            Payload::json(body)?,
        )
        .await
    }

    /// Exchange a one-time password for an access token.
    ///
    /// The returned token is not installed on the session; callers decide
    /// whether to persist it (see [`crate::SessionHolder::sign_in`]).
    pub async fn verify_account_access(
        &self,
        body: &VerifyAccessRequest,
    ) -> ApiResult<AccessGrant> {
        self.send(
            Endpoint::post("/auth/verify-account-access", "verify account access").anonymous(),
            Payload::json(body)?,
        )
        .await
    }
}
