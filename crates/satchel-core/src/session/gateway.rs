//! Remote authentication endpoint seam.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::user::UserProfile;

/// Payload of a successful login: the bearer token plus the user profile
/// the server sent with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub access_token: String,
    pub user: UserProfile,
}

/// Exchanges credentials for a session with the remote API.
///
/// The session store takes this as an injected dependency so it never
/// knows about HTTP; the satchel-api crate provides the reqwest-backed
/// implementation.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Sends the credentials to the authentication endpoint.
    ///
    /// # Returns
    ///
    /// - `Ok(LoginSuccess)`: transport succeeded and the response envelope
    ///   carried a success code, a token, and a user profile
    /// - `Err(ApiError)`: anything else, with the server's message intact
    ///   for user-facing display
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginSuccess>;
}
