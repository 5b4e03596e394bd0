//! Authentication endpoint client.
//!
//! Talks to `POST {base}/v{n}/api/login`. The server wraps every response
//! in an envelope with an application-level `code`; transport success is
//! not enough, the body code must be 200 and carry both an access token
//! and a user profile.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use satchel_core::config::{ApiConfig, DeviceInfo};
use satchel_core::error::{ApiError, ApiResult};
use satchel_core::session::{AuthGateway, LoginSuccess};
use satchel_core::user::UserProfile;

/// Client for the school-management authentication endpoint.
///
/// Deployment and device parameters are injected configuration; nothing
/// identifying a deployment is compiled into this crate.
#[derive(Clone)]
pub struct SchoolApiClient {
    client: Client,
    config: ApiConfig,
    device: DeviceInfo,
}

impl SchoolApiClient {
    /// Creates a new client for the given deployment.
    pub fn new(config: ApiConfig, device: DeviceInfo) -> Self {
        Self {
            client: Client::new(),
            config,
            device,
        }
    }

    fn login_url(&self) -> String {
        format!(
            "{}/v{}/api/login",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version
        )
    }

    /// Deployment and device identifiers the endpoint expects as query
    /// parameters on every login call.
    fn deployment_query(&self) -> [(&'static str, &str); 9] {
        [
            ("api_version", &self.config.api_version),
            ("school_id", &self.config.school_id),
            ("app_version", &self.config.app_version),
            ("device_manufacturer", &self.device.manufacturer),
            ("device_model", &self.device.model),
            ("device_os_name", &self.device.os_name),
            ("device_os_version", &self.device.os_version),
            ("device_os_type", &self.device.os_type),
            ("device_type", &self.device.device_type),
        ]
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    api_version: &'a str,
    school_id: &'a str,
    app_version: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginEnvelope {
    code: u16,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<LoginData>,
}

#[derive(Deserialize)]
struct LoginData {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<UserProfile>,
}

/// Pulls the envelope `message` out of an error body, if it parses.
fn envelope_message(body: &str) -> Option<String> {
    serde_json::from_str::<LoginEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
}

#[async_trait]
impl AuthGateway for SchoolApiClient {
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginSuccess> {
        let body = LoginRequest {
            api_version: &self.config.api_version,
            school_id: &self.config.school_id,
            app_version: &self.config.app_version,
            email,
            password,
        };

        let response = self
            .client
            .post(self.login_url())
            .query(&self.deployment_query())
            .json(&body)
            .send()
            .await
            .map_err(|err| ApiError::network(format!("login request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message =
                envelope_message(&text).unwrap_or_else(|| format!("HTTP {status}"));
            if status == StatusCode::UNAUTHORIZED {
                return Err(ApiError::invalid_credentials(message));
            }
            return Err(ApiError::server(status.as_u16(), message));
        }

        let envelope: LoginEnvelope = response.json().await.map_err(|err| {
            ApiError::server(None, format!("unparseable login response: {err}"))
        })?;

        if envelope.code != 200 {
            let message = envelope
                .message
                .unwrap_or_else(|| "login failed".to_string());
            if envelope.code == 401 {
                return Err(ApiError::invalid_credentials(message));
            }
            return Err(ApiError::server(envelope.code, message));
        }

        let data = envelope
            .data
            .ok_or_else(|| ApiError::server(None, "login response missing data"))?;
        let access_token = data
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::server(None, "login response missing access token"))?;
        let user = data
            .user
            .ok_or_else(|| ApiError::server(None, "login response missing user profile"))?;

        tracing::debug!("login accepted by {}", self.login_url());
        Ok(LoginSuccess { access_token, user })
    }
}
