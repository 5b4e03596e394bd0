//! Deployment configuration models.
//!
//! The login endpoint requires school/app identifiers and device
//! parameters alongside the credentials. These are caller-supplied
//! configuration, never compiled in; the infrastructure crate loads them
//! from config.toml.

use serde::{Deserialize, Serialize};

fn default_api_version() -> String {
    "5".to_string()
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

/// Identifies the deployment the client talks to.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the school-management API, e.g. `https://api.example.ie`.
    pub base_url: String,
    /// School the account belongs to.
    pub school_id: String,
    /// API version, both the `/v{n}/` path segment and the query parameter.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Client application version reported to the server.
    #[serde(default = "default_app_version")]
    pub app_version: String,
}

/// Device parameters the login endpoint expects as query parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceInfo {
    pub manufacturer: String,
    pub model: String,
    pub os_name: String,
    pub os_version: String,
    pub os_type: String,
    pub device_type: String,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            manufacturer: "unknown".to_string(),
            model: "unknown".to_string(),
            os_name: std::env::consts::OS.to_string(),
            os_version: "unknown".to_string(),
            os_type: "64bit".to_string(),
            device_type: "PHONE".to_string(),
        }
    }
}

/// Root of config.toml: `[api]` and `[device]` tables.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub device: DeviceInfo,
}
