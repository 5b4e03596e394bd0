//! Notification and news feed endpoints.
//!
//! These lists are what the app's protected screens render. The only
//! contract with the session core is the bearer token attached to every
//! request; a 401 here means the token is no longer accepted.

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use satchel_core::config::ApiConfig;
use satchel_core::error::{ApiError, ApiResult};

/// One notification/news entry.
///
/// The news screen reuses the same endpoint and item shape; `image_url`
/// and `date` are only populated there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image1: String,
    #[serde(default)]
    pub image2: String,
    #[serde(default)]
    pub image3: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub date: String,
}

/// A notification category tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sort_order: String,
}

/// One page of the feed: the items plus the category tabs the server
/// wants shown alongside them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedPage {
    pub notifications: Vec<NotificationItem>,
    pub categories: Vec<CategoryItem>,
}

/// Query parameters for a feed fetch.
#[derive(Debug, Clone)]
pub struct FeedQuery {
    pub timestamp: i64,
    pub previous_timestamp: i64,
    /// Category filter; empty string means "all".
    pub category: String,
}

impl FeedQuery {
    /// Query for the current moment with no category filter.
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now().timestamp(),
            previous_timestamp: 0,
            category: String::new(),
        }
    }

    /// Restricts the query to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            timestamp: 0,
            previous_timestamp: 0,
            category: String::new(),
        }
    }
}

#[derive(Deserialize)]
struct FeedEnvelope {
    code: u16,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<FeedData>,
}

#[derive(Deserialize)]
struct FeedData {
    #[serde(default, rename = "notificationData")]
    notification_data: Vec<NotificationItem>,
    #[serde(default)]
    category: Vec<CategoryItem>,
}

/// Client for the authenticated feed endpoints.
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    config: ApiConfig,
}

impl FeedClient {
    /// Creates a new feed client for the given deployment.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn feed_url(&self) -> String {
        format!(
            "{}/v{}/api/fetchnotifications",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version
        )
    }

    /// Fetches one page of notifications (and the category tabs).
    ///
    /// # Arguments
    ///
    /// * `token` - bearer token produced by the session store
    /// * `query` - timestamp window and optional category filter
    pub async fn fetch_notifications(
        &self,
        token: &str,
        query: &FeedQuery,
    ) -> ApiResult<FeedPage> {
        let response = self
            .client
            .get(self.feed_url())
            .bearer_auth(token)
            .query(&[
                ("timestamp", query.timestamp.to_string()),
                (
                    "previous_time_stamp",
                    query.previous_timestamp.to_string(),
                ),
                ("api_version", self.config.api_version.clone()),
                ("category", query.category.clone()),
            ])
            .send()
            .await
            .map_err(|err| ApiError::network(format!("feed request failed: {err}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::invalid_credentials("unauthorized user"));
        }
        if !status.is_success() {
            return Err(ApiError::server(status.as_u16(), format!("HTTP {status}")));
        }

        let envelope: FeedEnvelope = response.json().await.map_err(|err| {
            ApiError::server(None, format!("unparseable feed response: {err}"))
        })?;

        if envelope.code != 200 {
            let message = envelope
                .message
                .unwrap_or_else(|| "feed fetch failed".to_string());
            return Err(ApiError::server(envelope.code, message));
        }

        let data = envelope
            .data
            .ok_or_else(|| ApiError::server(None, "feed response missing data"))?;

        Ok(FeedPage {
            notifications: data.notification_data,
            categories: data.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_url_is_versioned() {
        let client = FeedClient::new(ApiConfig {
            base_url: "https://api.example.ie".into(),
            school_id: "2".into(),
            api_version: "5".into(),
            app_version: "1.0.3".into(),
        });
        assert_eq!(
            client.feed_url(),
            "https://api.example.ie/v5/api/fetchnotifications"
        );
    }

    #[test]
    fn query_builder_defaults_to_all_categories() {
        let query = FeedQuery::default().with_category("events");
        assert_eq!(query.category, "events");
        assert_eq!(query.timestamp, 0);
    }
}
