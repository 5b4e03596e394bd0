//! Session state models.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// Authentication state of the running app.
///
/// Starts as `Unknown` at process start, becomes `Authenticated` or
/// `Unauthenticated` exactly once during restore, and thereafter changes
/// only through explicit login/logout calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Persisted storage has not been read yet.
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Read-only view of the session.
///
/// This is what route guarding and profile views consume: redirect policy
/// itself belongs to the consumer, not to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    /// Cached profile; present exactly when `status` is `Authenticated`.
    pub user: Option<UserProfile>,
    /// True until the startup restore has completed. Consumers gate
    /// navigation on this so they never route off an `Unknown` status.
    pub is_loading: bool,
}

impl SessionSnapshot {
    pub fn is_logged_in(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}
