//! Session store: the single source of truth for authentication state.
//!
//! Owns the durable record of "is a user authenticated", restores it
//! across process restarts, and exposes login/logout plus the current
//! snapshot. Constructed once at process start with its dependencies
//! injected and shared by reference with every consumer.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use crate::error::ApiResult;
use crate::session::gateway::AuthGateway;
use crate::session::model::{SessionSnapshot, SessionStatus};
use crate::storage::{KEY_USER_DATA, KEY_USER_TOKEN, SecureStore};
use crate::user::UserProfile;

struct SessionState {
    status: SessionStatus,
    token: Option<String>,
    user: Option<UserProfile>,
    is_loading: bool,
}

impl SessionState {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            user: self.user.clone(),
            is_loading: self.is_loading,
        }
    }

    fn clear(&mut self) {
        self.status = SessionStatus::Unauthenticated;
        self.token = None;
        self.user = None;
    }
}

/// Single source of truth for authentication state.
///
/// Operations are async units of work that suspend on storage or network
/// I/O. There is no coordination of concurrent logins; the calling UI is
/// expected to disable re-submission while one is in flight.
pub struct SessionStore {
    storage: Arc<dyn SecureStore>,
    gateway: Arc<dyn AuthGateway>,
    state: RwLock<SessionState>,
    publisher: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Creates a store in the `Unknown`, loading state. Call [`restore`]
    /// once before routing anything.
    ///
    /// [`restore`]: SessionStore::restore
    pub fn new(storage: Arc<dyn SecureStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        let initial = SessionState {
            status: SessionStatus::Unknown,
            token: None,
            user: None,
            is_loading: true,
        };
        let (publisher, _) = watch::channel(initial.snapshot());
        Self {
            storage,
            gateway,
            state: RwLock::new(initial),
            publisher,
        }
    }

    /// Reconstructs session state from persisted storage.
    ///
    /// Never fails outward: a missing key, an unreadable store, or a
    /// profile that no longer deserializes all degrade to an
    /// unauthenticated session. A lone token without a profile (or the
    /// converse, after a crash between the two writes) degrades the same
    /// way. Completing this flips `is_loading` off.
    pub async fn restore(&self) -> SessionSnapshot {
        let token = self.storage.get(KEY_USER_TOKEN).await;
        let data = self.storage.get(KEY_USER_DATA).await;

        let restored = match (token, data) {
            (Some(token), Some(data)) => match serde_json::from_str::<UserProfile>(&data) {
                Ok(user) => Some((token, user)),
                Err(err) => {
                    tracing::warn!("discarding persisted session: profile unreadable: {err}");
                    None
                }
            },
            _ => None,
        };

        let mut state = self.state.write().await;
        match restored {
            Some((token, user)) => {
                tracing::info!("restored persisted session for user {}", user.id);
                state.status = SessionStatus::Authenticated;
                state.token = Some(token);
                state.user = Some(user);
            }
            None => {
                tracing::debug!("no persisted session");
                state.clear();
            }
        }
        state.is_loading = false;
        self.publish(&state)
    }

    /// Sends the credentials to the authentication endpoint and, on
    /// success, persists the returned token and profile and becomes
    /// `Authenticated`.
    ///
    /// On any failure the session is left exactly as it was and the error
    /// propagates verbatim; the caller owns user-facing display.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<SessionSnapshot> {
        let success = self.gateway.login(email, password).await?;

        // Two independent best-effort writes; restore tolerates a crash
        // landing between them.
        self.storage.set(KEY_USER_TOKEN, &success.access_token).await;
        match serde_json::to_string(&success.user) {
            Ok(json) => self.storage.set(KEY_USER_DATA, &json).await,
            Err(err) => tracing::warn!("user profile not persisted: {err}"),
        }

        let mut state = self.state.write().await;
        state.status = SessionStatus::Authenticated;
        state.token = Some(success.access_token);
        state.user = Some(success.user);
        state.is_loading = false;
        tracing::info!("login succeeded");
        Ok(self.publish(&state))
    }

    /// Clears the persisted keys and resets in-memory state.
    ///
    /// Unconditional: even if the deletes fail the in-memory session is
    /// gone, so the app never looks authenticated after this returns.
    /// Idempotent.
    pub async fn logout(&self) -> SessionSnapshot {
        self.storage.delete(KEY_USER_TOKEN).await;
        self.storage.delete(KEY_USER_DATA).await;

        let mut state = self.state.write().await;
        state.clear();
        state.is_loading = false;
        tracing::info!("logged out");
        self.publish(&state)
    }

    /// Current `{status, user, is_loading}` view.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.snapshot()
    }

    /// The bearer token for authenticated API calls, if any.
    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    /// Watch channel carrying every snapshot change, for consumers that
    /// react to session state (route guarding, profile views).
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.publisher.subscribe()
    }

    fn publish(&self, state: &SessionState) -> SessionSnapshot {
        let snapshot = state.snapshot();
        self.publisher.send_replace(snapshot.clone());
        snapshot
    }
}
