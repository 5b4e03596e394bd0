//! Secure key-value persistence seam.
//!
//! Defines the narrow interface the session store persists through. The
//! backing facility is whatever encrypted-at-rest store the platform
//! provides; this core only sees strings under fixed keys.

use async_trait::async_trait;

/// Storage key for the bearer token.
pub const KEY_USER_TOKEN: &str = "user_token";

/// Storage key for the serialized user profile.
pub const KEY_USER_DATA: &str = "user_data";

/// Narrow key-value abstraction over a secure local store.
///
/// Every operation is best-effort at this boundary: implementations log
/// underlying failures and degrade rather than propagate. `get` returns
/// `None` for "unset" and "unreadable" alike; `set` and `delete` return
/// without error regardless of outcome.
///
/// The two session keys are written independently with no transaction
/// across them. A crash between the token and profile writes can leave one
/// key without the other; readers must treat a lone key as "no session".
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Returns the stored value, or `None` if unset or on any underlying
    /// error.
    async fn get(&self, key: &str) -> Option<String>;

    /// Best-effort write.
    async fn set(&self, key: &str, value: &str);

    /// Best-effort delete.
    async fn delete(&self, key: &str);
}
