pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod user;

// Re-export common error type
pub use error::ApiError;
pub use session::{AuthGateway, LoginSuccess, SessionSnapshot, SessionStatus, SessionStore};
pub use storage::SecureStore;
pub use user::UserProfile;
