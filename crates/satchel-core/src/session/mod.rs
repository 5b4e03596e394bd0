//! Session lifecycle: login, persisted-session restore, and logout.

pub mod gateway;
pub mod model;
pub mod store;

pub use gateway::{AuthGateway, LoginSuccess};
pub use model::{SessionSnapshot, SessionStatus};
pub use store::SessionStore;
