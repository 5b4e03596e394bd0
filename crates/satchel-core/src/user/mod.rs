//! User profile cached from the login response.

pub mod model;

pub use model::{ChildRecord, UserProfile, UserRole};
