pub mod config;
pub mod paths;
pub mod storage;

pub use crate::config::{ConfigError, ConfigStorage};
pub use crate::storage::SecureFileStore;
