//! File-backed implementation of the secure key-value store.

pub mod secure_file_store;

pub use secure_file_store::SecureFileStore;
