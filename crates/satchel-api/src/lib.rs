//! HTTP clients for the school-management API.
//!
//! [`client::SchoolApiClient`] implements the core's `AuthGateway` seam
//! against the login endpoint; [`feed::FeedClient`] fetches the
//! notification/news lists with the bearer token the session store
//! produces.

pub mod client;
pub mod feed;

pub use client::SchoolApiClient;
pub use feed::{CategoryItem, FeedClient, FeedPage, FeedQuery, NotificationItem};
