pub mod auth;
pub mod feed;

use std::sync::Arc;

use anyhow::{Context, Result};
use satchel_api::SchoolApiClient;
use satchel_core::config::DeploymentConfig;
use satchel_core::session::{AuthGateway, SessionStore};
use satchel_core::storage::SecureStore;
use satchel_infrastructure::{ConfigStorage, SecureFileStore};

/// Loads config.toml, with guidance when it is missing.
pub(crate) fn load_config() -> Result<DeploymentConfig> {
    let storage = ConfigStorage::new()?;
    let hint = format!(
        "reading {} (create it with an [api] table holding base_url and school_id)",
        storage.path().display()
    );
    storage.load().context(hint)
}

/// Wires a session store over the file-backed secure store and the HTTP
/// auth client, then runs the startup restore.
pub(crate) async fn open_session(config: &DeploymentConfig) -> Result<SessionStore> {
    let secure: Arc<dyn SecureStore> = Arc::new(SecureFileStore::new()?);
    let gateway: Arc<dyn AuthGateway> = Arc::new(SchoolApiClient::new(
        config.api.clone(),
        config.device.clone(),
    ));
    let session = SessionStore::new(secure, gateway);
    session.restore().await;
    Ok(session)
}
