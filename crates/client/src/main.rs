//! Tools for Authors - composition root binary.
//!
//! Loads configuration, resolves the active workspace and lists its
//! entities. Useful as a smoke test against a running API.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authortools_client::infrastructure::{
    BroadcastNotifier, DesktopStorageProvider, StaticTokenIdentity,
};
use authortools_client::{AuthorTools, ClientConfig};
use authortools_domain::EntityKind;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authortools_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tools for Authors client");

    let config = ClientConfig::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let identity = Arc::new(StaticTokenIdentity::new(
        config.require_access_token()?,
        config.user_id.clone(),
    ));
    let notifier = Arc::new(BroadcastNotifier::default());
    let storage = Arc::new(DesktopStorageProvider::new());

    let app = AuthorTools::from_config(&config, identity, notifier, storage)
        .context("Failed to set up the API client")?;

    let settings = app
        .load_settings()
        .await
        .context("Failed to load user settings")?;
    tracing::info!(theme = %settings.theme, "User settings");

    let Some(workspace) = app
        .open_workspace()
        .await
        .context("Failed to load workspaces")?
    else {
        tracing::warn!("No workspaces found for this user");
        return Ok(());
    };
    tracing::info!(id = %workspace.id, name = %workspace.name, "Active workspace");

    for kind in EntityKind::ALL {
        let entities = app
            .entities
            .list(kind, &workspace.id)
            .await
            .with_context(|| format!("Failed to list {}", kind.label()))?;
        tracing::info!(%kind, count = entities.len(), "Loaded entities");
        for entity in &entities {
            tracing::debug!(%kind, order = entity.order, id = %entity.id, "{}", entity.name);
        }
    }

    Ok(())
}
