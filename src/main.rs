//! Binary entrypoint: wire the store to the router and serve.

use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use user_registry::config::ServerConfig;
use user_registry::core::UserService;
use user_registry::server::{AppState, router};
use user_registry::storage::InMemoryUserStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_registry=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let store = InMemoryUserStore::new();
    if config.seed {
        let seeded = store.seed().await?;
        tracing::info!(count = seeded.len(), "seeded demo users");
    }

    let state = AppState {
        users: Arc::new(store),
    };
    let app = router(state);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "user-registry listening");
    axum::serve(listener, app).await?;

    Ok(())
}
