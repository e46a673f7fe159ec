pub mod api;
pub mod atlas;
pub mod confidence;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod persona;
pub mod roadmap;
pub mod timeline;
pub mod triage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::CareError;
use crate::memory::ExperienceMemoryStore;

/// Install the global tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Serve the JSON API until Ctrl-C.
pub async fn run() -> Result<(), CareError> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = ServerConfig::from_env()?;
    let memory = Arc::new(ExperienceMemoryStore::new());
    let server = api::start_api_server(&config, memory).await?;

    tracing::info!(addr = %server.addr, "Listening");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Ctrl-C received, shutting down");
    server.stop().await;

    Ok(())
}
