//! HTTP server for apiref.
//!
//! This crate provides an axum server exposing reference page resolution:
//! - `GET /api/resolve?type=&name=&method=`
//! - `GET /api/reference/{type}/{name}[/{method}]`
//! - `GET /api/navigation`
//!
//! Resolved pages answer with the page model and its pre-rendered content;
//! renamed definitions answer with a permanent redirect.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use apiref_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         index_dir: PathBuf::from("build/index"),
//!         content_dir: PathBuf::from("build/html"),
//!         version: "1.0.0".to_owned(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use apiref_index::FsIndexSource;
use apiref_site::{FsContentStore, Reference, ReferenceConfig};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory with the per-kind index artifacts.
    pub index_dir: PathBuf,
    /// Directory with pre-rendered content fragments.
    pub content_dir: PathBuf,
    /// Root breadcrumb label.
    pub site_name: String,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            index_dir: PathBuf::from("build/index"),
            content_dir: PathBuf::from("build/html"),
            site_name: ReferenceConfig::default().site_name,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// Loads every index and builds the navigation tree before binding, so a
/// broken artifact stops startup instead of failing requests.
///
/// # Errors
///
/// Returns an error if the artifacts cannot be loaded or the server fails to
/// start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let reference = Arc::new(Reference::new(
        Arc::new(FsIndexSource::new(config.index_dir.clone())),
        Arc::new(FsContentStore::new(config.content_dir.clone())),
        ReferenceConfig {
            site_name: config.site_name.clone(),
        },
    ));
    let definitions = reference.warm_up()?;
    tracing::info!(definitions, "Reference ready");

    let state = Arc::new(AppState {
        reference,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from apiref config.
#[must_use]
pub fn server_config_from_config(config: &apiref_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        index_dir: config.artifacts_resolved.index_dir.clone(),
        content_dir: config.artifacts_resolved.content_dir.clone(),
        site_name: config.site.name.clone(),
        version,
    }
}
