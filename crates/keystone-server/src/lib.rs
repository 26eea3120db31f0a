//! # Keystone Server
//!
//! Read-only REST server over the firm's property portfolio.
//!
//! ## Features
//!
//! - Property listings (all, current, sold, by id)
//! - Per-property return metrics
//! - Portfolio summary and state breakdown
//! - Compound-growth projections
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use keystone_server::Server;
//!
//! let server = Server::new(config, source);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use keystone_traits::source::PropertySource;

pub use config::ServerConfig;

/// The Keystone server.
pub struct Server {
    config: ServerConfig,
    source: Arc<dyn PropertySource>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, source: Arc<dyn PropertySource>) -> Self {
        Self { config, source }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.source.clone(), self.config.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Keystone server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
