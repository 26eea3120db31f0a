//! Keystone portfolio server entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keystone_ext_file::{open_property_file, seed_store};
use keystone_server::{Server, ServerConfig};
use keystone_traits::source::PropertySource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,keystone=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Keystone Portfolio Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/keystone.toml".to_string());

    let server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // Property data: configured file, else the built-in dataset
    let source: Arc<dyn PropertySource> = match &server_config.data_file {
        Some(path) => {
            info!("Loading properties from {}", path);
            open_property_file(path)?
        }
        None => {
            info!("Serving built-in seed properties");
            Arc::new(seed_store()?)
        }
    };

    let server = Server::new(server_config, source);
    server.start().await?;

    Ok(())
}
