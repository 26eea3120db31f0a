//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use keystone_traits::source::PropertySource;

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `source` - Property data to serve
/// * `config` - Target rate, projection bounds and aggregation settings
pub fn create_router(source: Arc<dyn PropertySource>, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { source, config });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/health", get(handlers::health))
        // Properties
        .route("/api/properties", get(handlers::list_properties))
        .route("/api/properties/current", get(handlers::list_current_properties))
        .route("/api/properties/sold", get(handlers::list_sold_properties))
        .route("/api/properties/:id", get(handlers::get_property))
        .route("/api/properties/:id/metrics", get(handlers::get_property_metrics))
        // Portfolio
        .route("/api/portfolio/summary", get(handlers::get_portfolio_summary))
        .route("/api/portfolio/states", get(handlers::get_state_breakdown))
        // Projection
        .route("/api/projection", get(handlers::get_projection))
        // State
        .with_state(state)
}
