//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use keystone_analytics::metrics::PropertyMetrics;
use keystone_analytics::projection::{project, ProjectionInput, ProjectionResult, ProjectionYear};
use keystone_core::{PropertyId, PropertyRecord};
use keystone_portfolio::{
    bucket_by_state, calculate_portfolio_summary, CurrentHoldingsSummary, ExitSummary,
    PortfolioSummary, StateBucket,
};
use keystone_traits::error::TraitError;
use keystone_traits::source::PropertySource;

use crate::config::ServerConfig;

/// Application state.
pub struct AppState {
    /// Property data
    pub source: Arc<dyn PropertySource>,
    /// Server configuration (target rate, bounds, aggregation)
    pub config: ServerConfig,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

fn fetch_failed(what: &str, e: &TraitError) -> ApiError {
    tracing::error!(error = %e, "failed to fetch {what}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Failed to fetch {what}"),
    )
}

fn not_found() -> ApiError {
    error(StatusCode::NOT_FOUND, "Property not found")
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// List every property.
pub async fn list_properties(State(state): State<Arc<AppState>>) -> ApiResult<Vec<PropertyRecord>> {
    state
        .source
        .get_all()
        .await
        .map(Json)
        .map_err(|e| fetch_failed("properties", &e))
}

/// List properties still held.
pub async fn list_current_properties(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<PropertyRecord>> {
    state
        .source
        .get_current()
        .await
        .map(Json)
        .map_err(|e| fetch_failed("current properties", &e))
}

/// List sold properties.
pub async fn list_sold_properties(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<PropertyRecord>> {
    state
        .source
        .get_sold()
        .await
        .map(Json)
        .map_err(|e| fetch_failed("sold properties", &e))
}

async fn find_property(state: &AppState, id: String) -> Result<PropertyRecord, ApiError> {
    match state.source.get_by_id(&PropertyId::new(id)).await {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(not_found()),
        Err(e) => Err(fetch_failed("property", &e)),
    }
}

/// Get one property by id.
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<PropertyRecord> {
    find_property(&state, id).await.map(Json)
}

/// Computed return metrics for one property.
pub async fn get_property_metrics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<PropertyMetrics> {
    let record = find_property(&state, id).await?;
    Ok(Json(PropertyMetrics::calculate(&record)))
}

// =============================================================================
// PORTFOLIO
// =============================================================================

/// Portfolio overview response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    /// Firm-level totals and averages
    pub summary: PortfolioSummary,
    /// Equity created as a percentage of total value
    pub equity_created_pct: Option<Decimal>,
    /// Held properties only
    pub current_holdings: CurrentHoldingsSummary,
    /// Sold properties only
    pub exits: ExitSummary,
}

/// Portfolio summary with current holdings and exits.
pub async fn get_portfolio_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<PortfolioOverview> {
    let records = state
        .source
        .get_all()
        .await
        .map_err(|e| fetch_failed("portfolio", &e))?;

    let summary = calculate_portfolio_summary(&records, &state.config.aggregation);
    tracing::debug!(
        properties = summary.property_count,
        total_value = %summary.total_portfolio_value,
        "calculated portfolio summary"
    );

    Ok(Json(PortfolioOverview {
        equity_created_pct: summary.equity_created_pct(),
        summary,
        current_holdings: CurrentHoldingsSummary::calculate(&records),
        exits: ExitSummary::calculate(&records),
    }))
}

/// Units, property counts and exit value per state.
pub async fn get_state_breakdown(State(state): State<Arc<AppState>>) -> ApiResult<Vec<StateBucket>> {
    let records = state
        .source
        .get_all()
        .await
        .map_err(|e| fetch_failed("portfolio", &e))?;
    Ok(Json(bucket_by_state(&records)))
}

// =============================================================================
// PROJECTION
// =============================================================================

/// Query parameters for a growth projection.
#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    /// Amount invested.
    pub principal: Decimal,
    /// Horizon in whole years.
    pub years: u32,
    /// Annual rate as a fraction. Defaults to the configured target rate.
    pub rate: Option<Decimal>,
}

/// Projection response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    /// Headline figures
    #[serde(flatten)]
    pub result: ProjectionResult,
    /// Balance at the end of each year
    pub schedule: Vec<ProjectionYear>,
}

/// Compound-growth projection.
pub async fn get_projection(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ProjectionQuery>, QueryRejection>,
) -> ApiResult<ProjectionResponse> {
    let Query(query) = query.map_err(|e| error(StatusCode::BAD_REQUEST, e.body_text()))?;

    let rate = query.rate.unwrap_or(state.config.target_annual_rate);
    let input = ProjectionInput::new(query.principal, rate, query.years);

    state
        .config
        .projection_bounds
        .check(&input)
        .map_err(|e| error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let result = project(&input).map_err(|e| error(StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(ProjectionResponse {
        schedule: result.schedule(),
        result,
    }))
}
