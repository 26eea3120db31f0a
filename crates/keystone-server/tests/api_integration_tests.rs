//! Integration tests for the Keystone Server API endpoints.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use keystone_core::{PropertyId, PropertyRecord};
use keystone_ext_file::{open_property_file, seed_store};
use keystone_server::routes::create_router;
use keystone_server::{Server, ServerConfig};
use keystone_traits::error::TraitError;
use keystone_traits::source::{PropertyFilter, PropertySource};

fn seed_router() -> Router {
    let source = Arc::new(seed_store().expect("seed dataset"));
    create_router(source, ServerConfig::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap_or(f64::NAN);
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

fn ids(json: &Value) -> Vec<&str> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect()
}

/// A source whose backing store is unreachable.
struct BrokenSource;

#[async_trait]
impl PropertySource for BrokenSource {
    async fn get_all(&self) -> Result<Vec<PropertyRecord>, TraitError> {
        Err(TraitError::unavailable("database offline"))
    }

    async fn get_by_id(&self, _id: &PropertyId) -> Result<Option<PropertyRecord>, TraitError> {
        Err(TraitError::unavailable("database offline"))
    }

    async fn search(&self, _filter: &PropertyFilter) -> Result<Vec<PropertyRecord>, TraitError> {
        Err(TraitError::unavailable("database offline"))
    }
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health() {
    for uri in ["/health", "/api/health"] {
        let (status, json) = get(seed_router(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[tokio::test]
async fn test_list_properties() {
    let (status, json) = get(seed_router(), "/api/properties").await;
    assert_eq!(status, StatusCode::OK);

    let ids = ids(&json);
    assert_eq!(ids.len(), 11);
    assert_eq!(ids[0], "157-crystal-ave");

    let first = &json[0];
    assert_eq!(first["name"], "157 Crystal Ave");
    assert_eq!(first["acquisitionPrice"], 376000.0);
    assert_eq!(first["status"], "current");
}

#[tokio::test]
async fn test_list_by_status() {
    let (status, current) = get(seed_router(), "/api/properties/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current.as_array().unwrap().len(), 3);
    assert!(current
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["status"] == "current"));

    let (status, sold) = get(seed_router(), "/api/properties/sold").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sold.as_array().unwrap().len(), 8);
    assert!(ids(&sold).contains(&"41-stuart-ave"));
}

#[tokio::test]
async fn test_get_property() {
    let (status, json) = get(seed_router(), "/api/properties/41-stuart-ave").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "41 Stuart Ave");
    assert_eq!(json["salePrice"], 375000.0);
    assert_eq!(json["saleDate"], "2024-05-01");
}

#[tokio::test]
async fn test_get_property_not_found() {
    let (status, json) = get(seed_router(), "/api/properties/999-nowhere-rd").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Property not found");

    let (status, json) = get(seed_router(), "/api/properties/999-nowhere-rd/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Property not found");
}

#[tokio::test]
async fn test_property_metrics() {
    let (status, json) = get(seed_router(), "/api/properties/41-stuart-ave/metrics").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(json["propertyId"], "41-stuart-ave");
    assert_eq!(json["initialInvestment"], 215000.0);
    assert_eq!(json["totalProfit"], 304000.0);

    assert_eq!(json["irr"]["source"], "computed");
    let irr = json["irr"]["value"].as_f64().unwrap();
    assert!((irr - 24.6471).abs() < 1e-3, "irr = {irr}");

    assert_eq!(json["equityMultiple"]["source"], "fallback");
    assert_close(&json["equityMultiple"]["value"], 3.04);
}

// =============================================================================
// PORTFOLIO
// =============================================================================

#[tokio::test]
async fn test_portfolio_summary() {
    let (status, json) = get(seed_router(), "/api/portfolio/summary").await;
    assert_eq!(status, StatusCode::OK);

    let summary = &json["summary"];
    assert_eq!(summary["totalPortfolioValue"], 7110000.0);
    assert_eq!(summary["totalUnits"], 37);
    assert_eq!(summary["totalEquityCreated"], 2646000.0);
    assert_eq!(summary["totalRealizedProfits"], 747000.0);
    assert_eq!(summary["propertyCount"], 11);
    assert_eq!(summary["avgReturn"]["sampleCount"], 11);

    let pct = json["equityCreatedPct"].as_f64().unwrap();
    assert!((pct - 37.22).abs() < 0.01);

    assert_eq!(json["currentHoldings"]["totalValue"], 4100000.0);
    assert_eq!(json["currentHoldings"]["totalUnits"], 19);
    assert_eq!(json["exits"]["soldCount"], 8);
    assert_eq!(json["exits"]["totalSaleValue"], 3010000.0);
}

#[tokio::test]
async fn test_state_breakdown() {
    let (status, json) = get(seed_router(), "/api/portfolio/states").await;
    assert_eq!(status, StatusCode::OK);

    let states = json.as_array().unwrap();
    assert_eq!(states.len(), 2);
    assert_eq!(states[0]["state"], "CT");
    assert_eq!(states[0]["propertyCount"], 10);
    assert_eq!(states[0]["units"], 27);
    assert_eq!(states[1]["state"], "FL");
    assert_eq!(states[1]["exitValue"], 1900000.0);
}

#[tokio::test]
async fn test_source_failure_is_500() {
    let app = create_router(Arc::new(BrokenSource), ServerConfig::default());

    let (status, json) = get(app.clone(), "/api/properties").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Failed to fetch properties");

    let (status, json) = get(app.clone(), "/api/properties/41-stuart-ave").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Failed to fetch property");

    let (status, json) = get(app, "/api/portfolio/summary").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Failed to fetch portfolio");
}

// =============================================================================
// PROJECTION
// =============================================================================

#[tokio::test]
async fn test_projection_uses_target_rate() {
    let (status, json) = get(seed_router(), "/api/projection?principal=100000&years=5").await;
    assert_eq!(status, StatusCode::OK);

    assert_close(&json["input"]["annualRate"], 0.3);
    assert_eq!(json["finalValue"], 371293.0);
    assert_eq!(json["totalReturns"], 271293.0);
    assert_close(&json["returnMultiple"], 3.71293);
    assert_close(&json["averageAnnualGain"], 54258.6);

    let schedule = json["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 5);
    assert_eq!(schedule[0]["balance"], 130000.0);
    assert_eq!(schedule[4]["balance"], 371293.0);
}

#[tokio::test]
async fn test_projection_explicit_rate() {
    let (status, json) = get(
        seed_router(),
        "/api/projection?principal=200000&years=2&rate=0.1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["finalValue"], 242000.0);
}

#[tokio::test]
async fn test_projection_out_of_bounds() {
    let (status, json) = get(seed_router(), "/api/projection?principal=10000&years=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("principal"));

    let (status, json) = get(seed_router(), "/api/projection?principal=100000&years=30").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("years"));
}

#[tokio::test]
async fn test_projection_bad_query() {
    let (status, json) = get(seed_router(), "/api/projection?principal=lots&years=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].is_string());

    let (status, _) = get(seed_router(), "/api/projection?years=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = get(
        seed_router(),
        "/api/projection?principal=100000&years=5&rate=-1.5",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("annual rate"));
}

#[tokio::test]
async fn test_projection_configured_bounds_and_rate() {
    let config = ServerConfig::from_toml(
        r#"
        target_annual_rate = 0.1

        [projection_bounds]
        max_years = 40
        "#,
    )
    .unwrap();
    let app = create_router(Arc::new(seed_store().unwrap()), config);

    let (status, json) = get(app, "/api/projection?principal=100000&years=30").await;
    assert_eq!(status, StatusCode::OK);
    assert_close(&json["input"]["annualRate"], 0.1);
}

// =============================================================================
// SERVER
// =============================================================================

#[tokio::test]
async fn test_server_router_serves_file_data() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(
        b"id,name,city,state,units,acquisitionDate,acquisitionPrice,currentValue\n\
          a,1 Harmony St,Stonington,CT,4,2024-10-01,1075000,1200000\n",
    )
    .unwrap();
    file.flush().unwrap();

    let source = open_property_file(file.path()).unwrap();
    let server = Server::new(ServerConfig::default(), source);

    let (status, json) = get(server.router(), "/api/properties").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec!["a"]);

    let (status, json) = get(server.router(), "/api/portfolio/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["totalPortfolioValue"], 1200000.0);
    assert_eq!(json["summary"]["avgReturn"]["sampleCount"], 0);
}
