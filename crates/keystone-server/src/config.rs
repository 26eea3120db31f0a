//! Server configuration.

use keystone_analytics::projection::ProjectionBounds;
use keystone_portfolio::AggregationConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Property data file (`.json` or `.csv`). The built-in seed dataset
    /// is served when unset.
    pub data_file: Option<String>,

    /// Growth rate used by `/api/projection` when the request names none,
    /// as a fraction.
    #[serde(default = "default_target_annual_rate")]
    pub target_annual_rate: Decimal,

    /// Accepted projection inputs
    #[serde(default)]
    pub projection_bounds: ProjectionBounds,

    /// Aggregation parallelism
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_target_annual_rate() -> Decimal {
    dec!(0.30)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: None,
            target_annual_rate: default_target_annual_rate(),
            projection_bounds: ProjectionBounds::default(),
            aggregation: AggregationConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
