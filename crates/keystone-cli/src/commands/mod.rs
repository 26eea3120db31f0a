//! CLI command implementations.

pub mod metrics;
pub mod project;
pub mod summary;

pub use metrics::MetricsArgs;
pub use project::ProjectArgs;
pub use summary::SummaryArgs;

use std::path::Path;

use keystone_core::PropertyRecord;
use keystone_ext_file::{read_property_file, seed_records};

use crate::error::CliResult;

/// Loads records from `data`, or the built-in dataset when no file is given.
pub fn load_records(data: Option<&Path>) -> CliResult<Vec<PropertyRecord>> {
    let records = match data {
        Some(path) => read_property_file(path)?,
        None => seed_records()?,
    };
    Ok(records)
}
