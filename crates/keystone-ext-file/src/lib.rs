//! # Keystone Ext File
//!
//! File-based and in-memory property data for Keystone.
//!
//! This crate provides the default [`PropertySource`](keystone_traits::PropertySource)
//! implementations:
//! - [`InMemoryPropertyStore`]: concurrent map preserving load order
//! - [`JsonPropertySource`]: JSON array of property rows
//! - [`CsvPropertySource`]: CSV with a camelCase header line
//! - [`seed_store`]: the firm's built-in eleven-property dataset
//!
//! Rows without an `id` are assigned a random UUID on load, and every row is
//! validated before it becomes visible.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod files;
mod seed;
mod store;

pub use files::{parse_csv_records, parse_json_records, CsvPropertySource, JsonPropertySource};
pub use seed::{seed_records, seed_store};
pub use store::InMemoryPropertyStore;

use std::path::Path;
use std::sync::Arc;

use keystone_core::PropertyRecord;
use keystone_traits::error::TraitError;
use keystone_traits::source::PropertySource;

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Opens a property file, choosing the format from its extension.
///
/// `.csv` files are read as CSV; anything else as JSON.
pub fn open_property_file(path: impl AsRef<Path>) -> Result<Arc<dyn PropertySource>, TraitError> {
    let path = path.as_ref();
    if is_csv(path) {
        Ok(Arc::new(CsvPropertySource::new(path)?))
    } else {
        Ok(Arc::new(JsonPropertySource::new(path)?))
    }
}

/// Reads every record from a property file without building a source.
///
/// Same format rules as [`open_property_file`].
pub fn read_property_file(path: impl AsRef<Path>) -> Result<Vec<PropertyRecord>, TraitError> {
    let path = path.as_ref();
    if is_csv(path) {
        parse_csv_records(std::fs::File::open(path)?)
    } else {
        parse_json_records(&std::fs::read_to_string(path)?)
    }
}
