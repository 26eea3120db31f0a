//! Domain types for real-estate return analytics.
//!
//! - [`PropertyRecord`]: One asset with its acquisition and operating data
//! - [`PropertyStatus`]: Lifecycle classification (current or sold)
//! - [`PropertyId`]: Opaque record identifier
//! - [`Metric`]: Computed / fallback / unavailable metric result

mod metric;
mod property;

pub use metric::{Metric, MetricSource};
pub use property::{PropertyId, PropertyRecord, PropertyRecordBuilder, PropertyStatus, MAX_AMOUNT};
