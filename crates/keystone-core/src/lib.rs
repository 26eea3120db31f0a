//! # Keystone Core
//!
//! Core types and abstractions for the Keystone real-estate returns library.
//!
//! This crate provides the foundational building blocks used throughout Keystone:
//!
//! - **Types**: Domain types like [`PropertyRecord`], [`PropertyStatus`], [`PropertyId`]
//! - **Metrics**: The three-state [`Metric`] result shared by every return formula
//! - **Errors**: [`KeystoneError`] for record construction and validation
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing identifiers with free text
//! - **No Silent Zeros**: A metric that cannot be computed says so
//! - **Explicit Over Implicit**: Optional fields stay optional until a formula resolves them
//!
//! ## Example
//!
//! ```rust
//! use keystone_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let record = PropertyRecord::builder()
//!     .id("41-stuart-ave")
//!     .name("41 Stuart Ave")
//!     .city("New London")
//!     .state("CT")
//!     .units(3)
//!     .acquisition_date(chrono::NaiveDate::from_ymd_opt(2020, 5, 1).unwrap())
//!     .acquisition_price(dec!(195000))
//!     .sale_price(dec!(375000))
//!     .status(PropertyStatus::Sold)
//!     .build()
//!     .unwrap();
//!
//! assert!(record.is_sold());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{KeystoneError, KeystoneResult};
    pub use crate::types::{
        Metric, MetricSource, PropertyId, PropertyRecord, PropertyRecordBuilder, PropertyStatus,
    };
}

// Re-export commonly used types at crate root
pub use error::{KeystoneError, KeystoneResult};
pub use types::{Metric, MetricSource, PropertyId, PropertyRecord, PropertyStatus, MAX_AMOUNT};
