//! # Keystone Traits
//!
//! Trait definitions for Keystone data sources.
//!
//! This crate contains ONLY trait definitions with ZERO runtime dependencies.
//! Implementations live in extension crates (`keystone-ext-file`).
//!
//! ## Dependency Injection
//!
//! The server and CLI take any [`PropertySource`](source::PropertySource):
//!
//! ```ignore
//! let source: Arc<dyn PropertySource> = Arc::new(seed_store());
//! let router = create_router(source, config);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod source;

pub use error::{TraitError, TraitResult};
pub use source::{PropertyFilter, PropertySource};
