//! Portfolio bucketing.

pub mod state;

pub use state::{bucket_by_state, StateBucket};
