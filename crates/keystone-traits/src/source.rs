//! Property data source traits.
//!
//! The property collection is an injected, read-only dataset. Consumers
//! never depend on where records live; they hold an
//! `Arc<dyn PropertySource>`.

use async_trait::async_trait;
use keystone_core::{PropertyId, PropertyRecord, PropertyStatus};
use serde::{Deserialize, Serialize};

use crate::error::TraitError;

/// Filter for property queries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Status filter
    pub status: Option<PropertyStatus>,
    /// State code, case-insensitive
    pub state: Option<String>,
    /// City, case-insensitive
    pub city: Option<String>,
    /// Case-insensitive substring of name, address or ownership name
    pub text_search: Option<String>,
}

impl PropertyFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one status.
    #[must_use]
    pub fn with_status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to one state.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Restricts to one city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Restricts to records whose text fields contain `query`.
    #[must_use]
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text_search = Some(query.into());
        self
    }

    /// True if `record` passes every set criterion.
    #[must_use]
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if self.status.is_some_and(|s| s != record.status) {
            return false;
        }
        if let Some(state) = &self.state {
            if !record.state.trim().eq_ignore_ascii_case(state.trim()) {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if !record.city.trim().eq_ignore_ascii_case(city.trim()) {
                return false;
            }
        }
        if let Some(query) = &self.text_search {
            let query = query.trim().to_lowercase();
            let hit = [&record.name, &record.address, &record.ownership_name]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Read-only source of property records.
///
/// Implementations must return records in a stable order.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Get every record.
    async fn get_all(&self) -> Result<Vec<PropertyRecord>, TraitError>;

    /// Get the record with `id`, or `None` if there is none.
    async fn get_by_id(&self, id: &PropertyId) -> Result<Option<PropertyRecord>, TraitError>;

    /// Get records with the given status.
    async fn get_by_status(
        &self,
        status: PropertyStatus,
    ) -> Result<Vec<PropertyRecord>, TraitError> {
        self.search(&PropertyFilter::new().with_status(status)).await
    }

    /// Get records still held.
    async fn get_current(&self) -> Result<Vec<PropertyRecord>, TraitError> {
        self.get_by_status(PropertyStatus::Current).await
    }

    /// Get exited records.
    async fn get_sold(&self) -> Result<Vec<PropertyRecord>, TraitError> {
        self.get_by_status(PropertyStatus::Sold).await
    }

    /// Search records by filter.
    async fn search(&self, filter: &PropertyFilter) -> Result<Vec<PropertyRecord>, TraitError> {
        let mut records = self.get_all().await?;
        records.retain(|r| filter.matches(r));
        Ok(records)
    }
}
