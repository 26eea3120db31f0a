//! The firm's built-in property dataset.

use keystone_core::PropertyRecord;
use keystone_traits::error::TraitError;

use crate::files::parse_json_records;
use crate::store::InMemoryPropertyStore;

/// Eleven properties: three held, eight sold.
const SEED_JSON: &str = include_str!("../data/seed_properties.json");

/// The seed records, in dataset order.
///
/// # Errors
///
/// Only if the embedded dataset is malformed.
pub fn seed_records() -> Result<Vec<PropertyRecord>, TraitError> {
    parse_json_records(SEED_JSON)
}

/// A store preloaded with [`seed_records`].
///
/// # Errors
///
/// Only if the embedded dataset is malformed.
pub fn seed_store() -> Result<InMemoryPropertyStore, TraitError> {
    let records = seed_records()?;
    tracing::debug!(count = records.len(), "loaded seed properties");
    Ok(InMemoryPropertyStore::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_core::PropertyId;
    use keystone_traits::source::PropertySource;
    use rust_decimal_macros::dec;

    #[test]
    fn test_seed_records() {
        let records = seed_records().unwrap();
        assert_eq!(records.len(), 11);
        assert_eq!(records.iter().filter(|r| r.is_current()).count(), 3);
        assert_eq!(records.iter().filter(|r| r.is_sold()).count(), 8);
        assert_eq!(records[0].id.as_str(), "157-crystal-ave");
    }

    #[tokio::test]
    async fn test_seed_store() {
        let store = seed_store().unwrap();
        assert_eq!(store.len(), 11);

        let huntington = store
            .get_by_id(&PropertyId::new("25-huntington-pl"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(huntington.city, "Norwich");
        assert_eq!(huntington.equity_multiple, Some(dec!(0.67)));

        let tampa = store
            .get_by_id(&PropertyId::new("3408-e-dr-mlk-blvd"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(tampa.state, "FL");
        assert_eq!(tampa.irr, Some(dec!(-1.1)));
        assert_eq!(tampa.cashflow, Some(dec!(-13200)));
    }
}
