//! Property-based tests for aggregation invariants.
//!
//! These tests verify properties that should always hold:
//! - Each record contributes non-negative equity created
//! - Equity created is monotonic in any record's exit value
//! - Record order never changes a result
//! - Bucketing covers all records

use chrono::NaiveDate;
use keystone_portfolio::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

fn arb_record() -> impl Strategy<Value = PropertyRecord> {
    (
        1u32..=20,
        10_000i64..=2_000_000,
        0i64..=5_000_000,
        prop_oneof![Just(PropertyStatus::Current), Just(PropertyStatus::Sold)],
        proptest::option::of(-20i64..=120),
        prop_oneof![Just("CT"), Just("FL"), Just("NY")],
    )
        .prop_map(|(units, acquisition, exit, status, irr, state)| {
            let builder = PropertyRecord::builder()
                .id(format!("p-{acquisition}-{exit}"))
                .city("Anytown")
                .state(state)
                .units(units)
                .acquisition_date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
                .acquisition_price(Decimal::from(acquisition))
                .status(status);
            let builder = match status {
                PropertyStatus::Sold => builder.sale_price(Decimal::from(exit)),
                PropertyStatus::Current => builder.current_value(Decimal::from(exit)),
            };
            let mut record = builder.build().unwrap();
            record.irr = irr.map(Decimal::from);
            record
        })
}

fn arb_records(max: usize) -> impl Strategy<Value = Vec<PropertyRecord>> {
    proptest::collection::vec(arb_record(), 0..=max)
}

fn summarize(records: &[PropertyRecord]) -> PortfolioSummary {
    calculate_portfolio_summary(records, &AggregationConfig::sequential())
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Each record adds at least zero equity created, and raising one
    /// record's exit value never lowers the total.
    #[test]
    fn prop_equity_created_monotonic(
        records in arb_records(12).prop_filter("non-empty", |r| !r.is_empty()),
        bump in 1i64..=1_000_000,
        pick in any::<prop::sample::Index>(),
    ) {
        let before = summarize(&records);
        prop_assert!(before.total_equity_created >= Decimal::ZERO);

        let i = pick.index(records.len());
        let mut bumped = records.clone();
        match bumped[i].status {
            PropertyStatus::Sold => {
                bumped[i].sale_price = bumped[i].sale_price.map(|v| v + Decimal::from(bump));
            }
            PropertyStatus::Current => {
                bumped[i].current_value = bumped[i].current_value.map(|v| v + Decimal::from(bump));
            }
        }

        let after = summarize(&bumped);
        prop_assert!(after.total_equity_created >= before.total_equity_created);

        let without = summarize(&[&records[..i], &records[i + 1..]].concat());
        prop_assert!(before.total_equity_created >= without.total_equity_created);
    }

    /// Reversing the input leaves every figure unchanged.
    #[test]
    fn prop_order_independent(records in arb_records(15)) {
        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(summarize(&records), summarize(&reversed));
        prop_assert_eq!(bucket_by_state(&records), bucket_by_state(&reversed));
    }

    /// Counts add up and every record lands in exactly one state bucket.
    #[test]
    fn prop_counts_consistent(records in arb_records(15)) {
        let summary = summarize(&records);
        prop_assert_eq!(summary.property_count, records.len());
        prop_assert_eq!(summary.current_count + summary.sold_count, records.len());

        let buckets = bucket_by_state(&records);
        let bucketed: usize = buckets.iter().map(|b| b.property_count).sum();
        prop_assert_eq!(bucketed, records.len());
        let units: u64 = buckets.iter().map(|b| b.units).sum();
        prop_assert_eq!(units, summary.total_units);
    }
}

#[test]
fn property_empty_portfolio_is_zero() {
    let summary = summarize(&[]);
    assert_eq!(summary.total_portfolio_value, Decimal::ZERO);
    assert_eq!(summary.total_units, 0);
    assert_eq!(summary.avg_return.value, Decimal::ZERO);
    assert!(!summary.avg_return.has_data());
    assert_eq!(summary.total_realized_profits, Decimal::ZERO);
}
