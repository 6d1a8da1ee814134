//! Date-bucketed risk aggregation
//!
//! Pure, deterministic transform from a transaction set to chart-ready
//! daily risk buckets. No I/O, no shared state.

use crate::types::transaction::Transaction;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Average risk for all transactions sharing one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBucket {
    pub date: NaiveDate,
    /// Rounded mean of the bucket's risk scores. Ties round up (52.5 -> 53).
    pub average_risk: u8,
    pub count: usize,
}

/// Group transactions by date and compute the average risk per bucket.
///
/// Output is sorted ascending by date. Input ordering does not matter: a
/// permuted copy of the same transactions yields the same buckets. Empty
/// input yields an empty vector.
pub fn aggregate_by_date(transactions: &[Transaction]) -> Vec<RiskBucket> {
    let mut buckets: BTreeMap<NaiveDate, (u32, usize)> = BTreeMap::new();

    for tx in transactions {
        let entry = buckets.entry(tx.date).or_insert((0, 0));
        entry.0 += u32::from(tx.risk);
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (sum, count))| RiskBucket {
            date,
            // f64::round is half-away-from-zero, which for non-negative
            // sums is round-half-up.
            average_risk: (sum as f64 / count as f64).round() as u8,
            count,
        })
        .collect()
}
