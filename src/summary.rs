//! Dashboard summary metrics
//!
//! Independent scalar reductions over the full transaction set, computed in
//! a single pass.

use crate::error::{FraudwatchError, Result};
use crate::types::transaction::{Transaction, TransactionStatus};
use serde::Serialize;
use std::collections::HashSet;

/// Cutoff for the distinct high-risk merchant count, compared strictly
/// (`risk > cutoff`). Numerically equal to
/// [`FRAUDULENT_FLOOR`](crate::types::transaction::FRAUDULENT_FLOOR) but a
/// separate dial; the two must not be merged.
pub const HIGH_RISK_MERCHANT_CUTOFF: u8 = 70;

/// Aggregate metrics shown on the analytics dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Total transaction count
    pub total: usize,
    /// Transactions labeled Suspicious
    pub suspicious: usize,
    /// Transactions labeled Fraudulent
    pub fraudulent: usize,
    /// Distinct merchants with a risk score above the high-risk cutoff
    pub high_risk_merchants: usize,
    /// Detection accuracy proxy: round(100 * (total - fraudulent) / total)
    pub detection_accuracy: u8,
}

/// Compute the dashboard summary over a transaction set.
///
/// Counts use the supplied status label. An empty set fails with
/// [`FraudwatchError::EmptyDataset`] instead of dividing by zero in the
/// accuracy computation.
pub fn summarize(transactions: &[Transaction]) -> Result<DashboardSummary> {
    if transactions.is_empty() {
        return Err(FraudwatchError::EmptyDataset);
    }

    let mut suspicious = 0;
    let mut fraudulent = 0;
    let mut high_risk_merchants: HashSet<&str> = HashSet::new();

    for tx in transactions {
        match tx.status {
            TransactionStatus::Suspicious => suspicious += 1,
            TransactionStatus::Fraudulent => fraudulent += 1,
            TransactionStatus::Safe => {}
        }
        if tx.risk > HIGH_RISK_MERCHANT_CUTOFF {
            high_risk_merchants.insert(tx.merchant.as_str());
        }
    }

    let total = transactions.len();
    let detection_accuracy =
        (100.0 * (total - fraudulent) as f64 / total as f64).round() as u8;

    Ok(DashboardSummary {
        total,
        suspicious,
        fraudulent,
        high_risk_merchants: high_risk_merchants.len(),
        detection_accuracy,
    })
}
