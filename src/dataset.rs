//! Built-in reference transaction dataset
//!
//! A fixed set of twelve transactions used to drive the demo dashboard. A
//! production deployment would replace this with an ingestion feed. Two
//! rows (ids 2 and 6) carry a supplied status that disagrees with the
//! risk-derived band; the startup audit flags them rather than rejecting.

use crate::types::transaction::{Transaction, TransactionStatus};
use chrono::NaiveDate;

/// The reference transaction set.
pub fn reference_transactions() -> Vec<Transaction> {
    let tx = |id: u64, y: i32, m: u32, d: u32, merchant: &str, amount: f64, risk: u8, status| {
        Transaction {
            id,
            // Dates are compile-time constants; construction cannot fail.
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            merchant: merchant.to_string(),
            amount,
            risk,
            status,
        }
    };

    vec![
        tx(1, 2025, 10, 14, "Amazon", 1200.0, 20, TransactionStatus::Safe),
        tx(2, 2025, 10, 14, "UnknownApp", 9500.0, 85, TransactionStatus::Suspicious),
        tx(3, 2025, 10, 13, "FakeRefund", 7800.0, 92, TransactionStatus::Fraudulent),
        tx(4, 2025, 10, 13, "Flipkart", 3400.0, 15, TransactionStatus::Safe),
        tx(5, 2025, 10, 12, "Swiggy", 450.0, 10, TransactionStatus::Safe),
        tx(6, 2025, 10, 12, "SuspiciousStore", 12000.0, 78, TransactionStatus::Suspicious),
        tx(7, 2025, 10, 11, "Zomato", 320.0, 8, TransactionStatus::Safe),
        tx(8, 2025, 10, 11, "PhishingMerchant", 15000.0, 95, TransactionStatus::Fraudulent),
        tx(9, 2025, 10, 10, "Netflix", 649.0, 5, TransactionStatus::Safe),
        tx(10, 2025, 10, 10, "BookMyShow", 800.0, 12, TransactionStatus::Safe),
        tx(11, 2025, 10, 9, "ScamLink", 25000.0, 98, TransactionStatus::Fraudulent),
        tx(12, 2025, 10, 9, "Myntra", 2100.0, 18, TransactionStatus::Safe),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transaction::mismatched_statuses;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_shape() {
        let txs = reference_transactions();
        assert_eq!(txs.len(), 12);

        let ids: HashSet<u64> = txs.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 12);

        assert!(txs.iter().all(|t| t.risk <= 100));
        assert!(txs.iter().all(|t| t.amount > 0.0));
    }

    #[test]
    fn test_known_label_mismatches() {
        let txs = reference_transactions();
        assert_eq!(mismatched_statuses(&txs).unwrap(), vec![2, 6]);
    }
}
