//! Transaction data structures and risk-band classification

use crate::error::{FraudwatchError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lower bound of the Suspicious risk band (inclusive).
pub const SUSPICIOUS_FLOOR: u8 = 30;
/// Lower bound of the Fraudulent risk band (inclusive).
pub const FRAUDULENT_FLOOR: u8 = 70;

/// Transaction status, one band per risk range.
///
/// The three bands partition the 0-100 risk range with no gap and no
/// overlap: `[0, 30)` Safe, `[30, 70)` Suspicious, `[70, 100]` Fraudulent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Safe,
    Suspicious,
    Fraudulent,
}

impl TransactionStatus {
    /// Classify a risk score into its status band.
    ///
    /// Scores above 100 are a contract violation and fail with
    /// [`FraudwatchError::InvalidRisk`] rather than being clamped.
    pub fn from_risk(risk: u8) -> Result<Self> {
        if risk > 100 {
            return Err(FraudwatchError::InvalidRisk(risk));
        }
        Ok(if risk >= FRAUDULENT_FLOOR {
            TransactionStatus::Fraudulent
        } else if risk >= SUSPICIOUS_FLOOR {
            TransactionStatus::Suspicious
        } else {
            TransactionStatus::Safe
        })
    }

    /// Display color band for UI coloring, derived from the same mapping.
    pub fn color_band(&self) -> &'static str {
        match self {
            TransactionStatus::Safe => "success",
            TransactionStatus::Suspicious => "warning",
            TransactionStatus::Fraudulent => "destructive",
        }
    }
}

/// A payment transaction to be monitored for fraud.
///
/// Created by the data source and never mutated. `status` is supplied with
/// the record; whether it agrees with the risk-derived band is checked at
/// ingestion via [`mismatched_statuses`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: u64,
    /// Calendar date of the transaction (ISO form)
    pub date: NaiveDate,
    /// Merchant identifier
    pub merchant: String,
    /// Transaction amount (positive)
    pub amount: f64,
    /// Risk score, 0-100
    pub risk: u8,
    /// Supplied status label
    pub status: TransactionStatus,
}

impl Transaction {
    /// Status derived from the risk score alone.
    pub fn derived_status(&self) -> Result<TransactionStatus> {
        TransactionStatus::from_risk(self.risk)
    }
}

/// Ids of transactions whose supplied status disagrees with the
/// risk-derived band.
///
/// Mismatches are reported to the caller for logging/flagging; they are not
/// coerced here, and summary counts stay defined over the supplied label.
pub fn mismatched_statuses(transactions: &[Transaction]) -> Result<Vec<u64>> {
    let mut mismatched = Vec::new();
    for tx in transactions {
        if tx.derived_status()? != tx.status {
            mismatched.push(tx.id);
        }
    }
    Ok(mismatched)
}
