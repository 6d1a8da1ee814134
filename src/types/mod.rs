//! Type definitions for the fraud monitoring core

pub mod transaction;
pub mod verdict;

pub use transaction::{Transaction, TransactionStatus};
pub use verdict::{ThreatVerdict, Verdict, VerdictSource};
