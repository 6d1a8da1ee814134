//! Fraudwatch Core Library
//!
//! Risk classification and threat analysis for a digital-payment fraud
//! monitoring dashboard: date-bucketed risk aggregation, status banding,
//! dashboard summary metrics, and an AI-backed phishing-message classifier
//! with a keyword-heuristic fallback.

pub mod aggregator;
pub mod analyzer;
pub mod config;
pub mod dataset;
pub mod error;
pub mod summary;
pub mod types;

pub use aggregator::{aggregate_by_date, RiskBucket};
pub use analyzer::ThreatAnalyzer;
pub use config::AppConfig;
pub use error::{FraudwatchError, Result};
pub use summary::{summarize, DashboardSummary};
pub use types::{ThreatVerdict, Transaction, TransactionStatus, Verdict, VerdictSource};
