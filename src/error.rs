//! Error types for the fraud monitoring core

use thiserror::Error;

/// All failure modes surfaced by the library.
///
/// Aggregation-layer faults (`InvalidRisk`, `EmptyDataset`) indicate bad
/// input data and are never silently coerced. Analyzer-layer faults
/// (`MissingApiKey`, `AnalysisFailed`, `MalformedResponse`) are recoverable
/// from the caller's perspective and retry-eligible.
#[derive(Error, Debug)]
pub enum FraudwatchError {
    /// Risk score outside the closed range 0-100.
    #[error("risk score {0} is outside the valid 0-100 range")]
    InvalidRisk(u8),

    /// No API credential configured; no network call was attempted.
    #[error("missing API credential ({0})")]
    MissingApiKey(&'static str),

    /// Transport failure or non-success status from the model endpoint.
    #[error("analysis request failed: {0}")]
    AnalysisFailed(#[from] reqwest::Error),

    /// The model endpoint answered with an unexpected response shape.
    #[error("unexpected response shape from the model endpoint")]
    MalformedResponse,

    /// Summary metrics requested over zero transactions.
    #[error("cannot summarize an empty transaction set")]
    EmptyDataset,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, FraudwatchError>;
