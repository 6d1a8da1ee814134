//! Threat analysis verdict data structures

use serde::{Deserialize, Serialize};

/// Final call on an analyzed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Scam,
}

/// How the verdict was obtained.
///
/// `HeuristicFallback` means the model answered but did not follow the
/// structured format, so keyword scanning decided instead. Callers cannot
/// tell the two apart except through this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerdictSource {
    ModelParsed,
    HeuristicFallback,
}

/// Result of one threat analysis invocation.
///
/// Created per request and discarded after rendering; unrelated to any
/// [`Transaction`](crate::types::transaction::Transaction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatVerdict {
    pub verdict: Verdict,
    /// Model explanation with the `VERDICT:`/`REASON:` labels stripped.
    /// May be empty.
    pub explanation: String,
    pub source: VerdictSource,
}
