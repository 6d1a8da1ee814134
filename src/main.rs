//! Fraudwatch - Main Entry Point
//!
//! Runs the aggregation and summary passes over the built-in transaction
//! set, logs the results, and optionally analyzes a message passed on the
//! command line.

use anyhow::Result;
use fraudwatch::{
    aggregator::aggregate_by_date,
    analyzer::ThreatAnalyzer,
    config::AppConfig,
    dataset,
    summary::summarize,
    types::transaction::mismatched_statuses,
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fraudwatch=info".parse()?),
        )
        .init();

    info!("Starting Fraudwatch");

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        endpoint = %config.analyzer.endpoint,
        api_key_configured = config.analyzer.api_key.is_some(),
        "Configuration loaded successfully"
    );

    // Load the transaction set and audit the label/score invariant
    let transactions = dataset::reference_transactions();
    info!(count = transactions.len(), "Transaction set loaded");

    let mismatched = mismatched_statuses(&transactions)?;
    if !mismatched.is_empty() {
        warn!(
            ids = ?mismatched,
            "Supplied status disagrees with risk-derived status"
        );
    }

    // Daily risk trend
    let buckets = aggregate_by_date(&transactions);
    for bucket in &buckets {
        info!(
            date = %bucket.date,
            average_risk = bucket.average_risk,
            count = bucket.count,
            "Daily risk bucket"
        );
    }

    // Dashboard summary
    let summary = summarize(&transactions)?;
    info!(
        total = summary.total,
        suspicious = summary.suspicious,
        fraudulent = summary.fraudulent,
        high_risk_merchants = summary.high_risk_merchants,
        detection_accuracy = summary.detection_accuracy,
        "Dashboard summary"
    );

    // Optional one-shot message analysis
    let message = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !message.trim().is_empty() {
        let analyzer = ThreatAnalyzer::new(&config.analyzer);
        match analyzer.analyze(&message).await {
            Ok(verdict) => info!(
                verdict = ?verdict.verdict,
                source = ?verdict.source,
                explanation = %verdict.explanation,
                "Message analyzed"
            ),
            Err(e) => error!(error = %e, "Message analysis failed"),
        }
    }

    Ok(())
}
