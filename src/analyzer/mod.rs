//! Phishing-message threat analysis
//!
//! Orchestrates a single classification request: builds the prompt, issues
//! one call to the model endpoint, parses a structured verdict out of the
//! free-form reply, and degrades to keyword heuristics when the model does
//! not follow the format. Retries are caller policy, not built in.

pub mod client;

use crate::config::AnalyzerConfig;
use crate::error::{FraudwatchError, Result};
use crate::types::verdict::{ThreatVerdict, Verdict, VerdictSource};
use self::client::GeminiClient;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Substrings that flip the fallback verdict to Scam.
const FALLBACK_KEYWORDS: [&str; 3] = ["scam", "phishing", "suspicious"];

fn verdict_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)VERDICT:\s*(SAFE|SCAM)\s*").unwrap())
}

fn reason_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)REASON:\s*").unwrap())
}

/// Classifies free-text messages as phishing or safe.
///
/// The API credential is threaded in explicitly through
/// [`AnalyzerConfig`]; the analyzer never reads ambient process state, so
/// tests can inject fakes deterministically.
#[derive(Debug, Clone)]
pub struct ThreatAnalyzer {
    client: GeminiClient,
    api_key: Option<String>,
}

impl ThreatAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            client: GeminiClient::new(&config.endpoint, config.timeout_ms),
            api_key: config.api_key.clone(),
        }
    }

    /// Analyze one message.
    ///
    /// Exactly one terminal outcome per invocation: a [`ThreatVerdict`]
    /// (model-parsed or heuristic-fallback) or a typed error. Without a
    /// configured credential this fails immediately and issues no network
    /// call.
    pub async fn analyze(&self, message: &str) -> Result<ThreatVerdict> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(FraudwatchError::MissingApiKey("analyzer.api_key"))?;

        let prompt = build_prompt(message);
        debug!(message_chars = message.len(), "Requesting threat analysis");

        let text = self.client.generate(api_key, &prompt).await?;
        let verdict = interpret(&text);

        match verdict.source {
            VerdictSource::ModelParsed => info!(
                verdict = ?verdict.verdict,
                "Threat analysis complete"
            ),
            VerdictSource::HeuristicFallback => warn!(
                verdict = ?verdict.verdict,
                "Model reply had no structured verdict, used keyword fallback"
            ),
        }

        Ok(verdict)
    }
}

/// Build the fixed instruction prompt around the literal message text.
fn build_prompt(message: &str) -> String {
    format!(
        "Analyze the following message and determine if it is a phishing/scam message or safe.\n\
         Provide a response in this exact format:\n\
         VERDICT: [SAFE or SCAM]\n\
         REASON: [Brief explanation]\n\
         \n\
         Message to analyze:\n\
         \"{message}\"\n\
         \n\
         Consider factors like:\n\
         - Urgency and pressure tactics\n\
         - Requests for sensitive information (OTP, passwords, CVV)\n\
         - Suspicious links or sender identity\n\
         - Grammar and spelling errors\n\
         - Too-good-to-be-true offers\n\
         - Impersonation of legitimate organizations"
    )
}

/// Turn a model reply into a verdict.
///
/// A case-insensitive `VERDICT: SAFE|SCAM` match wins; otherwise the
/// lower-cased full text is scanned for scam keywords. The explanation is
/// the reply with the first `VERDICT:` token and first `REASON:` label
/// removed for display.
fn interpret(text: &str) -> ThreatVerdict {
    let explanation = strip_labels(text);

    if let Some(captures) = verdict_pattern().captures(text) {
        let verdict = if captures[1].eq_ignore_ascii_case("SCAM") {
            Verdict::Scam
        } else {
            Verdict::Safe
        };
        return ThreatVerdict {
            verdict,
            explanation,
            source: VerdictSource::ModelParsed,
        };
    }

    let lowered = text.to_lowercase();
    let verdict = if FALLBACK_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Verdict::Scam
    } else {
        Verdict::Safe
    };

    ThreatVerdict {
        verdict,
        explanation,
        source: VerdictSource::HeuristicFallback,
    }
}

/// Remove the first `VERDICT: ...` token and the first `REASON:` label.
fn strip_labels(text: &str) -> String {
    let without_verdict = verdict_pattern().replace(text, "");
    reason_pattern().replace(&without_verdict, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_scam_verdict() {
        let verdict = interpret("VERDICT: SCAM\nREASON: urgent OTP request");

        assert_eq!(verdict.verdict, Verdict::Scam);
        assert_eq!(verdict.source, VerdictSource::ModelParsed);
        assert_eq!(verdict.explanation, "urgent OTP request");
    }

    #[test]
    fn test_parsed_safe_verdict_case_insensitive() {
        let verdict = interpret("verdict: safe\nreason: routine order confirmation");

        assert_eq!(verdict.verdict, Verdict::Safe);
        assert_eq!(verdict.source, VerdictSource::ModelParsed);
        assert_eq!(verdict.explanation, "routine order confirmation");
    }

    #[test]
    fn test_fallback_keyword_scam() {
        let verdict = interpret("This message shows classic phishing traits.");

        assert_eq!(verdict.verdict, Verdict::Scam);
        assert_eq!(verdict.source, VerdictSource::HeuristicFallback);
    }

    #[test]
    fn test_fallback_clean_text_is_safe() {
        let verdict = interpret("Nothing unusual here, looks like a normal receipt.");

        assert_eq!(verdict.verdict, Verdict::Safe);
        assert_eq!(verdict.source, VerdictSource::HeuristicFallback);
    }

    #[test]
    fn test_fallback_empty_text_is_safe() {
        let verdict = interpret("");

        assert_eq!(verdict.verdict, Verdict::Safe);
        assert_eq!(verdict.source, VerdictSource::HeuristicFallback);
        assert!(verdict.explanation.is_empty());
    }

    #[test]
    fn test_prompt_embeds_message() {
        let prompt = build_prompt("win a free iPhone now");

        assert!(prompt.contains("\"win a free iPhone now\""));
        assert!(prompt.contains("VERDICT: [SAFE or SCAM]"));
        assert!(prompt.contains("REASON: [Brief explanation]"));
    }

    #[test]
    fn test_strip_labels_only_first_occurrence() {
        let stripped = strip_labels("VERDICT: SCAM REASON: fake offer. REASON: repeated.");

        assert_eq!(stripped, "fake offer. REASON: repeated.");
    }

    fn analyzer(api_key: Option<&str>) -> ThreatAnalyzer {
        ThreatAnalyzer::new(&crate::config::AnalyzerConfig {
            // Closed port so an unexpected network call fails fast.
            endpoint: "http://127.0.0.1:1/generate".to_string(),
            api_key: api_key.map(str::to_string),
            timeout_ms: 1_000,
        })
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let result = analyzer(None).analyze("urgent: share your OTP").await;
        assert!(matches!(
            result,
            Err(FraudwatchError::MissingApiKey("analyzer.api_key"))
        ));

        let result = analyzer(Some("")).analyze("urgent: share your OTP").await;
        assert!(matches!(result, Err(FraudwatchError::MissingApiKey(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_analysis_failed() {
        let result = analyzer(Some("test-key")).analyze("hello").await;
        assert!(matches!(result, Err(FraudwatchError::AnalysisFailed(_))));
    }

    #[tokio::test]
    async fn test_non_success_status_is_analysis_failed() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Upstream that answers every request with a 500.
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\n\
                      content-length: 0\r\n\
                      connection: close\r\n\r\n",
                )
                .await;
        });

        let analyzer = ThreatAnalyzer::new(&crate::config::AnalyzerConfig {
            endpoint: format!("http://{addr}/generate"),
            api_key: Some("test-key".to_string()),
            timeout_ms: 1_000,
        });

        let result = analyzer.analyze("hello").await;
        assert!(matches!(result, Err(FraudwatchError::AnalysisFailed(_))));
    }
}
