//! HTTP client for the Gemini `generateContent` endpoint

use crate::error::{FraudwatchError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default text-generation endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateRequest {
    fn for_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

// Response fields are all optional so that shape deviations surface as a
// typed MalformedResponse instead of a deserialization failure.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Thin client issuing one POST per generation request.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(endpoint: &str, timeout_ms: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Send one prompt and return the first generated text segment.
    ///
    /// Transport failures and non-success statuses map to
    /// [`FraudwatchError::AnalysisFailed`]; any response that does not carry
    /// `candidates[0].content.parts[0].text` maps to
    /// [`FraudwatchError::MalformedResponse`].
    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let request = GenerateRequest::for_prompt(prompt);

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!(bytes = body.len(), "Model endpoint responded");

        extract_generated_text(&body)
    }
}

/// Pull the first generated text segment out of a response body.
pub(crate) fn extract_generated_text(body: &str) -> Result<String> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|_| FraudwatchError::MalformedResponse)?;

    parsed
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .and_then(|p| p.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(FraudwatchError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_well_formed_body() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "VERDICT: SCAM\nREASON: urgent OTP request"}]}}
            ]
        }"#;

        let text = extract_generated_text(body).unwrap();
        assert_eq!(text, "VERDICT: SCAM\nREASON: urgent OTP request");
    }

    #[test]
    fn test_missing_candidates_is_malformed() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert!(matches!(
            extract_generated_text(body),
            Err(FraudwatchError::MalformedResponse)
        ));
    }

    #[test]
    fn test_empty_parts_is_malformed() {
        let body = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        assert!(matches!(
            extract_generated_text(body),
            Err(FraudwatchError::MalformedResponse)
        ));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        assert!(matches!(
            extract_generated_text("<html>rate limited</html>"),
            Err(FraudwatchError::MalformedResponse)
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest::for_prompt("hello");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
    }
}
