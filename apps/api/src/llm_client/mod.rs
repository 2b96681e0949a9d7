/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generation calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-pro";
/// Bounded wait for a single generation call. There is no retry: a request
/// that exceeds this is reported as a timeout, distinct from a connection
/// failure, and the caller decides whether to try again.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request timed out after {REQUEST_TIMEOUT_SECS}s")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single Gemini client shared by all handlers.
/// Wraps the `generateContent` endpoint with a bounded per-request timeout.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a single call to the Gemini API and returns the raw text of the
    /// first candidate. Transport and API failures are the caller's problem;
    /// this method never inspects the text it returns.
    pub async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Http(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's message when the error body parses
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generate_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| if e.is_timeout() { LlmError::Timeout } else { LlmError::Http(e) })?;

        let text = generate_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded: {} chars of text", text.len());

        Ok(text)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// Pure text cleanup, so the parsing boundary is testable without a network.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated_fence() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_generate_content_response_extracts_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello"}], "role": "model"}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text);
        assert_eq!(text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_generate_content_response_tolerates_empty_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
