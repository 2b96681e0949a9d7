//! HTTP client for the Equanimity API, plus the wire types it returns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bounded wait for one generation request. Generation is slow on purpose
/// (one upstream model call), so this sits well above interactive latency.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One day of the 3-day practice, as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct DayPlan {
    pub title: String,
    pub morning_practice: String,
    pub daily_integration: String,
    pub evening_reflection: String,
}

/// The structured practice plan returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct TechniquePlan {
    pub technique_title: String,
    pub description: String,
    pub insight: String,
    pub day1: DayPlan,
    pub day2: DayPlan,
    pub day3: DayPlan,
    pub zen_quote: String,
    pub long_term_guidance: String,
}

/// Failures crossing the client/API boundary. Connection and timeout are kept
/// distinct so the user sees which one happened; neither triggers an
/// automatic retry.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot connect to the API server at {0}")]
    Connection(String),

    #[error("the server did not respond within {REQUEST_TIMEOUT_SECS}s")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    answers: &'a BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sends the collected answers and returns the generated plan.
    /// At most one request is in flight per assessment completion; the caller
    /// blocks on this future until it resolves or times out.
    pub async fn generate(
        &self,
        answers: &BTreeMap<String, String>,
    ) -> Result<TechniquePlan, ClientError> {
        let url = format!("{}/generate-technique", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&GenerateRequest { answers })
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<TechniquePlan>()
            .await
            .map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_connect() {
            ClientError::Connection(self.base_url.clone())
        } else {
            ClientError::Http(e)
        }
    }
}
