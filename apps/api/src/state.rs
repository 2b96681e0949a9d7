use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when GEMINI_API_KEY was absent at startup. Generation requests
    /// then fail with `AppError::ModelNotConfigured`; `/health` reports it.
    pub llm: Option<LlmClient>,
    /// Kept on the state for handlers that grow config needs; only read at
    /// startup today.
    #[allow(dead_code)]
    pub config: Config,
}
