mod config;
mod errors;
mod llm_client;
mod practice;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Equanimity API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client. A missing key is not fatal: the service still
    // serves /health, and generation requests fail with a config error.
    let llm = match config.gemini_api_key.clone() {
        Some(key) => {
            let client = LlmClient::new(key);
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("GEMINI_API_KEY not set; generation requests will fail until configured");
            None
        }
    };

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
    };

    // Build router. CORS stays permissive: the assessment client may be
    // served from anywhere.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Default `EnvFilter` directive when RUST_LOG is unset. Tracing targets use
/// the crate's module path, so the package name's hyphen must become an
/// underscore or the directive matches no events at all.
fn default_filter_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_directive_targets_crate_module_path() {
        assert_eq!(default_filter_directive("info"), "equanimity_api=info");
    }

    #[test]
    fn test_default_filter_directive_has_no_hyphens() {
        // A hyphenated target never matches module-path-derived targets, so
        // the service would be silent by default.
        assert!(!default_filter_directive("debug").contains('-'));
    }

    #[test]
    fn test_default_filter_directive_parses_as_env_filter() {
        let directive = default_filter_directive("info");
        assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
