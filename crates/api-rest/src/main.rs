//! Symptom checker REST API server binary.
//!
//! ## Purpose
//! Resolves configuration from the environment once, builds the router and serves it.
//!
//! ## Intended use
//! The Swagger UI is served at `/swagger-ui` and the raw document at `/api-docs/openapi.json`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use symptom_core::{
    config::rest_addr_from_env_value, constants::REST_ADDR_ENV, CoreConfig, SymptomService,
};

/// Main entry point for the symptom checker REST API server
///
/// # Environment Variables
/// - `SYMPTOM_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `RUST_LOG`: tracing filter (default directives: "api_rest=info", "symptom_core=info")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configured address cannot be parsed or bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("symptom_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::new(rest_addr_from_env_value(std::env::var(REST_ADDR_ENV).ok())?);

    tracing::info!("-- Starting symptom checker REST API on {}", cfg.rest_addr());

    let app = router(AppState::new(SymptomService::new()));

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
