//! # API REST
//!
//! REST API implementation for the symptom checker.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, status codes, CORS, request tracing)
//!
//! Uses `symptom-core` for validation and classification, and `api-shared` for the wire types.

#![warn(rust_2018_idioms)]

use api_shared::{ErrorRes, HealthRes, HealthService, SymptomCheckResponse, SymptomInput};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use symptom_core::{SymptomError, SymptomService};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers
///
/// Holds the stateless symptom service; cloning it per request is free.
#[derive(Clone)]
pub struct AppState {
    symptom_service: SymptomService,
}

impl AppState {
    pub fn new(symptom_service: SymptomService) -> Self {
        Self { symptom_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Healthcare Symptom Checker API (Educational)",
        description = "Educational API for symptom analysis using a Mock LLM Service.",
        version = "1.0.0"
    ),
    paths(read_root, check_symptoms),
    components(schemas(HealthRes, SymptomInput, SymptomCheckResponse, ErrorRes))
)]
pub struct ApiDoc;

type ApiError = (StatusCode, Json<ErrorRes>);

fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorRes::new(detail)))
}

/// Build the REST router with documentation, CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/api/symptoms/check", post(check_symptoms))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service liveness and mock classifier status", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn read_root() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/symptoms/check",
    request_body = SymptomInput,
    responses(
        (status = 200, description = "Probable conditions and next steps", body = SymptomCheckResponse),
        (status = 400, description = "Symptom description too short", body = ErrorRes),
        (status = 422, description = "Request body does not match the schema", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Check symptoms and get probable conditions/next steps.
///
/// Accepts symptom text, queries the mock classifier, and returns structured advice
/// with the mandatory educational disclaimer.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the description is empty or shorter than three words, or
/// - the body is not valid JSON.
///
/// Returns `422 Unprocessable Entity` if the JSON lacks a string `symptoms` field.
#[axum::debug_handler]
async fn check_symptoms(
    State(state): State<AppState>,
    payload: Result<Json<SymptomInput>, JsonRejection>,
) -> Result<Json<SymptomCheckResponse>, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::warn!("rejected request body: {}", rejection.body_text());
        api_error(rejection.status(), rejection.body_text())
    })?;

    match state.symptom_service.check(&input.symptoms) {
        Ok(resp) => Ok(Json(resp)),
        Err(e @ SymptomError::InsufficientDetail { .. }) => {
            Err(api_error(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            tracing::error!("Check symptoms error: {:?}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}
