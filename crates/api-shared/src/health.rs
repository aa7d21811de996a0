use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload returned by the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub service: String,
    #[serde(rename = "LLM_status")]
    pub llm_status: String,
}

/// Simple health service that can be used by both the REST API and the CLI
///
/// The symptom checker holds no state and talks to no external system, so a
/// running process is always reported as healthy.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is up and the mock classifier is ready.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "ok".into(),
            service: "Symptom Checker LLM API".into(),
            llm_status: "MOCK Ready".into(),
        }
    }
}
