//! # API Shared
//!
//! Shared definitions for the symptom checker APIs.
//!
//! Contains:
//! - Request/response types (`symptoms` module)
//! - Shared services like `HealthService`
//!
//! Used by `symptom-core`, `api-rest` and the CLI so every surface speaks the same schema.

pub mod health;
pub mod symptoms;

pub use health::{HealthRes, HealthService};
pub use symptoms::{ErrorRes, SymptomCheckResponse, SymptomInput, DISCLAIMER};
