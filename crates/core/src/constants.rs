//! Constants used throughout the symptom core crate.

pub use api_shared::DISCLAIMER;

/// Minimum number of whitespace-separated words a symptom description must contain.
pub const MIN_SYMPTOM_WORDS: usize = 3;

/// Environment variable holding the REST listen address.
pub const REST_ADDR_ENV: &str = "SYMPTOM_REST_ADDR";

/// Listen address used when `SYMPTOM_REST_ADDR` is unset or blank.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";
