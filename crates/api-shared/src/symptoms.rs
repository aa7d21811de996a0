//! Symptom check request and response schema.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mandatory safety and educational disclaimer attached to every successful check.
pub const DISCLAIMER: &str = "⚠️ EDUCATIONAL DISCLAIMER: This tool is for informational and educational purposes only and is not a substitute for professional medical advice, diagnosis, or treatment. Always consult a qualified healthcare professional.";

/// Request body for `POST /api/symptoms/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomInput {
    /// Free-text description of the symptoms.
    #[schema(example = "fever, chills, body aches, and persistent dry cough")]
    pub symptoms: String,
}

/// Structured result of a symptom check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomCheckResponse {
    /// A list of conditions.
    pub probable_conditions: Vec<String>,
    /// A list of next steps.
    pub recommended_next_steps: Vec<String>,
    /// Mandatory safety and educational disclaimer.
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

impl SymptomCheckResponse {
    /// Builds a response carrying the standard disclaimer.
    pub fn new(probable_conditions: Vec<String>, recommended_next_steps: Vec<String>) -> Self {
        Self {
            probable_conditions,
            recommended_next_steps,
            disclaimer: default_disclaimer(),
        }
    }
}

fn default_disclaimer() -> String {
    DISCLAIMER.to_string()
}

/// Body returned with every client error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}

impl ErrorRes {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_response_carries_disclaimer() {
        let resp = SymptomCheckResponse::new(vec!["Flu".into()], vec!["Rest".into()]);
        assert_eq!(resp.disclaimer, DISCLAIMER);
    }

    #[test]
    fn missing_disclaimer_defaults_on_deserialize() {
        let json = r#"{"probable_conditions":["A"],"recommended_next_steps":["B"]}"#;
        let resp: SymptomCheckResponse = serde_json::from_str(json).expect("parse response");
        assert_eq!(resp.disclaimer, DISCLAIMER);
        assert_eq!(resp.probable_conditions, vec!["A".to_string()]);
    }

    #[test]
    fn response_serialises_field_names() {
        let resp = SymptomCheckResponse::new(vec![], vec![]);
        let value = serde_json::to_value(&resp).expect("serialise response");
        let obj = value.as_object().expect("object");
        assert!(obj.contains_key("probable_conditions"));
        assert!(obj.contains_key("recommended_next_steps"));
        assert!(obj.contains_key("disclaimer"));
        assert_eq!(obj.len(), 3);
    }

    #[test]
    fn input_schema_carries_example() {
        use utoipa::ToSchema;

        let (name, schema) = SymptomInput::schema();
        assert_eq!(name, "SymptomInput");
        let rendered = serde_json::to_string(&schema).expect("serialise schema");
        assert!(rendered.contains("fever, chills, body aches, and persistent dry cough"));
    }

    #[test]
    fn input_requires_symptoms_field() {
        let err = serde_json::from_str::<SymptomInput>("{}").expect_err("should reject");
        assert!(err.to_string().contains("symptoms"));
    }
}
