//! # Symptom Core
//!
//! Core business logic for the symptom checker.
//!
//! This crate contains pure data operations:
//! - Validation of free-text symptom descriptions
//! - The mock, rule-based classifier that stands in for a language model
//! - Assembly of the structured response with its mandatory disclaimer
//!
//! **No API concerns**: HTTP servers and command-line handling belong in `api-rest` and `cli`.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod validation;

pub use api_shared::SymptomCheckResponse;
pub use classifier::{classify, rules, Classification, Rule, Trigger};
pub use config::CoreConfig;
pub use error::{SymptomError, SymptomResult};

/// Stateless symptom checking operations - no API concerns
#[derive(Clone, Debug)]
pub struct SymptomService;

impl SymptomService {
    /// Creates a new instance of SymptomService.
    pub fn new() -> Self {
        tracing::info!("mock classifier initialised: using hardcoded responses");
        Self
    }

    /// Validates the symptom text and returns the matching canned advice.
    ///
    /// # Errors
    ///
    /// Returns `SymptomError::InsufficientDetail` if the text has fewer than
    /// `MIN_SYMPTOM_WORDS` words.
    pub fn check(&self, symptoms: &str) -> SymptomResult<SymptomCheckResponse> {
        if let Err(e) = validation::validate_symptom_description(symptoms) {
            tracing::warn!("rejected symptom description: {}", e);
            return Err(e);
        }

        Ok(self.classify(symptoms))
    }

    /// Classifies without validating. The disclaimer is always the constant default.
    pub fn classify(&self, symptoms: &str) -> SymptomCheckResponse {
        let classification = classify(symptoms);
        tracing::debug!(rule = classification.rule, "classified symptoms");

        SymptomCheckResponse::new(
            to_owned_list(classification.conditions),
            to_owned_list(classification.steps),
        )
    }
}

impl Default for SymptomService {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DISCLAIMER;

    #[test]
    fn check_returns_first_rule_for_headache_and_stiff_neck() {
        let resp = SymptomService::new()
            .check("I have a headache and a stiff neck")
            .expect("valid input");
        assert_eq!(
            resp.probable_conditions,
            vec!["Tension Headache", "Severe Migraine", "Neck Strain"]
        );
        assert_eq!(resp.recommended_next_steps[0], "Rest in a dark, quiet room.");
        assert_eq!(resp.disclaimer, DISCLAIMER);
    }

    #[test]
    fn check_rejects_short_input() {
        let err = SymptomService::new().check("ok").expect_err("too short");
        assert!(matches!(err, SymptomError::InsufficientDetail { min_words: 3 }));
    }

    #[test]
    fn check_falls_back_for_general_text() {
        let resp = SymptomService::new()
            .check("I feel generally tired today")
            .expect("valid input");
        assert_eq!(
            resp.probable_conditions,
            vec!["Stress/Fatigue", "Dehydration", "Mild Musculoskeletal Strain"]
        );
        assert_eq!(
            resp.recommended_next_steps,
            vec![
                "Monitor symptoms closely.",
                "Ensure adequate rest and hydration.",
                "Contact a primary care physician if symptoms are concerning or rapidly changing.",
            ]
        );
    }

    #[test]
    fn every_rule_attaches_the_constant_disclaimer() {
        let service = SymptomService::new();
        for text in [
            "headache and stiff neck",
            "dry cough all night",
            "sore knee after running",
        ] {
            let resp = service.check(text).expect("valid input");
            assert_eq!(resp.disclaimer, DISCLAIMER, "input: {text}");
            assert_eq!(resp.probable_conditions.len(), 3);
            assert_eq!(resp.recommended_next_steps.len(), 3);
        }
    }

    #[test]
    fn classify_skips_validation() {
        let resp = SymptomService::new().classify("cough");
        assert_eq!(resp.probable_conditions[0], "Common Cold (Viral Infection)");
    }
}
