//! Input validation utilities.
//!
//! Symptom text is checked here before it reaches the classifier so that every
//! surface (REST, CLI) rejects the same inputs with the same message.

use crate::constants::MIN_SYMPTOM_WORDS;
use crate::{SymptomError, SymptomResult};

/// Validates that a symptom description is detailed enough to classify.
///
/// Words are the tokens produced by splitting on runs of separators, so leading,
/// trailing and repeated separators never count towards the total. Separators are
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
///
/// # Errors
///
/// Returns `SymptomError::InsufficientDetail` if the text is empty or holds fewer
/// than `MIN_SYMPTOM_WORDS` words.
pub fn validate_symptom_description(text: &str) -> SymptomResult<()> {
    let words = text
        .split(is_word_separator)
        .filter(|w| !w.is_empty())
        .count();

    if words < MIN_SYMPTOM_WORDS {
        return Err(SymptomError::InsufficientDetail {
            min_words: MIN_SYMPTOM_WORDS,
        });
    }

    Ok(())
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL: &str =
        "Please provide a more detailed symptom description (at least 3 words).";

    #[test]
    fn test_validate_symptom_description_accepts_three_words() {
        assert!(validate_symptom_description("sore throat today").is_ok());
        assert!(validate_symptom_description("I have a headache and a stiff neck").is_ok());
    }

    #[test]
    fn test_validate_symptom_description_rejects_empty() {
        let err = validate_symptom_description("").expect_err("should reject empty");
        assert!(matches!(err, SymptomError::InsufficientDetail { min_words: 3 }));
        assert_eq!(err.to_string(), DETAIL);
    }

    #[test]
    fn test_validate_symptom_description_rejects_whitespace_only() {
        let err = validate_symptom_description(" \t\n ").expect_err("should reject whitespace");
        assert!(matches!(err, SymptomError::InsufficientDetail { .. }));
    }

    #[test]
    fn test_validate_symptom_description_rejects_short_input() {
        let err = validate_symptom_description("ok").expect_err("should reject one word");
        assert_eq!(err.to_string(), DETAIL);

        let err = validate_symptom_description("bad cough").expect_err("should reject two words");
        assert!(matches!(err, SymptomError::InsufficientDetail { .. }));
    }

    #[test]
    fn test_validate_symptom_description_ignores_extra_whitespace() {
        let err = validate_symptom_description("   bad    cough   ")
            .expect_err("padding is not a word");
        assert!(matches!(err, SymptomError::InsufficientDetail { .. }));

        assert!(validate_symptom_description("bad\tdry\ncough").is_ok());
    }

    #[test]
    fn test_validate_symptom_description_splits_on_information_separators() {
        assert!(validate_symptom_description("fever\u{1f}chills\u{1f}cough").is_ok());
        assert!(validate_symptom_description("fever\u{1c}chills\u{1d}dry\u{1e}cough").is_ok());

        let err = validate_symptom_description("\u{1f}fever\u{1f}\u{1f}chills\u{1f}")
            .expect_err("separators alone are not words");
        assert!(matches!(err, SymptomError::InsufficientDetail { .. }));
    }
}
