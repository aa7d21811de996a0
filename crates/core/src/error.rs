#[derive(Debug, thiserror::Error)]
pub enum SymptomError {
    #[error("Please provide a more detailed symptom description (at least {min_words} words).")]
    InsufficientDetail { min_words: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type SymptomResult<T> = std::result::Result<T, SymptomError>;
