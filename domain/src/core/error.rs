//! Domain error types

use crate::question::value_objects::{ChoiceId, POINTS_MAX, POINTS_MIN, TITLE_MAX_LEN};
use thiserror::Error;

/// A rejected state change on a [`Question`](crate::Question).
///
/// Every variant is raised before any state is touched, so a caller that
/// receives one can keep using the question as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid title: length {len} is outside 1..={max}", max = TITLE_MAX_LEN)]
    InvalidTitle { len: usize },

    #[error("Invalid points: {0} is outside {min}..={max}", min = POINTS_MIN, max = POINTS_MAX)]
    InvalidPoints(u32),

    #[error("Invalid max selections: {0} (must be at least 1)")]
    InvalidMaxSelections(usize),

    #[error("Choice text cannot be empty")]
    EmptyChoiceText,

    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),

    #[error("Too many selections: {selected} selected, at most {max} allowed")]
    TooManySelections { selected: usize, max: usize },

    #[error("No choice ids left for this question")]
    ChoiceIdsExhausted,
}

impl ValidationError {
    /// Stable reason code, suitable for mapping onto user-facing responses.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidTitle { .. } => "INVALID_TITLE",
            ValidationError::InvalidPoints(_) => "INVALID_POINTS",
            ValidationError::InvalidMaxSelections(_) => "INVALID_MAX_SELECTIONS",
            ValidationError::EmptyChoiceText => "EMPTY_CHOICE_TEXT",
            ValidationError::ChoiceNotFound(_) => "CHOICE_NOT_FOUND",
            ValidationError::TooManySelections { .. } => "TOO_MANY_SELECTIONS",
            ValidationError::ChoiceIdsExhausted => "CHOICE_IDS_EXHAUSTED",
        }
    }

    /// Check if this error refers to a choice id that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ValidationError::ChoiceNotFound(_))
    }
}

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid question config: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::InvalidConfig(err.to_string())
    }
}
