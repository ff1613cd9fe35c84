//! Question identifiers and validation limits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted question title, in characters.
pub const TITLE_MAX_LEN: usize = 200;
/// Lowest accepted point value.
pub const POINTS_MIN: u32 = 1;
/// Highest accepted point value.
pub const POINTS_MAX: u32 = 100;
/// Points given to a question when none are specified.
pub const DEFAULT_POINTS: u32 = 1;
/// Selection cap given to a question when none is specified.
pub const DEFAULT_MAX_SELECTIONS: usize = 1;

/// Unique identifier for a question.
///
/// Backed by a random v4 UUID, so two questions never share an id even
/// when everything else about them is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuestionId(Uuid);

impl QuestionId {
    /// Generates a new unique QuestionId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a choice within its question.
///
/// Choices are numbered sequentially per question (1, 2, 3, ...) and a
/// number is never handed out twice, even after the choice is removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChoiceId(u32);

impl ChoiceId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ChoiceId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
