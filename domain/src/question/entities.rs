//! Question aggregate and its choices.
//!
//! [`Question`] is the aggregate root: it owns every [`Choice`], hands out
//! choice ids, and is the only place correctness can change. All mutating
//! operations validate their whole input first and only then touch state,
//! so an `Err` always leaves the question exactly as it was.

use super::config::QuestionConfig;
use super::value_objects::{
    ChoiceId, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, POINTS_MAX, POINTS_MIN, QuestionId,
    TITLE_MAX_LEN,
};
use crate::core::error::ValidationError;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, trace};

/// A single answer option.
///
/// Choices only exist inside a [`Question`]; there is no public constructor
/// and no public mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    /// Identifier, unique within the owning question
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    /// Answer text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether selecting this choice counts as correct
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A multiple-choice quiz question (Aggregate Root)
///
/// # Example
///
/// ```
/// use quiz_domain::Question;
///
/// let mut question = Question::new("Sample question")
///     .unwrap()
///     .with_max_selections(3)
///     .unwrap();
/// let a = question.add_choice("Choice A", true).unwrap().id();
/// let b = question.add_choice("Choice B", false).unwrap().id();
/// let c = question.add_choice("Choice C", true).unwrap().id();
///
/// let correct = question.correct_selected_choices(&[a, b, c]).unwrap();
/// assert_eq!(correct, vec![a, c]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    #[serde(skip)]
    next_choice_id: u32,
}

impl Question {
    /// Create a question with default points and selection cap.
    ///
    /// Fails if the title is empty or longer than 200 characters.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let question = Self::build(title.into(), DEFAULT_POINTS, DEFAULT_MAX_SELECTIONS)?;
        question.log_created();
        Ok(question)
    }

    /// Set the point value (1..=100).
    pub fn with_points(mut self, points: u32) -> Result<Self, ValidationError> {
        validate_points(points)?;
        self.points = points;
        Ok(self)
    }

    /// Set how many choices may be submitted at once (at least 1).
    pub fn with_max_selections(mut self, max_selections: usize) -> Result<Self, ValidationError> {
        validate_max_selections(max_selections)?;
        self.max_selections = max_selections;
        Ok(self)
    }

    /// Build a question, including its initial choices, from a config.
    ///
    /// Choices receive ids 1..=n in list order.
    pub fn from_config(config: QuestionConfig) -> Result<Self, ValidationError> {
        let mut question = Self::build(config.title, config.points, config.max_selections)?;
        for choice in config.choices {
            question.add_choice(choice.text, choice.is_correct)?;
        }
        question.log_created();
        Ok(question)
    }

    fn build(title: String, points: u32, max_selections: usize) -> Result<Self, ValidationError> {
        validate_title(&title)?;
        validate_points(points)?;
        validate_max_selections(max_selections)?;

        Ok(Self {
            id: QuestionId::generate(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
            next_choice_id: 1,
        })
    }

    fn log_created(&self) {
        debug!(
            question_id = %self.id,
            title = %self.title,
            choices = self.choices.len(),
            "Question created"
        );
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Choices in insertion order
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Look up a choice by id
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Ids of every choice currently marked correct, in collection order
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .map(|c| c.id)
            .collect()
    }

    /// Append a new choice and return it.
    ///
    /// The choice gets the next sequential id for this question.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            debug!(question_id = %self.id, "Rejected empty choice text");
            return Err(ValidationError::EmptyChoiceText);
        }

        let Some(next) = self.next_choice_id.checked_add(1) else {
            debug!(question_id = %self.id, "Choice ids exhausted");
            return Err(ValidationError::ChoiceIdsExhausted);
        };
        let id = ChoiceId::new(self.next_choice_id);
        self.next_choice_id = next;
        debug!(question_id = %self.id, choice_id = %id, is_correct, "Choice added");

        self.choices.push(Choice {
            id,
            text,
            is_correct,
        });
        Ok(&self.choices[self.choices.len() - 1])
    }

    /// Remove a choice by id, returning it.
    ///
    /// Remaining choices keep their order and ids.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<Choice, ValidationError> {
        let index = self.position_of(id)?;
        debug!(question_id = %self.id, choice_id = %id, "Choice removed");
        Ok(self.choices.remove(index))
    }

    /// Remove every choice. Never fails.
    pub fn remove_all_choices(&mut self) {
        debug!(question_id = %self.id, count = self.choices.len(), "All choices removed");
        self.choices.clear();
    }

    /// Mark exactly the given choices as correct and every other choice as
    /// incorrect.
    ///
    /// All ids are checked before any flag changes.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) -> Result<(), ValidationError> {
        let correct = self.known_ids(ids)?;

        for choice in &mut self.choices {
            choice.is_correct = correct.contains(&choice.id);
        }
        debug!(question_id = %self.id, correct = correct.len(), "Correct choices set");
        Ok(())
    }

    /// Filter a submitted answer down to the choices that are correct.
    ///
    /// The result follows the question's choice order, not the order of
    /// `selected`, and lists each id once. Submitting more ids than
    /// `max_selections` is an error even if every one of them is correct.
    pub fn correct_selected_choices(
        &self,
        selected: &[ChoiceId],
    ) -> Result<Vec<ChoiceId>, ValidationError> {
        if selected.len() > self.max_selections {
            debug!(
                question_id = %self.id,
                selected = selected.len(),
                max = self.max_selections,
                "Rejected answer with too many selections"
            );
            return Err(ValidationError::TooManySelections {
                selected: selected.len(),
                max: self.max_selections,
            });
        }
        let selected = self.known_ids(selected)?;

        let correct: Vec<ChoiceId> = self
            .choices
            .iter()
            .filter(|c| c.is_correct && selected.contains(&c.id))
            .map(|c| c.id)
            .collect();
        trace!(question_id = %self.id, correct = correct.len(), "Answer checked");
        Ok(correct)
    }

    fn position_of(&self, id: ChoiceId) -> Result<usize, ValidationError> {
        self.choices
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| {
                debug!(question_id = %self.id, choice_id = %id, "Unknown choice id");
                ValidationError::ChoiceNotFound(id)
            })
    }

    /// Collect `ids` into a set, failing on the first id with no choice.
    fn known_ids(&self, ids: &[ChoiceId]) -> Result<HashSet<ChoiceId>, ValidationError> {
        ids.iter()
            .map(|&id| self.position_of(id).map(|_| id))
            .collect()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = if self.points == 1 { "pt" } else { "pts" };
        write!(f, "{} ({} {})", self.title, self.points, unit)
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if len == 0 || len > TITLE_MAX_LEN {
        debug!(len, "Rejected question title");
        return Err(ValidationError::InvalidTitle { len });
    }
    Ok(())
}

fn validate_points(points: u32) -> Result<(), ValidationError> {
    if !(POINTS_MIN..=POINTS_MAX).contains(&points) {
        debug!(points, "Rejected question points");
        return Err(ValidationError::InvalidPoints(points));
    }
    Ok(())
}

fn validate_max_selections(max_selections: usize) -> Result<(), ValidationError> {
    if max_selections < 1 {
        debug!(max_selections, "Rejected max selections");
        return Err(ValidationError::InvalidMaxSelections(max_selections));
    }
    Ok(())
}
