//! Domain layer for quiz questions
//!
//! This crate contains the quiz question model and its validation rules.
//! It performs no I/O and installs no logging subscriber; it only emits
//! `tracing` events for the embedding application to collect.
//!
//! # Core Concepts
//!
//! - **Question**: a quiz item with a title, a point value, a selection cap
//!   and an ordered list of choices
//! - **Choice**: an answer option owned by exactly one question, carrying a
//!   correctness flag
//!
//! Every operation either succeeds completely or returns a
//! [`ValidationError`] and leaves the question untouched.

pub mod core;
pub mod question;

// Re-export commonly used types
pub use crate::core::error::{DomainError, ValidationError};
pub use question::{
    config::{ChoiceConfig, QuestionConfig},
    entities::{Choice, Question},
    value_objects::{
        ChoiceId, DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, POINTS_MAX, POINTS_MIN, QuestionId,
        TITLE_MAX_LEN,
    },
};
