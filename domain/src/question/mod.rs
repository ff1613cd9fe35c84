//! Question subdomain
//!
//! - [`entities::Question`] — the aggregate root owning its choices
//! - [`entities::Choice`] — a single answer option
//! - [`value_objects`] — identifiers and validation limits
//! - [`config::QuestionConfig`] — serializable author-facing definition

pub mod config;
pub mod entities;
pub mod value_objects;
