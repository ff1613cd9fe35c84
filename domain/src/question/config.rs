//! Declarative question definitions.
//!
//! A [`QuestionConfig`] is the serializable form of a question as an author
//! writes it: no ids, just content. It is turned into a validated
//! [`Question`](super::entities::Question) with
//! [`Question::from_config`](super::entities::Question::from_config).
//!
//! ```toml
//! title = "Which of these are prime?"
//! points = 2
//! max_selections = 3
//!
//! [[choices]]
//! text = "2"
//! is_correct = true
//!
//! [[choices]]
//! text = "4"
//! ```

use super::entities::Question;
use super::value_objects::{DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Author-facing definition of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionConfig {
    pub title: String,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default = "default_max_selections")]
    pub max_selections: usize,
    #[serde(default)]
    pub choices: Vec<ChoiceConfig>,
}

/// Author-facing definition of a single choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceConfig {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

fn default_points() -> u32 {
    DEFAULT_POINTS
}

fn default_max_selections() -> usize {
    DEFAULT_MAX_SELECTIONS
}

impl QuestionConfig {
    /// Create a config with default points and selection cap and no choices
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
            choices: Vec::new(),
        }
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = max_selections;
        self
    }

    /// Append a choice definition
    pub fn with_choice(mut self, text: impl Into<String>, is_correct: bool) -> Self {
        self.choices.push(ChoiceConfig {
            text: text.into(),
            is_correct,
        });
        self
    }

    /// Parse a TOML question definition
    pub fn from_toml_str(s: &str) -> Result<Self, DomainError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse and validate in one step
    pub fn build_from_toml_str(s: &str) -> Result<Question, DomainError> {
        let config = Self::from_toml_str(s)?;
        Ok(Question::from_config(config)?)
    }
}

impl From<&Question> for QuestionConfig {
    fn from(question: &Question) -> Self {
        Self {
            title: question.title().to_string(),
            points: question.points(),
            max_selections: question.max_selections(),
            choices: question
                .choices()
                .iter()
                .map(|c| ChoiceConfig {
                    text: c.text().to_string(),
                    is_correct: c.is_correct(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationError;
    use crate::question::value_objects::ChoiceId;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory log sink for asserting on emitted events
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, buffer.contents())
    }

    const PRIMES: &str = r#"
title = "Which of these are prime?"
points = 2
max_selections = 3

[[choices]]
text = "2"
is_correct = true

[[choices]]
text = "4"

[[choices]]
text = "5"
is_correct = true
"#;

    #[test]
    fn test_parse_toml() {
        let config = QuestionConfig::from_toml_str(PRIMES).unwrap();
        assert_eq!(config.title, "Which of these are prime?");
        assert_eq!(config.points, 2);
        assert_eq!(config.max_selections, 3);
        assert_eq!(config.choices.len(), 3);
        assert!(!config.choices[1].is_correct);
    }

    #[test]
    fn test_defaults_applied() {
        let config = QuestionConfig::from_toml_str(r#"title = "q1""#).unwrap();
        assert_eq!(config, QuestionConfig::new("q1"));
    }

    #[test]
    fn test_missing_title_is_config_error() {
        let err = QuestionConfig::from_toml_str("points = 3").unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfig(_)));
    }

    #[test]
    fn test_build_from_toml() {
        let question = QuestionConfig::build_from_toml_str(PRIMES).unwrap();
        assert_eq!(question.points(), 2);
        assert_eq!(
            question.correct_choice_ids(),
            vec![ChoiceId::from(1), ChoiceId::from(3)]
        );
    }

    #[test]
    fn test_build_rejects_invalid_values() {
        let err = QuestionConfig::build_from_toml_str(
            r#"
title = "q1"
points = 101
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidPoints(101))
        ));

        let config = QuestionConfig::new("q1").with_choice("", false);
        assert_eq!(
            Question::from_config(config).unwrap_err(),
            ValidationError::EmptyChoiceText
        );
    }

    #[test]
    fn test_rejected_config_logs_no_creation() {
        let config = QuestionConfig::new("q1").with_points(0);
        let (result, logs) = capture_logs(|| Question::from_config(config));
        assert_eq!(result.unwrap_err(), ValidationError::InvalidPoints(0));
        assert!(!logs.contains("Question created"));

        let config = QuestionConfig::new("q1")
            .with_choice("a", true)
            .with_choice("", false);
        let (result, logs) = capture_logs(|| Question::from_config(config));
        assert_eq!(result.unwrap_err(), ValidationError::EmptyChoiceText);
        assert!(!logs.contains("Question created"));
    }

    #[test]
    fn test_accepted_config_logs_creation_once() {
        let config = QuestionConfig::new("q1").with_choice("a", true);
        let (result, logs) = capture_logs(|| Question::from_config(config));
        assert!(result.is_ok());
        assert_eq!(logs.matches("Question created").count(), 1);
    }

    #[test]
    fn test_from_question() {
        let original = QuestionConfig::new("q1")
            .with_points(10)
            .with_max_selections(2)
            .with_choice("a", true)
            .with_choice("b", false);
        let question = Question::from_config(original.clone()).unwrap();
        assert_eq!(QuestionConfig::from(&question), original);
    }
}
