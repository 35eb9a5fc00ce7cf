use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question must have at least one option")]
    NoOptions,

    #[error("option id {0} appears more than once")]
    DuplicateOption(OptionId),

    #[error("correct answer set cannot be empty")]
    EmptyCorrectSet,

    #[error("correct answer {0} does not match any option")]
    UnknownCorrectOption(OptionId),
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One selectable choice within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(id: OptionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as supplied by a host or decoded from a question file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub title: String,
    #[serde(alias = "questionText")]
    pub body: String,
    pub options: Vec<AnswerOption>,
    pub correct: Vec<OptionId>,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionDraft {
    /// Check the answer key against the option list and freeze the question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the options are empty or contain duplicate
    /// ids, or when the correct set is empty or references an unknown option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(&option.id) {
                return Err(QuestionError::DuplicateOption(option.id.clone()));
            }
        }

        if self.correct.is_empty() {
            return Err(QuestionError::EmptyCorrectSet);
        }
        if let Some(unknown) = self.correct.iter().find(|id| !seen.contains(id)) {
            return Err(QuestionError::UnknownCorrectOption(unknown.clone()));
        }

        let correct = self.correct.into_iter().collect();

        Ok(Question {
            id: self.id,
            title: self.title,
            body: self.body,
            options: self.options,
            correct,
            explanation: self.explanation,
        })
    }
}

/// A validated multiple-select question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    title: String,
    body: String,
    options: Vec<AnswerOption>,
    correct: BTreeSet<OptionId>,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// The answer key. Never empty; every id names one of `options()`.
    #[must_use]
    pub fn correct(&self) -> &BTreeSet<OptionId> {
        &self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn has_option(&self, id: &OptionId) -> bool {
        self.options.iter().any(|option| &option.id == id)
    }

    #[must_use]
    pub fn is_correct_option(&self, id: &OptionId) -> bool {
        self.correct.contains(id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
