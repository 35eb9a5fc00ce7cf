use std::collections::HashSet;
use std::num::NonZeroUsize;

use thiserror::Error;

use crate::model::{Question, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("no questions to load")]
    Empty,

    #[error("question id {0} appears more than once")]
    DuplicateQuestion(QuestionId),
}

/// Ordered, read-only question list. Always holds at least one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Load the question list once for a session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Empty` for an empty list and
    /// `StoreError::DuplicateQuestion` when two questions share an id.
    pub fn load(questions: Vec<Question>) -> Result<Self, StoreError> {
        if questions.is_empty() {
            return Err(StoreError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(StoreError::DuplicateQuestion(question.id()));
            }
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.questions.len()).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Question at `index`, clamped to the last question.
    #[must_use]
    pub fn question(&self, index: usize) -> &Question {
        let last = self.questions.len().saturating_sub(1);
        &self.questions[index.min(last)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, OptionId, QuestionDraft};

    fn question(id: u64) -> Question {
        let opt = OptionId::new("opt1").unwrap();
        QuestionDraft {
            id: QuestionId::new(id),
            title: format!("Q{id}"),
            body: "Body".to_string(),
            options: vec![AnswerOption::new(opt.clone(), "(A)")],
            correct: vec![opt],
            explanation: String::new(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(QuestionStore::load(Vec::new()), Err(StoreError::Empty));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = QuestionStore::load(vec![question(1), question(2), question(1)]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateQuestion(QuestionId::new(1)));
    }

    #[test]
    fn keeps_load_order() {
        let store = QuestionStore::load(vec![question(3), question(1)]).unwrap();
        assert_eq!(store.len().get(), 2);
        assert_eq!(store.get(0).unwrap().id(), QuestionId::new(3));
        assert_eq!(store.get(1).unwrap().id(), QuestionId::new(1));
        assert!(store.get(2).is_none());
        assert_eq!(store.question(9).id(), QuestionId::new(1));
        let titles: Vec<_> = store.iter().map(Question::title).collect();
        assert_eq!(titles, ["Q3", "Q1"]);
    }
}
