//! Set-equality grading of a multiple-select submission.
//!
//! A submission is all-or-nothing: the selection must match the answer key
//! exactly. An empty selection is not graded at all.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{OptionId, Question};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradeError {
    #[error("select at least one option before submitting")]
    NoSelection,
}

/// Outcome of grading a non-empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Visual mark for a single option after grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionMark {
    /// Part of the answer key.
    Correct,
    /// Selected but not part of the answer key.
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMarking {
    pub option_id: OptionId,
    pub mark: Option<OptionMark>,
}

/// Verdict plus one marking per option, in option order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grading {
    pub verdict: Verdict,
    pub marks: Vec<OptionMarking>,
}

impl Grading {
    #[must_use]
    pub fn mark_for(&self, id: &OptionId) -> Option<OptionMark> {
        self.marks
            .iter()
            .find(|marking| &marking.option_id == id)
            .and_then(|marking| marking.mark)
    }
}

/// Compare a selection with the answer key.
///
/// # Errors
///
/// Returns `GradeError::NoSelection` when `selected` is empty.
pub fn evaluate(
    selected: &BTreeSet<OptionId>,
    correct: &BTreeSet<OptionId>,
) -> Result<Verdict, GradeError> {
    if selected.is_empty() {
        return Err(GradeError::NoSelection);
    }
    if selected == correct {
        Ok(Verdict::Correct)
    } else {
        Ok(Verdict::Incorrect)
    }
}

/// Mark every option of `question` against `selected`.
///
/// Marks are derived from the inputs alone, so re-grading the same question
/// never carries marks over from an earlier submission.
#[must_use]
pub fn mark_options(question: &Question, selected: &BTreeSet<OptionId>) -> Vec<OptionMarking> {
    question
        .options()
        .iter()
        .map(|option| {
            let mark = if question.is_correct_option(&option.id) {
                Some(OptionMark::Correct)
            } else if selected.contains(&option.id) {
                Some(OptionMark::Wrong)
            } else {
                None
            };
            OptionMarking {
                option_id: option.id.clone(),
                mark,
            }
        })
        .collect()
}

/// Grade a submission for `question`.
///
/// # Errors
///
/// Returns `GradeError::NoSelection` when `selected` is empty; no marks are
/// produced in that case.
pub fn grade(question: &Question, selected: &BTreeSet<OptionId>) -> Result<Grading, GradeError> {
    let verdict = evaluate(selected, question.correct())?;
    Ok(Grading {
        verdict,
        marks: mark_options(question, selected),
    })
}
