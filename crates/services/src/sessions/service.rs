use std::collections::BTreeSet;
use std::fmt;

use quiz_core::grading::{self, Grading, Verdict};
use quiz_core::model::{OptionId, Question, SessionState};
use quiz_core::{NavigationOutcome, Navigator, QuestionStore};

use super::progress::QuizProgress;
use crate::error::SessionError;
use crate::timer::{QuestionTimer, TickCallback};

//
// ─── SUBMISSION ────────────────────────────────────────────────────────────────
//

/// Graded submission for the active question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub grading: Grading,
    /// Seconds on the clock when the answer was submitted.
    pub time_taken_secs: u64,
}

impl Submission {
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.grading.verdict
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through a fixed question list.
///
/// Owns the question store, the navigation cursor, the per-question attempt
/// state and the timer. Constructing it is the only way to load questions, so
/// every other operation always has a current question.
pub struct QuizSession {
    store: QuestionStore,
    navigator: Navigator,
    state: SessionState,
    timer: QuestionTimer,
}

impl QuizSession {
    /// Load the questions and start timing the first one.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the list is empty or has duplicate ids.
    pub fn load(questions: Vec<Question>, on_tick: TickCallback) -> Result<Self, SessionError> {
        Self::with_timer(questions, QuestionTimer::new(on_tick))
    }

    /// Like [`QuizSession::load`] without a tick observer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the list is empty or has duplicate ids.
    pub fn load_silent(questions: Vec<Question>) -> Result<Self, SessionError> {
        Self::with_timer(questions, QuestionTimer::silent())
    }

    fn with_timer(questions: Vec<Question>, timer: QuestionTimer) -> Result<Self, SessionError> {
        let store = QuestionStore::load(questions)?;
        let navigator = Navigator::new(store.len());
        let mut session = Self {
            store,
            navigator,
            state: SessionState::new(0),
            timer,
        };
        session.timer.start();
        tracing::info!(questions = session.total_questions(), "quiz session loaded");
        Ok(session)
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.store.question(self.navigator.index())
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigator.index()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.store.len().get()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.navigator.index() + 1,
            total: self.total_questions(),
            is_first: self.navigator.is_first(),
            is_last: self.navigator.is_last(),
        }
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<OptionId> {
        self.state.selected()
    }

    /// Flip an option of the current question.
    ///
    /// Returns whether the option is selected afterwards; ids that are not part
    /// of the current question are ignored and report `false`.
    pub fn toggle_option(&mut self, id: &OptionId) -> bool {
        if !self.current_question().has_option(id) {
            tracing::debug!(option = %id, "ignoring toggle for unknown option");
            return false;
        }
        self.state.toggle(id)
    }

    /// Grade `selected` against the current question.
    ///
    /// On success the timer stops and the verdict is recorded. Submitting again
    /// regrades from scratch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Grade(GradeError::NoSelection)` for an empty
    /// selection; nothing is recorded and the timer keeps running.
    pub fn submit(&mut self, selected: BTreeSet<OptionId>) -> Result<Submission, SessionError> {
        let question = self.current_question();
        let grading = match grading::grade(question, &selected) {
            Ok(grading) => grading,
            Err(err) => {
                tracing::warn!(question = %question.id(), "submission blocked: {err}");
                return Err(err.into());
            }
        };
        let question_id = question.id();

        self.timer.stop();
        let time_taken_secs = self.timer.elapsed_secs();
        self.state.replace_selection(selected);
        self.state.record(grading.verdict, time_taken_secs);

        tracing::info!(
            question = %question_id,
            verdict = ?grading.verdict,
            time_taken_secs,
            "answer submitted"
        );
        Ok(Submission {
            grading,
            time_taken_secs,
        })
    }

    /// Submit whatever is currently toggled on.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::submit`].
    pub fn submit_selected(&mut self) -> Result<Submission, SessionError> {
        let selected = self.state.selected().clone();
        self.submit(selected)
    }

    /// Go back one question. At the first question this reports
    /// `AtStartBoundary` and leaves everything untouched.
    pub fn previous(&mut self) -> NavigationOutcome {
        let outcome = self.navigator.previous();
        self.apply(outcome);
        outcome
    }

    /// Go forward one question. At the last question this is a no-op.
    pub fn next(&mut self) -> NavigationOutcome {
        let outcome = self.navigator.next();
        self.apply(outcome);
        outcome
    }

    fn apply(&mut self, outcome: NavigationOutcome) {
        match outcome {
            NavigationOutcome::Moved { from, to } => {
                self.state.reset_for(to);
                self.timer.start();
                tracing::debug!(from, to, "moved to question");
            }
            NavigationOutcome::AtStartBoundary => {
                tracing::debug!("previous requested at first question");
            }
            NavigationOutcome::AtEndNoop => {}
        }
    }

    #[must_use]
    pub fn reveal_explanation(&self) -> &str {
        self.current_question().explanation()
    }

    #[must_use]
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.state.verdict()
    }

    #[must_use]
    pub fn time_taken_secs(&self) -> Option<u64> {
        self.state.time_taken_secs()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    #[must_use]
    pub fn elapsed_label(&self) -> String {
        self.timer.label()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.total_questions())
            .field("current", &self.navigator.index())
            .field("state", &self.state)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
