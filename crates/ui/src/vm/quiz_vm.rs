use std::sync::Arc;

use quiz_core::model::{OptionId, Question};
use quiz_core::{Grading, NavigationOutcome, OptionMark, Verdict};
use services::{QuizProgress, QuizSession, SessionError, TickCallback};
use tokio::sync::watch;

use crate::views::ViewError;
use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::time_fmt::time_taken_label;

pub const NO_SELECTION_NOTICE: &str = "Please select at least one option before submitting.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Toggle(OptionId),
    Submit,
    Previous,
    Next,
    RevealExplanation,
    DismissNotice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    /// `Previous` was requested on the first question; the host takes over.
    ExitRequested,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: OptionId,
    pub text: String,
    pub selected: bool,
    pub row_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: &'static str,
    pub class: &'static str,
}

/// Presenter state for one quiz session.
///
/// The session owns the quiz rules; this adds what only matters on screen:
/// option shading from the last grading, explanation visibility and the
/// blocking notice.
pub struct QuizVm {
    session: QuizSession,
    grading: Option<Grading>,
    explanation_visible: bool,
    notice: Option<&'static str>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            grading: None,
            explanation_visible: false,
            notice: None,
        }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) -> QuizOutcome {
        match intent {
            QuizIntent::Toggle(id) => {
                self.session.toggle_option(&id);
            }
            QuizIntent::Submit => self.submit(),
            QuizIntent::Previous => {
                let outcome = self.session.previous();
                if outcome == NavigationOutcome::AtStartBoundary {
                    return QuizOutcome::ExitRequested;
                }
                self.after_navigation(outcome);
            }
            QuizIntent::Next => {
                let outcome = self.session.next();
                self.after_navigation(outcome);
            }
            QuizIntent::RevealExplanation => self.explanation_visible = true,
            QuizIntent::DismissNotice => self.notice = None,
        }
        QuizOutcome::Continue
    }

    fn submit(&mut self) {
        match self.session.submit_selected() {
            Ok(submission) => {
                self.notice = None;
                self.grading = Some(submission.grading);
            }
            Err(err) if err.is_no_selection() => {
                self.notice = Some(NO_SELECTION_NOTICE);
            }
            Err(err) => {
                tracing::error!("unexpected submit failure: {err}");
            }
        }
    }

    fn after_navigation(&mut self, outcome: NavigationOutcome) {
        if outcome.moved() {
            self.grading = None;
            self.explanation_visible = false;
            self.notice = None;
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.session.current_question().title()
    }

    #[must_use]
    pub fn body_html(&self) -> String {
        markdown_to_html(self.session.current_question().body())
    }

    #[must_use]
    pub fn options(&self) -> Vec<OptionVm> {
        let selected = self.session.selected();
        self.session
            .current_question()
            .options()
            .iter()
            .map(|option| {
                let mark = self
                    .grading
                    .as_ref()
                    .and_then(|grading| grading.mark_for(&option.id));
                OptionVm {
                    id: option.id.clone(),
                    text: option.text.clone(),
                    selected: selected.contains(&option.id),
                    row_class: match mark {
                        Some(OptionMark::Correct) => "form-check option-correct",
                        Some(OptionMark::Wrong) => "form-check option-wrong",
                        None => "form-check",
                    },
                }
            })
            .collect()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        self.grading.as_ref().map(|grading| match grading.verdict {
            Verdict::Correct => FeedbackVm {
                text: "✔ Correct",
                class: "feedback feedback--correct",
            },
            Verdict::Incorrect => FeedbackVm {
                text: "✘ Wrong",
                class: "feedback feedback--wrong",
            },
        })
    }

    #[must_use]
    pub fn time_taken_label(&self) -> Option<String> {
        self.grading.as_ref()?;
        self.session.time_taken_secs().map(time_taken_label)
    }

    #[must_use]
    pub fn explanation_html(&self) -> Option<String> {
        self.explanation_visible
            .then(|| markdown_to_html(self.session.reveal_explanation()))
    }

    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.session.elapsed_secs()
    }
}

/// Tick callback that publishes elapsed seconds into a watch channel.
#[must_use]
pub fn watch_ticks(tx: watch::Sender<u64>) -> TickCallback {
    Arc::new(move |tick| {
        tx.send_replace(tick.elapsed_secs);
    })
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when there are no questions to show.
/// Returns `ViewError::Unknown` for other load failures.
pub fn start_quiz(questions: Vec<Question>, on_tick: TickCallback) -> Result<QuizVm, ViewError> {
    match QuizSession::load(questions, on_tick) {
        Ok(session) => Ok(QuizVm::new(session)),
        Err(SessionError::Store(quiz_core::StoreError::Empty)) => Err(ViewError::EmptyQuiz),
        Err(err) => {
            tracing::error!("could not start quiz: {err}");
            Err(ViewError::Unknown)
        }
    }
}
