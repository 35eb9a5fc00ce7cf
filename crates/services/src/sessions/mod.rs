mod progress;
mod service;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use service::{QuizSession, Submission};
