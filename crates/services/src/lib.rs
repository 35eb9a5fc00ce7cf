#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;
pub mod timer;

pub use catalog::{load_questions_file, parse_questions};
pub use error::{CatalogError, SessionError};
pub use sessions::{QuizProgress, QuizSession, Submission};
pub use timer::{QuestionTimer, TickCallback, TimerTick};
