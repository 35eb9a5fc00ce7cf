#![forbid(unsafe_code)]

pub mod error;
pub mod grading;
pub mod model;
pub mod navigation;
pub mod store;
pub mod time;

pub use error::Error;
pub use grading::{GradeError, Grading, OptionMark, OptionMarking, Verdict};
pub use navigation::{NavigationOutcome, Navigator};
pub use store::{QuestionStore, StoreError};
pub use time::{Stopwatch, format_elapsed};
