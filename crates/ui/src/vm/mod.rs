mod markdown_vm;
mod quiz_vm;
mod time_fmt;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{
    FeedbackVm, NO_SELECTION_NOTICE, OptionVm, QuizIntent, QuizOutcome, QuizVm, start_quiz,
    watch_ticks,
};
pub use time_fmt::{time_taken_label, timer_label};
