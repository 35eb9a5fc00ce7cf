#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyQuiz,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptyQuiz => "No questions available yet.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
