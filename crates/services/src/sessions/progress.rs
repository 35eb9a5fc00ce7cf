/// Aggregated view of quiz position, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the active question.
    pub position: usize,
    pub total: usize,
    pub is_first: bool,
    pub is_last: bool,
}
