use std::collections::BTreeSet;

use crate::grading::Verdict;
use crate::model::OptionId;

/// Per-question attempt state.
///
/// Everything here belongs to the active question only and is rebuilt from
/// scratch whenever the active question changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    index: usize,
    selected: BTreeSet<OptionId>,
    verdict: Option<Verdict>,
    time_taken_secs: Option<u64>,
}

impl SessionState {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Drop the previous attempt and point at `index`.
    pub fn reset_for(&mut self, index: usize) {
        *self = Self::new(index);
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<OptionId> {
        &self.selected
    }

    /// Flip selection of `id`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &OptionId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    pub fn replace_selection(&mut self, selected: BTreeSet<OptionId>) {
        self.selected = selected;
    }

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    #[must_use]
    pub fn time_taken_secs(&self) -> Option<u64> {
        self.time_taken_secs
    }

    pub fn record(&mut self, verdict: Verdict, time_taken_secs: u64) {
        self.verdict = Some(verdict);
        self.time_taken_secs = Some(time_taken_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = SessionState::new(0);
        let id = OptionId::new("opt1").unwrap();

        assert!(state.toggle(&id));
        assert!(state.selected().contains(&id));
        assert!(!state.toggle(&id));
        assert!(state.selected().is_empty());
    }

    #[test]
    fn reset_clears_attempt() {
        let mut state = SessionState::new(0);
        state.toggle(&OptionId::new("opt2").unwrap());
        state.record(Verdict::Incorrect, 12);

        state.reset_for(1);

        assert_eq!(state, SessionState::new(1));
        assert_eq!(state.verdict(), None);
        assert_eq!(state.time_taken_secs(), None);
    }
}
