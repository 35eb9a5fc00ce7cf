use std::num::NonZeroUsize;

/// Result of a previous/next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The index changed; the caller must reset per-question state.
    Moved { from: usize, to: usize },
    /// `previous()` at the first question. The host decides what happens next.
    AtStartBoundary,
    /// `next()` at the last question. Nothing changes.
    AtEndNoop,
}

impl NavigationOutcome {
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, NavigationOutcome::Moved { .. })
    }
}

/// Cursor over a non-empty question list.
///
/// The index stays within `[0, count - 1]` for the lifetime of the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    count: NonZeroUsize,
}

impl Navigator {
    #[must_use]
    pub fn new(count: NonZeroUsize) -> Self {
        Self { index: 0, count }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn count(&self) -> NonZeroUsize {
        self.count
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count.get()
    }

    pub fn previous(&mut self) -> NavigationOutcome {
        if self.is_first() {
            return NavigationOutcome::AtStartBoundary;
        }
        let from = self.index;
        self.index -= 1;
        NavigationOutcome::Moved {
            from,
            to: self.index,
        }
    }

    pub fn next(&mut self) -> NavigationOutcome {
        if self.is_last() {
            return NavigationOutcome::AtEndNoop;
        }
        let from = self.index;
        self.index += 1;
        NavigationOutcome::Moved {
            from,
            to: self.index,
        }
    }
}
