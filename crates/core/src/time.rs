/// Whole-second elapsed counter for the active question.
///
/// Pure state; whoever owns it decides when a second has passed and calls
/// [`Stopwatch::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_secs: u64,
    running: bool,
}

impl Stopwatch {
    /// Reset to zero and start counting.
    pub fn start(&mut self) {
        self.elapsed_secs = 0;
        self.running = true;
    }

    /// Stop counting. Idempotent; the elapsed value is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Count one second. Ignored while stopped.
    ///
    /// Returns the new elapsed value when the tick was applied.
    pub fn tick(&mut self) -> Option<u64> {
        if !self.running {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        Some(self.elapsed_secs)
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Human-readable duration: `"5 sec"`, `"2 min 5 sec"`, `"1 hr 2 min 5 sec"`.
///
/// Hours and minutes are left out when zero; seconds are always shown.
#[must_use]
pub fn format_elapsed(total_secs: u64) -> String {
    let hrs = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut out = String::new();
    if hrs > 0 {
        out.push_str(&format!("{hrs} hr "));
    }
    if mins > 0 {
        out.push_str(&format!("{mins} min "));
    }
    out.push_str(&format!("{secs} sec"));
    out
}
