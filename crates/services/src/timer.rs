//! One-second ticking timer for the active question.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use quiz_core::{Stopwatch, format_elapsed};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Payload delivered to the tick callback once per second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerTick {
    pub elapsed_secs: u64,
    pub label: String,
}

impl TimerTick {
    #[must_use]
    pub fn new(elapsed_secs: u64) -> Self {
        Self {
            elapsed_secs,
            label: format_elapsed(elapsed_secs),
        }
    }
}

pub type TickCallback = Arc<dyn Fn(TimerTick) + Send + Sync>;

#[derive(Debug, Default)]
struct TimerState {
    stopwatch: Stopwatch,
    // Bumped on every start/stop; a tick task only counts while its generation is current.
    generation: u64,
}

fn lock(state: &Mutex<TimerState>) -> MutexGuard<'_, TimerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Elapsed-seconds counter driven by a tokio interval.
///
/// At most one tick task exists at a time: `start()` always stops the previous
/// one first, and `stop()` is safe to call in any state.
pub struct QuestionTimer {
    state: Arc<Mutex<TimerState>>,
    on_tick: TickCallback,
    task: Option<JoinHandle<()>>,
}

impl QuestionTimer {
    #[must_use]
    pub fn new(on_tick: TickCallback) -> Self {
        Self {
            state: Arc::new(Mutex::new(TimerState::default())),
            on_tick,
            task: None,
        }
    }

    /// Timer without a tick observer.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(Arc::new(|_| {}))
    }

    /// Reset to zero and start ticking.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.stop();

        let generation = {
            let mut state = lock(&self.state);
            state.stopwatch.start();
            state.generation = state.generation.wrapping_add(1);
            state.generation
        };

        let state = Arc::clone(&self.state);
        let on_tick = Arc::clone(&self.on_tick);
        let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.task = Some(tokio::spawn(async move {
            loop {
                ticker.tick().await;
                // Publish under the lock so `stop` cannot slip between the tick
                // and its notification.
                let mut guard = lock(&state);
                if guard.generation != generation {
                    break;
                }
                let Some(elapsed) = guard.stopwatch.tick() else {
                    break;
                };
                on_tick(TimerTick::new(elapsed));
            }
        }));
        tracing::debug!(generation, "question timer started");
    }

    /// Halt ticking, keeping the elapsed value.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        let mut state = lock(&self.state);
        if state.stopwatch.is_running() {
            state.stopwatch.stop();
            state.generation = state.generation.wrapping_add(1);
            tracing::debug!(elapsed = state.stopwatch.elapsed_secs(), "question timer stopped");
        }
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        lock(&self.state).stopwatch.elapsed_secs()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        lock(&self.state).stopwatch.is_running()
    }

    /// Human-readable elapsed time, e.g. `"1 min 5 sec"`.
    #[must_use]
    pub fn label(&self) -> String {
        format_elapsed(self.elapsed_secs())
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl fmt::Debug for QuestionTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("QuestionTimer")
            .field("elapsed_secs", &state.stopwatch.elapsed_secs())
            .field("running", &state.stopwatch.is_running())
            .field("generation", &state.generation)
            .finish_non_exhaustive()
    }
}
