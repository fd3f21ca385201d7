//! Frame-budget timing for gesture handlers.
//!
//! Drag and pinch moves arrive once per display frame, and media time updates
//! several times a second. A handler that outlives one 60 Hz frame makes the
//! floating player or the zoomed image lag behind the finger.
//!
//! `profile_scope!` times a handler when the `profiling` feature is on:
//! ```toml
//! [dependencies]
//! evo-reels = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn move_to(&mut self, event: &PointerEvent) {
//!     profile_scope!("drag_move");
//!     // ... work ...
//! }
//! ```
//!
//! `InputTimings` collects per-input statistics for a scripted replay.

use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// One frame at 60 Hz
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

/// Recent samples kept per input kind
const RECENT_SAMPLES: usize = 100;

/// Time the enclosing handler against the frame budget (or `$budget_ms`).
/// Compiles to nothing without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($handler:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::HandlerTimer::new($handler, $crate::perf::FRAME_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $handler;
    };
    ($handler:expr, $budget_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::HandlerTimer::new($handler, $budget_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($handler, $budget_ms);
    };
}

pub use profile_scope;

/// Warns on drop when the handler ran past its budget.
pub struct HandlerTimer {
    handler: &'static str,
    budget_ms: f64,
    start: Instant,
}

impl HandlerTimer {
    pub fn new(handler: &'static str, budget_ms: f64) -> Self {
        Self {
            handler,
            budget_ms,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for HandlerTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.budget_ms {
            warn!(
                handler = self.handler,
                elapsed_ms = format!("{:.2}", ms),
                budget_ms = self.budget_ms,
                "Handler missed its frame budget"
            );
        }
        #[cfg(feature = "profiling")]
        trace!(handler = self.handler, elapsed_ms = ms, "Handler timed");
    }
}

/// Timing of one kind of host input.
#[derive(Debug, Clone)]
pub struct HandlerStats {
    recent: VecDeque<f64>,
    recent_sum_ms: f64,
    dispatched: u64,
    worst_ms: f64,
    over_budget: u64,
}

impl Default for HandlerStats {
    fn default() -> Self {
        Self {
            recent: VecDeque::with_capacity(RECENT_SAMPLES),
            recent_sum_ms: 0.0,
            dispatched: 0,
            worst_ms: 0.0,
            over_budget: 0,
        }
    }
}

impl HandlerStats {
    pub fn record(&mut self, ms: f64) {
        if self.recent.len() == RECENT_SAMPLES {
            if let Some(oldest) = self.recent.pop_front() {
                self.recent_sum_ms -= oldest;
            }
        }
        self.recent.push_back(ms);
        self.recent_sum_ms += ms;
        self.dispatched += 1;
        self.worst_ms = self.worst_ms.max(ms);
        if ms > FRAME_BUDGET_MS {
            self.over_budget += 1;
        }
    }

    /// Mean of the recent samples.
    pub fn recent_average_ms(&self) -> f64 {
        if self.recent.is_empty() {
            0.0
        } else {
            self.recent_sum_ms / self.recent.len() as f64
        }
    }

    /// Slowest dispatch ever recorded.
    pub fn worst_ms(&self) -> f64 {
        self.worst_ms
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Dispatches that took longer than one frame.
    pub fn over_budget(&self) -> u64 {
        self.over_budget
    }
}

/// Per-input timing, keyed by the wire input's `type`.
#[derive(Debug, Clone, Default)]
pub struct InputTimings {
    by_input: BTreeMap<String, HandlerStats>,
}

impl InputTimings {
    pub fn record(&mut self, input: &str, ms: f64) {
        match self.by_input.get_mut(input) {
            Some(stats) => stats.record(ms),
            None => {
                let mut stats = HandlerStats::default();
                stats.record(ms);
                self.by_input.insert(input.to_string(), stats);
            }
        }
    }

    pub fn get(&self, input: &str) -> Option<&HandlerStats> {
        self.by_input.get(input)
    }

    /// Inputs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HandlerStats)> {
        self.by_input.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Total dispatches over budget across every input.
    pub fn frames_missed(&self) -> u64 {
        self.by_input.values().map(HandlerStats::over_budget).sum()
    }
}
