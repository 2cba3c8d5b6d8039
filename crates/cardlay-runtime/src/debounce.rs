//! Resize debouncing with an in-flight guard.
//!
//! Browser-style resize streams fire continuously while the user drags a
//! window edge. Recomputing the layout per event wastes work and makes
//! cards jitter, so the debouncer holds the latest dimensions until the
//! stream has been quiet for a quiescence window, then releases exactly
//! one recompute.
//!
//! # Protocol
//!
//! 1. [`ResizeDebouncer::notify_resize`] on every event; only the latest
//!    dimensions are kept.
//! 2. [`ResizeDebouncer::poll`] each frame; when the window elapses it
//!    returns the dimensions once and marks a computation in flight.
//! 3. [`ResizeDebouncer::finish`] when the computation completes. Events
//!    that arrived in flight are re-armed with a fresh window.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Event arrives while in flight | Deferred, re-armed on `finish` |
//! | Computation exceeds soft budget | `warn!`, counted, never aborted |
//! | `poll` while in flight | `None` |
//! | `finish` without a matching `poll` | Ignored |

use std::time::{Duration, Instant};

use tracing::warn;

/// Debouncer tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// How long the resize stream must stay quiet before a recompute is
    /// released. Default: 120 ms.
    pub quiescence: Duration,
    /// Soft budget for one layout computation. Exceeding it logs a
    /// warning but never cancels the work. Default: 100 ms.
    pub perf_budget: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            quiescence: Duration::from_millis(120),
            perf_budget: Duration::from_millis(100),
        }
    }
}

/// Collapses a resize event stream into single, spaced recomputes.
#[derive(Debug)]
pub struct ResizeDebouncer {
    config: DebounceConfig,

    /// Latest dimensions waiting for the quiescence window to elapse.
    pending: Option<(f32, f32)>,

    /// When `pending` becomes releasable.
    deadline: Option<Instant>,

    /// A computation released by `poll` has not yet called `finish`.
    in_flight: bool,

    /// Latest dimensions that arrived while in flight.
    deferred: Option<(f32, f32)>,

    /// Computations that exceeded the soft budget.
    over_budget: u64,
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            pending: None,
            deadline: None,
            in_flight: false,
            deferred: None,
            over_budget: 0,
        }
    }

    /// Record a resize event. Restarts the quiescence window; while a
    /// computation is in flight the event is deferred instead.
    pub fn notify_resize(&mut self, width: f32, height: f32, now: Instant) {
        if self.in_flight {
            self.deferred = Some((width, height));
        } else {
            self.pending = Some((width, height));
            self.deadline = Some(now + self.config.quiescence);
        }
    }

    /// Release the pending dimensions if the window has elapsed. Returns
    /// each release exactly once and refuses to release while a prior
    /// computation is still in flight.
    pub fn poll(&mut self, now: Instant) -> Option<(f32, f32)> {
        if self.in_flight {
            return None;
        }
        match (self.pending, self.deadline) {
            (Some(dims), Some(deadline)) if now >= deadline => {
                self.pending = None;
                self.deadline = None;
                self.in_flight = true;
                Some(dims)
            }
            _ => None,
        }
    }

    /// Mark the released computation complete. `elapsed` is checked
    /// against the soft budget; deferred events are re-armed with a
    /// fresh quiescence window starting at `now`.
    pub fn finish(&mut self, elapsed: Duration, now: Instant) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        if elapsed > self.config.perf_budget {
            self.over_budget += 1;
            warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = self.config.perf_budget.as_millis() as u64,
                "layout computation exceeded soft budget"
            );
        }
        if let Some((w, h)) = self.deferred.take() {
            self.pending = Some((w, h));
            self.deadline = Some(now + self.config.quiescence);
        }
    }

    /// A release is waiting for its window to elapse.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some() || self.deferred.is_some()
    }

    /// A released computation has not yet finished.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Computations that exceeded the soft budget so far.
    #[must_use]
    pub fn over_budget_count(&self) -> u64 {
        self.over_budget
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}
