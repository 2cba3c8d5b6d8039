//! Poll-based driver: one engine, one debouncer, one frame-loop API.
//!
//! The embedding loop calls [`LayoutDriver::notify_resize`] on every
//! resize event and [`LayoutDriver::poll`] once per frame. A new layout
//! comes back only when something actually changed: a resize stream went
//! quiet, or the card count was set.

use std::time::Instant;

use tracing::debug;

use cardlay_core::Breakpoints;
use cardlay_engine::{EngineConfig, LayoutEngine, LayoutResult};

use crate::debounce::{DebounceConfig, ResizeDebouncer};

/// Owns the layout engine and the resize debouncer.
#[derive(Debug)]
pub struct LayoutDriver {
    engine: LayoutEngine,
    debouncer: ResizeDebouncer,
    card_count: usize,
    /// Last dimensions a layout was requested for.
    dims: Option<(f32, f32)>,
    /// Card count changed since the last computation.
    dirty: bool,
}

impl LayoutDriver {
    #[must_use]
    pub fn new(engine_config: EngineConfig, debounce_config: DebounceConfig) -> Self {
        Self {
            engine: LayoutEngine::new(engine_config),
            debouncer: ResizeDebouncer::new(debounce_config),
            card_count: 0,
            dims: None,
            dirty: false,
        }
    }

    /// Driver with custom device-class thresholds and default debouncing.
    #[must_use]
    pub fn with_breakpoints(breakpoints: Breakpoints) -> Self {
        Self::new(
            EngineConfig {
                breakpoints,
                ..EngineConfig::default()
            },
            DebounceConfig::default(),
        )
    }

    /// Change the number of cards. Takes effect on the next [`Self::poll`]
    /// immediately; count changes are discrete user actions, not a stream
    /// worth debouncing.
    pub fn set_card_count(&mut self, card_count: usize) {
        if card_count != self.card_count {
            self.card_count = card_count;
            self.dirty = true;
        }
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Record a resize event at `now`.
    pub fn notify_resize(&mut self, width: f32, height: f32, now: Instant) {
        self.debouncer.notify_resize(width, height, now);
    }

    /// Produce a new layout if one is due. Resize releases are gated by
    /// the debouncer's quiescence window; card-count changes recompute at
    /// the last known dimensions right away.
    pub fn poll(&mut self, now: Instant) -> Option<LayoutResult> {
        self.poll_with(now, Instant::now)
    }

    /// Like [`Self::poll`] with an injected clock for measuring the
    /// computation, so the budget accounting is testable with scripted
    /// time. The clock is sampled once before and once after the compute.
    pub fn poll_with(
        &mut self,
        now: Instant,
        mut clock: impl FnMut() -> Instant,
    ) -> Option<LayoutResult> {
        if let Some((width, height)) = self.debouncer.poll(now) {
            self.dims = Some((width, height));
            self.dirty = false;
            let started = clock();
            let result = self.compute(width, height);
            let elapsed = clock().saturating_duration_since(started);
            self.debouncer.finish(elapsed, now);
            debug!(width, height, card_count = self.card_count, "layout recomputed after resize");
            return Some(result);
        }

        if self.dirty {
            if let Some((width, height)) = self.dims {
                self.dirty = false;
                return Some(self.compute(width, height));
            }
        }
        None
    }

    /// Layout computations that exceeded the debouncer's soft budget.
    #[must_use]
    pub fn over_budget_count(&self) -> u64 {
        self.debouncer.over_budget_count()
    }

    /// Drop all memoized layouts. Dimensions and card count are retained.
    pub fn invalidate_cache(&mut self) {
        self.engine.invalidate();
    }

    fn compute(&mut self, width: f32, height: f32) -> LayoutResult {
        let request = self.engine.request_for(self.card_count, width, height);
        self.engine.compute_layout(&request)
    }
}

impl Default for LayoutDriver {
    fn default() -> Self {
        Self::new(EngineConfig::default(), DebounceConfig::default())
    }
}
