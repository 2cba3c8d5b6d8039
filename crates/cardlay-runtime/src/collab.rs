//! Seams for the embedding application.
//!
//! The layout stack knows nothing about what the cards mean. The pieces
//! that do — which items exist, how winners are picked, what happens when
//! a draw runs — plug in here:
//!
//! - [`DrawSelector`] picks winners from a pool. The runtime never
//!   dictates randomness; tests inject deterministic selectors.
//! - [`PhaseListener`] observes layout and phase transitions, e.g. to
//!   drive reveal animations.
//! - [`DrawCoordinator`] owns the phase state machine and fans events out
//!   to listeners.

use cardlay_engine::LayoutResult;
use tracing::debug;

/// Opaque identifier for a drawable item. The application decides what it
/// refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// Where a draw currently stands.
///
/// Transitions are linear: `Idle → Drawing → Revealed`, then
/// [`DrawCoordinator::reset`] back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// No draw running; cards are face down.
    Idle,
    /// Winners are being selected.
    Drawing,
    /// Winners are known and shown.
    Revealed,
}

/// Picks `quantity` winners from `pool`.
///
/// When `allow_repeat` is false the returned items must be distinct; the
/// coordinator clamps `quantity` to the pool size beforehand, so a
/// conforming selector can always satisfy the request.
pub trait DrawSelector {
    fn select(&mut self, pool: &[ItemId], quantity: usize, allow_repeat: bool) -> Vec<ItemId>;
}

/// Observes layout and draw-phase events. Both methods default to no-ops
/// so listeners implement only what they care about.
pub trait PhaseListener {
    fn layout_ready(&mut self, _result: &LayoutResult) {}
    fn phase_changed(&mut self, _phase: DrawPhase) {}
}

/// Owns the draw phase and fans events out to registered listeners.
pub struct DrawCoordinator<S> {
    selector: S,
    phase: DrawPhase,
    listeners: Vec<Box<dyn PhaseListener>>,
}

impl<S: DrawSelector> DrawCoordinator<S> {
    #[must_use]
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            phase: DrawPhase::Idle,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn PhaseListener>) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    /// Forward a freshly computed layout to every listener.
    pub fn layout_ready(&mut self, result: &LayoutResult) {
        for listener in &mut self.listeners {
            listener.layout_ready(result);
        }
    }

    /// Run one draw: pick winners, announce the phase transitions.
    ///
    /// Without `allow_repeat` the quantity is clamped to the pool size.
    /// An empty pool or zero effective quantity is a no-op that leaves
    /// the phase untouched.
    pub fn begin_draw(
        &mut self,
        pool: &[ItemId],
        quantity: usize,
        allow_repeat: bool,
    ) -> Vec<ItemId> {
        let effective = if allow_repeat {
            quantity
        } else {
            quantity.min(pool.len())
        };
        if pool.is_empty() || effective == 0 {
            return Vec::new();
        }

        self.set_phase(DrawPhase::Drawing);
        let mut picks = self.selector.select(pool, effective, allow_repeat);
        picks.truncate(effective);
        debug!(quantity = effective, picked = picks.len(), "draw complete");
        self.set_phase(DrawPhase::Revealed);
        picks
    }

    /// Return to [`DrawPhase::Idle`], notifying listeners.
    pub fn reset(&mut self) {
        if self.phase != DrawPhase::Idle {
            self.set_phase(DrawPhase::Idle);
        }
    }

    fn set_phase(&mut self, phase: DrawPhase) {
        self.phase = phase;
        for listener in &mut self.listeners {
            listener.phase_changed(phase);
        }
    }
}
