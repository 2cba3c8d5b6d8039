#![forbid(unsafe_code)]

//! Adaptive card layout pipeline for pick-one draw UIs.
//!
//! Given a card count, a container size, and a device class, the engine
//! produces a deterministic, non-overlapping, aspect-preserving arrangement
//! of uniform cards that never exceeds the usable drawing surface and
//! degrades gracefully under extreme constraints.
//!
//! # Pipeline
//!
//! Data flows strictly downward; no stage mutates a predecessor's output:
//!
//! 1. [`space`] — subtract chrome and margins, clamp, floor.
//! 2. [`rows`] — choose a `(rows, cards_per_row)` decomposition.
//! 3. [`size`] — solve one uniform card size for the whole plan.
//! 4. [`position`] — emit centered per-card positions.
//! 5. [`validate`] — pure re-check against the safety envelope.
//! 6. [`fallback`] — relaxed re-solve when validation rejects.
//!
//! [`engine::LayoutEngine`] wires the stages together behind
//! `compute_layout` and memoizes results per input tuple.
//!
//! # Key invariants
//!
//! 1. **Total**: every input produces a usable [`plan::LayoutResult`];
//!    degraded output is data, never an error.
//! 2. **Deterministic**: identical requests yield bit-identical results.
//! 3. **No overlap**: card footprints never intersect, by construction.
//! 4. **Aspect**: solved sizes honor [`CARD_ASPECT_RATIO`] within
//!    [`ASPECT_TOLERANCE`].

pub mod engine;
pub mod fallback;
pub mod plan;
pub mod position;
pub mod rows;
pub mod size;
pub mod space;
pub mod validate;

pub use engine::{EngineConfig, LayoutEngine};
pub use plan::{
    AvailableSpace, CardPosition, CardSize, LayoutRequest, LayoutResult, Planned, RowPlan,
    SolverLimits, ValidationResult,
};
pub use validate::validate_layout;

/// Fixed card aspect ratio, height / width (portrait playing card).
pub const CARD_ASPECT_RATIO: f32 = 1.4;

/// Tolerance for aspect-ratio comparisons.
pub const ASPECT_TOLERANCE: f32 = 1e-3;

/// Smallest acceptable card under normal constraints (touch target).
pub const MIN_CARD_WIDTH: f32 = 75.0;
pub const MIN_CARD_HEIGHT: f32 = 105.0;

/// Largest card; prevents unbounded growth on huge screens.
pub const MAX_CARD_WIDTH: f32 = 180.0;
pub const MAX_CARD_HEIGHT: f32 = 252.0;

/// Fraction of the available space the solver targets and the validator
/// re-checks. One shared constant so the two never disagree at the boundary.
pub const SAFETY_FACTOR: f32 = 0.95;

/// Slack, in pixels, applied to overflow comparisons.
pub const OVERFLOW_TOLERANCE: f32 = 0.5;

/// Cap on the uniform down-scale applied during overflow correction.
/// Prevents edge-of-tolerance oscillation across resize events.
pub const RESCALE_CAP: f32 = 0.9;

/// The card region never takes more than this fraction of the container.
pub const MAX_WIDTH_FRACTION: f32 = 0.88;
pub const MAX_HEIGHT_FRACTION: f32 = 0.50;

/// Hard floor for the available space. Enforced even for pathologically
/// small containers: a too-large plan beats a crash.
pub const MIN_AVAILABLE_WIDTH: f32 = 320.0;
pub const MIN_AVAILABLE_HEIGHT: f32 = 200.0;

/// Scale applied to minimum card dimensions under emergency fallback.
pub const FALLBACK_MIN_SCALE: f32 = 0.5;

/// Scale applied to inter-card and inter-row spacing under fallback.
pub const FALLBACK_SPACING_SCALE: f32 = 0.5;
