//! Value types flowing through the layout pipeline.
//!
//! Everything here is a plain value: constructed by one stage, consumed by
//! the next, discarded on the following recompute. No shared mutable
//! ownership anywhere.

use cardlay_core::{Breakpoints, DeviceClass, Point, RectF, Size, SpacingProfile};
use serde::{Deserialize, Serialize};

use crate::{
    CARD_ASPECT_RATIO, FALLBACK_MIN_SCALE, FALLBACK_SPACING_SCALE, MAX_CARD_HEIGHT,
    MAX_CARD_WIDTH, MIN_CARD_HEIGHT, MIN_CARD_WIDTH,
};

/// Immutable layout input, created fresh on every resize or card-count
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub card_count: usize,
    pub container_width: f32,
    pub container_height: f32,
    pub device_class: DeviceClass,
}

impl LayoutRequest {
    #[must_use]
    pub const fn new(
        card_count: usize,
        container_width: f32,
        container_height: f32,
        device_class: DeviceClass,
    ) -> Self {
        Self {
            card_count,
            container_width,
            container_height,
            device_class,
        }
    }

    /// Build a request, classifying the device from the container width
    /// with the default breakpoints.
    #[must_use]
    pub fn for_container(card_count: usize, width: f32, height: f32) -> Self {
        let class = Breakpoints::default().classify_width(width);
        Self::new(card_count, width, height, class)
    }
}

/// The sub-rectangle usable for cards after chrome is reserved. Derived,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailableSpace {
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
}

impl AvailableSpace {
    #[must_use]
    pub const fn new(width: f32, height: f32, center_x: f32, center_y: f32) -> Self {
        Self {
            width,
            height,
            center_x,
            center_y,
        }
    }
}

/// The `(rows, cards_per_row)` decomposition of a card count.
///
/// For a non-empty plan: `rows * cards_per_row >= card_count` and
/// `(rows - 1) * cards_per_row < card_count` — no fully empty row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPlan {
    pub rows: usize,
    pub cards_per_row: usize,
}

impl RowPlan {
    #[must_use]
    pub const fn new(rows: usize, cards_per_row: usize) -> Self {
        Self {
            rows,
            cards_per_row,
        }
    }

    /// The defined representation for zero cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cards_per_row: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cards_per_row == 0
    }

    /// Total slots the plan provides.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.rows * self.cards_per_row
    }

    /// Number of cards in a given row for the given count. Full rows hold
    /// `cards_per_row`; the final row holds the remainder.
    #[must_use]
    pub fn cards_in_row(&self, row: usize, card_count: usize) -> usize {
        if self.is_empty() || row >= self.rows {
            return 0;
        }
        let filled = row * self.cards_per_row;
        card_count.saturating_sub(filled).min(self.cards_per_row)
    }

    /// True when the no-empty-row invariant holds for `card_count`.
    #[must_use]
    pub fn covers(&self, card_count: usize) -> bool {
        if card_count == 0 {
            return self.is_empty();
        }
        !self.is_empty()
            && self.capacity() >= card_count
            && (self.rows - 1) * self.cards_per_row < card_count
    }
}

/// Uniform card dimensions shared by every card in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardSize {
    pub width: f32,
    pub height: f32,
}

impl CardSize {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Deviation of this size from the fixed aspect ratio.
    #[must_use]
    pub fn aspect_error(&self) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        (self.height / self.width - CARD_ASPECT_RATIO).abs()
    }

    #[inline]
    #[must_use]
    pub fn as_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// One card's center position within the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPosition {
    /// Card index in `[0, card_count)`, unique and contiguous.
    pub index: usize,
    pub x: f32,
    pub y: f32,
}

/// A complete geometric plan, consumed once by the rendering layer and
/// discarded on the next recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub positions: Vec<CardPosition>,
    pub card_size: CardSize,
    pub row_plan: RowPlan,
    /// Widest row footprint (cards plus inter-card spacing).
    pub total_width: f32,
    /// Stacked row footprint (rows plus inter-row spacing).
    pub total_height: f32,
    /// False when the plan came from the emergency fallback path.
    pub is_optimal: bool,
}

impl LayoutResult {
    /// The defined no-op result for zero cards.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            card_size: CardSize::ZERO,
            row_plan: RowPlan::empty(),
            total_width: 0.0,
            total_height: 0.0,
            is_optimal: true,
        }
    }

    /// Footprint rectangle of the card at `index`, if present.
    #[must_use]
    pub fn card_rect(&self, index: usize) -> Option<RectF> {
        let pos = self.positions.get(index)?;
        Some(RectF::from_center(
            Point::new(pos.x, pos.y),
            self.card_size.as_size(),
        ))
    }
}

/// Outcome of re-checking a plan against the space it was solved for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<String>,
    pub fallback_required: bool,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violations: Vec::new(),
            fallback_required: false,
        }
    }

    #[must_use]
    pub fn rejected(violations: Vec<String>) -> Self {
        Self {
            is_valid: false,
            violations,
            fallback_required: true,
        }
    }
}

/// The constraint set a plan was solved under.
///
/// Validation always judges a plan against the limits it was solved with;
/// primary and fallback limits differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverLimits {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
    pub card_spacing: f32,
    pub row_spacing: f32,
}

impl SolverLimits {
    /// Normal constraints for the given spacing profile.
    #[must_use]
    pub fn primary(profile: &SpacingProfile) -> Self {
        Self {
            min_width: MIN_CARD_WIDTH,
            min_height: MIN_CARD_HEIGHT,
            max_width: MAX_CARD_WIDTH,
            max_height: MAX_CARD_HEIGHT,
            card_spacing: profile.card_spacing,
            row_spacing: profile.row_spacing,
        }
    }

    /// Emergency constraints: halved minimums and spacing, same maximums.
    #[must_use]
    pub fn relaxed(profile: &SpacingProfile) -> Self {
        Self {
            min_width: MIN_CARD_WIDTH * FALLBACK_MIN_SCALE,
            min_height: MIN_CARD_HEIGHT * FALLBACK_MIN_SCALE,
            max_width: MAX_CARD_WIDTH,
            max_height: MAX_CARD_HEIGHT,
            card_spacing: profile.card_spacing * FALLBACK_SPACING_SCALE,
            row_spacing: profile.row_spacing * FALLBACK_SPACING_SCALE,
        }
    }
}

/// Tagged pipeline outcome: the primary plan, or a degraded plan from the
/// emergency fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Planned {
    Optimal(LayoutResult),
    Degraded(LayoutResult),
}

impl Planned {
    /// Wrap a result according to its `is_optimal` flag.
    #[must_use]
    pub fn from_result(result: LayoutResult) -> Self {
        if result.is_optimal {
            Planned::Optimal(result)
        } else {
            Planned::Degraded(result)
        }
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> &LayoutResult {
        match self {
            Planned::Optimal(r) | Planned::Degraded(r) => r,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_result(self) -> LayoutResult {
        match self {
            Planned::Optimal(r) | Planned::Degraded(r) => r,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Planned::Degraded(_))
    }
}
