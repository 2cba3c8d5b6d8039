//! Emergency Fallback Planner: always render something legible.
//!
//! Invoked only after the validator rejects the primary plan. Re-solves
//! with relaxed limits (halved minimums and spacing) and a stricter row
//! search: a single row when everything fits one, otherwise an even
//! distribution across at most two rows.
//!
//! Always produces a result. If even the relaxed minimums do not fit, the
//! overflowing plan is returned anyway, flagged `is_optimal = false` — the
//! caller gets a diagnostic signal, never an error.

use crate::plan::{AvailableSpace, LayoutResult, RowPlan, SolverLimits};
use crate::{position, rows, size};
use cardlay_core::SpacingProfile;

/// Re-plan `card_count` cards in `space` under relaxed constraints.
///
/// The result is degraded by definition: `is_optimal` is false even when
/// the relaxed plan validates, because degradation is a property of the
/// path taken, not of the output.
#[must_use]
pub fn replan(card_count: usize, space: &AvailableSpace, profile: &SpacingProfile) -> LayoutResult {
    if card_count == 0 {
        return LayoutResult::empty();
    }

    let limits = SolverLimits::relaxed(profile);
    let cap = rows::capacity(space, &limits);

    let plan = if card_count <= cap.max_cards_per_row {
        RowPlan::new(1, card_count)
    } else {
        let row_count = cap.max_rows.min(2).max(1);
        RowPlan::new(row_count, card_count.div_ceil(row_count))
    };

    let card_size = size::solve_card_size(&plan, space, &limits);
    let positions = position::generate_positions(&plan, card_size, space, &limits, card_count);
    let (total_width, total_height) = position::total_extent(&plan, card_size, &limits, card_count);

    LayoutResult {
        positions,
        card_size,
        row_plan: plan,
        total_width,
        total_height,
        is_optimal: false,
    }
}
