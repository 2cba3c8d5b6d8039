//! Card Size Solver: one uniform size for every card in a plan.
//!
//! Solve order matters:
//!
//! 1. Naive per-card maxima from dividing the safety-scaled envelope by
//!    columns/rows, net of inter-card spacing.
//! 2. Clamp to the absolute maximums.
//! 3. Reconcile the fixed aspect ratio, always adjusting the axis with the
//!    larger deviation so neither limit is exceeded.
//! 4. Enforce the absolute minimums. This can reintroduce overflow; that
//!    is intentional — overflow detection is the validator's concern.
//! 5. Overflow correction: if the recomputed footprint still exceeds the
//!    envelope, scale both axes by `min(width_scale, height_scale,
//!    RESCALE_CAP)` and re-clamp to the minimums.
//!
//! Uniform sizing is a deliberate consistency trade-off over per-card
//! variable sizing.

use crate::plan::{AvailableSpace, CardSize, RowPlan, SolverLimits};
use crate::{CARD_ASPECT_RATIO, OVERFLOW_TOLERANCE, RESCALE_CAP, SAFETY_FACTOR};

/// Footprint of a full row / the stacked rows at the given card size.
#[must_use]
pub fn footprint(plan: &RowPlan, size: CardSize, limits: &SolverLimits) -> (f32, f32) {
    if plan.is_empty() {
        return (0.0, 0.0);
    }
    let cols = plan.cards_per_row as f32;
    let rows = plan.rows as f32;
    let width = cols * size.width + (cols - 1.0) * limits.card_spacing;
    let height = rows * size.height + (rows - 1.0) * limits.row_spacing;
    (width, height)
}

/// Solve the uniform card size for `plan` within `space` under `limits`.
#[must_use]
pub fn solve_card_size(plan: &RowPlan, space: &AvailableSpace, limits: &SolverLimits) -> CardSize {
    if plan.is_empty() {
        return CardSize::ZERO;
    }

    let cols = plan.cards_per_row as f32;
    let rows = plan.rows as f32;
    let target_width = space.width * SAFETY_FACTOR;
    let target_height = space.height * SAFETY_FACTOR;

    // 1. Naive maxima.
    let mut width = ((target_width - (cols - 1.0) * limits.card_spacing) / cols).max(0.0);
    let mut height = ((target_height - (rows - 1.0) * limits.row_spacing) / rows).max(0.0);

    // 2. Absolute maximums.
    width = width.min(limits.max_width);
    height = height.min(limits.max_height);

    // 3. Aspect reconciliation: shrink the axis that deviates more.
    if width * CARD_ASPECT_RATIO > height {
        width = height / CARD_ASPECT_RATIO;
    } else {
        height = width * CARD_ASPECT_RATIO;
    }

    // 4. Minimums win over fit; the validator catches the consequences.
    if width < limits.min_width || height < limits.min_height {
        width = limits.min_width;
        height = limits.min_height;
    }

    // 5. Overflow correction.
    let (fp_width, fp_height) = footprint(plan, CardSize::new(width, height), limits);
    let overflows_w = fp_width > target_width + OVERFLOW_TOLERANCE;
    let overflows_h = fp_height > target_height + OVERFLOW_TOLERANCE;
    if overflows_w || overflows_h {
        let card_budget_w = (target_width - (cols - 1.0) * limits.card_spacing).max(0.0);
        let card_budget_h = (target_height - (rows - 1.0) * limits.row_spacing).max(0.0);
        let width_scale = if width > 0.0 {
            card_budget_w / (cols * width)
        } else {
            1.0
        };
        let height_scale = if height > 0.0 {
            card_budget_h / (rows * height)
        } else {
            1.0
        };
        let scale = width_scale.min(height_scale).min(RESCALE_CAP).max(0.0);
        width = (width * scale).max(limits.min_width);
        height = (height * scale).max(limits.min_height);
    }

    CardSize::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ASPECT_TOLERANCE;

    fn wide_space() -> AvailableSpace {
        AvailableSpace::new(901.12, 384.0, 512.0, 379.0)
    }

    fn wide_limits() -> SolverLimits {
        SolverLimits {
            min_width: 75.0,
            min_height: 105.0,
            max_width: 180.0,
            max_height: 252.0,
            card_spacing: 16.0,
            row_spacing: 20.0,
        }
    }

    #[test]
    fn single_row_of_five_fills_width() {
        let size = solve_card_size(&RowPlan::new(1, 5), &wide_space(), &wide_limits());
        assert!((size.width - 158.41).abs() < 0.1, "width {}", size.width);
        assert!(size.aspect_error() < ASPECT_TOLERANCE);
        let (fp_w, _) = footprint(&RowPlan::new(1, 5), size, &wide_limits());
        assert!(fp_w <= wide_space().width * SAFETY_FACTOR + OVERFLOW_TOLERANCE);
    }

    #[test]
    fn two_rows_height_limited() {
        // 5 + 3: rows limit the height, width follows the aspect ratio.
        let size = solve_card_size(&RowPlan::new(2, 5), &wide_space(), &wide_limits());
        assert!((size.height - 172.4).abs() < 0.1, "height {}", size.height);
        assert!((size.width - 172.4 / 1.4).abs() < 0.1);
        assert!(size.aspect_error() < ASPECT_TOLERANCE);
    }

    #[test]
    fn three_by_three_stays_above_minimum() {
        let size = solve_card_size(&RowPlan::new(3, 3), &wide_space(), &wide_limits());
        assert!(size.width >= wide_limits().min_width);
        assert!(size.height >= wide_limits().min_height);
        let (_, fp_h) = footprint(&RowPlan::new(3, 3), size, &wide_limits());
        assert!(fp_h <= wide_space().height * SAFETY_FACTOR + OVERFLOW_TOLERANCE);
    }

    #[test]
    fn single_card_clamped_to_maximum() {
        let size = solve_card_size(&RowPlan::new(1, 1), &wide_space(), &wide_limits());
        assert!(size.width <= wide_limits().max_width + 0.01);
        assert!(size.height <= wide_limits().max_height + 0.01);
        assert!(size.aspect_error() < ASPECT_TOLERANCE);
    }

    #[test]
    fn overcrowded_row_falls_back_to_minimum() {
        // Nine cards in one row of a 352px-wide space cannot fit at the
        // minimum size; the solver returns the minimum and leaves the
        // overflow for the validator.
        let space = AvailableSpace::new(352.0, 200.0, 200.0, 145.0);
        let limits = SolverLimits {
            card_spacing: 10.0,
            row_spacing: 14.0,
            ..wide_limits()
        };
        let size = solve_card_size(&RowPlan::new(1, 9), &space, &limits);
        assert_eq!(size.width, limits.min_width);
        assert_eq!(size.height, limits.min_height);
        let (fp_w, _) = footprint(&RowPlan::new(1, 9), size, &limits);
        assert!(fp_w > space.width * SAFETY_FACTOR + OVERFLOW_TOLERANCE);
    }

    #[test]
    fn relaxed_minimums_always_fit_tight_space() {
        // With small minimums the naive division already fits; the solver
        // must not overflow the envelope in that regime.
        let space = AvailableSpace::new(400.0, 1000.0, 200.0, 500.0);
        let mut limits = wide_limits();
        limits.min_width = 10.0;
        limits.min_height = 14.0;
        let size = solve_card_size(&RowPlan::new(1, 3), &space, &limits);
        assert!(size.width > limits.min_width);
        let (fp_w, fp_h) = footprint(&RowPlan::new(1, 3), size, &limits);
        assert!(fp_w <= space.width * SAFETY_FACTOR + OVERFLOW_TOLERANCE);
        assert!(fp_h <= space.height * SAFETY_FACTOR + OVERFLOW_TOLERANCE);
    }

    #[test]
    fn empty_plan_zero_size() {
        assert_eq!(
            solve_card_size(&RowPlan::empty(), &wide_space(), &wide_limits()),
            CardSize::ZERO
        );
    }

    #[test]
    fn aspect_preserved_across_plans() {
        for plan in [
            RowPlan::new(1, 1),
            RowPlan::new(1, 5),
            RowPlan::new(2, 5),
            RowPlan::new(3, 3),
            RowPlan::new(4, 5),
        ] {
            let size = solve_card_size(&plan, &wide_space(), &wide_limits());
            assert!(
                size.aspect_error() < ASPECT_TOLERANCE,
                "aspect drift for {plan:?}: {}",
                size.aspect_error()
            );
        }
    }
}
