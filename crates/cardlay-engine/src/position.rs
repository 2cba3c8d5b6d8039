//! Position Generator: one centered position per card index.
//!
//! Each row's footprint is horizontally centered within the available
//! space — this is what balances an incomplete final row (8 cards as 5+3:
//! the row of 3 is centered, not left-aligned). Rows stack vertically and
//! the whole block is vertically centered. Non-overlap is guaranteed by
//! construction: adjacent centers are a full card plus a positive gap
//! apart.

use crate::plan::{AvailableSpace, CardPosition, CardSize, RowPlan, SolverLimits};

/// Emit positions in index order for `card_count` cards under `plan`.
#[must_use]
pub fn generate_positions(
    plan: &RowPlan,
    size: CardSize,
    space: &AvailableSpace,
    limits: &SolverLimits,
    card_count: usize,
) -> Vec<CardPosition> {
    if plan.is_empty() || card_count == 0 {
        return Vec::new();
    }

    let mut positions = Vec::with_capacity(card_count);

    let block_height =
        plan.rows as f32 * size.height + (plan.rows as f32 - 1.0) * limits.row_spacing;
    let first_row_y = space.center_y - block_height / 2.0 + size.height / 2.0;
    let row_step = size.height + limits.row_spacing;
    let col_step = size.width + limits.card_spacing;

    let mut index = 0;
    for row in 0..plan.rows {
        let cards = plan.cards_in_row(row, card_count);
        if cards == 0 {
            break;
        }
        let row_width = cards as f32 * size.width + (cards as f32 - 1.0) * limits.card_spacing;
        let first_x = space.center_x - row_width / 2.0 + size.width / 2.0;
        let y = first_row_y + row as f32 * row_step;

        for col in 0..cards {
            positions.push(CardPosition {
                index,
                x: first_x + col as f32 * col_step,
                y,
            });
            index += 1;
        }
    }

    positions
}

/// Overall footprint of the laid-out block: `(widest row, stacked rows)`.
#[must_use]
pub fn total_extent(
    plan: &RowPlan,
    size: CardSize,
    limits: &SolverLimits,
    card_count: usize,
) -> (f32, f32) {
    if plan.is_empty() || card_count == 0 {
        return (0.0, 0.0);
    }
    let widest = plan.cards_in_row(0, card_count) as f32;
    let width = widest * size.width + (widest - 1.0) * limits.card_spacing;
    let height = plan.rows as f32 * size.height + (plan.rows as f32 - 1.0) * limits.row_spacing;
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> AvailableSpace {
        AvailableSpace::new(901.12, 384.0, 512.0, 379.0)
    }

    fn limits() -> SolverLimits {
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
    fn indices_are_contiguous_in_order() {
        let plan = RowPlan::new(2, 5);
        let positions = generate_positions(&plan, CardSize::new(120.0, 168.0), &space(), &limits(), 8);
        assert_eq!(positions.len(), 8);
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(p.index, i);
        }
    }

    #[test]
    fn every_row_is_horizontally_centered() {
        let plan = RowPlan::new(2, 5);
        let size = CardSize::new(120.0, 168.0);
        let positions = generate_positions(&plan, size, &space(), &limits(), 8);

        // Row 0: indices 0..5; row 1: indices 5..8.
        let row0_center = (positions[0].x + positions[4].x) / 2.0;
        let row1_center = (positions[5].x + positions[7].x) / 2.0;
        assert!((row0_center - space().center_x).abs() < 1e-3);
        assert!((row1_center - space().center_x).abs() < 1e-3);
    }

    #[test]
    fn block_is_vertically_centered() {
        let plan = RowPlan::new(2, 5);
        let size = CardSize::new(120.0, 168.0);
        let positions = generate_positions(&plan, size, &space(), &limits(), 8);
        let top_center = positions[0].y;
        let bottom_center = positions[7].y;
        assert!(((top_center + bottom_center) / 2.0 - space().center_y).abs() < 1e-3);
    }

    #[test]
    fn single_card_sits_at_space_center() {
        let positions = generate_positions(
            &RowPlan::new(1, 1),
            CardSize::new(180.0, 252.0),
            &space(),
            &limits(),
            1,
        );
        assert_eq!(positions.len(), 1);
        assert!((positions[0].x - space().center_x).abs() < 1e-3);
        assert!((positions[0].y - space().center_y).abs() < 1e-3);
    }

    #[test]
    fn adjacent_cards_do_not_touch() {
        let size = CardSize::new(120.0, 168.0);
        let positions = generate_positions(&RowPlan::new(2, 5), size, &space(), &limits(), 10);
        // Same-row neighbors: centers a full width + gap apart.
        assert!((positions[1].x - positions[0].x - (size.width + 16.0)).abs() < 1e-3);
        // Cross-row: centers a full height + gap apart.
        assert!((positions[5].y - positions[0].y - (size.height + 20.0)).abs() < 1e-3);
    }

    #[test]
    fn empty_inputs_yield_no_positions() {
        assert!(generate_positions(
            &RowPlan::empty(),
            CardSize::ZERO,
            &space(),
            &limits(),
            0
        )
        .is_empty());
    }

    #[test]
    fn total_extent_matches_footprint() {
        let size = CardSize::new(120.0, 168.0);
        let (w, h) = total_extent(&RowPlan::new(2, 5), size, &limits(), 8);
        assert!((w - (5.0 * 120.0 + 4.0 * 16.0)).abs() < 1e-3);
        assert!((h - (2.0 * 168.0 + 20.0)).abs() < 1e-3);
        assert_eq!(total_extent(&RowPlan::empty(), size, &limits(), 0), (0.0, 0.0));
    }
}
