//! Row Layout Planner: decompose a card count into rows and columns.
//!
//! Decision policy, ordered, first match wins:
//!
//! 1. Small counts (1–3): a single row.
//! 2. Canonical counts with a known good split, when the split fits the
//!    capacity in both dimensions.
//! 3. General rule: `cards_per_row = min(max_cards_per_row,
//!    ceil(sqrt(count)))`; if the resulting row count exceeds the row
//!    capacity, collapse to a single row of all cards. The horizontal
//!    overflow that can cause is corrected downstream by the size solver
//!    and, ultimately, the emergency fallback — cards are never dropped.
//!
//! Tie-break for equally valid splits: prefer wider rows over taller
//! stacks (a 6-card draw is 2 rows of 3, never 3 rows of 2).

use crate::plan::{AvailableSpace, RowPlan, SolverLimits};

/// How many rows/columns of minimum-size cards the space can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCapacity {
    pub max_cards_per_row: usize,
    pub max_rows: usize,
}

/// Compute capacity from the available space and the solver minimums.
/// Never returns zero in either dimension.
#[must_use]
pub fn capacity(space: &AvailableSpace, limits: &SolverLimits) -> RowCapacity {
    let per_card = limits.min_width + limits.card_spacing;
    let per_row = limits.min_height + limits.row_spacing;

    let max_cards_per_row = if per_card > 0.0 {
        ((space.width + limits.card_spacing) / per_card).floor() as usize
    } else {
        1
    };
    let max_rows = if per_row > 0.0 {
        ((space.height + limits.row_spacing) / per_row).floor() as usize
    } else {
        1
    };

    RowCapacity {
        max_cards_per_row: max_cards_per_row.max(1),
        max_rows: max_rows.max(1),
    }
}

/// Canonical splits for common counts, in preference order per count.
/// Wider rows come first; an entry is used only when it fits the capacity.
const CANONICAL: &[(usize, &[RowPlan])] = &[
    (4, &[RowPlan::new(2, 2)]),
    (5, &[RowPlan::new(1, 5)]),
    (6, &[RowPlan::new(2, 3), RowPlan::new(3, 2)]),
    (7, &[RowPlan::new(2, 4)]),
    (8, &[RowPlan::new(2, 5), RowPlan::new(2, 4)]),
    (9, &[RowPlan::new(3, 3)]),
    (10, &[RowPlan::new(2, 5)]),
    (12, &[RowPlan::new(3, 4), RowPlan::new(4, 3)]),
    (16, &[RowPlan::new(4, 4)]),
];

/// Choose a row plan for `card_count` within `cap`.
///
/// Total: never returns zero rows or columns for a non-zero count;
/// `card_count = 0` returns [`RowPlan::empty`].
#[must_use]
pub fn plan_rows(card_count: usize, cap: RowCapacity) -> RowPlan {
    if card_count == 0 {
        return RowPlan::empty();
    }

    // 1. Small counts: always a single row.
    if card_count <= 3 {
        return RowPlan::new(1, card_count);
    }

    // 2. Canonical splits, first fitting candidate wins.
    if let Some((_, candidates)) = CANONICAL.iter().find(|(count, _)| *count == card_count) {
        for plan in *candidates {
            if plan.cards_per_row <= cap.max_cards_per_row && plan.rows <= cap.max_rows {
                return *plan;
            }
        }
    }

    // 3. General near-square rule.
    let sqrt_cols = (card_count as f32).sqrt().ceil() as usize;
    let cards_per_row = sqrt_cols.min(cap.max_cards_per_row).max(1);
    let rows = card_count.div_ceil(cards_per_row);

    if rows > cap.max_rows {
        // Last resort: one row of everything; the solver's scaling step
        // (or the fallback) corrects the horizontal overflow.
        return RowPlan::new(1, card_count);
    }

    RowPlan::new(rows, cards_per_row)
}
