//! Validator: pure re-check of a generated plan.
//!
//! Re-derives nothing and mutates nothing: it compares the plan's totals
//! against the safety-scaled available space and the card size against the
//! minimums of the limits the plan was solved under, and reports specific
//! violations. Correction is the emergency fallback's job, never this
//! module's.

use crate::plan::{AvailableSpace, LayoutResult, SolverLimits, ValidationResult};
use crate::{OVERFLOW_TOLERANCE, SAFETY_FACTOR};

/// Tolerance for minimum-size comparisons; guards float noise only.
const SIZE_EPSILON: f32 = 1e-3;

/// Check `result` against the space and limits it was solved for.
#[must_use]
pub fn validate_layout(
    result: &LayoutResult,
    space: &AvailableSpace,
    limits: &SolverLimits,
) -> ValidationResult {
    let mut violations = Vec::new();

    let width_budget = space.width * SAFETY_FACTOR + OVERFLOW_TOLERANCE;
    let height_budget = space.height * SAFETY_FACTOR + OVERFLOW_TOLERANCE;

    if result.total_width > width_budget {
        violations.push(format!(
            "horizontal overflow: cards span {:.1}px of {:.1}px",
            result.total_width, width_budget
        ));
    }
    if result.total_height > height_budget {
        violations.push(format!(
            "vertical overflow: cards span {:.1}px of {:.1}px",
            result.total_height, height_budget
        ));
    }

    if !result.positions.is_empty() {
        if result.card_size.width + SIZE_EPSILON < limits.min_width {
            violations.push(format!(
                "card width {:.1}px below minimum {:.1}px",
                result.card_size.width, limits.min_width
            ));
        }
        if result.card_size.height + SIZE_EPSILON < limits.min_height {
            violations.push(format!(
                "card height {:.1}px below minimum {:.1}px",
                result.card_size.height, limits.min_height
            ));
        }
    }

    if violations.is_empty() {
        ValidationResult::valid()
    } else {
        ValidationResult::rejected(violations)
    }
}
