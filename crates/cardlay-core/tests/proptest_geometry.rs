//! Property-based tests for the geometry and classification primitives.
//!
//! 1. Rect intersection is symmetric and irreflexive for empty rects.
//! 2. Center-based construction round-trips.
//! 3. Insets totals decompose.
//! 4. Device classification is total and monotonic.

use cardlay_core::{Breakpoints, Insets, Point, RectF, Size};
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = RectF> {
    (
        -1000.0f32..=1000.0,
        -1000.0f32..=1000.0,
        0.0f32..=500.0,
        0.0f32..=500.0,
    )
        .prop_map(|(x, y, w, h)| RectF::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn nonempty_rect_intersects_itself(r in rect_strategy()) {
        prop_assert_eq!(r.intersects(&r), !r.is_empty());
    }

    #[test]
    fn from_center_round_trips(
        cx in -1000.0f32..=1000.0,
        cy in -1000.0f32..=1000.0,
        w in 0.5f32..=500.0,
        h in 0.5f32..=500.0,
    ) {
        let r = RectF::from_center(Point::new(cx, cy), Size::new(w, h));
        let c = r.center();
        prop_assert!((c.x - cx).abs() < 1e-3);
        prop_assert!((c.y - cy).abs() < 1e-3);
        prop_assert_eq!(r.size(), Size::new(w, h));
    }

    #[test]
    fn insets_totals_decompose(
        top in 0.0f32..=100.0,
        bottom in 0.0f32..=100.0,
        left in 0.0f32..=100.0,
        right in 0.0f32..=100.0,
    ) {
        let i = Insets::new(top, bottom, left, right);
        prop_assert_eq!(i.horizontal(), left + right);
        prop_assert_eq!(i.vertical(), top + bottom);
    }

    #[test]
    fn classification_is_total_and_monotonic(
        medium in 100.0f32..=2000.0,
        wide in 100.0f32..=2000.0,
        w1 in -100.0f32..=5000.0,
        w2 in -100.0f32..=5000.0,
    ) {
        let bp = Breakpoints::new(medium, wide);
        let (lo, hi) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
        prop_assert!(bp.classify_width(lo) <= bp.classify_width(hi));
    }
}
