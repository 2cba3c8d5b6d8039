//! Device classification by viewport width.
//!
//! A raw container width maps to one of three coarse device classes, each
//! carrying a default [`SpacingProfile`]. Classification is a total pure
//! function over a data-driven threshold table, so the breakpoints are
//! adjustable without touching logic.
//!
//! # Invariants
//!
//! 1. **Total**: every finite width (including zero and negative values)
//!    classifies to some class; widths below the first threshold are
//!    `Compact`.
//! 2. **Monotonic**: `classify_width(a) <= classify_width(b)` whenever
//!    `a <= b`.
//! 3. **All classes reachable**: each threshold value classifies to its
//!    own class.

use serde::{Deserialize, Serialize};

use crate::geometry::Insets;

/// Coarse viewport bucket driving default spacing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum DeviceClass {
    /// Phones and narrow embedded webviews.
    #[default]
    Compact,
    /// Tablets and small desktop windows.
    Medium,
    /// Full desktop and TV-sized viewports.
    Wide,
}

/// Default spacing parameters associated with a device class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingProfile {
    /// Outer margins between the container edge and the card region.
    pub margins: Insets,
    /// Vertical gap between card rows.
    pub row_spacing: f32,
    /// Horizontal gap between cards within a row.
    pub card_spacing: f32,
    /// Minimum height the card region should be granted before clamping.
    pub min_card_area_height: f32,
}

impl SpacingProfile {
    /// Profile for narrow viewports: tight margins, small gaps.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            margins: Insets::new(12.0, 12.0, 16.0, 16.0),
            row_spacing: 14.0,
            card_spacing: 10.0,
            min_card_area_height: 180.0,
        }
    }

    /// Profile for mid-size viewports.
    #[must_use]
    pub const fn medium() -> Self {
        Self {
            margins: Insets::new(16.0, 16.0, 24.0, 24.0),
            row_spacing: 18.0,
            card_spacing: 14.0,
            min_card_area_height: 220.0,
        }
    }

    /// Profile for wide viewports: generous margins and gaps.
    #[must_use]
    pub const fn wide() -> Self {
        Self {
            margins: Insets::new(20.0, 20.0, 32.0, 32.0),
            row_spacing: 20.0,
            card_spacing: 16.0,
            min_card_area_height: 260.0,
        }
    }
}

impl DeviceClass {
    /// The default spacing profile for this class.
    #[must_use]
    pub const fn profile(self) -> SpacingProfile {
        match self {
            DeviceClass::Compact => SpacingProfile::compact(),
            DeviceClass::Medium => SpacingProfile::medium(),
            DeviceClass::Wide => SpacingProfile::wide(),
        }
    }
}

/// Width thresholds separating the device classes.
///
/// A width `w` classifies as the class of the last threshold with
/// `min_width <= w`, falling back to `Compact`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Minimum width for `Medium`.
    pub medium: f32,
    /// Minimum width for `Wide`.
    pub wide: f32,
}

impl Breakpoints {
    /// Construct breakpoints; thresholds are ordered by construction
    /// (`wide` is raised to at least `medium`).
    #[must_use]
    pub fn new(medium: f32, wide: f32) -> Self {
        Self {
            medium,
            wide: wide.max(medium),
        }
    }

    /// Classify a raw container width. Total: never fails.
    #[must_use]
    pub fn classify_width(&self, width: f32) -> DeviceClass {
        // Data-driven lookup: last entry whose threshold is met wins.
        let table = [
            (self.wide, DeviceClass::Wide),
            (self.medium, DeviceClass::Medium),
        ];
        for &(min_width, class) in &table {
            if width >= min_width {
                return class;
            }
        }
        DeviceClass::Compact
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(600.0, 1024.0)
    }
}
