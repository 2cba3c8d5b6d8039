//! Space Calculator: the sub-rectangle usable for cards.
//!
//! Subtracts fixed vertical chrome reservations (top info panel, bottom
//! action button) and the profile's outer margins, then clamps the result
//! to a fraction of the container so growing chrome keeps breathing room.
//!
//! # Guarantees
//!
//! - Output dimensions are never negative: a hard floor
//!   ([`MIN_AVAILABLE_WIDTH`] × [`MIN_AVAILABLE_HEIGHT`]) is enforced even
//!   for zero-sized, negative, or non-finite containers. For such inputs
//!   the plan may exceed the container; that trade is deliberate.

use cardlay_core::{DeviceClass, SpacingProfile};

use crate::plan::{AvailableSpace, LayoutRequest};
use crate::{MAX_HEIGHT_FRACTION, MAX_WIDTH_FRACTION, MIN_AVAILABLE_HEIGHT, MIN_AVAILABLE_WIDTH};

/// Fixed vertical chrome reservations per device class, in pixels:
/// `(info panel above the cards, action button below them)`.
#[must_use]
pub const fn chrome_reservation(class: DeviceClass) -> (f32, f32) {
    match class {
        DeviceClass::Compact => (70.0, 80.0),
        DeviceClass::Medium => (80.0, 90.0),
        DeviceClass::Wide => (90.0, 100.0),
    }
}

/// Derive the card region for a request under the given spacing profile.
#[must_use]
pub fn available_space(request: &LayoutRequest, profile: &SpacingProfile) -> AvailableSpace {
    let (chrome_top, chrome_bottom) = chrome_reservation(request.device_class);

    let raw_width = request.container_width - profile.margins.horizontal();
    let raw_height =
        request.container_height - chrome_top - chrome_bottom - profile.margins.vertical();

    let width = raw_width
        .min(request.container_width * MAX_WIDTH_FRACTION)
        .max(MIN_AVAILABLE_WIDTH);
    let height = raw_height
        .min(request.container_height * MAX_HEIGHT_FRACTION)
        .max(profile.min_card_area_height)
        .max(MIN_AVAILABLE_HEIGHT);

    // The card band runs between the top chrome (plus margin) and the
    // bottom chrome (plus margin); the clamped region centers on its
    // midpoint, so a height clamp eats band space symmetrically.
    let band_top = chrome_top + profile.margins.top;
    let band_bottom = request.container_height - chrome_bottom - profile.margins.bottom;

    let center_x = request.container_width / 2.0;
    let center_y = (band_top + band_bottom) / 2.0;

    AvailableSpace::new(width, height, center_x, center_y)
}
