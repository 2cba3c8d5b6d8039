#![forbid(unsafe_code)]

//! Core: geometry primitives and device classification for cardlay.
//!
//! # Role in cardlay
//! `cardlay-core` is the vocabulary layer. It owns the float geometry types
//! every pipeline stage speaks (`Size`, `Point`, `RectF`, `Insets`) and the
//! viewport-width classification that picks a spacing profile.
//!
//! # Primary responsibilities
//! - **Geometry**: plain value types with center/edge accessors.
//! - **DeviceClass**: coarse compact/medium/wide bucket from raw width.
//! - **SpacingProfile**: per-class margins, spacing, and card-area minimum.
//!
//! # How it fits in the system
//! The engine (`cardlay-engine`) consumes these types when deriving the
//! available card region and solving card sizes; the runtime
//! (`cardlay-runtime`) only touches them at its resize boundary. Nothing
//! here holds state: every type is a pure value.

pub mod device;
pub mod geometry;

pub use device::{Breakpoints, DeviceClass, SpacingProfile};
pub use geometry::{Insets, Point, RectF, Size};
