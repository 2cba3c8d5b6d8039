#![forbid(unsafe_code)]

//! Runtime shell around the cardlay layout engine.
//!
//! The engine itself is a pure function of its request. This crate owns
//! the impure edges:
//!
//! - [`debounce`] — collapse resize event streams into single recomputes
//!   after a quiescence window, with an in-flight guard and a soft
//!   performance budget.
//! - [`driver`] — [`driver::LayoutDriver`] wires an engine and a
//!   debouncer behind a poll-based API suitable for a frame loop.
//! - [`collab`] — the seams the embedding application plugs into:
//!   draw-item selection and phase notifications.
//!
//! All time-dependent entry points take a caller-supplied
//! [`std::time::Instant`], so tests drive the clock explicitly.

pub mod collab;
pub mod debounce;
pub mod driver;

pub use collab::{DrawCoordinator, DrawPhase, DrawSelector, ItemId, PhaseListener};
pub use debounce::{DebounceConfig, ResizeDebouncer};
pub use driver::LayoutDriver;
