//! A headless windowed-rendering (virtualization) engine.
//!
//! Given a scrollable viewport and a large ordered collection, this crate computes which
//! contiguous slice of items must actually be materialized, and at what offsets, so rendering
//! cost stays proportional to viewport size rather than collection size. It covers uniform item
//! sizes ([`compute_fixed_range`]), asynchronously-measured variable sizes ([`PositionTable`] +
//! [`resolve_dynamic_range`]), and fixed-column grids ([`compute_grid_range`]).
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size (height/width)
//! - scroll offset
//! - per-item size estimates and (optionally) post-layout measurements, reported through the
//!   [`MeasurementFeedback`] contract
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod feedback;
mod fixed;
mod grid;
mod resolver;
mod table;
mod types;


pub use engine::{Engine, OnChangeCallback};
pub use error::Error;
pub use feedback::MeasurementFeedback;
pub use fixed::{FixedWindow, compute_fixed_range};
pub use grid::{GridWindow, compute_grid_range};
pub use resolver::resolve_dynamic_range;
pub use table::{EstimateSize, PositionTable};
pub use types::{ItemPlacement, Viewport, VisibleRange};
