// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridpaper_view --heading-base-level=0

//! Gridpaper View: range-driven viewport synchronization.
//!
//! This crate models the visible window over a grid-paper canvas as a
//! [`DisplayRect`] and keeps it in sync with two range selectors, one per
//! axis (typically dual-handle scrollbars). It provides:
//! - [`DisplayRect`]: a validated `{min_x, max_x, min_y, max_y}` window.
//! - [`AxisMapping`]: the linear map between selector values and world
//!   coordinates over the configured [`Extent`].
//! - [`ViewportController`]: owns the window and a [`DrawingSurface`], and
//!   updates both when a selector changes.
//! - [`RangeSelector`] / [`ObservableRange`]: the selector contract.
//!
//! It does **not** own any widgets or rendering backend. Callers are expected
//! to subscribe to their selectors and forward changes into the controller,
//! and to implement [`DrawingSurface`] for whatever draws the grid.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridpaper_view::{DisplayRect, RangeSnapshot, SyncOutcome, ViewportController};
//!
//! let extent = DisplayRect::new(-4000.0, 4000.0, -6000.0, 6000.0).unwrap();
//! // `()` is a headless surface that draws nothing.
//! let mut view = ViewportController::new(extent, ());
//! assert_eq!(view.display_rect(), extent);
//!
//! // The horizontal bar now covers the middle half of its track.
//! let outcome = view.on_horizontal_change(&RangeSnapshot::new(0.25, 0.75));
//! assert_eq!(outcome, SyncOutcome::Updated);
//! assert_eq!(view.display_rect().x_range(), -2000.0..2000.0);
//!
//! // An empty window is refused and the previous one stays.
//! assert!(view.on_horizontal_change(&RangeSnapshot::new(0.5, 0.5)).is_rejected());
//! assert_eq!(view.display_rect().x_range(), -2000.0..2000.0);
//! ```
//!
//! ## Design notes
//!
//! - The axes are independent: a horizontal update never changes Y and vice
//!   versa, and the window is stretched non-uniformly onto the device.
//! - World Y grows upward. Vertical selectors measure from the top of their
//!   track, so the vertical mapping is inverted by default.
//! - Invalid updates are logged through `log` and reported as
//!   [`SyncOutcome::Rejected`]; they never panic or leave an empty window.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod controller;
mod error;
mod mapping;
mod modes;
mod rect;
mod selector;
mod surface;

pub use controller::{SyncOutcome, ViewportController, ViewportDebugInfo};
pub use error::RectError;
pub use mapping::AxisMapping;
pub use modes::{Axis, AxisDirection, WindowPolicy};
pub use rect::{DisplayRect, Extent};
pub use selector::{
    CallbackId, ObservableRange, RangeBound, RangeCallback, RangeSelector, RangeSnapshot,
};
pub use surface::DrawingSurface;
