// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridpaper_range --heading-base-level=0

//! Gridpaper Range: a headless dual-handle range bar.
//!
//! [`DualRange`] models the scrollbars on either edge of a grid-paper
//! canvas. Each bar holds a `lower..upper` window inside its domain and
//! notifies callbacks when either bound moves. It implements
//! [`gridpaper_view::ObservableRange`], so it plugs straight into a
//! [`gridpaper_view::ViewportController`].
//!
//! The bar owns no DOM or widget state. Hosts forward pointer events with the
//! track rectangle they drew the bar into:
//!
//! ```rust
//! use gridpaper_range::{DragTarget, DualRange};
//! use kurbo::{Point, Rect};
//!
//! let mut bar = DualRange::horizontal();
//! bar.set_range(0.25, 0.75);
//! bar.add_lower_range_change_callback(|range| {
//!     assert!(range.lower < range.upper);
//! });
//!
//! // A 200 px track: the lower handle sits at x = 50.
//! let track = Rect::new(0.0, 0.0, 200.0, 20.0);
//! assert_eq!(bar.pointer_down(Point::new(50.0, 10.0), track), Some(DragTarget::Lower));
//! bar.pointer_move(Point::new(30.0, 10.0));
//! bar.pointer_up();
//! assert!((bar.lower_range() - 0.15).abs() < 1e-12);
//! ```
//!
//! Callbacks receive a [`gridpaper_view::RangeSnapshot`] rather than the bar,
//! so they can freely mutate whatever they forward to.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod drag;
mod dual_range;

pub use drag::DragTarget;
pub use dual_range::{DEFAULT_HANDLE_RADIUS, DualRange};
