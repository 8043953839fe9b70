// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error describing why a candidate display rectangle was refused.
///
/// Rectangles are only ever stored once they pass validation, so this error
/// is what callers see instead of a degenerate window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RectError {
    /// One of the coordinates (or selector readings) was NaN or infinite.
    NonFinite,
    /// The horizontal span is empty or negative (`min >= max`).
    EmptyWidth {
        /// Proposed minimum X.
        min: f64,
        /// Proposed maximum X.
        max: f64,
    },
    /// The vertical span is empty or negative (`min >= max`).
    EmptyHeight {
        /// Proposed minimum Y.
        min: f64,
        /// Proposed maximum Y.
        max: f64,
    },
    /// A selector reported `lower > upper`.
    ReversedRange {
        /// Lower bound as reported by the selector.
        lower: f64,
        /// Upper bound as reported by the selector.
        upper: f64,
    },
    /// The window is positive but narrower than the configured minimum.
    WindowTooSmall {
        /// Proposed span in world units.
        span: f64,
        /// Minimum span in world units.
        min: f64,
    },
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("rectangle coordinates must be finite"),
            Self::EmptyWidth { min, max } => {
                write!(f, "empty horizontal span: min x {min} is not below max x {max}")
            }
            Self::EmptyHeight { min, max } => {
                write!(f, "empty vertical span: min y {min} is not below max y {max}")
            }
            Self::ReversedRange { lower, upper } => {
                write!(f, "selector lower bound {lower} exceeds upper bound {upper}")
            }
            Self::WindowTooSmall { span, min } => {
                write!(f, "window span {span} is below the minimum of {min}")
            }
        }
    }
}

impl core::error::Error for RectError {}
