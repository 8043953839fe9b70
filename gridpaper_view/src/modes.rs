// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One of the two independently synchronized axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis, driven by the horizontal selector.
    Horizontal,
    /// The Y axis, driven by the vertical selector.
    Vertical,
}

/// How increasing selector values relate to increasing world coordinates.
///
/// This is consulted by [`crate::AxisMapping`] in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisDirection {
    /// Selector start maps to the world minimum.
    #[default]
    Forward,
    /// Selector start maps to the world maximum.
    ///
    /// Vertical bars measure from the top of their track while world Y grows
    /// upward, so [`crate::ViewportController`] uses this for the Y axis.
    Inverted,
}

impl AxisDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Inverted,
            Self::Inverted => Self::Forward,
        }
    }
}

/// What to do with a selector update whose window is too small.
///
/// "Too small" means empty (`lower == upper`) or narrower than the minimum
/// window size configured on the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// Drop the update and keep the last valid window.
    #[default]
    Reject,
    /// Widen the window about its center to the minimum size, staying inside
    /// the extent.
    ///
    /// With a zero minimum size there is nothing to widen to, so empty windows
    /// are still rejected.
    ClampToMinimum,
}
