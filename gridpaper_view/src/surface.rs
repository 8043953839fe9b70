// Copyright 2026 the Gridpaper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::rect::DisplayRect;

/// Something that can re-render itself for a new visible window.
///
/// The controller calls [`DrawingSurface::set_view`] after every change to its
/// display rectangle and never otherwise. Implementations decide how to map
/// the window onto their own pixels; [`DisplayRect::view_transform`] covers
/// the common case.
pub trait DrawingSurface {
    /// Re-renders the surface to show `rect`.
    fn set_view(&mut self, rect: &DisplayRect);
}

/// Headless surface: accepts every window and draws nothing.
impl DrawingSurface for () {
    fn set_view(&mut self, _rect: &DisplayRect) {}
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn set_view(&mut self, rect: &DisplayRect) {
        (**self).set_view(rect);
    }
}
