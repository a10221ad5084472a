// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect};

/// The platform scroll/zoom container a [`crate::ZoomView`] drives.
///
/// Implementations wrap a native widget (or a canvas-based equivalent) that
/// owns gesture recognition, inertial scrolling, bounce and animation. The
/// zoom view only computes targets and pushes them through this trait; the
/// host reports back through the `ZoomView::on_*` methods.
///
/// All calls happen on the thread that owns the `ZoomView`.
pub trait ViewportHost {
    /// Sets the lower zoom bound.
    fn set_minimum_scale(&mut self, scale: f64);

    /// Sets the upper zoom bound.
    fn set_maximum_scale(&mut self, scale: f64);

    /// Sets the zoom scale, optionally animating to it.
    fn set_scale(&mut self, scale: f64, animated: bool);

    /// Sets the content offset.
    fn set_offset(&mut self, offset: Point);

    /// Sets the content insets.
    fn set_insets(&mut self, insets: Insets);

    /// Animates so that `rect`, in image space, fills the viewport.
    fn animate_zoom_to_rect(&mut self, rect: Rect);
}

impl<H: ViewportHost + ?Sized> ViewportHost for &mut H {
    fn set_minimum_scale(&mut self, scale: f64) {
        (**self).set_minimum_scale(scale);
    }

    fn set_maximum_scale(&mut self, scale: f64) {
        (**self).set_maximum_scale(scale);
    }

    fn set_scale(&mut self, scale: f64, animated: bool) {
        (**self).set_scale(scale, animated);
    }

    fn set_offset(&mut self, offset: Point) {
        (**self).set_offset(offset);
    }

    fn set_insets(&mut self, insets: Insets) {
        (**self).set_insets(insets);
    }

    fn animate_zoom_to_rect(&mut self, rect: Rect) {
        (**self).animate_zoom_to_rect(rect);
    }
}
