// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry for the zoomable image view.
//!
//! Nothing in this module holds state. Three coordinate spaces appear:
//! - **Image space**: the image's natural, unscaled pixel grid.
//! - **Content space**: image space multiplied by the current zoom scale.
//! - **Viewport space**: the visible container, whose origin sits at the
//!   content offset.
//!
//! Functions that divide by an image dimension or by a scale return `None`
//! when that divisor is zero, negative or not finite, so that callers can
//! skip the recomputation instead of storing `NaN` or infinities.

use kurbo::{Insets, Point, Rect, Size};

use crate::modes::InsetMode;

/// Returns `true` when both dimensions are finite and strictly positive.
#[must_use]
pub fn is_valid_size(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

/// Largest scale at which the whole image fits inside the container.
///
/// This is `min(container.width / image.width, container.height / image.height)`.
/// Returns `None` if either size has a zero or invalid dimension, or if the
/// ratio overflows.
#[must_use]
pub fn minimum_fit_scale(image_size: Size, container_size: Size) -> Option<f64> {
    if !is_valid_size(image_size) || !is_valid_size(container_size) {
        return None;
    }
    let sx = container_size.width / image_size.width;
    let sy = container_size.height / image_size.height;
    Some(sx.min(sy)).filter(|s| is_valid_scale(*s))
}

/// Smallest scale at which the content covers the whole container.
///
/// This is `max(container.width / content.width, container.height / content.height)`;
/// one axis fills exactly and the other overflows. Used as the double-tap
/// zoom-in target.
#[must_use]
pub fn fill_scale(container_size: Size, content_natural_size: Size) -> Option<f64> {
    if !is_valid_size(content_natural_size) || !is_valid_size(container_size) {
        return None;
    }
    let sx = container_size.width / content_natural_size.width;
    let sy = container_size.height / content_natural_size.height;
    Some(sx.max(sy)).filter(|s| is_valid_scale(*s))
}

/// Insets that center `content_size` inside `container_size`.
///
/// On each axis the slack is `max(0, (container - content) / 2)`. With
/// [`InsetMode::TopLeft`] only the top and left edges receive it; with
/// [`InsetMode::Symmetric`] both opposite edges do. The result never has a
/// negative component.
#[must_use]
pub fn centering_insets(content_size: Size, container_size: Size, mode: InsetMode) -> Insets {
    let dx = ((container_size.width - content_size.width) * 0.5).max(0.0);
    let dy = ((container_size.height - content_size.height) * 0.5).max(0.0);
    match mode {
        InsetMode::TopLeft => Insets::new(dx, dy, 0.0, 0.0),
        InsetMode::Symmetric => Insets::new(dx, dy, dx, dy),
    }
}

/// Rectangle to hand to a zoom-to-rect primitive so that `tap_point` ends up
/// centered at `target_scale`.
///
/// `tap_point` is in image space. The rectangle has size
/// `container_size / target_scale` and is centered on the tap.
#[must_use]
pub fn zoom_rect(tap_point: Point, target_scale: f64, container_size: Size) -> Option<Rect> {
    if !is_valid_scale(target_scale) {
        return None;
    }
    let size = Size::new(
        container_size.width / target_scale,
        container_size.height / target_scale,
    );
    let origin = tap_point - size.to_vec2() * 0.5;
    Some(Rect::from_origin_size(origin, size))
}

/// Image-space point currently shown at the center of the viewport.
#[must_use]
pub fn visible_center_in_image_space(
    offset: Point,
    container_size: Size,
    zoom_scale: f64,
) -> Option<Point> {
    if !is_valid_scale(zoom_scale) {
        return None;
    }
    let center = offset + container_size.to_vec2() * 0.5;
    Some(Point::new(center.x / zoom_scale, center.y / zoom_scale))
}

/// Content offset that puts `image_center` at the center of the viewport.
///
/// Inverse of [`visible_center_in_image_space`].
#[must_use]
pub fn offset_to_center(image_center: Point, container_size: Size, zoom_scale: f64) -> Point {
    let half = container_size.to_vec2() * 0.5;
    Point::new(
        image_center.x * zoom_scale - half.x,
        image_center.y * zoom_scale - half.y,
    )
}

/// Image-space rectangle visible through the viewport.
#[must_use]
pub fn visible_image_rect(offset: Point, container_size: Size, zoom_scale: f64) -> Option<Rect> {
    if !is_valid_scale(zoom_scale) {
        return None;
    }
    let origin = Point::new(offset.x / zoom_scale, offset.y / zoom_scale);
    let size = Size::new(
        container_size.width / zoom_scale,
        container_size.height / zoom_scale,
    );
    Some(Rect::from_origin_size(origin, size))
}

/// Scales `size` uniformly.
#[must_use]
pub fn scaled(size: Size, scale: f64) -> Size {
    Size::new(size.width * scale, size.height * scale)
}

#[cfg(test)]
pub(crate) fn approx_eq_point(a: Point, b: Point, tolerance: f64) -> bool {
    let d = a - b;
    d.x.abs() <= tolerance && d.y.abs() <= tolerance
}
