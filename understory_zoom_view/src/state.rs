// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect, Size};

use crate::config::{ZoomConfig, validate_maximum_scale};
use crate::error::ZoomError;
use crate::geometry;
use crate::modes::InsetMode;

/// Mutable zoom/pan record for one image inside one container.
///
/// `ViewportState` is created when an image is attached and lives until it is
/// detached. It maintains `min_scale <= scale <= max_scale` at all times:
/// - `min_scale` is the fit scale for the current container (or `1.0` before
///   any container has been observed).
/// - `max_scale` is the configured maximum, raised to `min_scale` when the
///   configuration asks for less.
/// - `offset` is the content offset in content space (the scaled image
///   position shown at the container's top-left corner).
/// - `insets` pad the content so that a smaller-than-container image stays
///   centered; offsets are never clamped directly.
#[derive(Clone, Debug)]
pub struct ViewportState {
    image_size: Size,
    container_size: Size,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    configured_max_scale: f64,
    fit_observed: bool,
    offset: Point,
    insets: Insets,
    inset_mode: InsetMode,
}

impl ViewportState {
    /// Creates state for an image of `image_size` pixels.
    ///
    /// - Initial scale and minimum scale are `1.0`.
    /// - Offset is zero and no container size is known yet.
    ///
    /// Fails if the image has a degenerate dimension or the configuration is
    /// invalid.
    pub fn new(image_size: Size, config: &ZoomConfig) -> Result<Self, ZoomError> {
        if !geometry::is_valid_size(image_size) {
            return Err(ZoomError::DegenerateImage {
                width: image_size.width,
                height: image_size.height,
            });
        }
        config.validate()?;
        let mut state = Self {
            image_size,
            container_size: Size::ZERO,
            scale: 1.0,
            min_scale: 1.0,
            max_scale: config.maximum_scale,
            configured_max_scale: config.maximum_scale,
            fit_observed: false,
            offset: Point::ZERO,
            insets: Insets::uniform(0.0),
            inset_mode: config.inset_mode,
        };
        state.apply_limits();
        Ok(state)
    }

    /// Natural size of the image in pixels.
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Last container size applied to this state.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current minimum zoom scale (the fit scale).
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Effective maximum zoom scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Current content offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Current centering insets.
    #[must_use]
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Inset distribution policy.
    #[must_use]
    pub fn inset_mode(&self) -> InsetMode {
        self.inset_mode
    }

    /// Size of the image at the current scale.
    #[must_use]
    pub fn content_size(&self) -> Size {
        geometry::scaled(self.image_size, self.scale)
    }

    /// Returns `true` when a real fit scale has forced the effective maximum
    /// above the configured one.
    #[must_use]
    pub fn is_max_scale_raised(&self) -> bool {
        self.fit_observed && self.configured_max_scale < self.min_scale
    }

    /// Returns `true` when the scale is within `tolerance` of the minimum.
    #[must_use]
    pub fn is_at_minimum(&self, tolerance: f64) -> bool {
        (self.scale - self.min_scale).abs() < tolerance
    }

    /// Image-space point at the center of the viewport.
    #[must_use]
    pub fn visible_center(&self) -> Option<Point> {
        geometry::visible_center_in_image_space(self.offset, self.container_size, self.scale)
    }

    /// Image-space rectangle visible through the viewport.
    #[must_use]
    pub fn visible_rect(&self) -> Option<Rect> {
        geometry::visible_image_rect(self.offset, self.container_size, self.scale)
    }

    /// Sets the zoom scale, clamping it into `[min_scale, max_scale]`.
    ///
    /// Non-finite values are ignored. Returns the scale actually stored.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        if scale.is_finite() {
            self.scale = scale.clamp(self.min_scale, self.max_scale);
        }
        self.scale
    }

    /// Sets the content offset. Non-finite offsets are ignored.
    pub fn set_offset(&mut self, offset: Point) {
        if offset.is_finite() {
            self.offset = offset;
        }
    }

    /// Changes the configured maximum scale.
    ///
    /// The effective maximum is still raised to the minimum scale when needed,
    /// and the current scale is pulled down if it now exceeds the maximum.
    pub fn set_maximum_scale(&mut self, maximum_scale: f64) -> Result<(), ZoomError> {
        validate_maximum_scale(maximum_scale)?;
        self.configured_max_scale = maximum_scale;
        self.apply_limits();
        Ok(())
    }

    /// Recomputes the centering insets from the current scale and container.
    pub fn recompute_insets(&mut self) -> Insets {
        self.insets =
            geometry::centering_insets(self.content_size(), self.container_size, self.inset_mode);
        self.insets
    }

    /// Recomputes the centering insets for a live scale reported mid-gesture.
    ///
    /// `live_scale` may lie outside `[min_scale, max_scale]` while the host
    /// bounces; the stored scale is not changed. Falls back to the stored
    /// scale when `live_scale` is not finite and positive.
    pub fn recompute_insets_at(&mut self, live_scale: f64) -> Insets {
        let scale = if live_scale.is_finite() && live_scale > 0.0 {
            live_scale
        } else {
            self.scale
        };
        self.insets = geometry::centering_insets(
            geometry::scaled(self.image_size, scale),
            self.container_size,
            self.inset_mode,
        );
        self.insets
    }

    pub(crate) fn set_container_size(&mut self, size: Size) {
        self.container_size = size;
    }

    /// Stores a new minimum scale and re-establishes the scale invariant.
    pub(crate) fn set_min_scale(&mut self, min_scale: f64) {
        self.min_scale = min_scale;
        self.fit_observed = true;
        self.apply_limits();
    }

    fn apply_limits(&mut self) {
        if self.configured_max_scale < self.min_scale {
            // The placeholder minimum before the first layout is not a fit scale.
            if self.fit_observed {
                log::warn!(
                    "maximum zoom scale {} is below the fit scale {}; raising it",
                    self.configured_max_scale,
                    self.min_scale
                );
            }
            self.max_scale = self.min_scale;
        } else {
            self.max_scale = self.configured_max_scale;
        }
        self.scale = self.scale.clamp(self.min_scale, self.max_scale);
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportStateDebugInfo {
        ViewportStateDebugInfo {
            image_size: self.image_size,
            container_size: self.container_size,
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            offset: self.offset,
            insets: self.insets,
            visible_rect: self.visible_rect(),
        }
    }
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportStateDebugInfo {
    /// Natural image size.
    pub image_size: Size,
    /// Current container size.
    pub container_size: Size,
    /// Current zoom scale.
    pub scale: f64,
    /// Minimum zoom scale.
    pub min_scale: f64,
    /// Effective maximum zoom scale.
    pub max_scale: f64,
    /// Content offset.
    pub offset: Point,
    /// Centering insets.
    pub insets: Insets,
    /// Image-space rectangle visible through the viewport, if defined.
    pub visible_rect: Option<Rect>,
}
