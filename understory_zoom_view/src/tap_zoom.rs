// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap zoom toggle.
//!
//! A double tap either zooms out to the fit scale (when zoomed in at all) or
//! zooms in to the fill scale centered on the tap. There is no intermediate
//! step; the host performs the animation.

use kurbo::{Point, Rect};

use crate::geometry;
use crate::state::ViewportState;

/// Zoom request produced by a double tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapZoomAction {
    /// Animate to `scale` and let the host recenter.
    ZoomOut {
        /// Target scale (the current minimum scale).
        scale: f64,
    },
    /// Animate so that `rect` (in image space) fills the container.
    ZoomIn {
        /// Target scale implied by `rect`.
        scale: f64,
        /// Image-space rectangle to zoom to.
        rect: Rect,
    },
}

impl TapZoomAction {
    /// Scale the host ends up at once the request completes.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        match *self {
            Self::ZoomOut { scale } | Self::ZoomIn { scale, .. } => scale,
        }
    }
}

/// Decides what a double tap at `tap_point` (image space) should do.
///
/// Any scale strictly above the minimum zooms out; otherwise the view zooms
/// in to `max(fill scale, min scale)`, capped at the maximum scale. The fill
/// scale is taken against the image's natural size, the same unscaled space
/// `tap_point` and the returned rect live in. Returns `None` before a usable
/// container size is known.
#[must_use]
pub fn tap_zoom_action(state: &ViewportState, tap_point: Point) -> Option<TapZoomAction> {
    if state.scale() > state.min_scale() {
        log::debug!("double tap: zooming out to {}", state.min_scale());
        return Some(TapZoomAction::ZoomOut {
            scale: state.min_scale(),
        });
    }

    let container = state.container_size();
    let fill = geometry::fill_scale(container, state.image_size())?;
    let scale = fill.max(state.min_scale()).min(state.max_scale());
    let rect = geometry::zoom_rect(tap_point, scale, container)?;
    log::debug!("double tap at {tap_point:?}: zooming in to {scale}");
    Some(TapZoomAction::ZoomIn { scale, rect })
}
