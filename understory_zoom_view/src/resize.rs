// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container resize handling: keep the fit scale current and keep the same
//! image region centered while zoomed in.
//!
//! ## Usage
//!
//! 1) Create a [`ResizeCoordinator`] with the at-minimum tolerance.
//! 2) On every container size change, call [`ResizeCoordinator::on_size_changed`]
//!    with the old and new sizes.
//! 3) Apply the returned [`ResizeOutcome`] to the host view.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_zoom_view::{ResizeCoordinator, ViewportState, ZoomConfig};
//!
//! let mut state = ViewportState::new(Size::new(400.0, 400.0), &ZoomConfig::default()).unwrap();
//! let mut resize = ResizeCoordinator::new(0.01).unwrap();
//!
//! // First layout: fit the image.
//! resize.on_size_changed(&mut state, Size::ZERO, Size::new(400.0, 400.0));
//! assert_eq!(state.scale(), 1.0);
//!
//! // User zooms in and pans; then the container rotates.
//! state.set_scale(2.0);
//! state.set_offset(Point::new(100.0, 100.0));
//! let before = state.visible_center().unwrap();
//! let outcome = resize
//!     .on_size_changed(&mut state, Size::new(400.0, 400.0), Size::new(800.0, 400.0))
//!     .unwrap();
//! assert_eq!(outcome.offset, Some(Point::new(-100.0, 100.0)));
//! assert_eq!(state.visible_center().unwrap(), before);
//! ```

use kurbo::{Insets, Point, Size};

use crate::config::validate_tolerance;
use crate::error::ZoomError;
use crate::geometry;
use crate::modes::LayoutPhase;
use crate::state::ViewportState;

/// Values the host should apply after a container size change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeOutcome {
    /// New minimum zoom scale.
    pub min_scale: f64,
    /// New effective maximum zoom scale.
    pub max_scale: f64,
    /// New zoom scale, if the scale changed.
    pub scale: Option<f64>,
    /// New content insets.
    pub insets: Insets,
    /// New content offset, if framing had to be restored explicitly.
    ///
    /// `None` leaves offset management to the host.
    pub offset: Option<Point>,
}

/// Two-state machine driving recomputation on container size changes.
#[derive(Clone, Copy, Debug)]
pub struct ResizeCoordinator {
    phase: LayoutPhase,
    at_minimum_tolerance: f64,
}

impl ResizeCoordinator {
    /// Creates a coordinator in the [`LayoutPhase::Initial`] phase.
    ///
    /// Fails if `at_minimum_tolerance` is negative or not finite.
    pub fn new(at_minimum_tolerance: f64) -> Result<Self, ZoomError> {
        validate_tolerance(at_minimum_tolerance)?;
        Ok(Self {
            phase: LayoutPhase::Initial,
            at_minimum_tolerance,
        })
    }

    /// Current layout phase.
    #[must_use]
    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    /// Returns to the [`LayoutPhase::Initial`] phase.
    pub fn reset(&mut self) {
        self.phase = LayoutPhase::Initial;
    }

    /// Handles a container size change from `old_size` to `new_size`.
    ///
    /// An `old_size` with a zero dimension marks the first layout; nothing is
    /// recentered then. Returns `None` and leaves `state` untouched when
    /// `new_size` is degenerate.
    pub fn on_size_changed(
        &mut self,
        state: &mut ViewportState,
        old_size: Size,
        new_size: Size,
    ) -> Option<ResizeOutcome> {
        let Some(min_scale) = geometry::minimum_fit_scale(state.image_size(), new_size) else {
            log::debug!("ignoring resize to degenerate container {new_size:?}");
            return None;
        };
        let initial = !geometry::is_valid_size(old_size);

        // Both must be read before the minimum scale moves.
        let was_at_minimum = state.is_at_minimum(self.at_minimum_tolerance);
        let saved_center = if initial {
            None
        } else {
            geometry::visible_center_in_image_space(state.offset(), old_size, state.scale())
        };

        let scale_before = state.scale();
        state.set_container_size(new_size);
        state.set_min_scale(min_scale);
        if was_at_minimum {
            state.set_scale(min_scale);
        }
        let insets = state.recompute_insets();

        let offset = match saved_center {
            Some(center) if !was_at_minimum => {
                let offset = geometry::offset_to_center(center, new_size, state.scale());
                state.set_offset(offset);
                Some(offset)
            }
            _ => None,
        };

        if let LayoutPhase::Initial = self.phase {
            log::debug!("first layout at {new_size:?}, fit scale {min_scale}");
        }
        self.phase = LayoutPhase::LaidOut { size: new_size };

        let scale = (was_at_minimum || state.scale() != scale_before).then(|| state.scale());
        Some(ResizeOutcome {
            min_scale,
            max_scale: state.max_scale(),
            scale,
            insets,
            offset,
        })
    }
}
