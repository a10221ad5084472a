// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::config::ZoomConfig;
use crate::error::ZoomError;
use crate::host::ViewportHost;
use crate::modes::LayoutPhase;
use crate::resize::{ResizeCoordinator, ResizeOutcome};
use crate::state::ViewportState;
use crate::tap_zoom::{TapZoomAction, tap_zoom_action};

/// Zoomable image view driven by host events.
///
/// `ZoomView` owns the [`ViewportState`] for the attached image and the
/// [`ResizeCoordinator`], and pushes every computed change to its
/// [`ViewportHost`]. It expects the host to:
/// - Call [`ZoomView::on_container_size_changed`] on layout.
/// - Call [`ZoomView::on_double_tap`] with the tap in image space.
/// - Call [`ZoomView::on_zoom_progress`] while a pinch or zoom animation runs.
/// - Call [`ZoomView::on_scroll`] when the user pans.
///
/// Every method takes `&mut self`; multi-threaded hosts must confine the view
/// to one thread or wrap it in a single mutex.
#[derive(Debug)]
pub struct ZoomView<H> {
    host: H,
    config: ZoomConfig,
    state: Option<ViewportState>,
    resize: ResizeCoordinator,
    container_size: Size,
}

impl<H: ViewportHost> ZoomView<H> {
    /// Creates a view with no image attached.
    pub fn new(host: H, config: ZoomConfig) -> Result<Self, ZoomError> {
        config.validate()?;
        Ok(Self {
            host,
            config,
            state: None,
            resize: ResizeCoordinator::new(config.at_minimum_tolerance)?,
            container_size: Size::ZERO,
        })
    }

    /// Creates a view and attaches an image of `image_size` pixels.
    pub fn with_image(host: H, image_size: Size, config: ZoomConfig) -> Result<Self, ZoomError> {
        let mut view = Self::new(host, config)?;
        view.attach_image(image_size)?;
        Ok(view)
    }

    /// Attaches an image, replacing any previous one.
    ///
    /// If a container size is already known, the image is fitted right away as
    /// if this were the first layout.
    pub fn attach_image(&mut self, image_size: Size) -> Result<(), ZoomError> {
        let mut state = ViewportState::new(image_size, &self.config)?;
        log::debug!("attaching image {image_size:?}");
        self.resize.reset();
        let outcome = self
            .resize
            .on_size_changed(&mut state, Size::ZERO, self.container_size);
        self.host.set_minimum_scale(state.min_scale());
        self.host.set_maximum_scale(state.max_scale());
        self.host.set_scale(state.scale(), false);
        if let Some(outcome) = outcome {
            self.host.set_insets(outcome.insets);
        }
        self.state = Some(state);
        Ok(())
    }

    /// Detaches the current image. Later events are ignored until a new image
    /// is attached.
    pub fn detach_image(&mut self) {
        if self.state.take().is_some() {
            log::debug!("detaching image");
        }
        self.resize.reset();
    }

    /// Handles a container size change.
    pub fn on_container_size_changed(
        &mut self,
        old_size: Size,
        new_size: Size,
    ) -> Option<ResizeOutcome> {
        self.container_size = new_size;
        let state = self.state.as_mut()?;
        let outcome = self.resize.on_size_changed(state, old_size, new_size)?;
        self.host.set_minimum_scale(outcome.min_scale);
        self.host.set_maximum_scale(outcome.max_scale);
        if let Some(scale) = outcome.scale {
            self.host.set_scale(scale, false);
        }
        self.host.set_insets(outcome.insets);
        if let Some(offset) = outcome.offset {
            self.host.set_offset(offset);
        }
        Some(outcome)
    }

    /// Handles a double tap at `location`, given in image space.
    pub fn on_double_tap(&mut self, location: Point) -> Option<TapZoomAction> {
        let state = self.state.as_ref()?;
        let action = tap_zoom_action(state, location)?;
        match action {
            TapZoomAction::ZoomOut { scale } => self.host.set_scale(scale, true),
            TapZoomAction::ZoomIn { rect, .. } => self.host.animate_zoom_to_rect(rect),
        }
        Some(action)
    }

    /// Handles a live scale change from a pinch gesture or zoom animation.
    ///
    /// Keeps the content inset-centered while the scale moves. The stored
    /// scale is clamped into range, but the insets follow `live_scale` itself
    /// so the content stays centered while the host bounces past a limit.
    pub fn on_zoom_progress(&mut self, live_scale: f64) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.set_scale(live_scale);
        let insets = state.recompute_insets_at(live_scale);
        log::trace!("zoom progress: live scale {live_scale}, insets {insets:?}");
        self.host.set_insets(insets);
    }

    /// Records a content offset reported by the host after a pan.
    pub fn on_scroll(&mut self, offset: Point) {
        if let Some(state) = self.state.as_mut() {
            state.set_offset(offset);
        }
    }

    /// Animates back to the minimum scale if currently zoomed in.
    ///
    /// Returns `true` when a zoom-out was requested.
    pub fn reset_zoom(&mut self) -> bool {
        let Some(state) = self.state.as_ref() else {
            return false;
        };
        if state.scale() > state.min_scale() {
            self.host.set_scale(state.min_scale(), true);
            true
        } else {
            false
        }
    }

    /// Changes the maximum zoom scale.
    pub fn set_maximum_scale(&mut self, maximum_scale: f64) -> Result<(), ZoomError> {
        let config = self.config.with_maximum_scale(maximum_scale);
        config.validate()?;
        self.config = config;
        if let Some(state) = self.state.as_mut() {
            let scale_before = state.scale();
            state.set_maximum_scale(maximum_scale)?;
            self.host.set_maximum_scale(state.max_scale());
            if state.scale() != scale_before {
                self.host.set_scale(state.scale(), false);
            }
        }
        Ok(())
    }

    /// State for the attached image, if any.
    #[must_use]
    pub fn state(&self) -> Option<&ViewportState> {
        self.state.as_ref()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Layout phase of the resize coordinator.
    #[must_use]
    pub fn phase(&self) -> LayoutPhase {
        self.resize.phase()
    }

    /// Last container size reported by the host.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Shared access to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the view and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }
}
