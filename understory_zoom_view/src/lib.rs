// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Zoom View: a headless zoomable image view.
//!
//! This crate holds the logic behind a pinch-to-zoom, double-tap-to-zoom image
//! view that sits on top of a platform scroll/zoom container. It focuses on:
//! - The fit scale (smallest zoom, whole image visible) and the fill scale
//!   (double-tap target, container fully covered).
//! - Centering insets that keep a small image in the middle of the container.
//! - Keeping the same image region centered when the container is resized,
//!   for example on rotation.
//! - The double-tap zoom-in / zoom-out toggle.
//!
//! It does **not** recognize gestures, simulate scroll physics, decode images
//! or animate. Callers are expected to:
//! - Implement [`ViewportHost`] over their native scroll/zoom widget.
//! - Forward layout, double-tap, zoom and scroll events to [`ZoomView`].
//! - Let the host animate toward the scales and rectangles it is given.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Point, Rect, Size};
//! use understory_zoom_view::{TapZoomAction, ViewportHost, ZoomConfig, ZoomView};
//!
//! #[derive(Debug, Default)]
//! struct Host {
//!     scale: f64,
//!     zoom_rect: Option<Rect>,
//! }
//!
//! impl ViewportHost for Host {
//!     fn set_minimum_scale(&mut self, _scale: f64) {}
//!     fn set_maximum_scale(&mut self, _scale: f64) {}
//!     fn set_scale(&mut self, scale: f64, _animated: bool) {
//!         self.scale = scale;
//!     }
//!     fn set_offset(&mut self, _offset: Point) {}
//!     fn set_insets(&mut self, _insets: Insets) {}
//!     fn animate_zoom_to_rect(&mut self, rect: Rect) {
//!         self.zoom_rect = Some(rect);
//!     }
//! }
//!
//! let mut view =
//!     ZoomView::with_image(Host::default(), Size::new(200.0, 100.0), ZoomConfig::default())
//!         .unwrap();
//!
//! // First layout fits the image: 200x100 in 400x400 gives a fit scale of 2.
//! view.on_container_size_changed(Size::ZERO, Size::new(400.0, 400.0));
//! assert_eq!(view.host().scale, 2.0);
//!
//! // Double tap zooms in to the fill scale around the tap.
//! let action = view.on_double_tap(Point::new(100.0, 50.0)).unwrap();
//! assert!(matches!(action, TapZoomAction::ZoomIn { scale, .. } if scale == 4.0));
//! assert_eq!(view.host().zoom_rect, Some(Rect::new(50.0, 0.0, 150.0, 100.0)));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform; there is no rotation of the content itself. "Rotation"
//!   only means the container changing shape.
//! - The offset is never clamped. Small content is centered with insets, as
//!   native scroll views do.
//! - All state lives in one [`ViewportState`] per attached image and is only
//!   touched through `&mut` access, so it stays confined to its owner.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod error;
pub mod geometry;
mod host;
mod modes;
mod resize;
mod state;
mod tap_zoom;
mod view;

pub use config::{DEFAULT_AT_MINIMUM_TOLERANCE, DEFAULT_MAXIMUM_SCALE, ZoomConfig};
pub use error::ZoomError;
pub use host::ViewportHost;
pub use modes::{InsetMode, LayoutPhase};
pub use resize::{ResizeCoordinator, ResizeOutcome};
pub use state::{ViewportState, ViewportStateDebugInfo};
pub use tap_zoom::{TapZoomAction, tap_zoom_action};
pub use view::ZoomView;
