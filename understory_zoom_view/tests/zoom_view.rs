// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_zoom_view` crate.
//!
//! These drive `ZoomView` through a recording host the way a native scroll
//! view would: layout first, then gestures, with the host echoing zoom
//! progress back as its animations run.

use kurbo::{Insets, Point, Rect, Size};
use understory_zoom_view::{
    InsetMode, LayoutPhase, TapZoomAction, ViewportHost, ZoomConfig, ZoomError, ZoomView,
};

#[derive(Clone, Debug, PartialEq)]
enum HostCall {
    MinimumScale(f64),
    MaximumScale(f64),
    Scale { scale: f64, animated: bool },
    Offset(Point),
    Insets(Insets),
    ZoomToRect(Rect),
}

#[derive(Debug, Default)]
struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    fn take(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl ViewportHost for RecordingHost {
    fn set_minimum_scale(&mut self, scale: f64) {
        self.calls.push(HostCall::MinimumScale(scale));
    }

    fn set_maximum_scale(&mut self, scale: f64) {
        self.calls.push(HostCall::MaximumScale(scale));
    }

    fn set_scale(&mut self, scale: f64, animated: bool) {
        self.calls.push(HostCall::Scale { scale, animated });
    }

    fn set_offset(&mut self, offset: Point) {
        self.calls.push(HostCall::Offset(offset));
    }

    fn set_insets(&mut self, insets: Insets) {
        self.calls.push(HostCall::Insets(insets));
    }

    fn animate_zoom_to_rect(&mut self, rect: Rect) {
        self.calls.push(HostCall::ZoomToRect(rect));
    }
}

fn view_with(image: Size, container: Size) -> ZoomView<RecordingHost> {
    let mut view =
        ZoomView::with_image(RecordingHost::default(), image, ZoomConfig::default()).unwrap();
    view.on_container_size_changed(Size::ZERO, container);
    view.host_mut().take();
    view
}

#[test]
fn first_layout_pushes_fit_scale_and_insets() {
    let mut view = ZoomView::with_image(
        RecordingHost::default(),
        Size::new(1000.0, 500.0),
        ZoomConfig::default(),
    )
    .unwrap();
    assert_eq!(view.phase(), LayoutPhase::Initial);
    view.host_mut().take();

    view.on_container_size_changed(Size::ZERO, Size::new(500.0, 500.0));

    assert_eq!(
        view.host_mut().take(),
        vec![
            HostCall::MinimumScale(0.5),
            HostCall::MaximumScale(5.0),
            HostCall::Scale {
                scale: 0.5,
                animated: false
            },
            HostCall::Insets(Insets::new(0.0, 125.0, 0.0, 125.0)),
        ]
    );
    assert!(matches!(view.phase(), LayoutPhase::LaidOut { .. }));
}

#[test]
fn rotation_while_fitted_tracks_fit_scale() {
    let mut view = view_with(Size::new(1000.0, 500.0), Size::new(500.0, 500.0));

    let outcome = view
        .on_container_size_changed(Size::new(500.0, 500.0), Size::new(500.0, 1000.0))
        .unwrap();

    assert_eq!(outcome.min_scale, 0.5);
    assert_eq!(outcome.scale, Some(0.5));
    assert_eq!(outcome.offset, None);
    let state = view.state().unwrap();
    assert_eq!(state.scale(), 0.5);
    assert_eq!(state.insets(), Insets::new(0.0, 375.0, 0.0, 375.0));
}

#[test]
fn rotation_while_zoomed_keeps_visible_center() {
    let mut view = view_with(Size::new(400.0, 400.0), Size::new(400.0, 400.0));
    view.on_zoom_progress(2.0);
    view.on_scroll(Point::new(100.0, 100.0));
    let before = view.state().unwrap().visible_center().unwrap();
    view.host_mut().take();

    view.on_container_size_changed(Size::new(400.0, 400.0), Size::new(800.0, 400.0));

    let calls = view.host_mut().take();
    assert!(calls.contains(&HostCall::Offset(Point::new(-100.0, 100.0))));
    assert!(
        !calls.iter().any(|c| matches!(c, HostCall::Scale { .. })),
        "zoomed scale must be left alone: {calls:?}"
    );
    let state = view.state().unwrap();
    assert_eq!(state.scale(), 2.0);
    let after = state.visible_center().unwrap();
    assert!((after.x - before.x).abs() < 1e-6);
    assert!((after.y - before.y).abs() < 1e-6);
}

#[test]
fn double_tap_toggles_between_fill_and_fit() {
    let mut view = view_with(Size::new(200.0, 100.0), Size::new(200.0, 200.0));
    assert_eq!(view.state().unwrap().min_scale(), 1.0);

    // Zoom in around the tap.
    let action = view.on_double_tap(Point::new(100.0, 50.0)).unwrap();
    assert_eq!(
        action,
        TapZoomAction::ZoomIn {
            scale: 2.0,
            rect: Rect::new(50.0, 0.0, 150.0, 100.0),
        }
    );
    assert_eq!(
        view.host_mut().take(),
        vec![HostCall::ZoomToRect(Rect::new(50.0, 0.0, 150.0, 100.0))]
    );

    // Host animates and reports progress.
    view.on_zoom_progress(1.5);
    view.on_zoom_progress(2.0);
    assert_eq!(view.state().unwrap().scale(), 2.0);
    view.host_mut().take();

    // Second tap anywhere zooms back out.
    let action = view.on_double_tap(Point::new(3.0, 3.0)).unwrap();
    assert_eq!(action, TapZoomAction::ZoomOut { scale: 1.0 });
    assert_eq!(
        view.host_mut().take(),
        vec![HostCall::Scale {
            scale: 1.0,
            animated: true
        }]
    );
}

#[test]
fn zoom_progress_keeps_content_centered() {
    let mut view = view_with(Size::new(200.0, 100.0), Size::new(400.0, 400.0));
    view.on_zoom_progress(3.0);
    // Content is 600x300: wider than the container, shorter than it.
    assert_eq!(
        view.host_mut().take(),
        vec![HostCall::Insets(Insets::new(0.0, 50.0, 0.0, 50.0))]
    );

    // Over-zoom from a pinch is clamped to the maximum.
    view.on_zoom_progress(50.0);
    assert_eq!(view.state().unwrap().scale(), 5.0);
}

#[test]
fn top_left_inset_mode_leaves_bottom_right_at_zero() {
    let config = ZoomConfig::default().with_inset_mode(InsetMode::TopLeft);
    let mut view =
        ZoomView::with_image(RecordingHost::default(), Size::new(100.0, 50.0), config).unwrap();
    view.on_container_size_changed(Size::ZERO, Size::new(100.0, 100.0));
    assert_eq!(
        view.state().unwrap().insets(),
        Insets::new(0.0, 25.0, 0.0, 0.0)
    );
}

#[test]
fn events_without_image_are_ignored() {
    let mut view = ZoomView::new(RecordingHost::default(), ZoomConfig::default()).unwrap();
    assert_eq!(
        view.on_container_size_changed(Size::ZERO, Size::new(300.0, 300.0)),
        None
    );
    assert_eq!(view.on_double_tap(Point::new(1.0, 1.0)), None);
    view.on_zoom_progress(2.0);
    view.on_scroll(Point::new(5.0, 5.0));
    assert!(!view.reset_zoom());
    assert!(view.host().calls.is_empty());
    assert_eq!(view.container_size(), Size::new(300.0, 300.0));
}

#[test]
fn attaching_after_layout_fits_immediately() {
    let mut view = ZoomView::new(RecordingHost::default(), ZoomConfig::default()).unwrap();
    view.on_container_size_changed(Size::ZERO, Size::new(300.0, 150.0));
    view.attach_image(Size::new(600.0, 600.0)).unwrap();

    let state = view.state().unwrap();
    assert_eq!(state.min_scale(), 0.25);
    assert_eq!(state.scale(), 0.25);
    assert_eq!(
        view.host_mut().take(),
        vec![
            HostCall::MinimumScale(0.25),
            HostCall::MaximumScale(5.0),
            HostCall::Scale {
                scale: 0.25,
                animated: false
            },
            HostCall::Insets(Insets::new(75.0, 0.0, 75.0, 0.0)),
        ]
    );

    view.detach_image();
    assert!(view.state().is_none());
    assert_eq!(view.phase(), LayoutPhase::Initial);
}

#[test]
fn degenerate_inputs_are_rejected_or_ignored() {
    let err = ZoomView::with_image(
        RecordingHost::default(),
        Size::new(100.0, 0.0),
        ZoomConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ZoomError::DegenerateImage { .. }));

    let err = ZoomView::new(
        RecordingHost::default(),
        ZoomConfig::default().with_maximum_scale(f64::NAN),
    )
    .unwrap_err();
    assert!(matches!(err, ZoomError::InvalidMaximumScale(_)));

    let mut view = view_with(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    assert_eq!(
        view.on_container_size_changed(Size::new(100.0, 100.0), Size::ZERO),
        None
    );
    assert!(view.host().calls.is_empty());
    assert_eq!(view.state().unwrap().container_size(), Size::new(100.0, 100.0));
}

#[test]
fn maximum_scale_below_fit_is_raised() {
    let config = ZoomConfig::default().with_maximum_scale(1.5);
    let mut view =
        ZoomView::with_image(RecordingHost::default(), Size::new(10.0, 10.0), config).unwrap();
    view.on_container_size_changed(Size::ZERO, Size::new(100.0, 100.0));

    let state = view.state().unwrap();
    assert_eq!(state.min_scale(), 10.0);
    assert_eq!(state.max_scale(), 10.0);
    assert!(state.min_scale() <= state.scale() && state.scale() <= state.max_scale());
}

#[test]
fn runtime_maximum_scale_change_pulls_scale_down() {
    let mut view = view_with(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    view.on_zoom_progress(4.0);
    view.host_mut().take();

    view.set_maximum_scale(2.0).unwrap();
    assert_eq!(
        view.host_mut().take(),
        vec![
            HostCall::MaximumScale(2.0),
            HostCall::Scale {
                scale: 2.0,
                animated: false
            },
        ]
    );
    assert_eq!(view.config().maximum_scale, 2.0);
    assert!(view.set_maximum_scale(-3.0).is_err());
    assert_eq!(view.config().maximum_scale, 2.0);
}

#[test]
fn reset_zoom_only_when_zoomed() {
    let mut view = view_with(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    assert!(!view.reset_zoom());
    view.on_zoom_progress(2.0);
    view.host_mut().take();
    assert!(view.reset_zoom());
    assert_eq!(
        view.into_host().calls,
        vec![HostCall::Scale {
            scale: 1.0,
            animated: true
        }]
    );
}

#[test]
fn zoom_bounce_below_minimum_keeps_content_centered() {
    let mut view = view_with(Size::new(100.0, 100.0), Size::new(100.0, 100.0));

    // The host overshoots the minimum while pinching out.
    view.on_zoom_progress(0.5);
    assert_eq!(
        view.host_mut().take(),
        vec![HostCall::Insets(Insets::new(25.0, 25.0, 25.0, 25.0))]
    );
    assert_eq!(view.state().unwrap().scale(), 1.0);

    // Bounce settles back at the minimum.
    view.on_zoom_progress(1.0);
    assert_eq!(
        view.host_mut().take(),
        vec![HostCall::Insets(Insets::new(0.0, 0.0, 0.0, 0.0))]
    );
}

#[test]
fn overflowing_fit_scale_never_reaches_state() {
    let mut view = ZoomView::with_image(
        RecordingHost::default(),
        Size::new(1e-300, 1e-300),
        ZoomConfig::default(),
    )
    .unwrap();
    view.host_mut().take();

    assert_eq!(
        view.on_container_size_changed(Size::ZERO, Size::new(1e10, 1e10)),
        None
    );
    assert!(view.host().calls.is_empty());
    let state = view.state().unwrap();
    assert!(state.scale().is_finite());
    assert!(state.min_scale().is_finite());
    assert!(state.max_scale().is_finite());
}

#[test]
fn configured_tolerance_decides_fit_tracking() {
    let resize_after_slight_zoom = |config: ZoomConfig| {
        let mut view =
            ZoomView::with_image(RecordingHost::default(), Size::new(100.0, 100.0), config)
                .unwrap();
        view.on_container_size_changed(Size::ZERO, Size::new(100.0, 100.0));
        view.on_zoom_progress(1.05);
        view.on_container_size_changed(Size::new(100.0, 100.0), Size::new(50.0, 50.0))
            .unwrap()
    };

    // A loose tolerance treats 1.05 as "not zoomed": the view re-fits.
    let loose = resize_after_slight_zoom(ZoomConfig::default().with_at_minimum_tolerance(0.1));
    assert_eq!(loose.scale, Some(0.5));
    assert_eq!(loose.offset, None);

    // The default tolerance treats it as zoomed: scale and framing are kept.
    let strict = resize_after_slight_zoom(ZoomConfig::default());
    assert_eq!(strict.scale, None);
    assert!(strict.offset.is_some());

    let err = ZoomView::new(
        RecordingHost::default(),
        ZoomConfig::default().with_at_minimum_tolerance(f64::NAN),
    )
    .unwrap_err();
    assert!(matches!(err, ZoomError::InvalidTolerance(_)));
}
