// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised when configuring a zoom view or attaching an image.
///
/// Event handlers never return these; degenerate events are ignored instead.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ZoomError {
    /// The image has a zero, negative or non-finite dimension.
    #[error("image size {width}x{height} is degenerate; both dimensions must be positive")]
    DegenerateImage {
        /// Reported image width.
        width: f64,
        /// Reported image height.
        height: f64,
    },
    /// The maximum zoom scale is not a finite, positive number.
    #[error("maximum zoom scale {0} must be finite and positive")]
    InvalidMaximumScale(f64),
    /// The at-minimum tolerance is negative or not finite.
    #[error("at-minimum tolerance {0} must be finite and non-negative")]
    InvalidTolerance(f64),
}
