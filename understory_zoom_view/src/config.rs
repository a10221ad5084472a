// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ZoomError;
use crate::modes::InsetMode;

/// Default upper zoom bound.
pub const DEFAULT_MAXIMUM_SCALE: f64 = 5.0;

/// Default tolerance for treating the current scale as "at minimum".
pub const DEFAULT_AT_MINIMUM_TOLERANCE: f64 = 0.01;

/// Construction parameters for a [`crate::ZoomView`].
///
/// ```rust
/// use understory_zoom_view::{InsetMode, ZoomConfig};
///
/// let config = ZoomConfig::default()
///     .with_maximum_scale(8.0)
///     .with_inset_mode(InsetMode::TopLeft);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Upper zoom bound. Raised to the minimum fit scale when it is lower.
    pub maximum_scale: f64,
    /// Scales within this distance of the minimum count as "not zoomed".
    pub at_minimum_tolerance: f64,
    /// How centering insets are distributed.
    pub inset_mode: InsetMode,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            maximum_scale: DEFAULT_MAXIMUM_SCALE,
            at_minimum_tolerance: DEFAULT_AT_MINIMUM_TOLERANCE,
            inset_mode: InsetMode::default(),
        }
    }
}

impl ZoomConfig {
    /// Sets the maximum zoom scale.
    #[must_use]
    pub fn with_maximum_scale(mut self, maximum_scale: f64) -> Self {
        self.maximum_scale = maximum_scale;
        self
    }

    /// Sets the at-minimum tolerance.
    #[must_use]
    pub fn with_at_minimum_tolerance(mut self, tolerance: f64) -> Self {
        self.at_minimum_tolerance = tolerance;
        self
    }

    /// Sets the inset mode.
    #[must_use]
    pub fn with_inset_mode(mut self, mode: InsetMode) -> Self {
        self.inset_mode = mode;
        self
    }

    /// Checks that every field is usable.
    ///
    /// A maximum scale below the fit scale is accepted here; it can only be
    /// detected once an image and container are known, and is clamped then.
    pub fn validate(&self) -> Result<(), ZoomError> {
        validate_maximum_scale(self.maximum_scale)?;
        validate_tolerance(self.at_minimum_tolerance)
    }
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<(), ZoomError> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(ZoomError::InvalidTolerance(tolerance))
    }
}

pub(crate) fn validate_maximum_scale(scale: f64) -> Result<(), ZoomError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ZoomError::InvalidMaximumScale(scale))
    }
}
