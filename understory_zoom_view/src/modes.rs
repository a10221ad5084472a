// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How centering insets are distributed when the scaled image is smaller
/// than the container on an axis.
///
/// This mode is consulted by [`crate::geometry::centering_insets`] and by
/// every [`crate::ViewportState`] inset recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InsetMode {
    /// Put the slack on both opposite edges, so the content sits in the
    /// middle of the container and the scrollable extent stays balanced.
    #[default]
    Symmetric,
    /// Put the slack only on the top and left edges.
    ///
    /// Bottom and right insets stay at zero. Hosts that need exact parity
    /// with a top/left-only layout can opt into this.
    TopLeft,
}

/// Lifecycle phase of the [`crate::ResizeCoordinator`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LayoutPhase {
    /// No non-zero container size has been observed yet.
    #[default]
    Initial,
    /// A container size has been observed; framing is preserved across
    /// further size changes.
    LaidOut {
        /// The most recently observed container size.
        size: kurbo::Size,
    },
}
