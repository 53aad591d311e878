// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Interpolation state of the drawer glyph.
///
/// `progress` runs from `0.0` (closed, three bars) to `1.0` (open, arrow) and
/// is always clamped into that range. `mirrored` flips the vertical sweep of
/// the arrow so a "back" rotation can be told apart from a "forward" one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphState {
    progress: f64,
    mirrored: bool,
}

impl GlyphState {
    /// The closed rest pose.
    pub const CLOSED: Self = Self {
        progress: 0.0,
        mirrored: false,
    };

    /// The open rest pose.
    ///
    /// The resting arrow counts as mirrored.
    pub const OPEN: Self = Self {
        progress: 1.0,
        mirrored: true,
    };

    /// Creates a state, clamping `progress` into `[0, 1]`.
    ///
    /// A NaN progress is treated as `0.0`.
    #[must_use]
    pub fn new(progress: f64, mirrored: bool) -> Self {
        Self {
            progress: clamp_progress(progress),
            mirrored,
        }
    }

    /// Returns the interpolation progress in `[0, 1]`.
    #[must_use]
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Sets the progress, clamping it into `[0, 1]`.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = clamp_progress(progress);
    }

    /// Returns `true` when the arrow sweep is mirrored.
    #[must_use]
    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Sets the mirror flag.
    pub fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    /// Returns `true` at the closed rest pose.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.progress == 0.0
    }

    /// Returns `true` at the open rest pose.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.progress == 1.0
    }
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Horizontal layout direction of the host surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl LayoutDirection {
    /// Returns `true` for right-to-left layouts.
    #[must_use]
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}
