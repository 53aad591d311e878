// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation timing and rotation direction policy.

/// Default duration of a directed toggle, in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 400;

/// Easing curve mapping linear time in `[0, 1]` to animation progress.
#[derive(Copy, Clone, Debug, Default)]
pub enum Curve {
    /// `6x² − 8x³ + 3x⁴`.
    ///
    /// Zero slope at both ends, so the glyph leaves and settles into its rest
    /// poses without a velocity jump.
    #[default]
    Material,
    /// Identity.
    Linear,
    /// A caller-supplied curve. It should map `0` to `0` and `1` to `1`.
    Custom(fn(f64) -> f64),
}

impl Curve {
    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Material => {
                let t2 = t * t;
                6.0 * t2 - 8.0 * t2 * t + 3.0 * t2 * t2
            }
            Self::Linear => t,
            Self::Custom(f) => f(t),
        }
    }
}

/// Timing and rotation policy for the drawer glyph.
///
/// ```rust
/// use understory_drawer_toggle::{AnimationConfig, Curve};
///
/// let config = AnimationConfig::default()
///     .with_duration_ms(250)
///     .with_curve(Curve::Linear);
/// assert_eq!(config.duration_ms, 250);
/// assert!(config.auto_reset_rotate_direction);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct AnimationConfig {
    /// Length of a directed toggle animation.
    pub duration_ms: u32,
    /// Easing applied to directed toggles.
    pub curve: Curve,
    /// When set, the next sweep runs in the mirrored direction.
    pub rotate_direction_back: bool,
    /// Clear [`Self::rotate_direction_back`] once the glyph is fully open.
    pub auto_reset_rotate_direction: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            curve: Curve::default(),
            rotate_direction_back: false,
            auto_reset_rotate_direction: true,
        }
    }
}

impl AnimationConfig {
    /// Sets [`Self::duration_ms`].
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets [`Self::curve`].
    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets [`Self::rotate_direction_back`].
    #[must_use]
    pub fn with_rotate_direction_back(mut self, back: bool) -> Self {
        self.rotate_direction_back = back;
        self
    }

    /// Sets [`Self::auto_reset_rotate_direction`].
    #[must_use]
    pub fn with_auto_reset_rotate_direction(mut self, auto_reset: bool) -> Self {
        self.auto_reset_rotate_direction = auto_reset;
        self
    }
}
