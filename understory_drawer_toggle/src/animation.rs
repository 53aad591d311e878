// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick-driven progress animation.
//!
//! A [`ProgressAnimation`] does not own a clock. The host's frame scheduler
//! calls [`ProgressAnimation::sample`] with a monotonic timestamp in
//! milliseconds; the first sample latches the start time.
//!
//! ```
//! use understory_drawer_toggle::{Curve, ProgressAnimation};
//!
//! let mut anim = ProgressAnimation::new(0.0, 1.0, 100, Curve::Linear);
//! assert_eq!(anim.sample(5_000).value, 0.0);
//! assert_eq!(anim.sample(5_050).value, 0.5);
//!
//! let last = anim.sample(5_100);
//! assert_eq!(last.value, 1.0);
//! assert!(last.finished);
//! ```

use crate::Curve;

/// One tick of a [`ProgressAnimation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationSample {
    /// Eased value between the animation's endpoints.
    pub value: f64,
    /// `true` on the tick that lands on the end value.
    pub finished: bool,
}

/// Eased interpolation from one progress value to another over a duration.
#[derive(Copy, Clone, Debug)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    duration_ms: u32,
    curve: Curve,
    started_at: Option<u64>,
}

impl ProgressAnimation {
    /// Creates an animation that has not seen its first frame yet.
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u32, curve: Curve) -> Self {
        Self {
            from,
            to,
            duration_ms,
            curve,
            started_at: None,
        }
    }

    /// Returns the start value.
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Returns the end value.
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Returns `true` once the first frame has been sampled.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Samples the animation at `now_ms`.
    ///
    /// The final sample returns exactly the end value, whatever the curve
    /// produces at `1.0`. A zero duration finishes on the first sample.
    pub fn sample(&mut self, now_ms: u64) -> AnimationSample {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(started_at);
        let duration = u64::from(self.duration_ms);
        if elapsed >= duration {
            return AnimationSample {
                value: self.to,
                finished: true,
            };
        }
        // Below `duration`, so it fits.
        let elapsed = u32::try_from(elapsed).unwrap_or(self.duration_ms);
        let t = f64::from(elapsed) / f64::from(self.duration_ms);
        AnimationSample {
            value: self.from + (self.to - self.from) * self.curve.apply(t),
            finished: false,
        }
    }
}
