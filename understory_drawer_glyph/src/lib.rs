// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer_glyph --heading-base-level=0

//! Understory Drawer Glyph: the hamburger-to-arrow navigation indicator.
//!
//! This crate describes the geometry of the animated glyph that sits in a top
//! app bar next to a navigation drawer. At progress `0.0` the glyph is three
//! parallel bars (the "hamburger"); at `1.0` the outer bars have swept into the
//! two arms of an arrow. Everything in between is a linear interpolation of a
//! handful of lengths and angles.
//!
//! The crate is headless. It does not own a canvas or a rendering backend:
//! [`DrawerGlyph::render`] produces a [`GlyphFrame`], a local-space
//! [`kurbo::BezPath`] plus the [`kurbo::Affine`] that places it, the
//! [`kurbo::Stroke`] to draw it with and the [`peniko::Color`] to paint. Hosts
//! hand those to whatever renderer they use.
//!
//! The glyph does not keep its own progress. Callers own a [`GlyphState`] and
//! pass it in on every render, so the drawn pose can never drift from the
//! state that drives accessibility text elsewhere.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_drawer_glyph::{DrawerGlyph, DrawerGlyphStyle, GlyphState, LayoutDirection};
//!
//! let glyph = DrawerGlyph::new(DrawerGlyphStyle::default());
//! let bounds = Rect::from_origin_size((0.0, 0.0), glyph.intrinsic_size());
//!
//! // Half way between the hamburger and the arrow.
//! let frame = glyph.render(GlyphState::new(0.5, false), LayoutDirection::Ltr, bounds);
//! assert!((frame.metrics.rotation - core::f64::consts::FRAC_PI_8).abs() < 1e-9);
//!
//! // Hand `frame.world_path()`, `frame.stroke` and `frame.color` to a renderer.
//! let _ = frame.world_path();
//! ```
//!
//! ## Layout direction and mirroring
//!
//! With spinning enabled the whole glyph rotates half a turn while it opens.
//! The sweep direction depends on the `mirrored` flag of the state and on the
//! [`LayoutDirection`]: the rotation sign flips when exactly one of them is
//! set, so the arrow keeps pointing towards the drawer edge in right-to-left
//! layouts. With spinning disabled the glyph snaps, and right-to-left layouts
//! get a fixed half-turn instead.
//!
//! This crate is `no_std`.

#![no_std]

mod glyph;
mod state;
mod style;

pub use glyph::{DrawerGlyph, GlyphFrame, GlyphMetrics};
pub use state::{GlyphState, LayoutDirection};
pub use style::DrawerGlyphStyle;

/// Linear interpolation between `a` and `b`.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
