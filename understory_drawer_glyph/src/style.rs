// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Themed dimensions and paint for the drawer glyph.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use peniko::Color;

/// Dimensions, color and spin policy of a drawer glyph.
///
/// A style is usually derived from the host theme once and then frozen inside
/// a [`DrawerGlyph`](crate::DrawerGlyph). All lengths are in the same units as
/// the bounds the glyph is rendered into (typically device pixels).
///
/// The defaults are the usual material toggle metrics at 1x scale.
///
/// ```rust
/// use understory_drawer_glyph::DrawerGlyphStyle;
///
/// let style = DrawerGlyphStyle::default()
///     .with_bar_thickness(3.0)
///     .with_spin(false);
/// assert_eq!(style.bar_thickness, 3.0);
/// assert!(!style.spin);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerGlyphStyle {
    /// Stroke width of every bar.
    pub bar_thickness: f64,
    /// Length of the bars in the closed pose.
    pub bar_length: f64,
    /// Length of the top and bottom arms in the open pose.
    pub top_bottom_arrow_length: f64,
    /// Length of the middle bar (the arrow shaft) in the open pose.
    pub middle_arrow_length: f64,
    /// Gap between bars in the closed pose.
    pub bar_gap: f64,
    /// Edge length of the square glyph box.
    pub size: f64,
    /// Stroke color.
    pub color: Color,
    /// Whether the glyph rotates while it opens, or snaps between poses.
    pub spin: bool,
}

impl Default for DrawerGlyphStyle {
    fn default() -> Self {
        Self {
            bar_thickness: 2.0,
            bar_length: 18.0,
            top_bottom_arrow_length: 11.31,
            middle_arrow_length: 16.0,
            bar_gap: 3.0,
            size: 24.0,
            color: Color::WHITE,
            spin: true,
        }
    }
}

impl DrawerGlyphStyle {
    /// Sets [`Self::bar_thickness`].
    #[must_use]
    pub fn with_bar_thickness(mut self, thickness: f64) -> Self {
        self.bar_thickness = thickness;
        self
    }

    /// Sets [`Self::bar_length`].
    #[must_use]
    pub fn with_bar_length(mut self, length: f64) -> Self {
        self.bar_length = length;
        self
    }

    /// Sets [`Self::top_bottom_arrow_length`].
    #[must_use]
    pub fn with_top_bottom_arrow_length(mut self, length: f64) -> Self {
        self.top_bottom_arrow_length = length;
        self
    }

    /// Sets [`Self::middle_arrow_length`].
    #[must_use]
    pub fn with_middle_arrow_length(mut self, length: f64) -> Self {
        self.middle_arrow_length = length;
        self
    }

    /// Sets [`Self::bar_gap`].
    #[must_use]
    pub fn with_bar_gap(mut self, gap: f64) -> Self {
        self.bar_gap = gap;
        self
    }

    /// Sets [`Self::size`].
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets [`Self::color`].
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets [`Self::spin`].
    #[must_use]
    pub fn with_spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    /// Snaps bar length, arm length and gap to whole units.
    ///
    /// Theme dimensions arrive as fractional values; the closed bars and the
    /// arrow arms are laid out on whole units so the rest poses stay crisp.
    #[must_use]
    pub(crate) fn snapped(self) -> Self {
        Self {
            bar_length: self.bar_length.round(),
            top_bottom_arrow_length: self.top_bottom_arrow_length.round(),
            bar_gap: self.bar_gap.round(),
            ..self
        }
    }

    /// Vertical distance from the top of the glyph box to the middle bar.
    ///
    /// The three closed bars are centred in whatever room the box leaves,
    /// with that room split on an even unit boundary.
    pub(crate) fn center_offset(&self) -> f64 {
        let remaining = (self.size - self.bar_thickness * 3.0 - self.bar_gap * 2.0).trunc();
        (remaining / 4.0).trunc() * 2.0 + self.bar_thickness * 1.5 + self.bar_gap
    }

    /// How far the middle bar is trimmed at each end in the open pose.
    ///
    /// Derived from the stroke half-width and the 45 degree arrowhead.
    pub(crate) fn max_cut(&self) -> f64 {
        (self.bar_thickness / 2.0) * core::f64::consts::FRAC_PI_4.cos()
    }
}
