// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph construction and rendering.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, BezPath, Cap, Join, Rect, Size, Stroke};
use peniko::Color;

use crate::{DrawerGlyphStyle, GlyphState, LayoutDirection, lerp};

/// Half-angle of the arrowhead, in radians.
const ARROW_HEAD_ANGLE: f64 = core::f64::consts::FRAC_PI_4;

/// A hamburger-to-arrow glyph with a frozen style.
///
/// The glyph holds only immutable configuration and a paint alpha. Progress
/// and mirroring live in a [`GlyphState`] owned by the caller and are passed
/// to [`DrawerGlyph::render`].
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerGlyph {
    style: DrawerGlyphStyle,
    alpha: u8,
    center_offset: f64,
    max_cut: f64,
}

impl DrawerGlyph {
    /// Creates a glyph from a style.
    ///
    /// Bar length, arm length and gap are snapped to whole units.
    #[must_use]
    pub fn new(style: DrawerGlyphStyle) -> Self {
        let style = style.snapped();
        Self {
            center_offset: style.center_offset(),
            max_cut: style.max_cut(),
            style,
            alpha: u8::MAX,
        }
    }

    /// Returns the (snapped) style this glyph was built from.
    #[must_use]
    pub fn style(&self) -> &DrawerGlyphStyle {
        &self.style
    }

    /// Returns the paint alpha.
    #[must_use]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Sets the paint alpha multiplied into the style color.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Returns the natural size of the glyph box.
    ///
    /// A style with a zero size yields a zero-size glyph.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.style.size, self.style.size)
    }

    /// Builds the drawing instructions for `state` inside `bounds`.
    ///
    /// The returned path is in glyph-local coordinates centred on the middle
    /// bar; [`GlyphFrame::transform`] places it horizontally centred in
    /// `bounds` and rotates it for the current pose.
    #[must_use]
    pub fn render(&self, state: GlyphState, direction: LayoutDirection, bounds: Rect) -> GlyphFrame {
        let style = &self.style;
        let progress = state.progress();
        let rtl = direction.is_rtl();

        let arm_length = lerp(style.bar_length, style.top_bottom_arrow_length, progress);
        let middle_length = lerp(style.bar_length, style.middle_arrow_length, progress);
        let middle_cut = lerp(0.0, self.max_cut, progress).round();
        let rotation = lerp(0.0, ARROW_HEAD_ANGLE, progress);
        let sweep_degrees = if rtl {
            lerp(0.0, 180.0, progress)
        } else {
            lerp(-180.0, 0.0, progress)
        };

        let arm_width = (arm_length * rotation.cos()).round();
        let arm_height = (arm_length * rotation.sin()).round();
        let arm_offset = lerp(style.bar_gap + style.bar_thickness, -self.max_cut, progress);
        let edge = -middle_length / 2.0;

        let mut path = BezPath::new();
        path.move_to((edge + middle_cut, 0.0));
        path.line_to((edge + middle_length - middle_cut, 0.0));
        path.move_to((edge, arm_offset));
        path.line_to((edge + arm_width, arm_offset + arm_height));
        path.move_to((edge, -arm_offset));
        path.line_to((edge + arm_width, -arm_offset - arm_height));

        let canvas_rotation = if style.spin {
            let sign = if state.is_mirrored() ^ rtl { -1.0 } else { 1.0 };
            (sweep_degrees * sign).to_radians()
        } else if rtl {
            core::f64::consts::PI
        } else {
            0.0
        };
        let transform = Affine::translate((bounds.center().x, bounds.y0 + self.center_offset))
            * Affine::rotate(canvas_rotation);

        let stroke = Stroke::new(style.bar_thickness)
            .with_caps(Cap::Butt)
            .with_join(Join::Miter);
        let color = style.color.multiply_alpha(f32::from(self.alpha) / 255.0);

        GlyphFrame {
            path,
            transform,
            stroke,
            color,
            metrics: GlyphMetrics {
                arm_length,
                middle_length,
                middle_cut,
                rotation,
                canvas_rotation,
            },
        }
    }
}

/// Interpolated quantities of one rendered pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    /// Length of the top and bottom strokes.
    pub arm_length: f64,
    /// Length of the middle stroke before trimming.
    pub middle_length: f64,
    /// Amount trimmed from each end of the middle stroke.
    pub middle_cut: f64,
    /// Angle of the arms against the middle stroke, in radians.
    pub rotation: f64,
    /// Rotation applied to the whole glyph, in radians.
    pub canvas_rotation: f64,
}

/// Drawing instructions for one pose of the glyph.
///
/// Stroke [`GlyphFrame::path`] transformed by [`GlyphFrame::transform`] with
/// [`GlyphFrame::stroke`] and [`GlyphFrame::color`]. The path is never filled.
#[derive(Clone, Debug)]
pub struct GlyphFrame {
    /// Three open subpaths: middle, top and bottom stroke.
    pub path: BezPath,
    /// Local to bounds transform.
    pub transform: Affine,
    /// Butt caps, miter joins, bar thickness.
    pub stroke: Stroke,
    /// Style color with the glyph alpha applied.
    pub color: Color,
    /// Interpolated quantities behind this frame.
    pub metrics: GlyphMetrics,
}

impl GlyphFrame {
    /// Returns the path with [`GlyphFrame::transform`] applied.
    #[must_use]
    pub fn world_path(&self) -> BezPath {
        self.transform * self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::vec::Vec;
    use kurbo::{PathEl, Point};

    const EPS: f64 = 1e-9;

    fn bounds(glyph: &DrawerGlyph) -> Rect {
        Rect::from_origin_size((0.0, 0.0), glyph.intrinsic_size())
    }

    fn render(progress: f64, mirrored: bool, direction: LayoutDirection) -> GlyphFrame {
        let glyph = DrawerGlyph::new(DrawerGlyphStyle::default());
        glyph.render(GlyphState::new(progress, mirrored), direction, bounds(&glyph))
    }

    #[test]
    fn closed_pose_is_three_parallel_bars() {
        let frame = render(0.0, false, LayoutDirection::Ltr);
        assert_eq!(
            frame.path.elements(),
            &[
                PathEl::MoveTo(Point::new(-9.0, 0.0)),
                PathEl::LineTo(Point::new(9.0, 0.0)),
                PathEl::MoveTo(Point::new(-9.0, 5.0)),
                PathEl::LineTo(Point::new(9.0, 5.0)),
                PathEl::MoveTo(Point::new(-9.0, -5.0)),
                PathEl::LineTo(Point::new(9.0, -5.0)),
            ]
        );
        assert_eq!(frame.metrics.rotation, 0.0);
        assert_eq!(frame.metrics.middle_cut, 0.0);
    }

    #[test]
    fn open_pose_is_an_arrow() {
        let frame = render(1.0, true, LayoutDirection::Ltr);
        let cut = core::f64::consts::FRAC_1_SQRT_2;
        // Arms are snapped to 11 units, so each arm spans round(11 * cos 45) = 8.
        let expected = [
            Point::new(-7.0, 0.0),
            Point::new(7.0, 0.0),
            Point::new(-8.0, -cut),
            Point::new(0.0, 8.0 - cut),
            Point::new(-8.0, cut),
            Point::new(0.0, cut - 8.0),
        ];
        let points: Vec<Point> = frame
            .path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(points.len(), expected.len());
        for (got, want) in points.iter().zip(expected) {
            assert!(got.distance(want) < EPS, "{got:?} != {want:?}");
        }
        assert!((frame.metrics.rotation - ARROW_HEAD_ANGLE).abs() < EPS);
        assert_eq!(frame.metrics.canvas_rotation, 0.0);
    }

    #[test]
    fn rotation_and_middle_length_interpolate_linearly() {
        let style = DrawerGlyphStyle::default().snapped();
        for step in 0..=20 {
            let p = f64::from(step) / 20.0;
            let frame = render(p, false, LayoutDirection::Ltr);
            let expected_rotation = lerp(0.0, ARROW_HEAD_ANGLE, p);
            let expected_middle = lerp(style.bar_length, style.middle_arrow_length, p);
            assert!(
                (frame.metrics.rotation - expected_rotation).abs() < EPS,
                "rotation at {p}"
            );
            assert!(
                (frame.metrics.middle_length - expected_middle).abs() < EPS,
                "middle length at {p}"
            );
        }
    }

    #[test]
    fn interpolation_is_monotonic() {
        let mut last = render(0.0, false, LayoutDirection::Ltr).metrics;
        for step in 1..=50 {
            let p = f64::from(step) / 50.0;
            let metrics = render(p, false, LayoutDirection::Ltr).metrics;
            assert!(metrics.rotation > last.rotation, "rotation at {p}");
            assert!(metrics.arm_length < last.arm_length, "arm length at {p}");
            assert!(metrics.middle_length < last.middle_length, "middle at {p}");
            assert!(metrics.middle_cut >= last.middle_cut, "cut at {p}");
            assert!(
                metrics.canvas_rotation > last.canvas_rotation,
                "canvas rotation at {p}"
            );
            last = metrics;
        }
    }

    #[test]
    fn mirroring_flips_the_sweep() {
        let normal = render(0.5, false, LayoutDirection::Ltr);
        let mirrored = render(0.5, true, LayoutDirection::Ltr);
        assert!((normal.metrics.canvas_rotation + core::f64::consts::FRAC_PI_2).abs() < EPS);
        assert!((mirrored.metrics.canvas_rotation - core::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn rtl_sweeps_the_other_half_turn() {
        // RTL without mirroring flips the sign: -lerp(0, 180, p).
        let frame = render(0.25, false, LayoutDirection::Rtl);
        assert!((frame.metrics.canvas_rotation + 45_f64.to_radians()).abs() < EPS);
        // RTL and mirrored cancel out.
        let frame = render(0.25, true, LayoutDirection::Rtl);
        assert!((frame.metrics.canvas_rotation - 45_f64.to_radians()).abs() < EPS);
        // Open in RTL rests at a half turn.
        let frame = render(1.0, true, LayoutDirection::Rtl);
        assert!((frame.metrics.canvas_rotation - core::f64::consts::PI).abs() < EPS);
    }

    #[test]
    fn without_spin_only_rtl_rotates() {
        let glyph = DrawerGlyph::new(DrawerGlyphStyle::default().with_spin(false));
        let b = bounds(&glyph);
        let ltr = glyph.render(GlyphState::new(0.5, true), LayoutDirection::Ltr, b);
        assert_eq!(ltr.metrics.canvas_rotation, 0.0);
        let rtl = glyph.render(GlyphState::new(0.5, false), LayoutDirection::Rtl, b);
        assert_eq!(rtl.metrics.canvas_rotation, core::f64::consts::PI);
    }

    #[test]
    fn transform_centres_in_bounds() {
        let glyph = DrawerGlyph::new(DrawerGlyphStyle::default().with_spin(false));
        let frame = glyph.render(
            GlyphState::CLOSED,
            LayoutDirection::Ltr,
            Rect::new(100.0, 50.0, 124.0, 74.0),
        );
        assert_eq!(frame.transform * Point::ZERO, Point::new(112.0, 62.0));
        let world = frame.world_path();
        assert_eq!(
            world.elements()[0],
            PathEl::MoveTo(Point::new(103.0, 62.0))
        );
    }

    #[test]
    fn stroke_uses_butt_caps_and_miter_joins() {
        let frame = render(0.3, false, LayoutDirection::Ltr);
        assert_eq!(frame.stroke.width, 2.0);
        assert_eq!(frame.stroke.start_cap, Cap::Butt);
        assert_eq!(frame.stroke.end_cap, Cap::Butt);
        assert_eq!(frame.stroke.join, Join::Miter);
    }

    #[test]
    fn alpha_scales_color() {
        let mut glyph = DrawerGlyph::new(DrawerGlyphStyle::default());
        assert_eq!(glyph.alpha(), 255);
        glyph.set_alpha(0);
        let frame = glyph.render(GlyphState::CLOSED, LayoutDirection::Ltr, bounds(&glyph));
        assert_eq!(frame.color.components[3], 0.0);
    }

    #[test]
    fn zero_size_style_gives_zero_size_glyph() {
        let glyph = DrawerGlyph::new(DrawerGlyphStyle::default().with_size(0.0));
        assert_eq!(glyph.intrinsic_size(), Size::ZERO);
    }
}
