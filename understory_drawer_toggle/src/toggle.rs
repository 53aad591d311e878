// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer toggle controller.

use alloc::boxed::Box;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use understory_drawer_glyph::{DrawerGlyph, GlyphFrame, GlyphState};

use crate::animation::ProgressAnimation;
use crate::config::{AnimationConfig, Curve};
use crate::host::{
    ChromeSink, DrawerEdge, DrawerHost, DrawerMotion, Indicator, LockMode, ResourceId,
    UnknownResource,
};
use crate::persist::PersistedToggleState;

const CLOSED: f64 = 0.0;
const OPEN: f64 = 1.0;

/// Handler for navigation clicks while the drawer indicator is disabled.
///
/// Returns `true` when the click was handled.
pub type NavigationFallback = Box<dyn FnMut() -> bool>;

/// Which indicator to push to the chrome sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum IndicatorKind {
    Glyph,
    Static,
}

/// Ties a navigation drawer to the drawer glyph and its description.
///
/// The toggle owns the authoritative [`GlyphState`]. Drawer callbacks
/// ([`on_slide`](Self::on_slide), [`on_opened`](Self::on_opened),
/// [`on_closed`](Self::on_closed)), directed toggles and animation frames all
/// go through one position update path, so mirroring and the one-shot reverse
/// sweep behave the same whether the drawer is dragged or animated.
///
/// All methods are meant to be called from the host's UI thread.
pub struct DrawerToggle<S: ChromeSink, D> {
    sink: S,
    drawer: Option<D>,
    edge: DrawerEdge,
    glyph: DrawerGlyph,
    state: GlyphState,
    config: AnimationConfig,
    animation: Option<ProgressAnimation>,
    indicator_enabled: bool,
    slide_animation_enabled: bool,
    static_indicator: Option<S::Image>,
    has_custom_indicator: bool,
    open_description: ResourceId,
    close_description: ResourceId,
    navigation_fallback: Option<NavigationFallback>,
    warned_hidden_navigation: bool,
}

impl<S, D> fmt::Debug for DrawerToggle<S, D>
where
    S: ChromeSink + fmt::Debug,
    S::Image: fmt::Debug,
    D: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerToggle")
            .field("sink", &self.sink)
            .field("drawer", &self.drawer)
            .field("edge", &self.edge)
            .field("glyph", &self.glyph)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("animation", &self.animation)
            .field("indicator_enabled", &self.indicator_enabled)
            .field("slide_animation_enabled", &self.slide_animation_enabled)
            .field("static_indicator", &self.static_indicator)
            .field("has_custom_indicator", &self.has_custom_indicator)
            .field("open_description", &self.open_description)
            .field("close_description", &self.close_description)
            .field(
                "navigation_fallback",
                &self.navigation_fallback.as_ref().map(|_| "FnMut"),
            )
            .field("warned_hidden_navigation", &self.warned_hidden_navigation)
            .finish()
    }
}

impl<S: ChromeSink, D: DrawerHost> DrawerToggle<S, D> {
    /// Creates a toggle with a glyph styled by the sink's theme.
    ///
    /// `open_description` is announced while the drawer is closed (the action
    /// the indicator performs), `close_description` while it is open. Nothing
    /// is pushed to the sink until [`sync_state`](Self::sync_state).
    #[must_use]
    pub fn new(
        sink: S,
        drawer: D,
        open_description: ResourceId,
        close_description: ResourceId,
    ) -> Self {
        let glyph = DrawerGlyph::new(sink.themed_style());
        Self::with_glyph(sink, drawer, glyph, open_description, close_description)
    }

    /// Creates a toggle around a caller-supplied glyph.
    #[must_use]
    pub fn with_glyph(
        sink: S,
        drawer: D,
        glyph: DrawerGlyph,
        open_description: ResourceId,
        close_description: ResourceId,
    ) -> Self {
        let static_indicator = sink.theme_up_indicator();
        Self {
            sink,
            drawer: Some(drawer),
            edge: DrawerEdge::Start,
            glyph,
            state: GlyphState::CLOSED,
            config: AnimationConfig::default(),
            animation: None,
            indicator_enabled: true,
            slide_animation_enabled: true,
            static_indicator,
            has_custom_indicator: false,
            open_description,
            close_description,
            navigation_fallback: None,
            warned_hidden_navigation: false,
        }
    }

    /// Restores the toggle from a snapshot and re-pushes the indicator.
    ///
    /// With `None` the glyph resets to the closed pose and the animation
    /// configuration is kept. The mirror flag is left as is. Any running
    /// animation is cancelled.
    pub fn sync_state(&mut self, saved: Option<&PersistedToggleState>) {
        self.animation = None;
        let mut position = CLOSED;
        if let Some(saved) = saved {
            position = f64::from(saved.drawer_position);
            self.config.duration_ms = saved.duration_ms;
            self.config.rotate_direction_back = saved.rotate_direction_back;
            self.config.auto_reset_rotate_direction = saved.auto_reset_rotate_direction;
        }
        self.state.set_progress(position);

        if self.indicator_enabled {
            let description = self.contextual_description();
            self.push_up_indicator(IndicatorKind::Glyph, description);
        }
    }

    /// Captures the state [`sync_state`](Self::sync_state) needs.
    #[must_use]
    pub fn persist(&self) -> PersistedToggleState {
        PersistedToggleState {
            drawer_position: if self.state.progress() >= 0.5 { 1 } else { 0 },
            duration_ms: self.config.duration_ms,
            rotate_direction_back: self.config.rotate_direction_back,
            auto_reset_rotate_direction: self.config.auto_reset_rotate_direction,
        }
    }

    /// Re-reads theme-derived resources after a host configuration change.
    ///
    /// A custom static indicator is kept; otherwise the theme indicator is
    /// looked up again. Then the toggle re-syncs as if freshly created; a
    /// disabled indicator re-pushes the static image instead.
    pub fn on_theme_changed(&mut self) {
        if !self.has_custom_indicator {
            self.static_indicator = self.sink.theme_up_indicator();
        }
        self.sync_state(None);
        if !self.indicator_enabled {
            self.push_up_indicator(IndicatorKind::Static, ResourceId::NONE);
        }
    }

    /// The drawer moved; `offset` is how far it is open, in `[0, 1]`.
    pub fn on_slide(&mut self, offset: f64) {
        let offset = if self.slide_animation_enabled {
            offset
        } else {
            CLOSED
        };
        self.set_position(offset);
    }

    /// The drawer settled fully open.
    pub fn on_opened(&mut self) {
        self.set_position(OPEN);
        if self.indicator_enabled {
            self.sink.set_description(self.close_description);
        }
    }

    /// The drawer settled fully closed.
    pub fn on_closed(&mut self) {
        self.set_position(CLOSED);
        if self.indicator_enabled {
            self.sink.set_description(self.open_description);
        }
    }

    /// The drawer's motion state changed.
    ///
    /// The glyph follows offsets only, so this is traced and otherwise ignored.
    pub fn on_state_changed(&mut self, motion: DrawerMotion) {
        tracing::trace!(?motion, edge = ?self.edge, "drawer motion changed");
    }

    /// Opens or closes the drawer, honoring its lock mode.
    ///
    /// A visible drawer is closed unless it is locked open; otherwise the
    /// drawer is opened unless it is locked closed. Without an attached
    /// drawer this does nothing.
    pub fn toggle(&mut self) {
        let edge = self.edge;
        let Some(drawer) = self.drawer.as_mut() else {
            return;
        };
        let lock_mode = drawer.lock_mode(edge);
        if drawer.is_visible(edge) && lock_mode != LockMode::LockedOpen {
            drawer.close(edge);
        } else if lock_mode != LockMode::LockedClosed {
            drawer.open(edge);
        }
    }

    /// Handles the host's "home" action.
    ///
    /// Returns `true` when the toggle consumed it.
    pub fn on_home_action(&mut self) -> bool {
        if self.indicator_enabled {
            self.toggle();
            true
        } else {
            false
        }
    }

    /// Handles a click on the chrome's navigation affordance.
    ///
    /// Toggles the drawer while the indicator is enabled; otherwise forwards
    /// to the [navigation fallback](Self::set_navigation_fallback). Returns
    /// whether the click was handled.
    pub fn on_navigation_click(&mut self) -> bool {
        if self.indicator_enabled {
            self.toggle();
            true
        } else if let Some(fallback) = self.navigation_fallback.as_mut() {
            fallback()
        } else {
            false
        }
    }

    /// Sets the handler for navigation clicks while the indicator is disabled.
    pub fn set_navigation_fallback(&mut self, fallback: Option<NavigationFallback>) {
        self.navigation_fallback = fallback;
    }

    /// Returns `true` if a navigation fallback is installed.
    #[must_use]
    pub fn has_navigation_fallback(&self) -> bool {
        self.navigation_fallback.is_some()
    }

    /// Animates the glyph to the opposite rest pose.
    ///
    /// `back` selects the mirrored sweep; it clears itself once the glyph is
    /// fully open. This only drives the glyph, not the drawer.
    pub fn toggle_indicator(&mut self, back: bool) {
        self.config.rotate_direction_back = back;
        self.config.auto_reset_rotate_direction = true;

        let start = if self.state.progress().round() == CLOSED {
            CLOSED
        } else {
            OPEN
        };
        let end = OPEN - start;
        tracing::debug!(back, start, end, "directed drawer glyph toggle");
        self.animate(start, end);
    }

    /// Starts an eased animation of the glyph from `start` to `end`.
    ///
    /// An animation already in flight is cancelled and replaced. Drive it
    /// with [`on_animation_frame`](Self::on_animation_frame).
    pub fn animate(&mut self, start: f64, end: f64) {
        if let Some(previous) = self.animation.take() {
            tracing::debug!(
                from = previous.from(),
                to = previous.to(),
                "replacing in-flight drawer glyph animation"
            );
        }
        self.animation = Some(ProgressAnimation::new(
            start,
            end,
            self.config.duration_ms,
            self.config.curve,
        ));
    }

    /// Advances the running animation to `now_ms`.
    ///
    /// Returns `true` while an animation is still running, so hosts know to
    /// schedule another frame.
    pub fn on_animation_frame(&mut self, now_ms: u64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let sample = animation.sample(now_ms);
        if sample.finished {
            self.animation = None;
        }
        self.set_position(sample.value);
        self.animation.is_some()
    }

    /// Returns `true` while a glyph animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Stops a running animation where it is.
    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// Enables or disables the drawer indicator.
    ///
    /// Disabling shows the static indicator with the sink's default
    /// description. Enabling re-pushes the glyph with the description that
    /// matches the drawer. Setting the current value does nothing.
    pub fn set_indicator_enabled(&mut self, enable: bool) {
        if enable == self.indicator_enabled {
            return;
        }
        if enable {
            let description = self.contextual_description();
            self.push_up_indicator(IndicatorKind::Glyph, description);
        } else {
            self.push_up_indicator(IndicatorKind::Static, ResourceId::NONE);
        }
        self.indicator_enabled = enable;
    }

    /// Returns `true` when the glyph is the navigation indicator.
    #[must_use]
    pub fn is_indicator_enabled(&self) -> bool {
        self.indicator_enabled
    }

    /// Enables or disables following the drawer while it slides.
    ///
    /// When disabled the glyph is pinned to the closed pose.
    pub fn set_slide_animation_enabled(&mut self, enabled: bool) {
        self.slide_animation_enabled = enabled;
        if !enabled {
            self.set_position(CLOSED);
        }
    }

    /// Returns `true` when the glyph follows the drawer while it slides.
    #[must_use]
    pub fn is_slide_animation_enabled(&self) -> bool {
        self.slide_animation_enabled
    }

    /// Sets the static indicator shown while the glyph is disabled.
    ///
    /// `None` reverts to the theme indicator.
    pub fn set_custom_indicator(&mut self, indicator: Option<S::Image>) {
        match indicator {
            Some(indicator) => {
                self.static_indicator = Some(indicator);
                self.has_custom_indicator = true;
            }
            None => {
                self.static_indicator = self.sink.theme_up_indicator();
                self.has_custom_indicator = false;
            }
        }
        if !self.indicator_enabled {
            self.push_up_indicator(IndicatorKind::Static, ResourceId::NONE);
        }
    }

    /// Sets the static indicator by resource id.
    ///
    /// [`ResourceId::NONE`] reverts to the theme indicator. An id the sink
    /// cannot resolve leaves the indicator untouched.
    pub fn set_custom_indicator_resource(
        &mut self,
        id: ResourceId,
    ) -> Result<(), UnknownResource> {
        if id.is_none() {
            self.set_custom_indicator(None);
            return Ok(());
        }
        let image = self.sink.resolve_image(id).ok_or(UnknownResource(id))?;
        self.set_custom_indicator(Some(image));
        Ok(())
    }

    /// Returns the caller-supplied static indicator, if any.
    #[must_use]
    pub fn custom_indicator(&self) -> Option<&S::Image> {
        if self.has_custom_indicator {
            self.static_indicator.as_ref()
        } else {
            None
        }
    }

    /// Returns the glyph.
    #[must_use]
    pub fn glyph(&self) -> &DrawerGlyph {
        &self.glyph
    }

    /// Returns the glyph for in-place changes such as alpha.
    ///
    /// Changes are picked up on the next push or render.
    pub fn glyph_mut(&mut self) -> &mut DrawerGlyph {
        &mut self.glyph
    }

    /// Replaces the glyph and re-syncs.
    pub fn set_glyph(&mut self, glyph: DrawerGlyph) {
        self.glyph = glyph;
        self.sync_state(None);
    }

    /// Returns the current glyph pose.
    #[must_use]
    pub fn glyph_state(&self) -> GlyphState {
        self.state
    }

    /// Renders the glyph in its current pose using the sink's layout direction.
    #[must_use]
    pub fn render(&self, bounds: Rect) -> GlyphFrame {
        self.glyph.render(self.state, self.sink.layout_direction(), bounds)
    }

    /// Returns the animation configuration.
    #[must_use]
    pub fn animation_config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Returns the easing curve for directed toggles.
    #[must_use]
    pub fn curve(&self) -> Curve {
        self.config.curve
    }

    /// Sets the easing curve for directed toggles.
    pub fn set_curve(&mut self, curve: Curve) {
        self.config.curve = curve;
    }

    /// Returns the directed toggle duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u32 {
        self.config.duration_ms
    }

    /// Sets the directed toggle duration in milliseconds.
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.config.duration_ms = duration_ms;
    }

    /// Returns `true` when the next sweep runs mirrored.
    #[must_use]
    pub fn is_rotate_direction_back(&self) -> bool {
        self.config.rotate_direction_back
    }

    /// Requests a mirrored sweep for the next opening.
    pub fn set_rotate_direction_back(&mut self, back: bool) {
        self.config.rotate_direction_back = back;
    }

    /// Returns `true` when a mirrored sweep clears itself once open.
    #[must_use]
    pub fn is_auto_reset_rotate_direction(&self) -> bool {
        self.config.auto_reset_rotate_direction
    }

    /// Sets whether a mirrored sweep clears itself once open.
    pub fn set_auto_reset_rotate_direction(&mut self, auto_reset: bool) {
        self.config.auto_reset_rotate_direction = auto_reset;
    }

    /// Returns the drawer edge this toggle controls.
    #[must_use]
    pub fn edge(&self) -> DrawerEdge {
        self.edge
    }

    /// Sets the drawer edge this toggle controls.
    pub fn set_edge(&mut self, edge: DrawerEdge) {
        self.edge = edge;
    }

    /// Returns the chrome sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the chrome sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the drawer, if one is attached.
    #[must_use]
    pub fn drawer(&self) -> Option<&D> {
        self.drawer.as_ref()
    }

    /// Returns the drawer mutably, if one is attached.
    pub fn drawer_mut(&mut self) -> Option<&mut D> {
        self.drawer.as_mut()
    }

    /// Attaches a drawer, returning the previous one.
    pub fn attach_drawer(&mut self, drawer: D) -> Option<D> {
        self.drawer.replace(drawer)
    }

    /// Detaches the drawer. Drawer-dependent operations become no-ops.
    pub fn detach_drawer(&mut self) -> Option<D> {
        self.drawer.take()
    }

    /// The single position update path.
    fn set_position(&mut self, offset: f64) {
        self.state.set_progress(offset);
        let progress = self.state.progress();

        if self.config.rotate_direction_back {
            self.state.set_mirrored(true);
        } else if progress == CLOSED {
            self.state.set_mirrored(false);
        } else if progress == OPEN {
            self.state.set_mirrored(true);
        }

        if self.config.auto_reset_rotate_direction
            && self.config.rotate_direction_back
            && progress == OPEN
        {
            self.config.rotate_direction_back = false;
        }

        if self.indicator_enabled {
            self.sink.glyph_changed(&self.glyph, self.state);
        }
    }

    fn contextual_description(&self) -> ResourceId {
        let open = self
            .drawer
            .as_ref()
            .is_some_and(|drawer| drawer.is_open(self.edge));
        if open {
            self.close_description
        } else {
            self.open_description
        }
    }

    fn push_up_indicator(&mut self, kind: IndicatorKind, description: ResourceId) {
        if !self.warned_hidden_navigation && !self.sink.is_navigation_visible() {
            tracing::warn!(
                "drawer indicator may not show up because the navigation affordance \
                 is not visible; enable it on the host chrome"
            );
            self.warned_hidden_navigation = true;
        }
        let indicator = match kind {
            IndicatorKind::Glyph => Indicator::Glyph {
                glyph: &self.glyph,
                state: self.state,
            },
            IndicatorKind::Static => Indicator::Static(self.static_indicator.as_ref()),
        };
        self.sink.set_up_indicator(indicator, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolbarSink;

    const OPEN_DESC: ResourceId = ResourceId::new(1);
    const CLOSE_DESC: ResourceId = ResourceId::new(2);
    const TOOLBAR_DESC: ResourceId = ResourceId::new(3);

    #[derive(Debug, Default)]
    struct Drawer {
        open: bool,
        lock_mode: LockMode,
        opens: u32,
        closes: u32,
    }

    impl DrawerHost for Drawer {
        fn is_open(&self, _edge: DrawerEdge) -> bool {
            self.open
        }

        fn is_visible(&self, _edge: DrawerEdge) -> bool {
            self.open
        }

        fn lock_mode(&self, _edge: DrawerEdge) -> LockMode {
            self.lock_mode
        }

        fn open(&mut self, _edge: DrawerEdge) {
            self.opens += 1;
        }

        fn close(&mut self, _edge: DrawerEdge) {
            self.closes += 1;
        }
    }

    /// A sink that never shows its navigation affordance.
    #[derive(Debug, Default)]
    struct HiddenSink {
        pushes: u32,
    }

    impl ChromeSink for HiddenSink {
        type Image = ();

        fn set_up_indicator(&mut self, _indicator: Indicator<'_, ()>, _description: ResourceId) {
            self.pushes += 1;
        }

        fn set_description(&mut self, _description: ResourceId) {}

        fn theme_up_indicator(&self) -> Option<()> {
            None
        }

        fn is_navigation_visible(&self) -> bool {
            false
        }

        fn themed_style(&self) -> understory_drawer_glyph::DrawerGlyphStyle {
            understory_drawer_glyph::DrawerGlyphStyle::default()
        }
    }

    fn toggle() -> DrawerToggle<ToolbarSink<&'static str>, Drawer> {
        let mut toggle = DrawerToggle::new(
            ToolbarSink::new(Some("theme"), TOOLBAR_DESC),
            Drawer::default(),
            OPEN_DESC,
            CLOSE_DESC,
        );
        toggle.sync_state(None);
        toggle
    }

    #[test]
    fn mirror_follows_rest_poses() {
        let mut t = toggle();
        t.on_slide(1.0);
        assert!(t.glyph_state().is_mirrored());
        t.on_slide(0.4);
        assert!(t.glyph_state().is_mirrored(), "unchanged mid-way");
        t.on_slide(0.0);
        assert!(!t.glyph_state().is_mirrored());
        t.on_slide(0.6);
        assert!(!t.glyph_state().is_mirrored(), "unchanged mid-way");
    }

    #[test]
    fn motion_changes_leave_pose_alone() {
        let mut t = toggle();
        t.on_slide(0.3);
        t.on_state_changed(DrawerMotion::Dragging);
        t.on_state_changed(DrawerMotion::Settling);
        t.on_state_changed(DrawerMotion::Idle);
        assert_eq!(t.glyph_state(), GlyphState::new(0.3, false));
    }

    #[test]
    fn slide_is_clamped() {
        let mut t = toggle();
        t.on_slide(1.7);
        assert_eq!(t.glyph_state().progress(), 1.0);
        t.on_slide(-0.2);
        assert_eq!(t.glyph_state().progress(), 0.0);
    }

    #[test]
    fn disabled_slide_animation_pins_closed() {
        let mut t = toggle();
        t.on_slide(0.5);
        t.set_slide_animation_enabled(false);
        assert_eq!(t.glyph_state().progress(), 0.0);
        t.on_slide(0.8);
        assert_eq!(t.glyph_state().progress(), 0.0);
        assert!(!t.is_slide_animation_enabled());
    }

    #[test]
    fn rotate_back_forces_mirror_and_resets_when_open() {
        let mut t = toggle();
        t.set_rotate_direction_back(true);
        t.on_slide(0.0);
        assert!(t.glyph_state().is_mirrored());
        t.on_slide(0.5);
        assert!(t.is_rotate_direction_back());
        t.on_slide(1.0);
        assert!(!t.is_rotate_direction_back());
    }

    #[test]
    fn rotate_back_sticks_without_auto_reset() {
        let mut t = toggle();
        t.set_rotate_direction_back(true);
        t.set_auto_reset_rotate_direction(false);
        t.on_slide(1.0);
        assert!(t.is_rotate_direction_back());
        t.on_slide(0.0);
        assert!(t.glyph_state().is_mirrored());
    }

    #[test]
    fn toggle_closes_visible_drawer() {
        let mut t = toggle();
        t.drawer_mut().unwrap().open = true;
        t.toggle();
        let drawer = t.drawer().unwrap();
        assert_eq!((drawer.opens, drawer.closes), (0, 1));
    }

    #[test]
    fn toggle_opens_hidden_drawer_unless_locked_closed() {
        let mut t = toggle();
        t.toggle();
        assert_eq!(t.drawer().unwrap().opens, 1);

        t.drawer_mut().unwrap().lock_mode = LockMode::LockedClosed;
        t.toggle();
        assert_eq!(t.drawer().unwrap().opens, 1);
    }

    #[test]
    fn toggle_without_drawer_is_noop() {
        let mut t = toggle();
        let drawer = t.detach_drawer();
        assert!(drawer.is_some());
        t.toggle();
        assert!(t.drawer().is_none());
        assert!(t.attach_drawer(Drawer::default()).is_none());
    }

    #[test]
    fn home_action_only_when_enabled() {
        let mut t = toggle();
        assert!(t.on_home_action());
        t.set_indicator_enabled(false);
        assert!(!t.on_home_action());
        assert_eq!(t.drawer().unwrap().opens, 1);
    }

    #[test]
    fn navigation_click_uses_fallback_when_disabled() {
        let mut t = toggle();
        t.set_indicator_enabled(false);
        assert!(!t.on_navigation_click());
        t.set_navigation_fallback(Some(Box::new(|| true)));
        assert!(t.has_navigation_fallback());
        assert!(t.on_navigation_click());
        assert_eq!(t.drawer().unwrap().opens, 0);

        t.set_indicator_enabled(true);
        assert!(t.on_navigation_click());
        assert_eq!(t.drawer().unwrap().opens, 1);
    }

    #[test]
    fn custom_indicator_resource() {
        let mut t = toggle();
        t.sink_mut().register_image(ResourceId::new(10), "custom");
        t.set_indicator_enabled(false);
        assert_eq!(t.sink().image(), Some(&"theme"));

        t.set_custom_indicator_resource(ResourceId::new(10)).unwrap();
        assert_eq!(t.custom_indicator(), Some(&"custom"));
        assert_eq!(t.sink().image(), Some(&"custom"));

        let err = t.set_custom_indicator_resource(ResourceId::new(11));
        assert_eq!(err, Err(UnknownResource(ResourceId::new(11))));
        assert_eq!(t.custom_indicator(), Some(&"custom"));

        t.set_custom_indicator_resource(ResourceId::NONE).unwrap();
        assert_eq!(t.custom_indicator(), None);
        assert_eq!(t.sink().image(), Some(&"theme"));
    }

    #[test]
    fn second_directed_toggle_replaces_first() {
        let mut t = toggle();
        t.toggle_indicator(false);
        t.on_animation_frame(0);
        t.on_animation_frame(100);
        let progress = t.glyph_state().progress();
        assert!(progress > 0.0 && progress < 0.5, "{progress}");

        // Still rounds to closed, so the replacement also runs 0 -> 1,
        // restarting from the closed pose.
        t.toggle_indicator(true);
        t.on_animation_frame(1_000);
        assert_eq!(t.glyph_state().progress(), 0.0);
        assert!(t.glyph_state().is_mirrored());
        assert!(t.on_animation_frame(1_200));
        assert!(!t.on_animation_frame(1_400));
        assert_eq!(t.glyph_state().progress(), 1.0);
        assert!(!t.is_animating());
    }

    #[test]
    fn cancel_animation_stops_ticking() {
        let mut t = toggle();
        t.toggle_indicator(false);
        assert!(t.is_animating());
        t.cancel_animation();
        assert!(!t.on_animation_frame(0));
        assert_eq!(t.glyph_state().progress(), 0.0);
    }

    #[test]
    fn hidden_navigation_warns_once() {
        let mut t = DrawerToggle::new(
            HiddenSink::default(),
            Drawer::default(),
            OPEN_DESC,
            CLOSE_DESC,
        );
        assert!(!t.warned_hidden_navigation);
        t.sync_state(None);
        assert!(t.warned_hidden_navigation);
        t.set_indicator_enabled(false);
        assert!(t.warned_hidden_navigation, "stays set after a static push");
        t.set_indicator_enabled(true);
        t.on_theme_changed();
        assert!(t.warned_hidden_navigation, "stays set after a re-sync");
        assert_eq!(t.sink().pushes, 4, "pushes still happen");
    }

    #[test]
    fn glyph_alpha_reaches_sink_on_next_pose() {
        let mut t = toggle();
        let bounds = Rect::new(0.0, 0.0, 24.0, 24.0);
        t.glyph_mut().set_alpha(128);
        assert_eq!(t.glyph().alpha(), 128);

        let before = t.sink().render(bounds).unwrap();
        assert_eq!(before.color.components[3], 1.0, "sink keeps its copy until told");

        t.on_slide(0.5);
        let shown = t.sink().render(bounds).unwrap();
        let own = t.render(bounds);
        assert_eq!(shown.color.components[3], own.color.components[3]);
        assert!((own.color.components[3] - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn animation_config_tracks_setters_and_directed_toggles() {
        let mut t = toggle();
        let config = t.animation_config();
        assert_eq!(config.duration_ms, crate::DEFAULT_DURATION_MS);
        assert!(!config.rotate_direction_back);
        assert!(config.auto_reset_rotate_direction);

        t.set_duration_ms(120);
        t.set_auto_reset_rotate_direction(false);
        t.toggle_indicator(true);
        let config = t.animation_config();
        assert_eq!(config.duration_ms, 120);
        assert!(config.rotate_direction_back);
        assert!(config.auto_reset_rotate_direction, "directed toggles re-arm it");
    }

    #[test]
    fn theme_change_keeps_custom_indicator() {
        let mut t = toggle();
        t.set_custom_indicator(Some("mine"));
        t.on_theme_changed();
        assert_eq!(t.custom_indicator(), Some(&"mine"));
        t.set_custom_indicator(None);
        t.on_theme_changed();
        assert_eq!(t.custom_indicator(), None);
        assert_eq!(t.static_indicator, Some("theme"));
    }

    #[test]
    fn set_glyph_resyncs() {
        let mut t = toggle();
        t.on_slide(1.0);
        let glyph = DrawerGlyph::new(
            understory_drawer_glyph::DrawerGlyphStyle::default().with_bar_thickness(3.0),
        );
        t.set_glyph(glyph.clone());
        assert_eq!(t.glyph(), &glyph);
        assert_eq!(t.glyph_state().progress(), 0.0);
        match t.sink().icon() {
            Some(crate::NavigationIcon::Glyph { glyph: shown, .. }) => assert_eq!(shown, &glyph),
            other => panic!("expected glyph, got {other:?}"),
        }
    }
}
