// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborators: the chrome sink and the drawer.
//!
//! The controller never talks to a toolkit directly. Hosts implement
//! [`ChromeSink`] for the top bar surface that shows the navigation indicator,
//! and [`DrawerHost`] for the container that owns the drawer. A host that has
//! to support several generations of its own chrome API picks one
//! [`ChromeSink`] implementation when the toggle is constructed; nothing else
//! in this crate inspects which one it got.

use core::fmt;

use understory_drawer_glyph::{DrawerGlyph, DrawerGlyphStyle, GlyphState, LayoutDirection};

/// Opaque handle to a host resource: a description string or an image.
///
/// [`ResourceId::NONE`] (zero) means "absent". As a description it asks the
/// sink to restore its default description; as an image id it reverts the
/// static indicator to the theme default.
///
/// ```rust
/// use understory_drawer_toggle::ResourceId;
///
/// const OPEN_DRAWER: ResourceId = ResourceId::new(0x7f0e_0001);
/// assert!(!OPEN_DRAWER.is_none());
/// assert!(ResourceId::NONE.is_none());
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(u32);

impl ResourceId {
    /// The absent resource.
    pub const NONE: Self = Self(0);

    /// Creates a resource id from its raw value.
    #[must_use]
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` for [`ResourceId::NONE`].
    #[must_use]
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceId").field(&self.0).finish()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({:#x})", self.0)
    }
}

/// Error returned when an image resource id cannot be resolved by the sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownResource(pub ResourceId);

impl fmt::Display for UnknownResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the chrome sink has no image for {}", self.0)
    }
}

impl core::error::Error for UnknownResource {}

/// The indicator pushed to a [`ChromeSink`].
#[derive(Debug)]
pub enum Indicator<'a, I> {
    /// The animated drawer glyph in its current pose.
    Glyph {
        /// The glyph to draw.
        glyph: &'a DrawerGlyph,
        /// The pose to draw it in.
        state: GlyphState,
    },
    /// A static up indicator. `None` lets the sink fall back to whatever it
    /// shows when no indicator is set.
    Static(Option<&'a I>),
}

/// The top bar surface that displays the navigation indicator.
///
/// Only the first five methods are required; the rest have defaults suitable
/// for hosts without a layout direction, a resource table, or a redraw hook.
pub trait ChromeSink {
    /// The host's static image type.
    type Image: Clone;

    /// Replaces the navigation indicator and its accessibility description.
    fn set_up_indicator(&mut self, indicator: Indicator<'_, Self::Image>, description: ResourceId);

    /// Replaces only the accessibility description.
    fn set_description(&mut self, description: ResourceId);

    /// Returns the theme's default up indicator, if it has one.
    fn theme_up_indicator(&self) -> Option<Self::Image>;

    /// Returns `true` when the navigation affordance is currently shown.
    ///
    /// The controller only uses this to warn about a likely misconfiguration.
    fn is_navigation_visible(&self) -> bool;

    /// Returns the glyph style derived from the sink's theme.
    fn themed_style(&self) -> DrawerGlyphStyle;

    /// Returns the layout direction the glyph is drawn in.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }

    /// Looks up an image by resource id.
    fn resolve_image(&self, id: ResourceId) -> Option<Self::Image> {
        let _ = id;
        None
    }

    /// Called after the glyph pose changed while the glyph is the indicator.
    ///
    /// Sinks that cache the pose use this to redraw.
    fn glyph_changed(&mut self, glyph: &DrawerGlyph, state: GlyphState) {
        let _ = (glyph, state);
    }
}

/// Which edge of the container a drawer slides in from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawerEdge {
    /// The leading edge (left in LTR layouts).
    #[default]
    Start,
    /// The trailing edge.
    End,
}

/// Lock state of a drawer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LockMode {
    /// The drawer responds to user interaction.
    #[default]
    Unlocked,
    /// The drawer is pinned closed.
    LockedClosed,
    /// The drawer is pinned open.
    LockedOpen,
}

/// Motion state reported by the drawer container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawerMotion {
    /// The drawer is at rest.
    #[default]
    Idle,
    /// The user is dragging the drawer.
    Dragging,
    /// The drawer is settling to a rest position after a drag or request.
    Settling,
}

/// The container that owns the navigation drawer.
pub trait DrawerHost {
    /// Returns `true` when the drawer on `edge` is fully open.
    fn is_open(&self, edge: DrawerEdge) -> bool;

    /// Returns `true` when any part of the drawer on `edge` is on screen.
    fn is_visible(&self, edge: DrawerEdge) -> bool;

    /// Returns the lock mode of the drawer on `edge`.
    fn lock_mode(&self, edge: DrawerEdge) -> LockMode;

    /// Requests that the drawer on `edge` opens.
    fn open(&mut self, edge: DrawerEdge);

    /// Requests that the drawer on `edge` closes.
    fn close(&mut self, edge: DrawerEdge);
}
