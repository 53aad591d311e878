// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made [`ChromeSink`] adapters.
//!
//! Both adapters keep an in-memory model of their chrome: what the navigation
//! slot currently shows and which description it carries. A host mirrors that
//! model into its real widgets after each call, or reads it when painting.
//!
//! - [`ToolbarSink`] models a free-standing toolbar. Its navigation slot is
//!   always visible, its original icon doubles as the theme indicator, and
//!   [`ResourceId::NONE`] restores the toolbar's original description.
//! - [`ActionBarSink`] models a window-level app bar whose navigation slot is
//!   only shown while "home as up" is enabled.

use alloc::vec::Vec;

use kurbo::Rect;
use understory_drawer_glyph::{
    DrawerGlyph, DrawerGlyphStyle, GlyphFrame, GlyphState, LayoutDirection,
};

use crate::host::{ChromeSink, Indicator, ResourceId};

/// What a navigation slot currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigationIcon<I> {
    /// The drawer glyph, in the last pose pushed to the sink.
    Glyph {
        /// Glyph to draw.
        glyph: DrawerGlyph,
        /// Pose to draw it in.
        state: GlyphState,
    },
    /// A static image.
    Image(I),
}

impl<I: Clone> NavigationIcon<I> {
    fn from_indicator(indicator: Indicator<'_, I>, fallback: Option<&I>) -> Option<Self> {
        match indicator {
            Indicator::Glyph { glyph, state } => Some(Self::Glyph {
                glyph: glyph.clone(),
                state,
            }),
            Indicator::Static(image) => image.or(fallback).cloned().map(Self::Image),
        }
    }

    fn update_pose(&mut self, new_glyph: &DrawerGlyph, new_state: GlyphState) {
        if let Self::Glyph { glyph, state } = self {
            if glyph != new_glyph {
                *glyph = new_glyph.clone();
            }
            *state = new_state;
        }
    }

    fn render(&self, direction: LayoutDirection, bounds: Rect) -> Option<GlyphFrame> {
        match self {
            Self::Glyph { glyph, state } => Some(glyph.render(*state, direction, bounds)),
            Self::Image(_) => None,
        }
    }
}

/// Sparse table of images addressable by [`ResourceId`].
#[derive(Clone, Debug)]
struct ImageTable<I> {
    entries: Vec<(ResourceId, I)>,
}

impl<I> Default for ImageTable<I> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<I: Clone> ImageTable<I> {
    fn insert(&mut self, id: ResourceId, image: I) {
        match self.entries.binary_search_by_key(&id, |(k, _)| *k) {
            Ok(idx) => self.entries[idx].1 = image,
            Err(idx) => self.entries.insert(idx, (id, image)),
        }
    }

    fn get(&self, id: ResourceId) -> Option<I> {
        if id.is_none() {
            return None;
        }
        self.entries
            .binary_search_by_key(&id, |(k, _)| *k)
            .ok()
            .map(|idx| self.entries[idx].1.clone())
    }
}

/// [`ChromeSink`] for a free-standing toolbar.
///
/// ```rust
/// use understory_drawer_toggle::{ChromeSink, Indicator, ResourceId, ToolbarSink};
///
/// const MENU: ResourceId = ResourceId::new(1);
///
/// let mut toolbar = ToolbarSink::new(Some("back-arrow"), ResourceId::new(9));
///
/// // A fresh toolbar shows its original icon and description.
/// assert_eq!(toolbar.image(), Some(&"back-arrow"));
/// assert_eq!(toolbar.description(), ResourceId::new(9));
///
/// toolbar.set_up_indicator(Indicator::Static(Some(&"menu")), MENU);
/// assert_eq!(toolbar.image(), Some(&"menu"));
/// assert_eq!(toolbar.description(), MENU);
///
/// toolbar.set_description(ResourceId::NONE);
/// assert_eq!(toolbar.description(), ResourceId::new(9));
/// ```
#[derive(Clone, Debug)]
pub struct ToolbarSink<I> {
    icon: Option<NavigationIcon<I>>,
    description: ResourceId,
    default_icon: Option<I>,
    default_description: ResourceId,
    style: DrawerGlyphStyle,
    direction: LayoutDirection,
    images: ImageTable<I>,
}

impl<I: Clone> ToolbarSink<I> {
    /// Creates a toolbar model from the toolbar's original icon and description.
    #[must_use]
    pub fn new(default_icon: Option<I>, default_description: ResourceId) -> Self {
        Self {
            icon: default_icon.clone().map(NavigationIcon::Image),
            description: default_description,
            default_icon,
            default_description,
            style: DrawerGlyphStyle::default(),
            direction: LayoutDirection::Ltr,
            images: ImageTable::default(),
        }
    }

    /// Sets the glyph style handed to toggles built on this toolbar.
    #[must_use]
    pub fn with_style(mut self, style: DrawerGlyphStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the layout direction.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    /// Makes `image` resolvable through [`ChromeSink::resolve_image`].
    pub fn register_image(&mut self, id: ResourceId, image: I) {
        self.images.insert(id, image);
    }

    /// Returns what the navigation slot shows.
    #[must_use]
    pub fn icon(&self) -> Option<&NavigationIcon<I>> {
        self.icon.as_ref()
    }

    /// Returns the static image in the navigation slot, if that is what it shows.
    #[must_use]
    pub fn image(&self) -> Option<&I> {
        match &self.icon {
            Some(NavigationIcon::Image(image)) => Some(image),
            _ => None,
        }
    }

    /// Returns the current navigation description.
    #[must_use]
    pub fn description(&self) -> ResourceId {
        self.description
    }

    /// Renders the glyph if the navigation slot shows it.
    #[must_use]
    pub fn render(&self, bounds: Rect) -> Option<GlyphFrame> {
        self.icon.as_ref()?.render(self.direction, bounds)
    }
}

impl<I: Clone> ChromeSink for ToolbarSink<I> {
    type Image = I;

    fn set_up_indicator(&mut self, indicator: Indicator<'_, I>, description: ResourceId) {
        self.icon = NavigationIcon::from_indicator(indicator, None);
        self.set_description(description);
    }

    fn set_description(&mut self, description: ResourceId) {
        self.description = if description.is_none() {
            self.default_description
        } else {
            description
        };
    }

    fn theme_up_indicator(&self) -> Option<I> {
        self.default_icon.clone()
    }

    fn is_navigation_visible(&self) -> bool {
        true
    }

    fn themed_style(&self) -> DrawerGlyphStyle {
        self.style
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn resolve_image(&self, id: ResourceId) -> Option<I> {
        self.images.get(id)
    }

    fn glyph_changed(&mut self, glyph: &DrawerGlyph, state: GlyphState) {
        if let Some(icon) = &mut self.icon {
            icon.update_pose(glyph, state);
        }
    }
}

/// [`ChromeSink`] for a window-level app bar with display options.
///
/// The navigation slot is only shown while [`ActionBarSink::set_home_as_up`]
/// is enabled; pushing an indicator while it is hidden still updates the
/// model. A static push without an image shows the theme indicator.
#[derive(Clone, Debug)]
pub struct ActionBarSink<I> {
    indicator: Option<NavigationIcon<I>>,
    description: ResourceId,
    home_as_up: bool,
    theme_indicator: Option<I>,
    style: DrawerGlyphStyle,
    direction: LayoutDirection,
    images: ImageTable<I>,
}

impl<I: Clone> ActionBarSink<I> {
    /// Creates an app bar model with the theme's up indicator.
    ///
    /// "Home as up" starts disabled, as on a fresh app bar.
    #[must_use]
    pub fn new(theme_indicator: Option<I>) -> Self {
        Self {
            indicator: None,
            description: ResourceId::NONE,
            home_as_up: false,
            theme_indicator,
            style: DrawerGlyphStyle::default(),
            direction: LayoutDirection::Ltr,
            images: ImageTable::default(),
        }
    }

    /// Sets the glyph style handed to toggles built on this app bar.
    #[must_use]
    pub fn with_style(mut self, style: DrawerGlyphStyle) -> Self {
        self.style = style;
        self
    }

    /// Shows or hides the navigation slot.
    pub fn set_home_as_up(&mut self, enabled: bool) {
        self.home_as_up = enabled;
    }

    /// Sets the layout direction.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    /// Makes `image` resolvable through [`ChromeSink::resolve_image`].
    pub fn register_image(&mut self, id: ResourceId, image: I) {
        self.images.insert(id, image);
    }

    /// Returns what the navigation slot shows.
    #[must_use]
    pub fn indicator(&self) -> Option<&NavigationIcon<I>> {
        self.indicator.as_ref()
    }

    /// Returns the home action description; [`ResourceId::NONE`] is the
    /// app bar's built-in default.
    #[must_use]
    pub fn description(&self) -> ResourceId {
        self.description
    }

    /// Renders the glyph if the navigation slot is shown and holds it.
    #[must_use]
    pub fn render(&self, bounds: Rect) -> Option<GlyphFrame> {
        if !self.home_as_up {
            return None;
        }
        self.indicator.as_ref()?.render(self.direction, bounds)
    }
}

impl<I: Clone> ChromeSink for ActionBarSink<I> {
    type Image = I;

    fn set_up_indicator(&mut self, indicator: Indicator<'_, I>, description: ResourceId) {
        self.indicator = NavigationIcon::from_indicator(indicator, self.theme_indicator.as_ref());
        self.description = description;
    }

    fn set_description(&mut self, description: ResourceId) {
        self.description = description;
    }

    fn theme_up_indicator(&self) -> Option<I> {
        self.theme_indicator.clone()
    }

    fn is_navigation_visible(&self) -> bool {
        self.home_as_up
    }

    fn themed_style(&self) -> DrawerGlyphStyle {
        self.style
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn resolve_image(&self, id: ResourceId) -> Option<I> {
        self.images.get(id)
    }

    fn glyph_changed(&mut self, glyph: &DrawerGlyph, state: GlyphState) {
        if let Some(indicator) = &mut self.indicator {
            indicator.update_pose(glyph, state);
        }
    }
}
