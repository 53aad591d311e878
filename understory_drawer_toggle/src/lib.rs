// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer_toggle --heading-base-level=0

//! Understory Drawer Toggle: keep a navigation drawer, its glyph and its
//! accessibility description in step.
//!
//! [`DrawerToggle`] listens to drawer motion and user actions, owns the
//! [`GlyphState`](understory_drawer_glyph::GlyphState) of the hamburger-to-arrow
//! glyph from `understory_drawer_glyph`, and pushes the glyph plus an "open
//! drawer" / "close drawer" description to the app bar.
//!
//! ## Collaborators
//!
//! The toggle is headless. It reaches the host through two traits:
//!
//! - [`ChromeSink`]: the app bar surface that displays the indicator and its
//!   description. [`ToolbarSink`] and [`ActionBarSink`] are ready-made
//!   in-memory models for the two common shapes of app bar.
//! - [`DrawerHost`]: the container owning the drawer, queried for
//!   open/visible/lock state and asked to open or close.
//!
//! ## Event flow
//!
//! | Host event | Toggle call |
//! | --- | --- |
//! | drawer slid | [`DrawerToggle::on_slide`] |
//! | drawer motion state changed | [`DrawerToggle::on_state_changed`] |
//! | drawer settled open / closed | [`DrawerToggle::on_opened`] / [`DrawerToggle::on_closed`] |
//! | navigation affordance clicked | [`DrawerToggle::on_navigation_click`] |
//! | "home" menu action | [`DrawerToggle::on_home_action`] |
//! | frame tick | [`DrawerToggle::on_animation_frame`] |
//! | theme / configuration change | [`DrawerToggle::on_theme_changed`] |
//! | state restore | [`DrawerToggle::sync_state`] |
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_drawer_toggle::{
//!     DrawerEdge, DrawerHost, DrawerToggle, LockMode, ResourceId, ToolbarSink,
//! };
//!
//! #[derive(Default)]
//! struct Drawer {
//!     open: bool,
//! }
//!
//! impl DrawerHost for Drawer {
//!     fn is_open(&self, _: DrawerEdge) -> bool { self.open }
//!     fn is_visible(&self, _: DrawerEdge) -> bool { self.open }
//!     fn lock_mode(&self, _: DrawerEdge) -> LockMode { LockMode::Unlocked }
//!     fn open(&mut self, _: DrawerEdge) { self.open = true; }
//!     fn close(&mut self, _: DrawerEdge) { self.open = false; }
//! }
//!
//! const OPEN_DRAWER: ResourceId = ResourceId::new(1);
//! const CLOSE_DRAWER: ResourceId = ResourceId::new(2);
//!
//! let toolbar = ToolbarSink::<()>::new(None, ResourceId::NONE);
//! let mut toggle = DrawerToggle::new(toolbar, Drawer::default(), OPEN_DRAWER, CLOSE_DRAWER);
//! toggle.sync_state(None);
//! assert_eq!(toggle.sink().description(), OPEN_DRAWER);
//!
//! // The user taps the glyph; the host forwards drawer callbacks.
//! assert!(toggle.on_navigation_click());
//! toggle.on_slide(0.5);
//! toggle.on_opened();
//! assert_eq!(toggle.sink().description(), CLOSE_DRAWER);
//! assert!(toggle.glyph_state().is_open());
//! ```
//!
//! ## Directed toggles
//!
//! [`DrawerToggle::toggle_indicator`] animates only the glyph, flipping it to
//! the opposite rest pose with the configured [`Curve`] and duration. Passing
//! `back = true` sweeps it the mirrored way once. The host drives the
//! animation by calling [`DrawerToggle::on_animation_frame`] with a monotonic
//! timestamp until it returns `false`. Starting a directed toggle while one is
//! running replaces the running one.
//!
//! ## Logging
//!
//! Pushing an indicator while [`ChromeSink::is_navigation_visible`] is `false`
//! emits a single `tracing` warning per toggle: the indicator is pushed anyway,
//! but the host probably forgot to show its navigation affordance.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`PersistedToggleState`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod animation;
mod config;
mod host;
mod persist;
mod sinks;
mod toggle;

pub use animation::{AnimationSample, ProgressAnimation};
pub use config::{AnimationConfig, Curve, DEFAULT_DURATION_MS};
pub use host::{
    ChromeSink, DrawerEdge, DrawerHost, DrawerMotion, Indicator, LockMode, ResourceId,
    UnknownResource,
};
pub use persist::PersistedToggleState;
pub use sinks::{ActionBarSink, NavigationIcon, ToolbarSink};
pub use toggle::{DrawerToggle, NavigationFallback};

pub use understory_drawer_glyph;
