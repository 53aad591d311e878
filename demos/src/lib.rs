// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory drawer demos.

use understory_drawer_toggle::{DrawerEdge, DrawerHost, LockMode};

/// A drawer that settles instantly and remembers how far it is open.
///
/// Real hosts animate the drawer and report intermediate offsets; the demos
/// replay those offsets by hand.
#[derive(Debug, Default)]
pub struct InstantDrawer {
    /// Current open fraction.
    pub offset: f64,
    /// Lock mode reported to the toggle.
    pub lock_mode: LockMode,
}

impl DrawerHost for InstantDrawer {
    fn is_open(&self, _edge: DrawerEdge) -> bool {
        self.offset >= 1.0
    }

    fn is_visible(&self, _edge: DrawerEdge) -> bool {
        self.offset > 0.0
    }

    fn lock_mode(&self, _edge: DrawerEdge) -> LockMode {
        self.lock_mode
    }

    fn open(&mut self, edge: DrawerEdge) {
        tracing::info!(?edge, "drawer open requested");
        self.offset = 1.0;
    }

    fn close(&mut self, edge: DrawerEdge) {
        tracing::info!(?edge, "drawer close requested");
        self.offset = 0.0;
    }
}
