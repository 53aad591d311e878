// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot of the toggle state that survives a host restart.

use crate::config::DEFAULT_DURATION_MS;

/// The four scalars a drawer toggle needs to restore itself.
///
/// Produced by [`DrawerToggle::persist`](crate::DrawerToggle::persist) and
/// consumed by [`DrawerToggle::sync_state`](crate::DrawerToggle::sync_state).
/// Storing it is up to the host; with the `serde` feature the snapshot can be
/// serialized with any serde format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistedToggleState {
    /// Glyph progress rounded to the nearest rest pose: `0` or `1`.
    pub drawer_position: i32,
    /// Directed toggle duration in milliseconds.
    pub duration_ms: u32,
    /// Pending mirrored sweep.
    pub rotate_direction_back: bool,
    /// Whether the mirrored sweep clears itself once open.
    pub auto_reset_rotate_direction: bool,
}

impl Default for PersistedToggleState {
    fn default() -> Self {
        Self {
            drawer_position: 0,
            duration_ms: DEFAULT_DURATION_MS,
            rotate_direction_back: false,
            auto_reset_rotate_direction: true,
        }
    }
}
