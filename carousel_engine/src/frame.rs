// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What handlers report and what hosts render.

use crate::TransitionSpec;

bitflags::bitflags! {
    /// Parts of the controller state touched by a handler.
    ///
    /// Hosts can skip re-rendering when a handler returns an empty set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u16 {
        /// `current_index` changed.
        const INDEX       = 1 << 0;
        /// The rendered track translation changed (committed or live).
        const TRANSLATE   = 1 << 1;
        /// The transition was enabled, disabled, or restarted.
        const TRANSITION  = 1 << 2;
        /// Layout metrics were replaced.
        const LAYOUT      = 1 << 3;
        /// The interaction phase changed.
        const PHASE       = 1 << 4;
        /// Page scroll suppression was acquired or released.
        const SCROLL_LOCK = 1 << 5;
        /// The autoplay timer was armed, re-armed, or cancelled.
        const AUTOPLAY    = 1 << 6;
        /// The item collection was replaced.
        const ITEMS       = 1 << 7;
    }
}

/// Everything a host needs to paint the item track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderFrame {
    /// Horizontal translation of the track, including any live drag offset.
    pub translate: f64,
    /// Transition to animate with, or `None` to jump (live drag, resize).
    pub transition: Option<TransitionSpec>,
    /// The surrounding page must not scroll vertically.
    pub page_scroll_locked: bool,
}
