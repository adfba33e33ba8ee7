// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state, interaction phases, and index stepping rules.

use carousel_layout::LayoutMetrics;

/// Interaction phase of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// At rest.
    #[default]
    Idle,
    /// A horizontal drag is following the finger; transitions are off.
    Dragging,
    /// A committed move is animating until the given timestamp.
    ///
    /// Nothing waits for it: a new navigation simply restarts the transition.
    Transitioning {
        /// Timestamp at which the declared transition duration has elapsed.
        until: u64,
    },
}

/// Logical position of the carousel.
///
/// `current_index` is the single source of truth; `current_translate` is
/// derived from it and kept in sync after every committed change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationState {
    /// First item of the active window.
    pub current_index: usize,
    /// Signed track translation for `current_index`, in pixels.
    pub current_translate: f64,
}

/// Which navigation buttons a host should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationControls {
    /// A previous button has somewhere to go.
    pub previous: bool,
    /// A next button has somewhere to go.
    pub next: bool,
}

impl NavigationControls {
    /// Resolves control visibility.
    ///
    /// Previous is hidden at index `0`; next is hidden once
    /// `index >= item_count - rendered_item_count`. Both are hidden while
    /// metrics are unavailable.
    #[must_use]
    pub fn resolve(index: usize, metrics: Option<&LayoutMetrics>, item_count: usize) -> Self {
        let Some(metrics) = metrics else {
            return Self::default();
        };
        Self {
            previous: index > 0,
            next: index < metrics.last_reachable_index(item_count),
        }
    }
}

/// Target of a forward step of `step` items, clamped to the last reachable index.
///
/// An index already at or past that bound stays where it is, so a stray
/// call never moves the track backwards.
#[must_use]
pub fn step_forward(
    index: usize,
    step: usize,
    metrics: &LayoutMetrics,
    item_count: usize,
) -> usize {
    let last = metrics.last_reachable_index(item_count);
    if index >= last {
        index
    } else {
        index.saturating_add(step).min(last)
    }
}

/// Target of a backward step of `step` items, clamped at `0`.
#[must_use]
pub const fn step_backward(index: usize, step: usize) -> usize {
    index.saturating_sub(step)
}

/// Clamps an explicitly requested index into `0..=last_reachable_index`.
#[must_use]
pub fn clamp_target(index: usize, metrics: &LayoutMetrics, item_count: usize) -> usize {
    index.min(metrics.last_reachable_index(item_count))
}
