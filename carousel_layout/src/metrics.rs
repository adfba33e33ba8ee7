// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout metrics resolution from raw host measurements.

use crate::TextDirection;

/// Layout-related configuration, read-only after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Upper bound on the number of fully visible items. `1` selects
    /// single-item mode, where every item fills the container.
    pub max_items_per_page: usize,
    /// Whether previous/next buttons are rendered beside the track and
    /// should be subtracted from the available width.
    pub reserve_for_buttons: bool,
    /// Width reserved for the navigation buttons when they are rendered.
    pub button_reserve: f64,
    /// Viewports narrower than this always show a single logical page.
    pub narrow_breakpoint: f64,
    /// Extra width added to the track box on wide viewports.
    pub extra_track_width: f64,
}

impl LayoutConfig {
    /// Default maximum number of visible items.
    pub const DEFAULT_MAX_ITEMS_PER_PAGE: usize = 4;
    /// Default width reserved for navigation buttons.
    pub const DEFAULT_BUTTON_RESERVE: f64 = 80.0;
    /// Default narrow-viewport breakpoint.
    pub const DEFAULT_NARROW_BREAKPOINT: f64 = 650.0;

    /// Returns `true` when every item fills the container on its own.
    #[must_use]
    pub const fn is_single_item(&self) -> bool {
        self.max_items_per_page <= 1
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_items_per_page: Self::DEFAULT_MAX_ITEMS_PER_PAGE,
            reserve_for_buttons: false,
            button_reserve: Self::DEFAULT_BUTTON_RESERVE,
            narrow_breakpoint: Self::DEFAULT_NARROW_BREAKPOINT,
            extra_track_width: 0.0,
        }
    }
}

/// Raw measurements supplied by the host on mount and on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutInput {
    /// Width of the whole viewport (window), compared against the narrow breakpoint.
    pub viewport_width: f64,
    /// Width available to the carousel box before it is narrowed to its track.
    pub container_width: f64,
    /// Measured width of a single item. Zero means "not measurable yet".
    pub item_width: f64,
    /// Gap between adjacent items.
    pub gap_width: f64,
    /// Computed text direction of the carousel box.
    pub direction: TextDirection,
}

/// Resolved layout for one viewport size.
///
/// Metrics are always replaced wholesale; the controller never patches
/// individual fields after a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Width of one item.
    pub item_width: f64,
    /// Gap between adjacent items.
    pub gap_width: f64,
    /// Number of fully visible items, always at least `1`.
    pub rendered_item_count: usize,
    /// Viewport width these metrics were computed for.
    pub viewport_width: f64,
    /// Width of the carousel box once narrowed to its track.
    pub track_width: f64,
    /// Narrow viewport with a multi-item configuration: a sliver of the
    /// neighbouring items is revealed around the centered item.
    pub peek: bool,
    /// Text direction the metrics were measured with.
    pub direction: TextDirection,
}

impl LayoutMetrics {
    /// Distance between the leading edges of two adjacent items.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.item_width + self.gap_width
    }

    /// Centering offset used in peek mode, `0.0` otherwise.
    #[must_use]
    pub fn peek_offset(&self) -> f64 {
        if self.peek {
            ((self.track_width - self.item_width) / 2.0).max(0.0)
        } else {
            0.0
        }
    }

    /// The highest index whose window of visible items still ends inside the
    /// collection: `item_count - rendered_item_count`, saturating at `0`.
    #[must_use]
    pub const fn last_reachable_index(&self, item_count: usize) -> usize {
        item_count.saturating_sub(self.rendered_item_count)
    }

    /// Number of distinct pages a page indicator should show.
    #[must_use]
    pub const fn page_count(&self, item_count: usize) -> usize {
        self.last_reachable_index(item_count) + 1
    }

    /// Returns `true` if every item is already visible, leaving nothing to scroll to.
    #[must_use]
    pub const fn shows_all(&self, item_count: usize) -> bool {
        item_count <= self.rendered_item_count
    }

    /// Sign applied to translations for the current text direction.
    #[must_use]
    pub const fn direction_factor(&self) -> f64 {
        self.direction.factor()
    }

    /// Returns a copy of these metrics for a different text direction.
    #[must_use]
    pub const fn with_direction(self, direction: TextDirection) -> Self {
        Self { direction, ..self }
    }
}

/// Resolves [`LayoutMetrics`] for `item_count` items.
///
/// - With `max_items_per_page == 1`, or on a viewport narrower than
///   [`LayoutConfig::narrow_breakpoint`], exactly one item is visible.
/// - Otherwise the visible count is the number of whole items that fit into
///   the container (minus [`LayoutConfig::button_reserve`] when buttons are
///   rendered), capped by `max_items_per_page` and by `item_count`, and never
///   less than `1`.
///
/// Returns `None` while the item width is zero or not finite, so callers can
/// keep their previous metrics instead of dividing by zero downstream.
#[must_use]
pub fn compute_layout(
    input: &LayoutInput,
    config: &LayoutConfig,
    item_count: usize,
) -> Option<LayoutMetrics> {
    let item_width = non_negative(input.item_width);
    if item_width <= 0.0 || !item_width.is_finite() {
        return None;
    }
    let gap_width = non_negative(input.gap_width);
    let container_width = non_negative(input.container_width);
    let viewport_width = non_negative(input.viewport_width);

    let max_items = config.max_items_per_page.max(1);
    let narrow = viewport_width < config.narrow_breakpoint;

    let rendered_item_count = if max_items == 1 || narrow {
        1
    } else {
        let reserve = if config.reserve_for_buttons {
            non_negative(config.button_reserve)
        } else {
            0.0
        };
        let capacity = whole_items(container_width - reserve, item_width);
        max_items.min(capacity).min(item_count).max(1)
    };

    let track_width = if narrow || max_items == 1 {
        container_width
    } else {
        let count = rendered_item_count as f64;
        item_width * count + gap_width * (count - 1.0) + non_negative(config.extra_track_width)
    };

    Some(LayoutMetrics {
        item_width,
        gap_width,
        rendered_item_count,
        viewport_width,
        track_width,
        peek: narrow && max_items > 1,
        direction: input.direction,
    })
}

/// How many whole items of `item_width` fit into `available`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Saturating float-to-int cast of a positive ratio is the intended floor"
)]
fn whole_items(available: f64, item_width: f64) -> usize {
    if available <= 0.0 || item_width <= 0.0 {
        return 0;
    }
    (available / item_width) as usize
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() || value.is_sign_negative() {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutConfig, LayoutInput, compute_layout};
    use crate::TextDirection;

    fn input(width: f64, item_width: f64, gap_width: f64) -> LayoutInput {
        LayoutInput {
            viewport_width: width,
            container_width: width,
            item_width,
            gap_width,
            direction: TextDirection::Ltr,
        }
    }

    fn config(max_items_per_page: usize) -> LayoutConfig {
        LayoutConfig {
            max_items_per_page,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn wide_viewport_fits_whole_items() {
        let metrics = compute_layout(&input(900.0, 250.0, 15.0), &config(3), 6).unwrap();
        assert_eq!(metrics.rendered_item_count, 3);
        assert!(!metrics.peek);
        // Box narrowed to three items and two gaps.
        assert_eq!(metrics.track_width, 780.0);
        assert_eq!(metrics.stride(), 265.0);
        assert_eq!(metrics.peek_offset(), 0.0);
    }

    #[test]
    fn capacity_caps_the_configured_maximum() {
        // floor(900 / 250) = 3 < 4.
        let metrics = compute_layout(&input(900.0, 250.0, 15.0), &config(4), 10).unwrap();
        assert_eq!(metrics.rendered_item_count, 3);
    }

    #[test]
    fn button_reserve_shrinks_capacity() {
        let mut cfg = config(4);
        cfg.reserve_for_buttons = true;
        // (800 - 80) / 250 = 2.88 → 2.
        let metrics = compute_layout(&input(800.0, 250.0, 0.0), &cfg, 10).unwrap();
        assert_eq!(metrics.rendered_item_count, 2);

        cfg.reserve_for_buttons = false;
        // 800 / 250 = 3.2 → 3.
        let metrics = compute_layout(&input(800.0, 250.0, 0.0), &cfg, 10).unwrap();
        assert_eq!(metrics.rendered_item_count, 3);
    }

    #[test]
    fn zero_capacity_is_floored_to_one() {
        let metrics = compute_layout(&input(700.0, 1000.0, 0.0), &config(4), 10).unwrap();
        assert_eq!(metrics.rendered_item_count, 1);
    }

    #[test]
    fn visible_count_never_exceeds_item_count() {
        let metrics = compute_layout(&input(2000.0, 100.0, 0.0), &config(4), 2).unwrap();
        assert_eq!(metrics.rendered_item_count, 2);
        assert!(metrics.shows_all(2));

        let empty = compute_layout(&input(2000.0, 100.0, 0.0), &config(4), 0).unwrap();
        assert_eq!(empty.rendered_item_count, 1);
        assert_eq!(empty.page_count(0), 1);
    }

    #[test]
    fn single_item_mode_ignores_width() {
        let metrics = compute_layout(&input(2000.0, 100.0, 0.0), &config(1), 10).unwrap();
        assert_eq!(metrics.rendered_item_count, 1);
        assert!(!metrics.peek);
        // The box keeps its full width.
        assert_eq!(metrics.track_width, 2000.0);
    }

    #[test]
    fn narrow_viewport_shows_one_page_and_peeks() {
        let metrics = compute_layout(&input(400.0, 100.0, 10.0), &config(4), 10).unwrap();
        assert_eq!(metrics.rendered_item_count, 1);
        assert!(metrics.peek);
        assert_eq!(metrics.track_width, 400.0);
        assert_eq!(metrics.peek_offset(), 150.0);
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let metrics = compute_layout(&input(650.0, 100.0, 0.0), &config(4), 10).unwrap();
        assert_eq!(metrics.rendered_item_count, 4);
        assert!(!metrics.peek);
    }

    #[test]
    fn extra_track_width_widens_the_box() {
        let mut cfg = config(2);
        cfg.extra_track_width = 40.0;
        let metrics = compute_layout(&input(1000.0, 200.0, 20.0), &cfg, 5).unwrap();
        assert_eq!(metrics.track_width, 200.0 * 2.0 + 20.0 + 40.0);
    }

    #[test]
    fn unmeasured_items_yield_no_metrics() {
        assert!(compute_layout(&input(900.0, 0.0, 15.0), &config(3), 6).is_none());
        assert!(compute_layout(&input(900.0, -5.0, 15.0), &config(3), 6).is_none());
        assert!(compute_layout(&input(900.0, f64::NAN, 15.0), &config(3), 6).is_none());
        assert!(compute_layout(&input(900.0, f64::INFINITY, 15.0), &config(3), 6).is_none());
    }

    #[test]
    fn negative_gap_is_clamped() {
        let metrics = compute_layout(&input(900.0, 250.0, -15.0), &config(3), 6).unwrap();
        assert_eq!(metrics.gap_width, 0.0);
    }

    #[test]
    fn last_reachable_index_saturates() {
        let metrics = compute_layout(&input(900.0, 250.0, 15.0), &config(3), 6).unwrap();
        assert_eq!(metrics.last_reachable_index(6), 3);
        assert_eq!(metrics.page_count(6), 4);
        assert_eq!(metrics.last_reachable_index(2), 0);
    }

    #[test]
    fn direction_is_carried_and_replaceable() {
        let metrics = compute_layout(&input(900.0, 250.0, 15.0), &config(3), 6).unwrap();
        assert_eq!(metrics.direction_factor(), -1.0);
        let rtl = metrics.with_direction(TextDirection::Rtl);
        assert_eq!(rtl.direction_factor(), 1.0);
        assert_eq!(rtl.rendered_item_count, metrics.rendered_item_count);
    }
}
