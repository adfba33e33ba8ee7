// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index → track translation.

use core::ops::Range;

use crate::LayoutMetrics;

/// Signed translation of the item track that brings `index` into view.
///
/// The magnitude is `index * (item_width + gap_width)`. In peek mode (see
/// [`LayoutMetrics::peek`]) interior items are centered in the box, which
/// shifts them back by [`LayoutMetrics::peek_offset`]; the first index adds
/// that offset back so the track starts flush, and the last reachable index
/// (`item_count - rendered_item_count`) subtracts it once more so the track
/// ends flush instead of scrolling past its last item.
///
/// The result is negated for left-to-right text and kept positive for
/// right-to-left text.
///
/// This function is pure: drag commits, button navigation, indicators, and
/// autoplay all route through it so every path lands on the same pixel.
#[must_use]
pub fn translate_for(index: usize, metrics: &LayoutMetrics, item_count: usize) -> f64 {
    let base = index as f64 * metrics.stride();
    let magnitude = if metrics.peek {
        let offset = metrics.peek_offset();
        if index == 0 {
            base
        } else if index >= metrics.last_reachable_index(item_count) {
            base - 2.0 * offset
        } else {
            base - offset
        }
    } else {
        base
    };
    magnitude * metrics.direction_factor()
}

/// Logical items fully in view when the track sits at `index`.
#[must_use]
pub fn visible_range(index: usize, metrics: &LayoutMetrics, item_count: usize) -> Range<usize> {
    let start = index.min(item_count);
    let end = start
        .saturating_add(metrics.rendered_item_count)
        .min(item_count);
    start..end
}

#[cfg(test)]
mod tests {
    use super::{translate_for, visible_range};
    use crate::{LayoutConfig, LayoutInput, LayoutMetrics, TextDirection, compute_layout};

    fn metrics(
        width: f64,
        item_width: f64,
        gap_width: f64,
        max: usize,
        n: usize,
    ) -> LayoutMetrics {
        let input = LayoutInput {
            viewport_width: width,
            container_width: width,
            item_width,
            gap_width,
            direction: TextDirection::Ltr,
        };
        let config = LayoutConfig {
            max_items_per_page: max,
            ..LayoutConfig::default()
        };
        compute_layout(&input, &config, n).unwrap()
    }

    #[test]
    fn wide_layout_uses_plain_stride() {
        let m = metrics(900.0, 250.0, 15.0, 3, 6);
        assert_eq!(translate_for(0, &m, 6), 0.0);
        assert_eq!(translate_for(1, &m, 6), -265.0);
        // Last reachable index gets no compensation outside peek mode.
        assert_eq!(translate_for(3, &m, 6), -795.0);
    }

    #[test]
    fn direction_flips_sign_only() {
        let ltr = metrics(900.0, 250.0, 15.0, 3, 6);
        let rtl = ltr.with_direction(TextDirection::Rtl);
        for i in 0..6 {
            assert_eq!(translate_for(i, &rtl, 6), -translate_for(i, &ltr, 6));
        }

        let peek = metrics(400.0, 100.0, 10.0, 4, 5);
        let peek_rtl = peek.with_direction(TextDirection::Rtl);
        for i in 0..5 {
            assert_eq!(translate_for(i, &peek_rtl, 5), -translate_for(i, &peek, 5));
        }
    }

    #[test]
    fn peek_mode_centers_interior_and_pins_edges() {
        // Box 400, item 100 → offset 150; stride 110; last index 4.
        let m = metrics(400.0, 100.0, 10.0, 4, 5);
        assert_eq!(m.peek_offset(), 150.0);

        // First item starts flush with the box.
        assert_eq!(translate_for(0, &m, 5), 0.0);
        // Item 1 spans 110..210 on the track; centering it needs +40.
        assert_eq!(translate_for(1, &m, 5), 40.0);
        assert_eq!(translate_for(2, &m, 5), -70.0);
        // Last item ends flush with the box: 440 - 300.
        assert_eq!(translate_for(4, &m, 5), -140.0);
    }

    #[test]
    fn single_item_collection_never_moves() {
        let m = metrics(400.0, 100.0, 10.0, 4, 1);
        assert_eq!(translate_for(0, &m, 1), 0.0);
    }

    #[test]
    fn translation_is_deterministic() {
        let m = metrics(1200.0, 180.0, 12.0, 4, 9);
        assert_eq!(translate_for(3, &m, 9), translate_for(3, &m, 9));
    }

    #[test]
    fn visible_range_is_clamped_to_collection() {
        let m = metrics(900.0, 250.0, 15.0, 3, 6);
        assert_eq!(visible_range(0, &m, 6), 0..3);
        assert_eq!(visible_range(3, &m, 6), 3..6);
        assert_eq!(visible_range(5, &m, 6), 5..6);
        assert_eq!(visible_range(0, &m, 0), 0..0);
    }
}
