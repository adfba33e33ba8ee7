// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay timer and tick rule.

use carousel_layout::LayoutMetrics;

/// A repeating deadline driven by host timestamps.
///
/// There is at most one deadline at a time: [`arm`](Self::arm) replaces any
/// existing one, so re-arming can never leave two timers running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayDriver {
    interval_ms: u64,
    next_due: Option<u64>,
}

impl AutoplayDriver {
    /// Creates a disarmed driver with the given period (at least 1ms).
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due: None,
        }
    }

    /// Period between ticks.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Timestamp of the next tick, if armed.
    #[must_use]
    pub const fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    /// Arms the driver for a first tick one full interval after `now`,
    /// dropping any previous deadline.
    pub fn arm(&mut self, now: u64) {
        self.next_due = Some(now.saturating_add(self.interval_ms));
    }

    /// Disarms the driver. Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Returns `true` if a tick is due at `now` and schedules the next one.
    ///
    /// Intervals missed while the host was not polling coalesce into this
    /// single tick; the next deadline stays on the original cadence.
    pub fn poll(&mut self, now: u64) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let missed = (now - due) / self.interval_ms;
        let skip = self.interval_ms.saturating_mul(missed.saturating_add(1));
        self.next_due = Some(due.saturating_add(skip));
        true
    }
}

/// Returns `true` if autoplay has anything to do: it is enabled, items are
/// measurable, and the collection does not fit on one page.
#[must_use]
pub fn autoplay_eligible(
    enabled: bool,
    metrics: Option<&LayoutMetrics>,
    item_count: usize,
) -> bool {
    enabled && metrics.is_some_and(|m| m.item_width > 0.0 && !m.shows_all(item_count))
}

/// Index reached by one autoplay tick from `index`.
///
/// Advances by one until the last fully visible window
/// (`item_count - rendered_item_count`) is showing, then wraps to `0`.
/// There is no reverse wrap and no bounce.
#[must_use]
pub fn next_autoplay_index(index: usize, metrics: &LayoutMetrics, item_count: usize) -> usize {
    if index >= metrics.last_reachable_index(item_count) {
        0
    } else {
        index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::{AutoplayDriver, autoplay_eligible, next_autoplay_index};
    use carousel_layout::{
        LayoutConfig, LayoutInput, LayoutMetrics, TextDirection, compute_layout,
    };

    fn metrics(item_count: usize) -> LayoutMetrics {
        // 1000 / 400 → two items per page.
        let input = LayoutInput {
            viewport_width: 1000.0,
            container_width: 1000.0,
            item_width: 400.0,
            gap_width: 0.0,
            direction: TextDirection::Ltr,
        };
        compute_layout(&input, &LayoutConfig::default(), item_count).unwrap()
    }

    #[test]
    fn ticks_wrap_after_last_window() {
        let m = metrics(5);
        assert_eq!(m.rendered_item_count, 2);
        let mut index = 0;
        let mut visited = [0_usize; 8];
        for slot in &mut visited {
            *slot = index;
            index = next_autoplay_index(index, &m, 5);
        }
        assert_eq!(visited, [0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn eligibility_requires_overflow() {
        assert!(autoplay_eligible(true, Some(&metrics(5)), 5));
        assert!(!autoplay_eligible(false, Some(&metrics(5)), 5));
        assert!(!autoplay_eligible(true, Some(&metrics(2)), 2));
        assert!(!autoplay_eligible(true, None, 5));
    }

    #[test]
    fn driver_fires_on_cadence() {
        let mut driver = AutoplayDriver::new(2000);
        assert!(!driver.poll(10_000));

        driver.arm(0);
        assert!(!driver.poll(1999));
        assert!(driver.poll(2000));
        assert_eq!(driver.next_due(), Some(4000));
        assert!(!driver.poll(2001));
    }

    #[test]
    fn missed_intervals_coalesce() {
        let mut driver = AutoplayDriver::new(1000);
        driver.arm(0);
        assert!(driver.poll(3500));
        assert_eq!(driver.next_due(), Some(4000));
        assert!(!driver.poll(3999));
    }

    #[test]
    fn arm_replaces_the_previous_deadline() {
        let mut driver = AutoplayDriver::new(1000);
        driver.arm(0);
        driver.arm(700);
        assert_eq!(driver.next_due(), Some(1700));
        assert!(!driver.poll(1000));
        assert!(driver.cancel());
        assert!(!driver.cancel());
        assert!(!driver.is_armed());
    }
}
