// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: owns all state and wires layout, gestures,
//! navigation, and autoplay together.

use alloc::vec::Vec;
use core::ops::Range;

use carousel_gesture::{DragUpdate, GestureSession};
use carousel_layout::{
    LayoutInput, LayoutMetrics, TextDirection, compute_layout, translate_for, visible_range,
};
use kurbo::Point;
use log::{debug, trace};

use crate::autoplay::{AutoplayDriver, autoplay_eligible, next_autoplay_index};
use crate::debounce::Debouncer;
use crate::navigation::{self, NavigationControls, NavigationState, Phase};
use crate::{CarouselConfig, Changes, RenderFrame, TransitionSpec};

/// Headless carousel controller over items of type `T`.
///
/// Every handler runs to completion, takes the host's monotonic timestamp in
/// milliseconds, and returns the [`Changes`] it made. Timers are deadlines
/// checked by [`advance`](Self::advance); the controller never sleeps or
/// spawns anything.
///
/// Ordering guarantees:
/// - a touch start cancels autoplay before any drag state is created;
/// - `go_next`, `go_previous` and `go_to` cancel autoplay before moving;
/// - resize bursts collapse into one layout pass after
///   [`CarouselConfig::resize_debounce_ms`] of quiet, and only when the
///   viewport width actually changed.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    config: CarouselConfig,
    direction: TextDirection,
    input: Option<LayoutInput>,
    metrics: Option<LayoutMetrics>,
    nav: NavigationState,
    phase: Phase,
    transition: Option<TransitionSpec>,
    gesture: Option<GestureSession>,
    page_scroll_locked: bool,
    autoplay: AutoplayDriver,
    resize: Debouncer<LayoutInput>,
    mounted: bool,
}

impl<T> Carousel<T> {
    /// Creates an unmounted carousel. Call [`mount`](Self::mount) once the
    /// host can measure its items.
    #[must_use]
    pub fn new(items: Vec<T>, config: CarouselConfig) -> Self {
        let config = config.normalized();
        Self {
            items,
            config,
            direction: TextDirection::Ltr,
            input: None,
            metrics: None,
            nav: NavigationState::default(),
            phase: Phase::Idle,
            transition: None,
            gesture: None,
            page_scroll_locked: false,
            autoplay: AutoplayDriver::new(config.autoplay_interval_ms),
            resize: Debouncer::new(config.resize_debounce_ms),
            mounted: false,
        }
    }

    // --- Lifecycle ---

    /// Mounts the carousel and resolves the initial layout immediately.
    pub fn mount(&mut self, input: LayoutInput, now: u64) -> Changes {
        self.mounted = true;
        debug!("mounting carousel with {} items", self.items.len());
        self.apply_input(input, now)
    }

    /// Releases the autoplay timer, any pending resize, the drag session,
    /// and the page scroll lock. Handlers are no-ops until mounted again.
    pub fn unmount(&mut self) -> Changes {
        if !self.mounted {
            return Changes::empty();
        }
        let mut changes = Changes::empty();
        if self.autoplay.cancel() {
            changes |= Changes::AUTOPLAY;
        }
        self.resize.cancel();
        self.gesture = None;
        if self.page_scroll_locked {
            self.page_scroll_locked = false;
            changes |= Changes::SCROLL_LOCK;
        }
        if self.phase != Phase::Idle {
            self.phase = Phase::Idle;
            changes |= Changes::PHASE;
        }
        self.mounted = false;
        debug!("carousel unmounted");
        changes
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    // --- Layout ---

    /// Records a viewport resize. The layout is recomputed by
    /// [`advance`](Self::advance) once the resize burst has settled.
    pub fn on_resize(&mut self, input: LayoutInput, now: u64) -> Changes {
        if self.mounted && self.resize.schedule(input, now) {
            trace!("resize superseded a pending one");
        }
        Changes::empty()
    }

    /// Recomputes the layout right away, dropping any pending resize.
    pub fn remeasure(&mut self, input: LayoutInput, now: u64) -> Changes {
        if !self.mounted {
            return Changes::empty();
        }
        self.resize.cancel();
        self.apply_input(input, now)
    }

    /// Switches text direction, flipping the track translation in place.
    pub fn set_text_direction(&mut self, direction: TextDirection) -> Changes {
        if direction == self.direction {
            return Changes::empty();
        }
        self.direction = direction;
        if let Some(input) = self.input.as_mut() {
            input.direction = direction;
        }
        let Some(metrics) = self.metrics else {
            return Changes::empty();
        };
        debug!("text direction changed to {}", direction.as_str());
        self.metrics = Some(metrics.with_direction(direction));
        Changes::LAYOUT | self.reconcile_translate()
    }

    /// Replaces the item collection.
    ///
    /// The visible count is recomputed for the new length, the index is
    /// clamped into the new bounds, and autoplay is re-evaluated.
    pub fn set_items(&mut self, items: Vec<T>, now: u64) -> Changes {
        self.items = items;
        let mut changes = Changes::ITEMS;
        if let Some(metrics) = self
            .input
            .and_then(|input| compute_layout(&input, &self.config.layout, self.items.len()))
        {
            if self.metrics.replace(metrics) != Some(metrics) {
                changes |= Changes::LAYOUT;
            }
        }
        let bound = match &self.metrics {
            Some(metrics) => metrics.last_reachable_index(self.items.len()),
            None => self.items.len().saturating_sub(1),
        };
        if self.nav.current_index > bound {
            self.nav.current_index = bound;
            changes |= Changes::INDEX;
        }
        changes |= self.reconcile_translate();
        if self.mounted {
            changes |= self.rearm_autoplay(now);
        }
        changes
    }

    /// Applies `input` if it measures. A failed measurement leaves the
    /// previous input, direction and metrics in place.
    fn apply_input(&mut self, input: LayoutInput, now: u64) -> Changes {
        let Some(metrics) = compute_layout(&input, &self.config.layout, self.items.len()) else {
            debug!("item width not measurable yet; keeping previous layout");
            return Changes::empty();
        };
        self.direction = input.direction;
        self.input = Some(input);
        let previous = self.metrics.replace(metrics);
        debug!(
            "layout: {} visible, item {}px, gap {}px, peek {}",
            metrics.rendered_item_count, metrics.item_width, metrics.gap_width, metrics.peek
        );

        let mut changes = Changes::empty();
        if previous != Some(metrics) {
            changes |= Changes::LAYOUT;
        }
        changes |= self.reconcile_translate();

        let rearm = previous.is_none_or(|p| {
            p.item_width != metrics.item_width
                || p.rendered_item_count != metrics.rendered_item_count
        });
        if rearm {
            changes |= self.rearm_autoplay(now);
        }
        changes
    }

    /// Re-derives the translation for the current index from the live
    /// metrics and snaps to it without animation.
    fn reconcile_translate(&mut self) -> Changes {
        let Some(metrics) = self.metrics else {
            return Changes::empty();
        };
        let mut changes = Changes::empty();
        let translate = translate_for(self.nav.current_index, &metrics, self.items.len());
        if translate != self.nav.current_translate {
            self.nav.current_translate = translate;
            changes |= Changes::TRANSLATE;
        }
        if self.transition.take().is_some() {
            changes |= Changes::TRANSITION;
        }
        if matches!(self.phase, Phase::Transitioning { .. }) {
            self.phase = Phase::Idle;
            changes |= Changes::PHASE;
        }
        changes
    }

    // --- Navigation ---

    /// Moves forward by [`CarouselConfig::navigation_step`], stopping at the
    /// last fully visible window.
    pub fn go_next(&mut self, now: u64) -> Changes {
        if !self.mounted {
            return Changes::empty();
        }
        let mut changes = self.suspend_autoplay();
        if let Some(metrics) = self.metrics {
            let target = navigation::step_forward(
                self.nav.current_index,
                self.config.navigation_step,
                &metrics,
                self.items.len(),
            );
            changes |= self.navigate(target, now, false);
        }
        changes | self.resume_autoplay(now)
    }

    /// Moves backward by [`CarouselConfig::navigation_step`], stopping at `0`.
    pub fn go_previous(&mut self, now: u64) -> Changes {
        if !self.mounted {
            return Changes::empty();
        }
        let mut changes = self.suspend_autoplay();
        if self.metrics.is_some() {
            let target =
                navigation::step_backward(self.nav.current_index, self.config.navigation_step);
            changes |= self.navigate(target, now, false);
        }
        changes | self.resume_autoplay(now)
    }

    /// Jumps to `index` (as a page indicator would), clamped to the last
    /// fully visible window.
    pub fn go_to(&mut self, index: usize, now: u64) -> Changes {
        if !self.mounted {
            return Changes::empty();
        }
        let mut changes = self.suspend_autoplay();
        if let Some(metrics) = self.metrics {
            let target = navigation::clamp_target(index, &metrics, self.items.len());
            changes |= self.navigate(target, now, false);
        }
        changes | self.resume_autoplay(now)
    }

    /// Commits `target` and starts an animated transition towards it.
    ///
    /// Without `force`, a move that changes neither index nor translation
    /// is a no-op.
    fn navigate(&mut self, target: usize, now: u64, force: bool) -> Changes {
        let Some(metrics) = self.metrics else {
            return Changes::empty();
        };
        let mut changes = Changes::empty();
        let translate = translate_for(target, &metrics, self.items.len());
        if target != self.nav.current_index {
            self.nav.current_index = target;
            changes |= Changes::INDEX;
        }
        if translate != self.nav.current_translate {
            self.nav.current_translate = translate;
            changes |= Changes::TRANSLATE;
        }
        if changes.is_empty() && !force {
            return changes;
        }
        debug!("navigating to {target} (translate {translate}px)");
        self.transition = Some(self.config.transition);
        self.phase = Phase::Transitioning {
            until: now.saturating_add(self.config.transition.duration_ms),
        };
        changes | Changes::TRANSITION | Changes::PHASE
    }

    // --- Touch ---

    /// Starts a touch session. Cancels autoplay first and disables the
    /// transition so the track follows the finger.
    ///
    /// Ignored until the items have been measured.
    pub fn on_touch_start(&mut self, position: Point, now: u64) -> Changes {
        if !self.mounted || self.metrics.is_none() {
            return Changes::empty();
        }
        let mut changes = self.suspend_autoplay();
        trace!("touch start at ({}, {}) t={now}", position.x, position.y);
        self.gesture = Some(GestureSession::begin(position));
        if self.transition.take().is_some() {
            changes |= Changes::TRANSITION;
        }
        if self.phase != Phase::Idle {
            self.phase = Phase::Idle;
            changes |= Changes::PHASE;
        }
        changes
    }

    /// Feeds a move sample into the active touch session.
    pub fn on_touch_move(&mut self, position: Point, now: u64) -> Changes {
        if !self.mounted || self.metrics.is_none() {
            return Changes::empty();
        }
        let Some(session) = self.gesture.as_mut() else {
            return Changes::empty();
        };
        match session.update(position, &self.config.gesture) {
            DragUpdate::Pending | DragUpdate::Scroll => Changes::empty(),
            DragUpdate::Slide { offset } => {
                trace!("live drag offset {offset}px t={now}");
                let mut changes = Changes::TRANSLATE;
                if self.phase != Phase::Dragging {
                    debug!("touch classified as a horizontal slide");
                    self.phase = Phase::Dragging;
                    changes |= Changes::PHASE;
                }
                if !self.page_scroll_locked {
                    self.page_scroll_locked = true;
                    changes |= Changes::SCROLL_LOCK;
                }
                changes
            }
        }
    }

    /// Ends the touch session at `position`, committing a horizontal drag.
    ///
    /// Past [`GestureConfig::tolerance`](carousel_gesture::GestureConfig::tolerance)
    /// the index moves one item (clamped to the collection, never wrapping);
    /// otherwise the track animates back to the current index.
    pub fn on_touch_end(&mut self, position: Point, now: u64) -> Changes {
        let Some(session) = self.end_session() else {
            return Changes::empty();
        };
        let mut changes = self.release_drag();
        if let Some(metrics) = self.metrics {
            let outcome = session.finish(position, metrics.direction, &self.config.gesture);
            if outcome.is_slide() {
                let target = outcome.apply(self.nav.current_index, self.items.len());
                debug!("drag released with {outcome:?}");
                changes |= Changes::TRANSLATE | self.navigate(target, now, true);
            }
        }
        changes | self.resume_autoplay(now)
    }

    /// Aborts the touch session (for example, when the platform steals the
    /// pointer). A slide in progress animates back without committing.
    pub fn on_touch_cancel(&mut self, now: u64) -> Changes {
        let Some(session) = self.end_session() else {
            return Changes::empty();
        };
        let mut changes = self.release_drag();
        if session.is_horizontal() {
            changes |= Changes::TRANSLATE | self.navigate(self.nav.current_index, now, true);
        }
        changes | self.resume_autoplay(now)
    }

    fn end_session(&mut self) -> Option<GestureSession> {
        if !self.mounted {
            return None;
        }
        self.gesture.take()
    }

    /// Leaves the dragging phase and gives page scrolling back.
    fn release_drag(&mut self) -> Changes {
        let mut changes = Changes::empty();
        if self.page_scroll_locked {
            self.page_scroll_locked = false;
            changes |= Changes::SCROLL_LOCK;
        }
        if self.phase == Phase::Dragging {
            self.phase = Phase::Idle;
            changes |= Changes::PHASE;
        }
        changes
    }

    // --- Time ---

    /// Processes everything due at `now`: a settled resize, the end of a
    /// running transition, then at most one autoplay tick.
    pub fn advance(&mut self, now: u64) -> Changes {
        if !self.mounted {
            return Changes::empty();
        }
        let mut changes = Changes::empty();

        if let Some(input) = self.resize.poll(now) {
            let width_changed = self
                .input
                .is_none_or(|previous| previous.viewport_width != input.viewport_width);
            if width_changed {
                changes |= self.apply_input(input, now);
            } else {
                trace!("resize settled without a width change");
            }
        }

        if matches!(self.phase, Phase::Transitioning { until } if now >= until) {
            self.phase = Phase::Idle;
            changes |= Changes::PHASE;
        }

        if self.phase != Phase::Dragging && self.autoplay.poll(now) {
            changes |= self.autoplay_tick(now);
        }
        changes
    }

    /// Earliest timestamp at which [`advance`](Self::advance) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let transition = match self.phase {
            Phase::Transitioning { until } => Some(until),
            _ => None,
        };
        [self.resize.deadline(), self.autoplay.next_due(), transition]
            .into_iter()
            .flatten()
            .min()
    }

    fn autoplay_tick(&mut self, now: u64) -> Changes {
        let Some(metrics) = self.metrics else {
            return Changes::empty();
        };
        let target = next_autoplay_index(self.nav.current_index, &metrics, self.items.len());
        trace!("autoplay tick {} -> {target}", self.nav.current_index);
        self.navigate(target, now, false)
    }

    // --- Autoplay lifecycle ---

    fn autoplay_eligible(&self) -> bool {
        self.mounted
            && autoplay_eligible(self.config.autoplay, self.metrics.as_ref(), self.items.len())
    }

    /// Destroys the current timer and creates a fresh one if autoplay still applies.
    fn rearm_autoplay(&mut self, now: u64) -> Changes {
        let was_armed = self.autoplay.cancel();
        if self.autoplay_eligible() && self.phase != Phase::Dragging && self.gesture.is_none() {
            self.autoplay.arm(now);
            debug!("autoplay armed every {}ms", self.autoplay.interval_ms());
        } else if was_armed {
            debug!("autoplay stopped");
        }
        if was_armed || self.autoplay.is_armed() {
            Changes::AUTOPLAY
        } else {
            Changes::empty()
        }
    }

    fn suspend_autoplay(&mut self) -> Changes {
        if self.autoplay.cancel() {
            trace!("autoplay suspended by user interaction");
            Changes::AUTOPLAY
        } else {
            Changes::empty()
        }
    }

    fn resume_autoplay(&mut self, now: u64) -> Changes {
        if self.config.resume_autoplay && self.gesture.is_none() {
            self.rearm_autoplay(now)
        } else {
            Changes::empty()
        }
    }

    // --- Read-only state for buttons and indicators ---

    /// Index of the first item in the active window.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.nav.current_index
    }

    /// Committed track translation for the current index.
    #[must_use]
    pub const fn current_translate(&self) -> f64 {
        self.nav.current_translate
    }

    /// Navigation state snapshot.
    #[must_use]
    pub const fn navigation(&self) -> NavigationState {
        self.nav
    }

    /// The items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of fully visible items; `1` until measured.
    #[must_use]
    pub fn rendered_item_count(&self) -> usize {
        self.metrics.map_or(1, |m| m.rendered_item_count)
    }

    /// Current text direction.
    #[must_use]
    pub const fn text_direction(&self) -> TextDirection {
        self.direction
    }

    /// Current layout metrics, if items have been measured.
    #[must_use]
    pub const fn metrics(&self) -> Option<&LayoutMetrics> {
        self.metrics.as_ref()
    }

    /// Current interaction phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Effective (normalized) configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns `true` while the autoplay timer is armed.
    #[must_use]
    pub const fn is_autoplay_armed(&self) -> bool {
        self.autoplay.is_armed()
    }

    /// Which navigation buttons should be shown.
    #[must_use]
    pub fn controls(&self) -> NavigationControls {
        NavigationControls::resolve(
            self.nav.current_index,
            self.metrics.as_ref(),
            self.items.len(),
        )
    }

    /// Number of page indicators.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.metrics
            .map_or(1, |m| m.page_count(self.items.len()))
    }

    /// Items fully in view at the current index.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        match &self.metrics {
            Some(metrics) => visible_range(self.nav.current_index, metrics, self.items.len()),
            None => 0..0,
        }
    }

    /// What to paint right now.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let live = match (&self.phase, &self.gesture) {
            (Phase::Dragging, Some(session)) => session.live_offset(),
            _ => 0.0,
        };
        RenderFrame {
            translate: self.nav.current_translate + live,
            transition: self.transition,
            page_scroll_locked: self.page_scroll_locked,
        }
    }
}
