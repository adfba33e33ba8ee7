// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-session touch classification.

use carousel_layout::TextDirection;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Thresholds for classifying and committing a touch drag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Gestures flatter than this angle (degrees from horizontal) are slides.
    pub slide_angle_deg: f64,
    /// Raw finger movement is divided by this factor for the live offset.
    pub damping: f64,
    /// Minimum horizontal displacement, in pixels, that commits a step.
    pub tolerance: f64,
}

impl GestureConfig {
    /// Default slide/scroll boundary in degrees.
    pub const DEFAULT_SLIDE_ANGLE_DEG: f64 = 45.0;
    /// Default live-drag damping divisor.
    pub const DEFAULT_DAMPING: f64 = 1.5;
    /// Default commit tolerance in pixels.
    pub const DEFAULT_TOLERANCE: f64 = 100.0;

    /// Returns a copy with non-finite or out-of-range values replaced by defaults.
    ///
    /// A damping below `1.0` would amplify finger movement; it is reset as well.
    #[must_use]
    pub fn normalized(self) -> Self {
        let slide_angle_deg = if self.slide_angle_deg.is_finite()
            && (0.0..=90.0).contains(&self.slide_angle_deg)
        {
            self.slide_angle_deg
        } else {
            Self::DEFAULT_SLIDE_ANGLE_DEG
        };
        let damping = if self.damping.is_finite() && self.damping >= 1.0 {
            self.damping
        } else {
            Self::DEFAULT_DAMPING
        };
        let tolerance = if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            self.tolerance
        } else {
            Self::DEFAULT_TOLERANCE
        };
        Self {
            slide_angle_deg,
            damping,
            tolerance,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            slide_angle_deg: Self::DEFAULT_SLIDE_ANGLE_DEG,
            damping: Self::DEFAULT_DAMPING,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

/// Axis a gesture was classified onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAxis {
    /// Horizontal slide of the carousel track.
    Horizontal,
    /// Vertical scroll of the surrounding page.
    Vertical,
}

/// Frozen classification of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// `atan2(|dy|, |dx|)` of the classifying sample, in degrees (`0..=90`).
    pub angle_deg: f64,
    /// Resulting axis.
    pub axis: DragAxis,
}

/// Classifies a movement vector against the configured slide angle.
#[must_use]
pub fn classify(delta: Vec2, config: &GestureConfig) -> Classification {
    let angle_deg = Vec2::new(delta.x.abs(), delta.y.abs())
        .atan2()
        .to_degrees();
    let axis = if angle_deg < config.slide_angle_deg {
        DragAxis::Horizontal
    } else {
        DragAxis::Vertical
    };
    Classification { angle_deg, axis }
}

/// What the host should do with a move sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// No movement yet; the gesture is still unclassified.
    Pending,
    /// Horizontal slide: follow the finger by `offset` pixels (already damped)
    /// with transitions disabled, and keep the page from scrolling.
    Slide {
        /// Damped horizontal offset relative to the touch start.
        offset: f64,
    },
    /// Vertical page scroll: leave the carousel alone.
    Scroll,
}

/// Logical direction of a committed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
}

/// Result of releasing a touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Horizontal drag past the tolerance: move one item.
    Step(StepDirection),
    /// Horizontal drag within the tolerance: return to the current index.
    SnapBack,
    /// The gesture was a page scroll; the carousel is untouched.
    Scroll,
    /// The touch never moved.
    Tap,
}

impl DragOutcome {
    /// Applies this outcome to `index` for a collection of `item_count` items.
    ///
    /// Steps are clamped to `0..item_count` and never wrap around.
    #[must_use]
    pub fn apply(self, index: usize, item_count: usize) -> usize {
        let last = item_count.saturating_sub(1);
        match self {
            Self::Step(StepDirection::Forward) => index.saturating_add(1).min(last),
            Self::Step(StepDirection::Backward) => index.saturating_sub(1).min(last),
            Self::SnapBack | Self::Scroll | Self::Tap => index,
        }
    }

    /// Returns `true` if the outcome was a horizontal slide, committed or not.
    #[must_use]
    pub const fn is_slide(self) -> bool {
        matches!(self, Self::Step(_) | Self::SnapBack)
    }
}

/// State of one touch interaction, from touch start to touch end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    start: Point,
    classification: Option<Classification>,
    live_offset: f64,
}

impl GestureSession {
    /// Starts a session at the touch-down position.
    #[must_use]
    pub const fn begin(start: Point) -> Self {
        Self {
            start,
            classification: None,
            live_offset: 0.0,
        }
    }

    /// Touch-down position.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Classification, once the first moving sample has been seen.
    #[must_use]
    pub const fn classification(&self) -> Option<Classification> {
        self.classification
    }

    /// Returns `true` if the session was classified as a horizontal slide.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.classification
            .is_some_and(|c| c.axis == DragAxis::Horizontal)
    }

    /// The most recent damped slide offset, `0.0` unless sliding.
    #[must_use]
    pub const fn live_offset(&self) -> f64 {
        self.live_offset
    }

    /// Processes a move sample.
    ///
    /// The first sample that differs from the start position freezes the
    /// classification for the rest of the session. Later samples only
    /// update the live offset.
    pub fn update(&mut self, sample: Point, config: &GestureConfig) -> DragUpdate {
        let delta = sample - self.start;
        let classification = match self.classification {
            Some(classification) => classification,
            None => {
                if delta == Vec2::ZERO {
                    return DragUpdate::Pending;
                }
                let classification = classify(delta, config);
                self.classification = Some(classification);
                classification
            }
        };
        match classification.axis {
            DragAxis::Horizontal => {
                self.live_offset = delta.x / config.damping;
                DragUpdate::Slide {
                    offset: self.live_offset,
                }
            }
            DragAxis::Vertical => DragUpdate::Scroll,
        }
    }

    /// Ends the session at the release position.
    ///
    /// For a slide the signed displacement `end.x - start.x` decides the
    /// outcome: past the tolerance, swiping against the reading direction
    /// (leftwards in LTR, rightwards in RTL) steps forward and swiping with
    /// it steps backward.
    #[must_use]
    pub fn finish(
        self,
        end: Point,
        direction: TextDirection,
        config: &GestureConfig,
    ) -> DragOutcome {
        let Some(classification) = self.classification else {
            return DragOutcome::Tap;
        };
        if classification.axis == DragAxis::Vertical {
            return DragOutcome::Scroll;
        }
        let diff = end.x - self.start.x;
        if diff.abs() <= config.tolerance {
            return DragOutcome::SnapBack;
        }
        if diff * direction.factor() > 0.0 {
            DragOutcome::Step(StepDirection::Forward)
        } else {
            DragOutcome::Step(StepDirection::Backward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_drag_is_horizontal() {
        let c = classify(Vec2::new(100.0, 10.0), &GestureConfig::default());
        assert_eq!(c.axis, DragAxis::Horizontal);
        assert!((c.angle_deg - 5.710_593_137_499_643).abs() < 1e-9);
    }

    #[test]
    fn steep_drag_is_vertical() {
        let c = classify(Vec2::new(10.0, 100.0), &GestureConfig::default());
        assert_eq!(c.axis, DragAxis::Vertical);
        assert!(c.angle_deg > 84.0 && c.angle_deg < 85.0);
    }

    #[test]
    fn classification_ignores_signs() {
        let config = GestureConfig::default();
        assert_eq!(
            classify(Vec2::new(-100.0, -10.0), &config).axis,
            DragAxis::Horizontal
        );
        assert_eq!(
            classify(Vec2::new(-10.0, 100.0), &config).axis,
            DragAxis::Vertical
        );
    }

    #[test]
    fn classification_is_frozen_after_first_move() {
        let config = GestureConfig::default();
        let mut session = GestureSession::begin(Point::new(0.0, 0.0));

        assert_eq!(
            session.update(Point::new(30.0, 3.0), &config),
            DragUpdate::Slide { offset: 20.0 }
        );
        // A later, steep sample does not reclassify.
        assert_eq!(
            session.update(Point::new(45.0, 200.0), &config),
            DragUpdate::Slide { offset: 30.0 }
        );
        assert!(session.is_horizontal());
        assert_eq!(session.live_offset(), 30.0);
    }

    #[test]
    fn vertical_session_never_slides() {
        let config = GestureConfig::default();
        let mut session = GestureSession::begin(Point::new(0.0, 0.0));
        assert_eq!(session.update(Point::new(2.0, 40.0), &config), DragUpdate::Scroll);
        assert_eq!(session.update(Point::new(300.0, 40.0), &config), DragUpdate::Scroll);
        assert_eq!(session.live_offset(), 0.0);
        assert_eq!(
            session.finish(Point::new(300.0, 40.0), TextDirection::Ltr, &config),
            DragOutcome::Scroll
        );
    }

    #[test]
    fn stationary_samples_defer_classification() {
        let config = GestureConfig::default();
        let mut session = GestureSession::begin(Point::new(5.0, 5.0));
        assert_eq!(session.update(Point::new(5.0, 5.0), &config), DragUpdate::Pending);
        assert!(session.classification().is_none());
        assert_eq!(
            session.finish(Point::new(5.0, 5.0), TextDirection::Ltr, &config),
            DragOutcome::Tap
        );
    }

    #[test]
    fn tolerance_threshold_is_exclusive() {
        let config = GestureConfig::default();

        let mut session = GestureSession::begin(Point::new(200.0, 0.0));
        session.update(Point::new(150.0, 0.0), &config);
        assert_eq!(
            session.finish(Point::new(101.0, 0.0), TextDirection::Ltr, &config),
            DragOutcome::SnapBack
        );

        let mut session = GestureSession::begin(Point::new(200.0, 0.0));
        session.update(Point::new(150.0, 0.0), &config);
        assert_eq!(
            session.finish(Point::new(99.0, 0.0), TextDirection::Ltr, &config),
            DragOutcome::Step(StepDirection::Forward)
        );
    }

    #[test]
    fn rtl_inverts_step_direction() {
        let config = GestureConfig::default();
        let mut session = GestureSession::begin(Point::new(0.0, 0.0));
        session.update(Point::new(50.0, 0.0), &config);
        let outcome = session.finish(Point::new(150.0, 0.0), TextDirection::Rtl, &config);
        assert_eq!(outcome, DragOutcome::Step(StepDirection::Forward));

        let mut session = GestureSession::begin(Point::new(0.0, 0.0));
        session.update(Point::new(50.0, 0.0), &config);
        let outcome = session.finish(Point::new(150.0, 0.0), TextDirection::Ltr, &config);
        assert_eq!(outcome, DragOutcome::Step(StepDirection::Backward));
    }

    #[test]
    fn steps_clamp_without_wrapping() {
        let forward = DragOutcome::Step(StepDirection::Forward);
        let backward = DragOutcome::Step(StepDirection::Backward);
        assert_eq!(forward.apply(2, 5), 3);
        assert_eq!(forward.apply(4, 5), 4);
        assert_eq!(backward.apply(0, 5), 0);
        assert_eq!(backward.apply(3, 5), 2);
        assert_eq!(forward.apply(0, 0), 0);
        assert_eq!(DragOutcome::SnapBack.apply(3, 5), 3);
        assert!(DragOutcome::SnapBack.is_slide());
        assert!(!DragOutcome::Tap.is_slide());
    }

    #[test]
    fn normalized_resets_degenerate_values() {
        let config = GestureConfig {
            slide_angle_deg: f64::NAN,
            damping: 0.0,
            tolerance: -1.0,
        }
        .normalized();
        assert_eq!(config, GestureConfig::default());

        let custom = GestureConfig {
            slide_angle_deg: 30.0,
            damping: 2.0,
            tolerance: 40.0,
        };
        assert_eq!(custom.normalized(), custom);
    }
}
