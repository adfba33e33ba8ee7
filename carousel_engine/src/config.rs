// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use core::fmt;

use carousel_gesture::GestureConfig;
use carousel_layout::LayoutConfig;

/// Timing function of the track transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// The CSS `ease` curve.
    #[default]
    Ease,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl Easing {
    /// CSS keyword for this timing function.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Animation applied when the track moves to a new committed position.
///
/// Transitions are fire-and-forget: the controller only uses the duration
/// to know when it is back to [`Phase::Idle`](crate::Phase::Idle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionSpec {
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Timing function.
    pub easing: Easing,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: Easing::Ease,
        }
    }
}

impl fmt::Display for TransitionSpec {
    /// Formats as a CSS `transition` value, e.g. `transform 300ms ease`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform {}ms {}", self.duration_ms, self.easing.as_css())
    }
}

/// Configuration of a [`Carousel`](crate::Carousel). Read-only after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Visible-count and track-width rules.
    pub layout: LayoutConfig,
    /// Drag classification and commit thresholds.
    pub gesture: GestureConfig,
    /// Animation for committed moves.
    pub transition: TransitionSpec,
    /// Advance automatically every [`autoplay_interval_ms`](Self::autoplay_interval_ms).
    pub autoplay: bool,
    /// Autoplay period in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Re-arm autoplay with a full interval after a drag or a navigation call.
    ///
    /// When `false`, user interaction stops autoplay until the layout changes.
    pub resume_autoplay: bool,
    /// Quiet period before a burst of resize events is applied.
    pub resize_debounce_ms: u64,
    /// Items moved per `go_next`/`go_previous` call.
    pub navigation_step: usize,
}

impl CarouselConfig {
    /// Default autoplay period.
    pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 2000;
    /// Default resize debounce window.
    pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

    /// Returns a copy with degenerate values clamped into range.
    ///
    /// The navigation step, maximum item count and autoplay interval are
    /// raised to at least `1`; gesture thresholds are normalized by
    /// [`GestureConfig::normalized`].
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            layout: LayoutConfig {
                max_items_per_page: self.layout.max_items_per_page.max(1),
                ..self.layout
            },
            gesture: self.gesture.normalized(),
            autoplay_interval_ms: self.autoplay_interval_ms.max(1),
            navigation_step: self.navigation_step.max(1),
            ..self
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            gesture: GestureConfig::default(),
            transition: TransitionSpec::default(),
            autoplay: false,
            autoplay_interval_ms: Self::DEFAULT_AUTOPLAY_INTERVAL_MS,
            resume_autoplay: true,
            resize_debounce_ms: Self::DEFAULT_RESIZE_DEBOUNCE_MS,
            navigation_step: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{CarouselConfig, Easing, TransitionSpec};

    #[test]
    fn defaults_match_documented_values() {
        let config = CarouselConfig::default();
        assert_eq!(config.layout.max_items_per_page, 4);
        assert_eq!(config.layout.narrow_breakpoint, 650.0);
        assert_eq!(config.layout.button_reserve, 80.0);
        assert_eq!(config.layout.extra_track_width, 0.0);
        assert_eq!(config.gesture.tolerance, 100.0);
        assert!(!config.autoplay);
        assert_eq!(config.autoplay_interval_ms, 2000);
        assert_eq!(config.resize_debounce_ms, 100);
        assert_eq!(config.navigation_step, 1);
    }

    #[test]
    fn transition_formats_as_css() {
        assert_eq!(TransitionSpec::default().to_string(), "transform 300ms ease");
        let spec = TransitionSpec {
            duration_ms: 450,
            easing: Easing::EaseInOut,
        };
        assert_eq!(spec.to_string(), "transform 450ms ease-in-out");
    }

    #[test]
    fn normalized_raises_zero_counts() {
        let mut config = CarouselConfig::default();
        config.layout.max_items_per_page = 0;
        config.autoplay_interval_ms = 0;
        config.navigation_step = 0;
        let config = config.normalized();
        assert_eq!(config.layout.max_items_per_page, 1);
        assert_eq!(config.autoplay_interval_ms, 1);
        assert_eq!(config.navigation_step, 1);
    }
}
