// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text direction and its effect on the scroll axis.

/// Base text direction of the carousel.
///
/// The physical scroll axis inverts with direction: advancing a
/// left-to-right track moves it towards negative x, while a right-to-left
/// track moves towards positive x.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl TextDirection {
    /// Sign applied to track translations: `-1.0` for LTR, `+1.0` for RTL.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Ltr => -1.0,
            Self::Rtl => 1.0,
        }
    }

    /// Returns `true` for right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// The CSS-style keyword, `"ltr"` or `"rtl"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TextDirection;

    #[test]
    fn factors_are_opposite() {
        assert_eq!(TextDirection::Ltr.factor(), -1.0);
        assert_eq!(TextDirection::Rtl.factor(), 1.0);
        assert_eq!(TextDirection::default(), TextDirection::Ltr);
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
    }
}
