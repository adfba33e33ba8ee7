// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_gesture --heading-base-level=0

//! Carousel Gesture: swipe-versus-scroll classification for one touch session.
//!
//! A [`GestureSession`] lives from touch start to touch end. The first sample
//! that actually moves decides, once, whether the user is sliding the
//! carousel horizontally or scrolling the page vertically:
//!
//! - `atan2(|dy|, |dx|)` below [`GestureConfig::slide_angle_deg`] (45° by
//!   default) is a slide; anything steeper is a page scroll.
//! - While sliding, [`GestureSession::update`] reports a damped live offset
//!   (raw movement divided by [`GestureConfig::damping`]) for the host to add
//!   to the committed track translation.
//! - [`GestureSession::finish`] turns the total horizontal displacement into
//!   a [`DragOutcome`]: one step forward or backward past
//!   [`GestureConfig::tolerance`], otherwise a snap back.
//!
//! ```rust
//! use carousel_gesture::{DragOutcome, DragUpdate, GestureConfig, GestureSession, StepDirection};
//! use carousel_layout::TextDirection;
//! use kurbo::Point;
//!
//! let config = GestureConfig::default();
//! let mut session = GestureSession::begin(Point::new(300.0, 100.0));
//!
//! // Mostly horizontal: a slide, followed live at 1/1.5 of the finger.
//! let update = session.update(Point::new(150.0, 110.0), &config);
//! assert_eq!(update, DragUpdate::Slide { offset: -100.0 });
//!
//! // Released 150px to the left of where it started: next item.
//! let outcome = session.finish(Point::new(150.0, 110.0), TextDirection::Ltr, &config);
//! assert_eq!(outcome, DragOutcome::Step(StepDirection::Forward));
//! assert_eq!(outcome.apply(0, 5), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): floating-point math from the standard library.
//! - `libm`: `no_std` floating-point math through `kurbo`'s `libm` support.
//! - `serde`: derives for [`GestureConfig`].
//!
//! This crate is `no_std`.

#![no_std]

mod session;

pub use session::{
    Classification, DragAxis, DragOutcome, DragUpdate, GestureConfig, GestureSession,
    StepDirection, classify,
};
