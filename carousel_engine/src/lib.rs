// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_engine --heading-base-level=0

//! Carousel Engine: a headless carousel/slider controller.
//!
//! [`Carousel`] owns the logical state of a carousel (current index, track
//! translation, interaction phase, autoplay timer, pending resize) and reacts
//! to three kinds of stimuli:
//!
//! - **Touch drags**, classified by `carousel_gesture` into horizontal slides
//!   (which follow the finger and commit one step on release) and vertical
//!   page scrolls (which are left alone).
//! - **Programmatic navigation** from buttons and page indicators:
//!   [`Carousel::go_next`], [`Carousel::go_previous`], [`Carousel::go_to`].
//! - **Autoplay**, a repeating deadline that advances one item per tick and
//!   wraps to the start after the last fully visible window.
//!
//! Layout comes from `carousel_layout`: the host reports measurements on
//! mount and on resize, and every path that moves the track goes through
//! the same pure [`translate_for`](carousel_layout::translate_for) so drags,
//! buttons, indicators and autoplay all land on identical pixels.
//!
//! The engine does not render, own timers, or listen to events. Hosts:
//!
//! - forward touch, resize and click events with a monotonic timestamp in
//!   milliseconds,
//! - call [`Carousel::advance`] from their timer or frame loop (see
//!   [`Carousel::next_deadline`]),
//! - paint [`Carousel::frame`] and show the buttons reported by
//!   [`Carousel::controls`] whenever a handler returns non-empty [`Changes`].
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_engine::{Carousel, CarouselConfig, Changes};
//! use carousel_layout::{LayoutConfig, LayoutInput, TextDirection};
//!
//! let config = CarouselConfig {
//!     layout: LayoutConfig {
//!         max_items_per_page: 3,
//!         ..LayoutConfig::default()
//!     },
//!     ..CarouselConfig::default()
//! };
//! let mut carousel = Carousel::new(vec!["a", "b", "c", "d", "e", "f"], config);
//! carousel.mount(
//!     LayoutInput {
//!         viewport_width: 900.0,
//!         container_width: 900.0,
//!         item_width: 250.0,
//!         gap_width: 15.0,
//!         direction: TextDirection::Ltr,
//!     },
//!     0,
//! );
//! assert_eq!(carousel.rendered_item_count(), 3);
//!
//! let changes = carousel.go_next(10);
//! assert!(changes.contains(Changes::INDEX | Changes::TRANSLATE));
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(carousel.current_translate(), -265.0);
//! assert!(carousel.frame().transition.is_some());
//!
//! // Nothing beyond the last window of three.
//! carousel.go_to(5, 20);
//! assert_eq!(carousel.current_index(), 3);
//! assert!(!carousel.controls().next);
//! ```
//!
//! ## Features
//!
//! - `std` (default): floating-point math from the standard library.
//! - `libm`: `no_std` floating-point math through `kurbo`'s `libm` support.
//! - `serde`: derives for [`CarouselConfig`] and the nested configuration types.
//!
//! Diagnostics go through the [`log`] facade; install any logger in the host.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoplay;
mod carousel;
mod config;
mod debounce;
mod frame;
mod navigation;

pub use autoplay::{AutoplayDriver, autoplay_eligible, next_autoplay_index};
pub use carousel::Carousel;
pub use config::{CarouselConfig, Easing, TransitionSpec};
pub use debounce::Debouncer;
pub use frame::{Changes, RenderFrame};
pub use navigation::{
    NavigationControls, NavigationState, Phase, clamp_target, step_backward, step_forward,
};
