// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_layout --heading-base-level=0

//! Carousel Layout: metrics and track positioning for headless carousels.
//!
//! This crate holds the pure, side-effect-free half of a carousel/slider:
//!
//! - [`compute_layout`]: turns raw host measurements ([`LayoutInput`]) and a
//!   [`LayoutConfig`] into [`LayoutMetrics`], the item width, gap, and number
//!   of fully visible items for the current viewport.
//! - [`translate_for`]: converts a logical index into the signed pixel
//!   translation of the item track, applying edge compensation in peek mode
//!   and the physical axis flip for right-to-left text.
//! - [`visible_range`]: the logical items in view for a given index.
//!
//! Nothing here knows about timers, gestures, or rendering. Hosts (or the
//! `carousel_engine` controller) own the state and call into these helpers
//! whenever the index or the viewport changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_layout::{LayoutConfig, LayoutInput, TextDirection, compute_layout, translate_for};
//!
//! let config = LayoutConfig {
//!     max_items_per_page: 3,
//!     ..LayoutConfig::default()
//! };
//! let input = LayoutInput {
//!     viewport_width: 900.0,
//!     container_width: 900.0,
//!     item_width: 250.0,
//!     gap_width: 15.0,
//!     direction: TextDirection::Ltr,
//! };
//!
//! // Six items: three fit side by side.
//! let metrics = compute_layout(&input, &config, 6).unwrap();
//! assert_eq!(metrics.rendered_item_count, 3);
//!
//! // Left-to-right tracks move towards negative x.
//! assert_eq!(translate_for(1, &metrics, 6), -265.0);
//! ```
//!
//! All widths live in the host's logical pixel space and are expected to be
//! finite. Negative widths are treated as zero.
//!
//! This crate is `no_std`.

#![no_std]

mod direction;
mod metrics;
mod position;

pub use direction::TextDirection;
pub use metrics::{LayoutConfig, LayoutInput, LayoutMetrics, compute_layout};
pub use position::{translate_for, visible_range};
