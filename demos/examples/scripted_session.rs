// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a headless carousel through a scripted session and logs every frame.
//!
//! The script mounts the carousel, lets autoplay run, swipes, presses the
//! navigation buttons, resizes the window in a burst, flips to right-to-left
//! text, and finally unmounts.
//!
//! Run:
//! - `cargo run -p carousel_demos --example scripted_session`
//! - `cargo run -p carousel_demos --example scripted_session -- --config demos/carousel.toml --items 8`
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the controller's own logging.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use carousel_engine::{Carousel, CarouselConfig, Changes};
use carousel_layout::{LayoutInput, TextDirection};
use kurbo::Point;
use log::info;
use pico_args::Arguments;

const HELP: &str = "\
scripted_session: run a scripted carousel session

USAGE:
  scripted_session [--config PATH] [--items N] [--width PX] [--item-width PX] [--gap PX]

OPTIONS:
  --config PATH      TOML file with a carousel configuration
  --items N          number of items [default: 6]
  --width PX         viewport width [default: 900]
  --item-width PX    measured item width [default: 250]
  --gap PX           measured gap between items [default: 15]
  -h, --help         print this help
";

struct Args {
    config: Option<PathBuf>,
    items: usize,
    width: f64,
    item_width: f64,
    gap: f64,
}

fn parse_args() -> Result<Option<Args>> {
    let mut pargs = Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }
    let args = Args {
        config: pargs.opt_value_from_str("--config")?,
        items: pargs.opt_value_from_str("--items")?.unwrap_or(6),
        width: pargs.opt_value_from_str("--width")?.unwrap_or(900.0),
        item_width: pargs.opt_value_from_str("--item-width")?.unwrap_or(250.0),
        gap: pargs.opt_value_from_str("--gap")?.unwrap_or(15.0),
    };
    let rest = pargs.finish();
    if !rest.is_empty() {
        anyhow::bail!("unexpected arguments: {rest:?}");
    }
    Ok(Some(args))
}

fn load_config(path: Option<&PathBuf>) -> Result<CarouselConfig> {
    let Some(path) = path else {
        return Ok(CarouselConfig {
            autoplay: true,
            ..CarouselConfig::default()
        });
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!("loaded configuration from {}", path.display());
    Ok(config)
}

fn report<T>(label: &str, carousel: &Carousel<T>, changes: Changes) {
    if changes.is_empty() {
        info!("{label:<24} (no change)");
        return;
    }
    let frame = carousel.frame();
    let transition = frame
        .transition
        .map_or_else(|| "none".to_owned(), |t| t.to_string());
    info!(
        "{label:<24} index={} translate={:.1}px transition={transition} scroll_locked={} \
         visible={:?} changes={changes:?}",
        carousel.current_index(),
        frame.translate,
        frame.page_scroll_locked,
        carousel.visible_range(),
    );
}

/// Advances the clock to `until`, visiting every deadline on the way.
fn run_until<T>(carousel: &mut Carousel<T>, until: u64) {
    while let Some(deadline) = carousel.next_deadline() {
        if deadline > until {
            break;
        }
        let changes = carousel.advance(deadline);
        report(&format!("advance @{deadline}ms"), carousel, changes);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = parse_args()? else {
        return Ok(());
    };
    let config = load_config(args.config.as_ref())?;
    let input = LayoutInput {
        viewport_width: args.width,
        container_width: args.width,
        item_width: args.item_width,
        gap_width: args.gap,
        direction: TextDirection::Ltr,
    };

    let items: Vec<String> = (1..=args.items).map(|i| format!("slide {i}")).collect();
    let mut carousel = Carousel::new(items, config);

    let changes = carousel.mount(input, 0);
    report("mount", &carousel, changes);
    info!(
        "{} of {} items visible, {} pages",
        carousel.rendered_item_count(),
        carousel.item_count(),
        carousel.page_count()
    );

    run_until(&mut carousel, 4_500);

    // Swipe left far enough to commit.
    let mut now = 5_000;
    let changes = carousel.on_touch_start(Point::new(600.0, 300.0), now);
    report("touch start", &carousel, changes);
    for dx in [20.0, 60.0, 140.0] {
        now += 16;
        let changes = carousel.on_touch_move(Point::new(600.0 - dx, 304.0), now);
        report("touch move", &carousel, changes);
    }
    now += 16;
    let changes = carousel.on_touch_end(Point::new(450.0, 304.0), now);
    report("touch end", &carousel, changes);

    // A mostly vertical gesture scrolls the page instead.
    now += 500;
    carousel.on_touch_start(Point::new(300.0, 300.0), now);
    let changes = carousel.on_touch_move(Point::new(310.0, 420.0), now + 16);
    report("vertical move", &carousel, changes);
    let changes = carousel.on_touch_end(Point::new(310.0, 520.0), now + 32);
    report("vertical end", &carousel, changes);

    now += 1_000;
    let changes = carousel.go_next(now);
    report("next button", &carousel, changes);
    let changes = carousel.go_previous(now + 400);
    report("previous button", &carousel, changes);
    let changes = carousel.go_to(carousel.page_count() - 1, now + 800);
    report("indicator (last page)", &carousel, changes);

    // Shrink the window in a burst; only the last size is applied.
    now += 1_500;
    for width in [800.0, 700.0, 500.0] {
        carousel.on_resize(
            LayoutInput {
                viewport_width: width,
                container_width: width,
                ..input
            },
            now,
        );
        now += 30;
    }
    run_until(&mut carousel, now + 200);
    info!(
        "after resize: {} visible, peek={}",
        carousel.rendered_item_count(),
        carousel.metrics().is_some_and(|m| m.peek)
    );

    let changes = carousel.set_text_direction(TextDirection::Rtl);
    report("rtl", &carousel, changes);

    run_until(&mut carousel, now + 5_000);

    let changes = carousel.unmount();
    report("unmount", &carousel, changes);
    Ok(())
}
