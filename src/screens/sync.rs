//! First time-sync wait screen.
//!
//! After association the clock has nothing to display until the first
//! successful time exchange, so this screen polls the time source once per
//! second, with no upper bound on attempts, showing a counting status.
//! There is exactly one configured time source; unlike network selection
//! there are no alternatives to cycle through.

use core::fmt::Write;
use std::time::{Duration, Instant};

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb565,
    prelude::*,
    text::Text,
};
use embedded_graphics_simulator::{SimulatorDisplay, Window};
use heapless::String;

use crate::{
    clock::TimeKeeper,
    colors::{BLACK, COLOR_NORMAL, WHITE},
    config::CENTER_X,
    screens::wait_with_events,
    sntp::TimeSource,
    styles::{CENTERED, LABEL_STYLE_GRAY, STATUS_STYLE_WHITE},
};

const HEADLINE_POS: Point = Point::new(CENTER_X, 80);
const DETAIL_POS: Point = Point::new(CENTER_X, 120);

/// Poll cadence while waiting for the first exchange.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How long the confirmation stays up.
const CONFIRM_DURATION: Duration = Duration::from_millis(500);

fn draw(display: &mut SimulatorDisplay<Rgb565>, headline: &str, color: Rgb565, detail: &str) {
    display.clear(BLACK).ok();
    let headline_style = MonoTextStyle::new(&FONT_10X20, color);
    Text::with_text_style(headline, HEADLINE_POS, headline_style, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(detail, DETAIL_POS, STATUS_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        "clock starts after first sync",
        Point::new(CENTER_X, 150),
        LABEL_STYLE_GRAY,
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Block until the first successful time exchange.
///
/// Returns the anchored [`TimeKeeper`], or `None` if the window was closed.
pub fn run_sync_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    source: &mut dyn TimeSource,
) -> Option<TimeKeeper> {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        match source.fetch_unix_time() {
            Ok(unix) => {
                draw(display, "TIME SYNCED", COLOR_NORMAL, "");
                window.update(display);
                if !wait_with_events(window, CONFIRM_DURATION) {
                    return None;
                }
                return Some(TimeKeeper::new(unix, Instant::now()));
            }
            Err(e) => {
                log::warn!("time sync attempt {attempts} failed: {e}");
                let mut detail: String<32> = String::new();
                let _ = write!(detail, "attempt {attempts}");
                draw(display, "WAITING FOR TIME", WHITE, &detail);
                window.update(display);
                if !wait_with_events(window, POLL_INTERVAL) {
                    return None;
                }
            }
        }
    }
}
