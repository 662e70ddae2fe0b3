//! Network association progress, configuration errors, and the lost-link
//! notice.
//!
//! The connect screen drives the selector at its 1 Hz cadence and repaints
//! the network name and attempt count after every poll. It has no failure
//! exit: the selector cycles the configured networks forever, and the only
//! other way out is closing the window.

use core::fmt::Write;
use std::time::Duration;

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb565,
    prelude::*,
    text::Text,
};
use embedded_graphics_simulator::{SimulatorDisplay, Window};
use heapless::String;

use crate::{
    colors::{BLACK, COLOR_HIGH, COLOR_NORMAL, WHITE},
    config::CENTER_X,
    screens::wait_with_events,
    styles::{CENTERED, LABEL_STYLE_GRAY, STATUS_STYLE_WHITE},
    wifi::{Connection, NetworkSelector, SelectorStatus, WifiLink},
};

/// Headline baseline, centered.
const HEADLINE_POS: Point = Point::new(CENTER_X, 80);

/// Detail line baseline.
const DETAIL_POS: Point = Point::new(CENTER_X, 120);

/// Second detail line baseline.
const DETAIL2_POS: Point = Point::new(CENTER_X, 150);

/// Poll cadence during association.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How long the "connected" confirmation stays up.
const CONFIRM_DURATION: Duration = Duration::from_secs(1);

fn draw_lines(
    display: &mut SimulatorDisplay<Rgb565>,
    headline: &str,
    headline_color: Rgb565,
    detail: &str,
    detail2: &str,
) {
    display.clear(BLACK).ok();
    let headline_style = MonoTextStyle::new(&FONT_10X20, headline_color);
    Text::with_text_style(headline, HEADLINE_POS, headline_style, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(detail, DETAIL_POS, STATUS_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(detail2, DETAIL2_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();
}

/// Run the association sequence until a network connects.
///
/// Returns `None` only if the window is closed.
pub fn run_connect_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    mut selector: NetworkSelector,
    link: &mut dyn WifiLink,
) -> Option<Connection> {
    loop {
        match selector.poll(link) {
            SelectorStatus::Trying { ssid, attempt } => {
                let mut detail: String<48> = String::new();
                let _ = write!(detail, "{ssid}");
                let mut detail2: String<32> = String::new();
                let _ = write!(detail2, "attempt {attempt}");
                draw_lines(display, "CONNECTING", WHITE, &detail, &detail2);
                window.update(display);
                if !wait_with_events(window, POLL_INTERVAL) {
                    return None;
                }
            }
            SelectorStatus::Connected(conn) => {
                let mut detail: String<48> = String::new();
                let _ = write!(detail, "{}", conn.ssid);
                let mut detail2: String<32> = String::new();
                let _ = write!(detail2, "after {} attempts", conn.attempts);
                draw_lines(display, "CONNECTED", COLOR_NORMAL, &detail, &detail2);
                window.update(display);
                if !wait_with_events(window, CONFIRM_DURATION) {
                    return None;
                }
                return Some(conn);
            }
        }
    }
}

/// Permanent configuration-error state. Holds the message on screen until
/// the window is closed; the fix is an edit to `config.rs` and a rebuild.
pub fn run_config_error_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    message: &str,
) {
    draw_lines(
        display,
        "CONFIG ERROR",
        COLOR_HIGH,
        message,
        "edit config.rs and rebuild",
    );
    window.update(display);
    while wait_with_events(window, Duration::from_millis(200)) {}
}

/// Lost-connectivity notice, shown for a fixed beat before the supervisor
/// restarts the startup sequence. Returns `false` if the window was closed.
pub fn run_link_lost_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    notice: Duration,
) -> bool {
    draw_lines(
        display,
        "CONNECTION LOST",
        COLOR_HIGH,
        "restarting",
        "",
    );
    window.update(display);
    wait_with_events(window, notice)
}
