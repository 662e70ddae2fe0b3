//! Startup splash: title and attribution, shown briefly before the
//! connection sequence begins.

use std::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};
use embedded_graphics_simulator::{SimulatorDisplay, Window};

use crate::{
    colors::BLACK,
    config::{CENTER_X, TITLE},
    screens::wait_with_events,
    styles::{CENTERED, LABEL_STYLE_GRAY, STATUS_STYLE_WHITE, TIME_STYLE},
};

/// Title baseline, centered.
const TITLE_POS: Point = Point::new(CENTER_X, 90);

/// Subtitle baseline.
const SUBTITLE_POS: Point = Point::new(CENTER_X, 130);

/// Attribution baseline.
const CREDIT_POS: Point = Point::new(CENTER_X, 160);

/// How long the splash stays up.
const SPLASH_DURATION: Duration = Duration::from_secs(2);

/// Show the splash. Returns `false` if the window was closed.
pub fn run_splash_screen(display: &mut SimulatorDisplay<Rgb565>, window: &mut Window) -> bool {
    display.clear(BLACK).ok();

    Text::with_text_style(TITLE, TITLE_POS, TIME_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("UTC + local dual clock", SUBTITLE_POS, STATUS_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        "solar data from hamqsl.com",
        CREDIT_POS,
        LABEL_STYLE_GRAY,
        CENTERED,
    )
    .draw(display)
    .ok();

    window.update(display);
    wait_with_events(window, SPLASH_DURATION)
}
