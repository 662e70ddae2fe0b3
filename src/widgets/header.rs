//! Title bar and the divider above the data strip.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    colors::{GRAY, LABEL_BG_COLOR},
    config::{CENTER_X, SCREEN_WIDTH, TITLE},
    styles::{CENTERED, TITLE_STYLE_WHITE},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Top-left corner of the header bar.
const HEADER_RECT_POS: Point = Point::new(0, 0);

/// Size of the header bar (full width, 26px tall).
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, 26);

/// Baseline of the centered title text.
const HEADER_TITLE_POS: Point = Point::new(CENTER_X, 19);

/// Divider between the local-time row and the data strip.
const DIVIDER_START: Point = Point::new(0, 172);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, 172);

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LABEL_BG_COLOR);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the title bar: a filled band with the configured title centered.
pub fn draw_header(display: &mut SimulatorDisplay<Rgb565>) {
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style(TITLE, HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the gray line separating the clock rows from the data strip.
pub fn draw_divider(display: &mut SimulatorDisplay<Rgb565>) {
    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}
