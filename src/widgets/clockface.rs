//! The two clock rows: UTC above, rotating local zone below.
//!
//! Each row has a label (left, fixed for UTC, the zone name for local), the
//! time in large digits, and the date right-aligned beside it. Every draw
//! clears the affected region first; the caller decides what needs drawing
//! via [`crate::render::RedrawState`].

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    colors::BLACK,
    styles::{DATE_STYLE, LEFT_ALIGNED, RIGHT_ALIGNED, TIME_STYLE, TITLE_STYLE_WHITE},
};

const CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// X of the row label and time digits.
const LEFT_X: i32 = 8;

/// Right edge for the date column.
const DATE_RIGHT_X: i32 = 312;

/// Which clock row a draw call targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeRow {
    Utc,
    Local,
}

impl TimeRow {
    /// Baseline of the small row label.
    const fn label_pos(self) -> Point {
        match self {
            Self::Utc => Point::new(LEFT_X, 58),
            Self::Local => Point::new(LEFT_X, 128),
        }
    }

    /// Region cleared before drawing the label.
    const fn label_clear(self) -> Rectangle {
        match self {
            Self::Utc => Rectangle::new(Point::new(0, 40), Size::new(140, 22)),
            Self::Local => Rectangle::new(Point::new(0, 110), Size::new(140, 22)),
        }
    }

    /// Baseline of the time digits.
    const fn time_pos(self) -> Point {
        match self {
            Self::Utc => Point::new(LEFT_X, 94),
            Self::Local => Point::new(LEFT_X, 164),
        }
    }

    /// Region cleared before drawing the time.
    const fn time_clear(self) -> Rectangle {
        match self {
            Self::Utc => Rectangle::new(Point::new(0, 66), Size::new(228, 36)),
            Self::Local => Rectangle::new(Point::new(0, 136), Size::new(228, 36)),
        }
    }

    /// Baseline of the right-aligned date.
    const fn date_pos(self) -> Point {
        match self {
            Self::Utc => Point::new(DATE_RIGHT_X, 92),
            Self::Local => Point::new(DATE_RIGHT_X, 162),
        }
    }

    /// Region cleared before drawing the date.
    const fn date_clear(self) -> Rectangle {
        match self {
            Self::Utc => Rectangle::new(Point::new(228, 70), Size::new(92, 28)),
            Self::Local => Rectangle::new(Point::new(228, 140), Size::new(92, 28)),
        }
    }
}

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw a row's label ("UTC", or the current zone name).
pub fn draw_row_label(display: &mut SimulatorDisplay<Rgb565>, row: TimeRow, label: &str) {
    row.label_clear().into_styled(CLEAR_STYLE).draw(display).ok();
    Text::with_text_style(label, row.label_pos(), TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw a row's time digits.
pub fn draw_time(display: &mut SimulatorDisplay<Rgb565>, row: TimeRow, time: &str) {
    row.time_clear().into_styled(CLEAR_STYLE).draw(display).ok();
    Text::with_text_style(time, row.time_pos(), TIME_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw a row's date, right-aligned against the screen edge.
pub fn draw_date(display: &mut SimulatorDisplay<Rgb565>, row: TimeRow, date: &str) {
    row.date_clear().into_styled(CLEAR_STYLE).draw(display).ok();
    Text::with_text_style(date, row.date_pos(), DATE_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
