//! Rgb565 color palette for the clock display.
//!
//! Named constants so drawing code never builds colors inline. The named
//! web-safe colors come from the `RgbColor` associated constants; ORANGE and
//! GRAY are hand-mixed 5/6/5 values.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

pub const BLACK: Rgb565 = Rgb565::BLACK;
pub const WHITE: Rgb565 = Rgb565::WHITE;
pub const RED: Rgb565 = Rgb565::RED;
pub const GREEN: Rgb565 = Rgb565::GREEN;
pub const BLUE: Rgb565 = Rgb565::BLUE;
pub const YELLOW: Rgb565 = Rgb565::YELLOW;
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Neutral gray used for divider lines and de-emphasized text.
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);

// =============================================================================
// Semantic Aliases
// =============================================================================

/// Color of the time digits.
pub const TIME_COLOR: Rgb565 = CYAN;

/// Color of the displayed month and day.
pub const DATE_COLOR: Rgb565 = YELLOW;

/// Foreground of label text (row labels, header title).
pub const LABEL_FG_COLOR: Rgb565 = WHITE;

/// Background of the header bar.
pub const LABEL_BG_COLOR: Rgb565 = BLUE;

/// Data value below every threshold.
pub const COLOR_NORMAL: Rgb565 = GREEN;

/// Data value past the medium threshold.
pub const COLOR_MEDIUM: Rgb565 = YELLOW;

/// Data value past the high threshold.
pub const COLOR_HIGH: Rgb565 = RED;
