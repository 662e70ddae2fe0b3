//! Pre-computed text styles shared by the widgets and screens.
//!
//! `MonoTextStyle` and `TextStyle` construction is const in
//! embedded-graphics 0.8, so every fixed style lives here as a constant and
//! drawing code only builds a style at runtime when the color is dynamic
//! (threshold-coded data values, staleness indicator).

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{DATE_COLOR, GRAY, LABEL_FG_COLOR, TIME_COLOR, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Used for the header title and screen messages.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for row labels and data fields.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for dates at the screen's right edge.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic-color styles)
// =============================================================================

/// Data value font, for threshold-colored solar values.
/// Usage: `MonoTextStyle::new(VALUE_FONT, dynamic_color)`.
pub const VALUE_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for labels on dark backgrounds.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LABEL_FG_COLOR);

/// Small gray text for de-emphasized labels (SSID, status captions).
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Medium white text for the header title and row labels.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large cyan digits for the two time rows (`ProFont` 24pt).
pub const TIME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, TIME_COLOR);

/// Yellow date text next to each time row (`ProFont` 18pt).
pub const DATE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, DATE_COLOR);

/// Medium white text for screen status lines (`ProFont` 18pt).
pub const STATUS_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
