//! The rotating solar-data field in the bottom strip.
//!
//! Draws the caption of the current [`DataItem`] and its value(s) from the
//! feed cache. Index values are color-coded against the configured
//! breakpoints; free-text values and the unknown-marker draw in white.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::{
    colors::{BLACK, WHITE},
    feed::FeedPoller,
    items::{DataItem, Level, a_level, flux_level, k_level, numeric},
    styles::{LABEL_STYLE_GRAY, LEFT_ALIGNED, VALUE_FONT},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Region of the data field (left part of the bottom strip).
const FIELD_CLEAR: Rectangle = Rectangle::new(Point::new(0, 176), Size::new(228, 64));

/// Baseline of the small caption.
const CAPTION_POS: Point = Point::new(8, 192);

/// Baseline of the value line.
const VALUE_POS: Point = Point::new(8, 222);

/// X positions of the A and K groups on the solar-indices line.
const A_GROUP_X: i32 = 104;
const K_GROUP_X: i32 = 172;

const CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Pick the display color for an index value: classified when numeric,
/// plain white otherwise.
fn index_color(value: &str, classify: fn(i32) -> Level) -> Rgb565 {
    numeric(value).map_or(WHITE, |v| classify(v).color())
}

fn draw_value(display: &mut SimulatorDisplay<Rgb565>, pos: Point, text: &str, color: Rgb565) {
    let style = MonoTextStyle::new(VALUE_FONT, color);
    Text::with_text_style(text, pos, style, LEFT_ALIGNED).draw(display).ok();
}

/// Draw the current data item into its strip region.
pub fn draw_data_field(display: &mut SimulatorDisplay<Rgb565>, item: DataItem, poller: &FeedPoller) {
    FIELD_CLEAR.into_styled(CLEAR_STYLE).draw(display).ok();

    Text::with_text_style(item.label(), CAPTION_POS, LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();

    match item {
        DataItem::SolarIndices => {
            let flux = poller.value("solarflux");
            let a = poller.value("aindex");
            let k = poller.value("kindex");

            let mut text: String<16> = String::new();
            let _ = write!(text, "SFI {flux}");
            draw_value(display, VALUE_POS, &text, index_color(flux, flux_level));

            text.clear();
            let _ = write!(text, "A {a}");
            draw_value(
                display,
                Point::new(A_GROUP_X, VALUE_POS.y),
                &text,
                index_color(a, a_level),
            );

            text.clear();
            let _ = write!(text, "K {k}");
            draw_value(
                display,
                Point::new(K_GROUP_X, VALUE_POS.y),
                &text,
                index_color(k, k_level),
            );
        }
        _ => {
            let value = poller.value(item.tag());
            draw_value(display, VALUE_POS, value, WHITE);
        }
    }
}

/// Cache key for redraw tracking: caption plus every value the field would
/// draw. The field repaints only when this changes.
pub fn field_key(item: DataItem, poller: &FeedPoller) -> String<64> {
    let mut key: String<64> = String::new();
    match item {
        DataItem::SolarIndices => {
            let _ = write!(
                key,
                "{}|{}|{}|{}",
                item.label(),
                poller.value("solarflux"),
                poller.value("aindex"),
                poller.value("kindex"),
            );
        }
        _ => {
            let _ = write!(key, "{}|{}", item.label(), poller.value(item.tag()));
        }
    }
    key
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{COLOR_HIGH, COLOR_NORMAL};

    #[test]
    fn test_index_color_classifies_numeric_values() {
        assert_eq!(index_color("3", k_level), COLOR_NORMAL);
        assert_eq!(index_color("7", k_level), COLOR_HIGH);
    }

    #[test]
    fn test_index_color_plain_for_unknown() {
        assert_eq!(index_color("??", k_level), WHITE, "the unknown-marker is never classified");
        assert_eq!(index_color("QUIET", flux_level), WHITE);
    }

    #[test]
    fn test_field_key_changes_with_item_and_values() {
        let poller = FeedPoller::new();
        let solar = field_key(DataItem::SolarIndices, &poller);
        let aurora = field_key(DataItem::Aurora, &poller);
        assert_ne!(solar, aurora, "different items must produce different keys");
        assert!(solar.as_str().contains("??"), "an empty cache keys on the unknown-marker");
    }
}
