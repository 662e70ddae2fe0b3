//! Sync/link status strip: staleness indicator dot, caption, and the SSID.
//!
//! The dot color tracks the staleness band of the last successful time
//! exchange: green while fresh, yellow once the sync is an hour old, red
//! after a day. The clock itself keeps running either way; this is purely
//! the operator's cue.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::{
    clock::Staleness,
    colors::{BLACK, COLOR_HIGH, COLOR_MEDIUM, COLOR_NORMAL},
    styles::{LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, LEFT_ALIGNED},
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Region of the status block (right part of the bottom strip).
const STATUS_CLEAR: Rectangle = Rectangle::new(Point::new(228, 176), Size::new(92, 64));

/// Staleness indicator dot.
const DOT_RECT: Rectangle = Rectangle::new(Point::new(238, 184), Size::new(10, 10));

/// Baseline of the "SYNC" caption next to the dot.
const SYNC_LABEL_POS: Point = Point::new(254, 192);

/// Baseline of the SSID line.
const SSID_POS: Point = Point::new(238, 210);

const CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Indicator color for a staleness band.
const fn staleness_color(staleness: Staleness) -> Rgb565 {
    match staleness {
        Staleness::Fresh => COLOR_NORMAL,
        Staleness::Marginal => COLOR_MEDIUM,
        Staleness::Lost => COLOR_HIGH,
    }
}

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the status block.
pub fn draw_status(display: &mut SimulatorDisplay<Rgb565>, staleness: Staleness, ssid: &str) {
    STATUS_CLEAR.into_styled(CLEAR_STYLE).draw(display).ok();

    DOT_RECT
        .into_styled(PrimitiveStyle::with_fill(staleness_color(staleness)))
        .draw(display)
        .ok();

    Text::with_text_style("SYNC", SYNC_LABEL_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style(ssid, SSID_POS, LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Cache key for redraw tracking: band plus SSID.
pub fn status_key(staleness: Staleness, ssid: &str) -> String<48> {
    let mut key: String<48> = String::new();
    let _ = write!(key, "{staleness:?}|{ssid}");
    key
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staleness_colors_follow_bands() {
        assert_eq!(staleness_color(Staleness::Fresh), COLOR_NORMAL);
        assert_eq!(staleness_color(Staleness::Marginal), COLOR_MEDIUM);
        assert_eq!(staleness_color(Staleness::Lost), COLOR_HIGH);
    }

    #[test]
    fn test_status_key_tracks_band_changes() {
        assert_ne!(
            status_key(Staleness::Fresh, "HOME"),
            status_key(Staleness::Marginal, "HOME"),
            "a band change must dirty the status region"
        );
        assert_eq!(status_key(Staleness::Fresh, "HOME"), status_key(Staleness::Fresh, "HOME"));
    }
}
