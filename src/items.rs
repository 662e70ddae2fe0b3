//! Solar data items: the rotating field list and its color classification.
//!
//! The set of optional items and their on-screen order come from
//! [`crate::config::DATA_ROTATION`], an ordered list of enum variants, so
//! user ordering survives without a table of function pointers. Numeric
//! indices are classified against the configured NOAA-style breakpoints to
//! pick one of three colors.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{COLOR_HIGH, COLOR_MEDIUM, COLOR_NORMAL};
use crate::config::{CYCLE_TIME, HIGH_A, HIGH_K, HIGH_SFI, MEDIUM_A, MEDIUM_K, MEDIUM_SFI};

/// One displayable solar data item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataItem {
    /// Solar flux index with the A and K indices: "SFI 123  A 5  K 2".
    SolarIndices,
    /// Geomagnetic field activity, e.g. "QUIET".
    Geomagnetic,
    /// HF signal-to-noise estimate, e.g. "S3".
    SignalNoise,
    /// Auroral activity level.
    Aurora,
    /// Sunspot count.
    Sunspots,
}

impl DataItem {
    /// Caption drawn above the value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SolarIndices => "SOLAR INDICES",
            Self::Geomagnetic => "GEOMAG FIELD",
            Self::SignalNoise => "SIGNAL NOISE",
            Self::Aurora => "AURORA",
            Self::Sunspots => "SUNSPOTS",
        }
    }

    /// Feed tag for single-value items. [`DataItem::SolarIndices`] draws
    /// three tags and is handled by the widget directly.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::SolarIndices => "solarflux",
            Self::Geomagnetic => "geomagfield",
            Self::SignalNoise => "signalnoise",
            Self::Aurora => "aurora",
            Self::Sunspots => "sunspots",
        }
    }
}

// =============================================================================
// Threshold Classification
// =============================================================================

/// Three-level severity band for a numeric index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Normal,
    Medium,
    High,
}

impl Level {
    /// Classify a value against a pair of breakpoints.
    pub fn classify(value: i32, medium: i32, high: i32) -> Self {
        if value >= high {
            Self::High
        } else if value >= medium {
            Self::Medium
        } else {
            Self::Normal
        }
    }

    /// Display color for the band.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Normal => COLOR_NORMAL,
            Self::Medium => COLOR_MEDIUM,
            Self::High => COLOR_HIGH,
        }
    }
}

/// Classify a solar flux index reading.
pub fn flux_level(value: i32) -> Level {
    Level::classify(value, MEDIUM_SFI, HIGH_SFI)
}

/// Classify an A index reading.
pub fn a_level(value: i32) -> Level {
    Level::classify(value, MEDIUM_A, HIGH_A)
}

/// Classify a K index reading.
pub fn k_level(value: i32) -> Level {
    Level::classify(value, MEDIUM_K, HIGH_K)
}

/// Parse a feed field as an index value. The unknown-marker and free-text
/// fields come back as `None` and render unclassified.
pub fn numeric(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

// =============================================================================
// Rotation
// =============================================================================

/// Index of the data item to display, derived from the second of day so
/// every item in the rotation gets [`CYCLE_TIME`] seconds in turn.
pub fn rotation_index(secs_of_day: u32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (secs_of_day / CYCLE_TIME) as usize % count
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::UNKNOWN;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Level::classify(3, 4, 5), Level::Normal);
        assert_eq!(Level::classify(4, 4, 5), Level::Medium, "medium breakpoint is inclusive");
        assert_eq!(Level::classify(5, 4, 5), Level::High, "high breakpoint is inclusive");
        assert_eq!(Level::classify(9, 4, 5), Level::High);
    }

    #[test]
    fn test_index_classifiers_use_configured_breakpoints() {
        assert_eq!(k_level(3), Level::Normal);
        assert_eq!(k_level(4), Level::Medium);
        assert_eq!(k_level(5), Level::High);

        assert_eq!(a_level(19), Level::Normal);
        assert_eq!(a_level(20), Level::Medium);
        assert_eq!(a_level(30), Level::High);

        assert_eq!(flux_level(100), Level::Normal);
        assert_eq!(flux_level(175), Level::Medium);
        assert_eq!(flux_level(200), Level::High);
    }

    #[test]
    fn test_numeric_parses_plain_values() {
        assert_eq!(numeric("123"), Some(123));
        assert_eq!(numeric(" 4 "), Some(4));
    }

    #[test]
    fn test_numeric_rejects_text_and_unknown() {
        assert_eq!(numeric(UNKNOWN), None, "the unknown-marker is not a number");
        assert_eq!(numeric("QUIET"), None);
        assert_eq!(numeric(""), None);
    }

    #[test]
    fn test_rotation_index_walks_the_list() {
        let count = 5;
        assert_eq!(rotation_index(0, count), 0);
        assert_eq!(rotation_index(CYCLE_TIME - 1, count), 0);
        assert_eq!(rotation_index(CYCLE_TIME, count), 1);
        assert_eq!(rotation_index(CYCLE_TIME * 5, count), 0, "rotation wraps after the last item");
    }

    #[test]
    fn test_rotation_index_empty_list() {
        assert_eq!(rotation_index(42, 0), 0);
    }
}
