//! User settings and application configuration constants.
//!
//! Everything an operator is expected to edit before building lives here:
//! Wi-Fi networks, the time server, the solar-data feed, timezones, display
//! format preferences, and the color-coding thresholds. The rest of the
//! crate consumes these as plain constants.

use std::time::Duration;

use crate::items::DataItem;

// =============================================================================
// Wi-Fi Networks
// =============================================================================

/// One Wi-Fi network identifier/secret pair.
///
/// Networks are tried in the order they appear in [`WIFI_NETWORKS`]. At least
/// one entry must be defined; an empty list is a configuration error that
/// halts startup on the error screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WifiNetwork {
    pub ssid: &'static str,
    pub password: &'static str,
}

/// Candidate networks, in trial order. Edit the SSIDs and passwords to match
/// your site; the first entry should be the one most commonly reachable.
pub const WIFI_NETWORKS: &[WifiNetwork] = &[
    WifiNetwork { ssid: "SSID_1", password: "PWD_1" },
    // WifiNetwork { ssid: "SSID_2", password: "PWD_2" },
];

// =============================================================================
// Time Source
// =============================================================================

/// NTP server queried for time synchronization.
pub const NTP_SERVER: &str = "pool.ntp.org";

/// Interval between background resynchronization attempts.
pub const RESYNC_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Sync ages below this count as "fresh" (status indicator green).
pub const STALE_FRESH_MAX_SECS: u64 = 3_600;

/// Sync ages at or beyond this count as "lost" (red); between the two bands
/// the sync is "marginal" (yellow). The clock keeps free-running either way.
pub const STALE_LOST_MIN_SECS: u64 = 86_400;

// =============================================================================
// Displayed Timezones
// =============================================================================

/// A timezone shown on the local-time row: a short label and a fixed UTC
/// offset in seconds. Daylight-saving shifts are the operator's edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeZone {
    pub label: &'static str,
    pub utc_offset_secs: i32,
}

/// Timezones rotated through on the local-time row. At least one required.
pub const TIME_ZONES: &[TimeZone] = &[
    TimeZone { label: "EDT", utc_offset_secs: -4 * 3600 },
    TimeZone { label: "AEST", utc_offset_secs: 10 * 3600 },
];

/// How long each timezone stays on screen, in seconds. Use a value that
/// divides evenly into 60.
pub const TZ_INTERVAL: u32 = 5;

// =============================================================================
// Solar Data Feed
// =============================================================================

/// Endpoint serving the flat `<tag>value</tag>` space-weather feed.
pub const SOLAR_URL: &str = "https://www.hamqsl.com/solarxml.php";

/// Data items shown in the bottom strip, in rotation order.
pub const DATA_ROTATION: &[DataItem] = &[
    DataItem::SolarIndices,
    DataItem::Geomagnetic,
    DataItem::SignalNoise,
    DataItem::Aurora,
    DataItem::Sunspots,
];

/// How long each solar data item stays on screen, in seconds. Use a value
/// that divides evenly into 60.
pub const CYCLE_TIME: u32 = 2;

// =============================================================================
// Color-Coding Thresholds
// =============================================================================
//
// The A and K breakpoints follow the NOAA station K/A index coloring; the
// solar-flux breakpoints are arbitrary but serviceable.

/// K index at or above this shows in the medium color.
pub const MEDIUM_K: i32 = 4;
/// K index at or above this shows in the high color.
pub const HIGH_K: i32 = 5;

/// A index at or above this shows in the medium color.
pub const MEDIUM_A: i32 = 20;
/// A index at or above this shows in the high color.
pub const HIGH_A: i32 = 30;

/// Solar flux at or above this shows in the medium color.
pub const MEDIUM_SFI: i32 = 175;
/// Solar flux at or above this shows in the high color.
pub const HIGH_SFI: i32 = 200;

// =============================================================================
// Time/Date Format Preferences
// =============================================================================

/// Title text at the top of the screen. Anything you like, if it fits.
pub const TITLE: &str = "NTP CLOCK";

/// Local time row format: 12-hour "11:34" vs 24-hour "23:34".
pub const LOCAL_FORMAT_12HR: bool = true;

/// UTC time row format: 12-hour vs 24-hour.
pub const UTC_FORMAT_12HR: bool = false;

/// Show 'AM'/'PM' next to 12-hour times.
pub const DISPLAY_AMPM: bool = true;

/// "01:00" vs " 1:00".
pub const HOUR_LEADING_ZERO: bool = false;

/// "Feb 07" vs "Feb 7".
pub const DATE_LEADING_ZERO: bool = true;

/// "12 Feb" vs "Feb 12".
pub const DAY_BEFORE_MONTH: bool = false;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341-class panel: 320x240 landscape).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate, pre-computed as i32 for drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Main loop pass interval. Event handling runs at this cadence; clock and
/// feed work run once per wall-clock second.
pub const TICK_TIME: Duration = Duration::from_millis(200);

/// Cadence of the link-health check in the steady-state loop.
pub const LINK_CHECK_INTERVAL: Duration = Duration::from_secs(10);

/// How long the "connection lost" notice stays up before the supervisor
/// restarts the startup sequence.
pub const LINK_LOST_NOTICE: Duration = Duration::from_secs(5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_intervals_divide_minute() {
        assert_eq!(60 % TZ_INTERVAL, 0, "TZ_INTERVAL must divide evenly into 60");
        assert_eq!(60 % CYCLE_TIME, 0, "CYCLE_TIME must divide evenly into 60");
    }

    #[test]
    fn test_staleness_bands_ordered() {
        assert!(
            STALE_FRESH_MAX_SECS < STALE_LOST_MIN_SECS,
            "fresh band must end before the lost band begins"
        );
    }

    #[test]
    fn test_thresholds_ordered() {
        assert!(MEDIUM_K < HIGH_K);
        assert!(MEDIUM_A < HIGH_A);
        assert!(MEDIUM_SFI < HIGH_SFI);
    }
}
