//! Sync state, staleness tracking, and time/date presentation.
//!
//! [`TimeKeeper`] owns the last successful SNTP exchange and derives the
//! current time from it plus the monotonic clock, so the display keeps
//! running on the last known time even when the network is gone. Staleness
//! is a derived, read-only classification that drives the status indicator
//! color; it never changes behavior.
//!
//! All queries take the caller's `Instant` instead of sampling the clock
//! internally, so tests drive the keeper with manufactured instants and
//! never sleep.

use core::fmt::Write;
use std::time::Instant;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use heapless::String;
use log::{info, warn};

use crate::config::{
    DATE_LEADING_ZERO, DAY_BEFORE_MONTH, DISPLAY_AMPM, HOUR_LEADING_ZERO, RESYNC_INTERVAL,
    STALE_FRESH_MAX_SECS, STALE_LOST_MIN_SECS, TZ_INTERVAL, TimeZone,
};
use crate::sntp::TimeSource;

/// How old the last successful sync is, in bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Staleness {
    /// Synced within the hour.
    Fresh,
    /// Between one hour and one day old.
    Marginal,
    /// A day or more without a successful exchange.
    Lost,
}

/// Wall-clock state anchored to the last successful time-protocol exchange.
pub struct TimeKeeper {
    last_sync_unix: i64,
    synced_at: Instant,
    last_attempt: Instant,
}

impl TimeKeeper {
    /// Anchor a new keeper to a just-completed sync.
    pub fn new(unix: i64, at: Instant) -> Self {
        Self {
            last_sync_unix: unix,
            synced_at: at,
            last_attempt: at,
        }
    }

    /// Current Unix time: last sync plus monotonic elapsed seconds.
    pub fn now_unix(&self, at: Instant) -> i64 {
        self.last_sync_unix + at.duration_since(self.synced_at).as_secs() as i64
    }

    /// Current UTC date-time.
    pub fn now_utc(&self, at: Instant) -> DateTime<Utc> {
        DateTime::from_timestamp(self.now_unix(at), 0).unwrap_or_default()
    }

    /// Current time in the given display zone.
    pub fn local_now(&self, at: Instant, zone: &TimeZone) -> NaiveDateTime {
        (self.now_utc(at) + TimeDelta::seconds(i64::from(zone.utc_offset_secs))).naive_utc()
    }

    /// Seconds since the last successful exchange.
    pub fn seconds_since_sync(&self, at: Instant) -> u64 {
        at.duration_since(self.synced_at).as_secs()
    }

    /// Staleness band of the current sync.
    pub fn staleness(&self, at: Instant) -> Staleness {
        let age = self.seconds_since_sync(at);
        if age < STALE_FRESH_MAX_SECS {
            Staleness::Fresh
        } else if age < STALE_LOST_MIN_SECS {
            Staleness::Marginal
        } else {
            Staleness::Lost
        }
    }

    /// Record a successful exchange.
    pub fn record_sync(&mut self, unix: i64, at: Instant) {
        self.last_sync_unix = unix;
        self.synced_at = at;
    }

    /// Background resynchronization, called every pass of the update cycle.
    ///
    /// Re-attempts an exchange once per [`RESYNC_INTERVAL`]; a failed attempt
    /// is logged and the clock keeps free-running until the next interval.
    pub fn service(&mut self, source: &mut dyn TimeSource, at: Instant) {
        if at.duration_since(self.last_attempt) < RESYNC_INTERVAL {
            return;
        }
        self.last_attempt = at;
        match source.fetch_unix_time() {
            Ok(unix) => {
                info!("time resynchronized (unix {unix})");
                self.record_sync(unix, at);
            }
            Err(e) => warn!("time resync failed: {e}"),
        }
    }
}

// =============================================================================
// Timezone Rotation
// =============================================================================

/// Index of the timezone to display, derived from the second of day so the
/// rotation needs no retained state and every zone gets [`TZ_INTERVAL`]
/// seconds in turn.
pub fn zone_index(secs_of_day: u32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (secs_of_day / TZ_INTERVAL) as usize % count
}

// =============================================================================
// Formatting
// =============================================================================

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an HH:MM:SS string honoring the configured 12/24-hour, AM/PM and
/// leading-zero preferences.
pub fn format_time(hour: u32, minute: u32, second: u32, twelve_hour: bool) -> String<16> {
    let mut out: String<16> = String::new();

    let (display_hour, suffix) = if twelve_hour {
        let h12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        let suffix = if DISPLAY_AMPM {
            if hour < 12 { " AM" } else { " PM" }
        } else {
            ""
        };
        (h12, suffix)
    } else {
        (hour, "")
    };

    if HOUR_LEADING_ZERO {
        let _ = write!(out, "{display_hour:02}");
    } else {
        let _ = write!(out, "{display_hour:2}");
    }
    let _ = write!(out, ":{minute:02}:{second:02}{suffix}");
    out
}

/// Format a "Feb 07" style date honoring the configured leading-zero and
/// day-before-month preferences. `month` is 1-based.
pub fn format_date(day: u32, month: u32) -> String<16> {
    let mut out: String<16> = String::new();
    let name = MONTHS[(month.clamp(1, 12) - 1) as usize];

    if DAY_BEFORE_MONTH {
        if DATE_LEADING_ZERO {
            let _ = write!(out, "{day:02} {name}");
        } else {
            let _ = write!(out, "{day} {name}");
        }
    } else if DATE_LEADING_ZERO {
        let _ = write!(out, "{name} {day:02}");
    } else {
        let _ = write!(out, "{name} {day}");
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Timelike;

    use super::*;
    use crate::sntp::SntpError;

    /// Source that yields a fixed queue of results.
    struct ScriptedSource {
        results: Vec<Result<i64, ()>>,
        calls: u32,
    }

    impl TimeSource for ScriptedSource {
        fn fetch_unix_time(&mut self) -> Result<i64, SntpError> {
            self.calls += 1;
            match self.results.pop() {
                Some(Ok(t)) => Ok(t),
                _ => Err(SntpError::InvalidResponse),
            }
        }
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    // -------------------------------------------------------------------------
    // Time Derivation
    // -------------------------------------------------------------------------

    #[test]
    fn test_now_advances_with_monotonic_clock() {
        let base = Instant::now();
        let keeper = TimeKeeper::new(1_000_000, base);

        assert_eq!(keeper.now_unix(base), 1_000_000);
        assert_eq!(keeper.now_unix(base + secs(90)), 1_000_090);
    }

    #[test]
    fn test_local_now_applies_zone_offset() {
        let base = Instant::now();
        // 2026-08-06 12:00:00 UTC
        let keeper = TimeKeeper::new(1_786_017_600, base);
        let zone = TimeZone { label: "EDT", utc_offset_secs: -4 * 3600 };

        let local = keeper.local_now(base, &zone);
        assert_eq!(local.hour(), 8, "EDT is four hours behind UTC");

        let utc = keeper.now_utc(base);
        assert_eq!(utc.hour(), 12);
    }

    // -------------------------------------------------------------------------
    // Staleness Bands
    // -------------------------------------------------------------------------

    #[test]
    fn test_staleness_band_boundaries() {
        let base = Instant::now();
        let keeper = TimeKeeper::new(0, base);

        assert_eq!(keeper.staleness(base + secs(3_599)), Staleness::Fresh);
        assert_eq!(keeper.staleness(base + secs(3_600)), Staleness::Marginal);
        assert_eq!(keeper.staleness(base + secs(86_399)), Staleness::Marginal);
        assert_eq!(keeper.staleness(base + secs(86_400)), Staleness::Lost);
    }

    #[test]
    fn test_sync_resets_staleness() {
        let base = Instant::now();
        let mut keeper = TimeKeeper::new(0, base);

        let later = base + secs(100_000);
        assert_eq!(keeper.staleness(later), Staleness::Lost);

        keeper.record_sync(100_000, later);
        assert_eq!(keeper.staleness(later), Staleness::Fresh);
        assert_eq!(keeper.seconds_since_sync(later + secs(10)), 10);
    }

    // -------------------------------------------------------------------------
    // Background Resync
    // -------------------------------------------------------------------------

    #[test]
    fn test_service_waits_for_interval() {
        let base = Instant::now();
        let mut keeper = TimeKeeper::new(0, base);
        let mut source = ScriptedSource { results: vec![Ok(5_000)], calls: 0 };

        keeper.service(&mut source, base + secs(60));
        assert_eq!(source.calls, 0, "no resync attempt before the interval elapses");

        keeper.service(&mut source, base + RESYNC_INTERVAL);
        assert_eq!(source.calls, 1, "one attempt once the interval elapses");
        assert_eq!(keeper.now_unix(base + RESYNC_INTERVAL), 5_000, "successful resync re-anchors the clock");
    }

    #[test]
    fn test_service_failure_keeps_free_running() {
        let base = Instant::now();
        let mut keeper = TimeKeeper::new(1_000, base);
        let mut source = ScriptedSource { results: vec![], calls: 0 };

        let at = base + RESYNC_INTERVAL;
        keeper.service(&mut source, at);
        assert_eq!(source.calls, 1);
        assert_eq!(
            keeper.now_unix(at),
            1_000 + RESYNC_INTERVAL.as_secs() as i64,
            "a failed resync must not disturb the running clock"
        );

        // The failed attempt still consumed the interval slot.
        keeper.service(&mut source, at + secs(1));
        assert_eq!(source.calls, 1, "next attempt waits a full interval after a failure");
    }

    // -------------------------------------------------------------------------
    // Timezone Rotation
    // -------------------------------------------------------------------------

    #[test]
    fn test_zone_index_rotates_every_interval() {
        assert_eq!(zone_index(0, 2), 0);
        assert_eq!(zone_index(TZ_INTERVAL - 1, 2), 0);
        assert_eq!(zone_index(TZ_INTERVAL, 2), 1);
        assert_eq!(zone_index(2 * TZ_INTERVAL, 2), 0, "rotation wraps past the last zone");
    }

    #[test]
    fn test_zone_index_empty_table() {
        assert_eq!(zone_index(123, 0), 0);
    }

    // -------------------------------------------------------------------------
    // Formatting
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_time_24_hour() {
        assert_eq!(format_time(23, 34, 5, false).as_str(), "23:34:05");
    }

    #[test]
    fn test_format_time_12_hour_with_ampm() {
        assert_eq!(format_time(23, 34, 5, true).as_str(), "11:34:05 PM");
        assert_eq!(format_time(0, 0, 0, true).as_str(), "12:00:00 AM", "midnight is 12 AM");
        assert_eq!(format_time(12, 0, 0, true).as_str(), "12:00:00 PM", "noon is 12 PM");
    }

    #[test]
    fn test_format_time_suppresses_leading_zero() {
        // HOUR_LEADING_ZERO is false: single-digit hours are space-padded.
        assert_eq!(format_time(1, 0, 0, true).as_str(), " 1:00:00 AM");
        assert_eq!(format_time(9, 5, 7, false).as_str(), " 9:05:07");
    }

    #[test]
    fn test_format_date() {
        // DATE_LEADING_ZERO is true, month before day.
        assert_eq!(format_date(7, 2).as_str(), "Feb 07");
        assert_eq!(format_date(25, 12).as_str(), "Dec 25");
    }
}
