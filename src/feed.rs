//! Scheduled polling of the remote solar-data feed.
//!
//! The poller owns the feed cache and its schedule. On its very first tick
//! it derives a jittered offset from the current second and fetches
//! immediately; afterwards it fetches twice an hour, when the minute matches
//! the offset modulo 30 and the second matches exactly. The jitter spreads
//! clients of the shared endpoint across a few minutes instead of having
//! every clock fire at the top of the hour.
//!
//! A failed slot stores the `"missing"` sentinel (so dependent fields render
//! as unknown), then after a five-minute cool-down the cache resets to
//! empty, which re-runs the first-tick branch: a fresh offset and an
//! immediate retry. While the cool-down is pending no fetch fires at all.
//!
//! Retry pacing goes through the injected [`Delay`] so tests never sleep.

use std::time::Duration;

use chrono::{DateTime, Timelike, Utc};
use log::{info, warn};
use thiserror::Error;

use crate::scrape::{self, UNKNOWN};

/// Sentinel blob stored after a failed fetch. Distinct from the empty
/// "never attempted" blob: both render as unknown, but only the empty state
/// triggers an immediate first-time poll.
const MISSING: &str = "missing";

/// Fetch attempts per scheduled slot before giving up until the cool-down.
const FETCH_ATTEMPTS: u32 = 5;

/// Fixed pause between in-slot fetch attempts.
const FETCH_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Cool-down after a failed slot before the cache re-arms.
const RETRY_COOLDOWN_SECS: i64 = 5 * 60;

/// A failed fetch attempt. DNS, TLS, timeout and HTTP-status failures are
/// deliberately not distinguished; every one is just a failed attempt.
#[derive(Debug, Error)]
#[error("feed fetch failed: {0}")]
pub struct FetchError(pub String);

/// The transport collaborator: one GET of the configured endpoint.
pub trait FeedFetcher {
    fn fetch(&mut self) -> Result<String, FetchError>;
}

/// Suspension point for retry pacing. The binary sleeps; tests count calls.
pub trait Delay {
    fn pause(&mut self, duration: Duration);
}

/// Blocking-sleep delay used by the binary.
pub struct StdDelay;

impl Delay for StdDelay {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// =============================================================================
// HTTP Fetcher
// =============================================================================

/// Fetches the feed with a single blocking HTTPS GET.
pub struct HttpFetcher {
    url: String,
}

impl HttpFetcher {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string() }
    }
}

impl FeedFetcher for HttpFetcher {
    fn fetch(&mut self) -> Result<String, FetchError> {
        let response = reqwest::blocking::get(&self.url).map_err(|e| FetchError(e.to_string()))?;
        if !response.status().is_success() {
            return Err(FetchError(format!("status {}", response.status())));
        }
        response.text().map_err(|e| FetchError(e.to_string()))
    }
}

// =============================================================================
// Poll Schedule
// =============================================================================

/// The jittered twice-hourly fire time, derived once per data epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollOffset {
    pub minute: u32,
    pub second: u32,
}

impl PollOffset {
    /// Derive the offset from the second observed on the first tick:
    /// minute 2–6 past the half hour, at that same second.
    fn derive(second: u32) -> Self {
        Self {
            minute: 2 + second % 5,
            second,
        }
    }

    /// Whether a tick at `minute`:`second` hits the schedule. Matches twice
    /// per hour: near the top and near the half.
    pub fn due(&self, minute: u32, second: u32) -> bool {
        minute % 30 == self.minute % 30 && second == self.second
    }
}

/// What one tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing due.
    Idle,
    /// Fetch performed and a new blob stored.
    Updated,
    /// Fetch performed, every attempt failed; sentinel stored.
    Failed,
}

// =============================================================================
// Feed Poller
// =============================================================================

/// The feed cache and its scheduling state. Sole owner of the blob.
pub struct FeedPoller {
    blob: String,
    offset: Option<PollOffset>,
    retry_pending: bool,
    failed_at: Option<DateTime<Utc>>,
}

impl FeedPoller {
    pub fn new() -> Self {
        Self {
            blob: String::new(),
            offset: None,
            retry_pending: false,
            failed_at: None,
        }
    }

    /// Run one scheduling pass for the given wall-clock time.
    ///
    /// Called once per second from the update cycle. Fetches on the first
    /// call ever, on schedule matches, and immediately after the failure
    /// cool-down re-arms the cache.
    pub fn tick(
        &mut self,
        now: DateTime<Utc>,
        fetcher: &mut dyn FeedFetcher,
        delay: &mut dyn Delay,
    ) -> PollOutcome {
        if self.retry_pending {
            let elapsed = self.failed_at.map_or(i64::MAX, |t| (now - t).num_seconds());
            if elapsed <= RETRY_COOLDOWN_SECS {
                return PollOutcome::Idle;
            }
            info!("feed retry cool-down elapsed; re-arming");
            self.blob.clear();
            self.offset = None;
            self.retry_pending = false;
            self.failed_at = None;
        }

        match self.offset {
            None => {
                let offset = PollOffset::derive(now.second());
                info!(
                    "feed polls scheduled at minute {} second {} (mod 30)",
                    offset.minute, offset.second
                );
                self.offset = Some(offset);
                // First time: fetch now regardless of the schedule.
                self.attempt_fetch(now, fetcher, delay)
            }
            Some(offset) if offset.due(now.minute(), now.second()) => {
                self.attempt_fetch(now, fetcher, delay)
            }
            Some(_) => PollOutcome::Idle,
        }
    }

    /// One scheduled slot: up to [`FETCH_ATTEMPTS`] back-to-back attempts
    /// with a short fixed pause between them.
    fn attempt_fetch(
        &mut self,
        now: DateTime<Utc>,
        fetcher: &mut dyn FeedFetcher,
        delay: &mut dyn Delay,
    ) -> PollOutcome {
        for attempt in 1..=FETCH_ATTEMPTS {
            match fetcher.fetch() {
                Ok(body) => {
                    info!("feed fetched ({} bytes)", body.len());
                    self.blob = body;
                    self.retry_pending = false;
                    self.failed_at = None;
                    return PollOutcome::Updated;
                }
                Err(e) => {
                    warn!("feed fetch attempt {attempt}/{FETCH_ATTEMPTS}: {e}");
                    if attempt < FETCH_ATTEMPTS {
                        delay.pause(FETCH_RETRY_DELAY);
                    }
                }
            }
        }

        self.blob.clear();
        self.blob.push_str(MISSING);
        self.retry_pending = true;
        self.failed_at = Some(now);
        PollOutcome::Failed
    }

    /// Extract a field from the cached blob, or the unknown-marker when no
    /// usable blob is cached.
    pub fn value<'a>(&'a self, tag: &str) -> &'a str {
        if self.has_data() {
            scrape::extract(&self.blob, tag)
        } else {
            UNKNOWN
        }
    }

    /// Whether a successfully fetched blob is cached.
    pub fn has_data(&self) -> bool {
        !self.blob.is_empty() && self.blob != MISSING
    }
}

impl Default for FeedPoller {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
