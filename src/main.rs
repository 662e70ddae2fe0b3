//! NTP dual clock with solar conditions, on a simulated TFT panel.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │            NTP CLOCK               │  header (26px)
//! │ UTC                                │
//! │ 23:34:05                  Feb 07   │  UTC row
//! │ EDT                                │
//! │  7:34:05 PM               Feb 07   │  local row (zones rotate)
//! │────────────────────────────────────│
//! │ SOLAR INDICES            ■ SYNC    │  data strip + status
//! │ SFI 123  A 5  K 2        SSID_1    │
//! └────────────────────────────────────┘
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐ poll  ┌───────────┐ anchor ┌────────────┐
//! │ wifi.rs  │ ────► │ screens/  │ ─────► │ TimeKeeper │
//! │(selector)│       │ (startup) │        │ (clock.rs) │
//! └──────────┘       └───────────┘        └─────┬──────┘
//!                                               │ per-second pass
//!                    ┌───────────┐ tick   ┌─────▼──────┐
//!                    │ feed.rs   │ ◄───── │  main loop │
//!                    │ (poller)  │        │ + widgets  │
//!                    └───────────┘        └────────────┘
//! ```
//!
//! Startup runs once per supervisor pass: splash, network association
//! (cycling the configured credentials), then the first time sync. The
//! steady-state loop then performs one pass per wall-clock second: service
//! the SNTP client, read the current time, redraw the clock fields, and run
//! one feed-poller tick. Losing the link after startup restarts the whole
//! sequence from the top: reset-to-known-good rather than in-place
//! reconnection.

mod clock;
mod colors;
mod config;
mod feed;
mod items;
mod render;
mod scrape;
mod screens;
mod sntp;
mod styles;
mod widgets;
mod wifi;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use chrono::{Datelike, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{error, info};

use colors::BLACK;
use config::{
    DATA_ROTATION, LINK_CHECK_INTERVAL, LINK_LOST_NOTICE, LOCAL_FORMAT_12HR, NTP_SERVER,
    SCREEN_HEIGHT, SCREEN_WIDTH, SOLAR_URL, TICK_TIME, TIME_ZONES, UTC_FORMAT_12HR, WIFI_NETWORKS,
};
use feed::{FeedPoller, HttpFetcher, StdDelay};
use render::RedrawState;
use sntp::SntpClient;
use widgets::TimeRow;
use wifi::{LinkStatus, NetworkSelector, SimulatedWifi, WifiLink};

/// Status polls the simulated link needs before it reports associated.
const SIM_CONNECT_AFTER: u32 = 3;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("NTP Solar Clock", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    if !screens::run_splash_screen(&mut display, &mut window) {
        return Ok(());
    }

    if TIME_ZONES.is_empty() {
        error!("no timezones configured");
        screens::run_config_error_screen(&mut display, &mut window, "no timezones defined");
        return Ok(());
    }

    // Supervisor: each pass runs the full startup sequence, then the
    // steady-state loop until the link drops or the window closes.
    loop {
        let selector = match NetworkSelector::new(WIFI_NETWORKS) {
            Ok(selector) => selector,
            Err(e) => {
                error!("{e}");
                screens::run_config_error_screen(&mut display, &mut window, "no Wi-Fi networks defined");
                return Ok(());
            }
        };

        let mut link = SimulatedWifi::new(SIM_CONNECT_AFTER);
        let Some(connection) = screens::run_connect_screen(&mut display, &mut window, selector, &mut link)
        else {
            return Ok(());
        };
        info!("network up: '{}' after {} attempts", connection.ssid, connection.attempts);

        let mut time_source = SntpClient::new(NTP_SERVER);
        let Some(mut timekeeper) = screens::run_sync_screen(&mut display, &mut window, &mut time_source)
        else {
            return Ok(());
        };

        let mut poller = FeedPoller::new();
        let mut fetcher = HttpFetcher::new(SOLAR_URL);
        let mut delay = StdDelay;
        let mut redraw = RedrawState::new();
        let mut last_second: Option<i64> = None;
        let mut last_link_check = Instant::now();

        let restart = 'steady: loop {
            for ev in window.events() {
                if matches!(ev, SimulatorEvent::Quit) {
                    break 'steady false;
                }
            }

            let at = Instant::now();
            timekeeper.service(&mut time_source, at);

            let now_unix = timekeeper.now_unix(at);
            if last_second != Some(now_unix) {
                last_second = Some(now_unix);

                if redraw.is_first_frame() {
                    display.clear(BLACK).ok();
                    widgets::draw_header(&mut display);
                    widgets::draw_divider(&mut display);
                    widgets::draw_row_label(&mut display, TimeRow::Utc, "UTC");
                }

                let utc = timekeeper.now_utc(at);
                let secs_of_day = utc.num_seconds_from_midnight();

                let utc_time =
                    clock::format_time(utc.hour(), utc.minute(), utc.second(), UTC_FORMAT_12HR);
                widgets::draw_time(&mut display, TimeRow::Utc, &utc_time);
                let utc_date = clock::format_date(utc.day(), utc.month());
                if redraw.utc_date.update(&utc_date) {
                    widgets::draw_date(&mut display, TimeRow::Utc, &utc_date);
                }

                let zone = &TIME_ZONES[clock::zone_index(secs_of_day, TIME_ZONES.len())];
                let local = timekeeper.local_now(at, zone);
                if redraw.zone_label.update(zone.label) {
                    widgets::draw_row_label(&mut display, TimeRow::Local, zone.label);
                }
                let local_time =
                    clock::format_time(local.hour(), local.minute(), local.second(), LOCAL_FORMAT_12HR);
                widgets::draw_time(&mut display, TimeRow::Local, &local_time);
                let local_date = clock::format_date(local.day(), local.month());
                if redraw.local_date.update(&local_date) {
                    widgets::draw_date(&mut display, TimeRow::Local, &local_date);
                }

                poller.tick(utc, &mut fetcher, &mut delay);

                if !DATA_ROTATION.is_empty() {
                    let item = DATA_ROTATION[items::rotation_index(secs_of_day, DATA_ROTATION.len())];
                    let key = widgets::field_key(item, &poller);
                    if redraw.data_field.update(&key) {
                        widgets::draw_data_field(&mut display, item, &poller);
                    }
                }

                let staleness = timekeeper.staleness(at);
                let status = widgets::status_key(staleness, connection.ssid);
                if redraw.status.update(&status) {
                    widgets::draw_status(&mut display, staleness, connection.ssid);
                }

                redraw.end_frame();
            }

            if at.duration_since(last_link_check) >= LINK_CHECK_INTERVAL {
                last_link_check = at;
                if link.status() != LinkStatus::Connected {
                    error!("network connection lost; restarting startup sequence");
                    break 'steady true;
                }
            }

            window.update(&display);
            thread::sleep(TICK_TIME);
        };

        if !restart {
            return Ok(());
        }
        if !screens::run_link_lost_screen(&mut display, &mut window, LINK_LOST_NOTICE) {
            return Ok(());
        }
    }
}
