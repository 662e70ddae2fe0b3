//! Full-screen startup and recovery states.
//!
//! Each screen owns the display until its state resolves: the splash runs a
//! fixed beat, the connect screen until association (or forever), the sync
//! screen until the first time exchange, the error screen until power-off.
//! Every wait goes through [`wait_with_events`] so a window close is honored
//! promptly even during 1 Hz polling.

mod connect;
mod splash;
mod sync;

pub use connect::{run_config_error_screen, run_connect_screen, run_link_lost_screen};
pub use splash::run_splash_screen;
pub use sync::run_sync_screen;

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics_simulator::{SimulatorEvent, Window};

/// Sleep for `duration` while draining window events in short steps.
///
/// Returns `false` if the window was closed.
pub(crate) fn wait_with_events(window: &mut Window, duration: Duration) -> bool {
    const STEP: Duration = Duration::from_millis(50);
    let start = Instant::now();
    loop {
        for ev in window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                return false;
            }
        }
        if start.elapsed() >= duration {
            return true;
        }
        thread::sleep(STEP.min(duration.saturating_sub(start.elapsed())));
    }
}
