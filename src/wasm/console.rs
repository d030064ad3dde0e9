//! Browser console logging through `console_log`.

use log::Level;
use web_sys::Window;

use crate::config::is_development_host;

/// Install the console logger. Development hosts also get debug output.
pub fn init(window: &Window) {
    let level = if is_dev(window) { Level::Debug } else { Level::Info };
    // A second call (e.g. from a test harness) keeps the first logger.
    let _ = console_log::init_with_level(level);
}

pub fn is_dev(window: &Window) -> bool {
    window
        .location()
        .hostname()
        .map(|host| is_development_host(&host))
        .unwrap_or(false)
}
