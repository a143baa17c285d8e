//! Wall-clock stamps used in headers and file banners

use chrono::{DateTime, Local};

/// Format used for every stamp the logger prints
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Current local time
#[inline]
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// `HH:MM:SS` rendering of `datetime`
pub fn clock(datetime: &DateTime<Local>) -> String {
    datetime.format(CLOCK_FORMAT).to_string()
}

/// `HH:MM:SS` rendering of the current local time
pub fn clock_now() -> String {
    clock(&now())
}
