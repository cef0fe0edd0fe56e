//! Date, time-interval, and timestamp helpers.
//!
//! Nothing here reads ambient locale or timezone state: callers pass the
//! timezone explicitly and output is always US English.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;

/// Separator placed before an appended Unix timestamp.
pub const DEFAULT_TIMESTAMP_SEPARATOR: &str = "_";

/// Long US-English date and time, e.g. `October 16, 2026 at 3:04:05 PM EDT`.
pub fn display_time<T: TimeZone>(time: &DateTime<T>, tz: Tz) -> String {
    time.with_timezone(&tz)
        .format("%B %-d, %Y at %-I:%M:%S %p %Z")
        .to_string()
}

/// [`display_time`] for the current instant.
pub fn time_now(tz: Tz) -> String {
    display_time(&Utc::now(), tz)
}

/// Calendar year of `time` in `tz`.
pub fn year_in(time: &DateTime<Utc>, tz: Tz) -> i32 {
    time.with_timezone(&tz).year()
}

/// Whole seconds of an interval, truncated toward zero (`"1421"`).
pub fn time_interval_to_string(seconds: f64) -> String {
    if !seconds.is_finite() {
        return crate::format::DEFAULT_NIL_STRING.to_string();
    }
    (seconds.trunc() as i64).to_string()
}

/// Append `{separator}{unix seconds}` to a string.
pub trait UnixTimeExt {
    /// Copy of `self` with the timestamp appended.
    fn appended_unix_time<T: TimeZone>(&self, time: &DateTime<T>, separator: &str) -> String;
}

impl UnixTimeExt for str {
    fn appended_unix_time<T: TimeZone>(&self, time: &DateTime<T>, separator: &str) -> String {
        format!("{}{}{}", self, separator, time.timestamp())
    }
}

/// In-place form of [`UnixTimeExt::appended_unix_time`].
pub fn append_unix_time<T: TimeZone>(target: &mut String, time: &DateTime<T>, separator: &str) {
    target.push_str(separator);
    target.push_str(&time.timestamp().to_string());
}
