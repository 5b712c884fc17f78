//! Clock arithmetic for attendance records.
//!
//! Check-in, check-out and break values are kept as `HH:MM` or `HH:MM:SS`
//! strings. Only the hour and minute fields take part in calculations, the
//! seconds field is ignored when present.
//!
//! ## Degradation Policy
//!
//! The functions in this module never fail. A missing or malformed check-in
//! or check-out yields zero worked time, a malformed break counts as no break,
//! and a negative result is clamped to zero. Records entering the store are
//! validated up front (see [`crate::db::store`]), so the zero path is only
//! reached by records built outside of it.
//!
//! ```text
//! worked = max(0, (time_out - time_in) - break_time)
//! ```

use chrono::Duration;

const MINUTES_PER_HOUR: u32 = 60;
const HOURS_PER_DAY: u32 = 24;

/// Parses the `HH:MM` prefix of a clock string into minutes since midnight.
///
/// Returns `None` for empty input, a missing minutes field, non-numeric
/// fields, or values outside a 24-hour clock.
///
/// # Examples
///
/// ```rust
/// use presence::libs::time::parse_clock_minutes;
///
/// assert_eq!(parse_clock_minutes("09:30"), Some(570));
/// assert_eq!(parse_clock_minutes("18:00:00"), Some(1080));
/// assert_eq!(parse_clock_minutes(""), None);
/// assert_eq!(parse_clock_minutes("25:00"), None);
/// ```
pub fn parse_clock_minutes(value: &str) -> Option<u32> {
    let mut fields = value.trim().split(':');
    let hours: u32 = fields.next()?.trim().parse().ok()?;
    let minutes: u32 = fields.next()?.trim().parse().ok()?;

    if hours >= HOURS_PER_DAY || minutes >= MINUTES_PER_HOUR {
        return None;
    }

    Some(hours * MINUTES_PER_HOUR + minutes)
}

/// Rewrites a clock value into the stored `HH:MM:SS` form.
///
/// `HH:MM` input gets a `:00` seconds field, a valid seconds field is kept.
/// Returns `None` when the value does not parse.
pub fn normalize_clock(value: &str) -> Option<String> {
    let minutes = parse_clock_minutes(value)?;
    let seconds = match value.trim().split(':').nth(2) {
        Some(field) => field.trim().parse::<u32>().ok().filter(|s| *s < 60)?,
        None => 0,
    };

    Some(format!(
        "{:02}:{:02}:{:02}",
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR,
        seconds
    ))
}

/// Whole minutes worked between check-in and check-out, minus the break.
pub fn work_minutes(time_in: &str, time_out: &str, break_time: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_clock_minutes(time_in), parse_clock_minutes(time_out)) else {
        return 0;
    };
    let pause = parse_clock_minutes(break_time).unwrap_or(0);

    let worked = i64::from(end) - i64::from(start) - i64::from(pause);
    worked.max(0) as u32
}

/// Hours worked between check-in and check-out, minus the break.
///
/// # Examples
///
/// ```rust
/// use presence::libs::time::work_hours;
///
/// assert_eq!(work_hours("09:00", "18:00", "00:00"), 9.0);
/// assert_eq!(work_hours("09:00", "18:00", "01:00"), 8.0);
/// assert_eq!(work_hours("18:00", "09:00", ""), 0.0);
/// assert_eq!(work_hours("", "18:00", "01:00"), 0.0);
/// ```
pub fn work_hours(time_in: &str, time_out: &str, break_time: &str) -> f64 {
    f64::from(work_minutes(time_in, time_out, break_time)) / f64::from(MINUTES_PER_HOUR)
}

/// Worked time as a `chrono::Duration`, for duration formatting.
pub fn work_duration(time_in: &str, time_out: &str, break_time: &str) -> Duration {
    Duration::minutes(i64::from(work_minutes(time_in, time_out, break_time)))
}
