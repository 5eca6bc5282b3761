//! Time input parsing for the countdown prompt.
//!
//! Two input forms are accepted:
//! - `HH:MM` wall-clock time, rolled over to tomorrow if already passed
//! - a positive number of minutes from now
//!
//! Anything else yields `None` so the caller can ask again.

use chrono::{Days, Duration, NaiveDateTime};

use super::clock::{Clock, SystemClock};

/// Parses a target time relative to the system clock.
pub fn parse_time_input(input: &str) -> Option<NaiveDateTime> {
    parse_time_input_at(input, SystemClock.now())
}

/// Parses a target time relative to `now`.
pub fn parse_time_input_at(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let input = input.trim();

    if input.contains(':') {
        parse_clock_time(input, now)
    } else {
        parse_minutes(input, now)
    }
}

/// `HH:MM` today, or tomorrow if that moment is not strictly in the future.
fn parse_clock_time(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let (hour, minute) = input.split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;

    if hour > 23 || minute > 59 {
        return None;
    }

    let target = now.date().and_hms_opt(hour, minute, 0)?;
    if target <= now {
        target.checked_add_days(Days::new(1))
    } else {
        Some(target)
    }
}

fn parse_minutes(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let minutes: i64 = input.parse().ok()?;
    if minutes <= 0 {
        return None;
    }

    now.checked_add_signed(Duration::try_minutes(minutes)?)
}

// ============================================================================
// Tests
// ============================================================================
