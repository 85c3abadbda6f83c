//! Clock time handling for tour itineraries.
//!
//! Planning requests supply start times as "HH:MM" strings. This module
//! provides a clock type that counts minutes from midnight of the tour day
//! and keeps counting past 24:00, so a late itinerary never wraps around.
//! The day rollover is only surfaced when formatting.

use chrono::Duration;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Number of minutes in a day.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A clock time within (or past the end of) the tour day.
///
/// Stored as minutes since midnight of the tour day. Values past 24:00 are
/// legal: an itinerary that runs long simply keeps accumulating minutes, and
/// the crossing only shows up in the formatted output.
///
/// # Examples
///
/// ```
/// use tour_server::domain::ClockTime;
/// use chrono::Duration;
///
/// let start = ClockTime::parse_hhmm("23:30").unwrap();
/// let later = start + Duration::hours(1);
/// assert_eq!(later.to_string(), "00:30 (+1d)");
/// assert!(later > start);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    minutes: i64,
}

impl ClockTime {
    /// Create a time from an hour and minute on the tour day.
    ///
    /// Returns an error if the hour is not 0-23 or the minute not 0-59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            minutes: i64::from(hour) * 60 + i64::from(minute),
        })
    }

    /// Parse a time from strict 24-hour "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_server::domain::ClockTime;
    ///
    /// // Valid times
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("09:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse_hhmm("900").is_err());
    /// assert!(ClockTime::parse_hhmm("9:00").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::new(hour, minute)
    }

    /// Returns the total minutes since midnight of the tour day.
    ///
    /// May be 1440 or more if the time has run past midnight.
    pub fn minutes_from_midnight(&self) -> i64 {
        self.minutes
    }

    /// Returns the wall-clock hour (0-23).
    pub fn hour(&self) -> u32 {
        (self.minutes.rem_euclid(MINUTES_PER_DAY) / 60) as u32
    }

    /// Returns the wall-clock minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes.rem_euclid(60) as u32
    }

    /// Returns how many midnights this time has crossed since the tour day.
    pub fn days_elapsed(&self) -> i64 {
        self.minutes.div_euclid(MINUTES_PER_DAY)
    }

    /// Add a duration to this time.
    ///
    /// Returns `None` on overflow. Crossing midnight does not wrap; the
    /// minute count keeps growing and `days_elapsed` increments.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let minutes = self.minutes.checked_add(duration.num_minutes())?;
        Some(Self { minutes })
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        Duration::minutes(self.minutes - other.minutes)
    }
}

impl Add<Duration> for ClockTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).expect("time overflow")
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minutes.cmp(&other.minutes)
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        let days = self.days_elapsed();
        if days > 0 {
            write!(f, " (+{days}d)")?;
        }
        Ok(())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
