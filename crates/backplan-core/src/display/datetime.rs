//! Date, time and duration display utilities.
//!
//! Timestamps are always stored in UTC and shown in the system time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Full local date and time: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Short local wall-clock time with weekday: `Sat 07:00`.
///
/// Bakes often run overnight, so the weekday disambiguates which 07:00.
pub struct LocalTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%a %H:%M")
        )
    }
}

/// A duration in minutes, shown as `45 min`, `4 h` or `1 h 30 min`.
///
/// # Examples
///
/// ```rust
/// use backplan_core::display::Minutes;
///
/// assert_eq!(Minutes(0).to_string(), "0 min");
/// assert_eq!(Minutes(45).to_string(), "45 min");
/// assert_eq!(Minutes(240).to_string(), "4 h");
/// assert_eq!(Minutes(90).to_string(), "1 h 30 min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(pub u64);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = (self.0 / 60, self.0 % 60);
        match (hours, minutes) {
            (0, minutes) => write!(f, "{minutes} min"),
            (hours, 0) => write!(f, "{hours} h"),
            (hours, minutes) => write!(f, "{hours} h {minutes} min"),
        }
    }
}

/// Seconds left in a step, shown as `HH:MM:SS`.
///
/// # Examples
///
/// ```rust
/// use backplan_core::display::Countdown;
///
/// assert_eq!(Countdown(3723).to_string(), "01:02:03");
/// assert_eq!(Countdown(-5).to_string(), "00:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown(pub i64);

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.max(0);
        write!(
            f,
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}

/// A fraction in `0.0..=1.0` shown as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", (self.0.clamp(0.0, 1.0) * 100.0).round())
    }
}
