//! Parsing of the instants users type on the command line.

use std::str::FromStr;

use anyhow::{Context, Result};
use jiff::{
    civil::{DateTime, Time},
    tz::TimeZone,
    Timestamp,
};

/// An instant as typed by the user, resolved once "now" is known.
///
/// Accepted forms:
/// - RFC 3339: `2024-05-04T07:00:00+02:00`
/// - local date and time: `2024-05-04 07:00`
/// - local wall-clock time: `07:00`, the next time the clock shows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeArg {
    Instant(Timestamp),
    Local(DateTime),
    Clock(Time),
}

impl FromStr for TimeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(instant) = s.parse::<Timestamp>() {
            return Ok(TimeArg::Instant(instant));
        }
        if let Ok(local) = DateTime::strptime("%Y-%m-%d %H:%M", s) {
            return Ok(TimeArg::Local(local));
        }
        if let Ok(clock) = Time::strptime("%H:%M", s) {
            return Ok(TimeArg::Clock(clock));
        }
        Err(format!("Invalid time '{s}': expected RFC 3339, 'YYYY-MM-DD HH:MM' or 'HH:MM'"))
    }
}

impl TimeArg {
    /// Turns the argument into an instant in the given time zone.
    pub fn resolve(self, now: Timestamp, tz: &TimeZone) -> Result<Timestamp> {
        match self {
            TimeArg::Instant(instant) => Ok(instant),
            TimeArg::Local(local) => Ok(local
                .to_zoned(tz.clone())
                .with_context(|| format!("{local} does not exist in the local time zone"))?
                .timestamp()),
            TimeArg::Clock(clock) => {
                let today = now.to_zoned(tz.clone()).date();
                let candidate = today
                    .to_datetime(clock)
                    .to_zoned(tz.clone())
                    .context("Failed to place time on today's date")?
                    .timestamp();
                if candidate > now {
                    return Ok(candidate);
                }
                Ok(today
                    .tomorrow()
                    .context("Date out of range")?
                    .to_datetime(clock)
                    .to_zoned(tz.clone())
                    .context("Failed to place time on tomorrow's date")?
                    .timestamp())
            }
        }
    }
}

/// Resolves an optional `--at` override against the real clock.
pub fn now_or(at: Option<TimeArg>) -> Result<Timestamp> {
    let now = Timestamp::now();
    match at {
        Some(at) => at.resolve(now, &TimeZone::system()),
        None => Ok(now),
    }
}

/// Resolves a user-supplied instant in the system time zone.
pub fn resolve(arg: TimeArg, now: Timestamp) -> Result<Timestamp> {
    arg.resolve(now, &TimeZone::system())
}
