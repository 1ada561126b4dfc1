use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// Rendered in place of a missing timestamp.
pub const NOT_AVAILABLE: &str = "N/A";

/// `09:05 AM` style, like the en-US two-digit hour/minute rendering the
/// dashboard shows next to each record.
pub fn format_clock_time(instant: Option<NaiveDateTime>) -> String {
    match instant {
        Some(t) => t.format("%I:%M %p").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `Mon, Jan 15`
pub fn format_calendar_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%a, %b %-d").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `Monday, January 15, 2024` (clock header)
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Wall-clock time between a session start and a reference instant.
///
/// Never negative: a reference instant before the start (clock skew, a
/// hand-edited session file) collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    seconds: u64,
}

pub fn elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> Elapsed {
    let millis = (now - start).num_milliseconds().max(0) as u64;
    Elapsed {
        seconds: millis / 1000,
    }
}

impl Elapsed {
    pub fn total_seconds(&self) -> u64 {
        self.seconds
    }

    pub fn hours(&self) -> u64 {
        self.seconds / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.seconds % 3600) / 60
    }

    pub fn seconds(&self) -> u64 {
        self.seconds % 60
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0
    }

    pub fn as_hours(&self) -> f64 {
        self.seconds as f64 / 3600.0
    }

    /// Fractional hours at two-decimal precision, the value submitted as
    /// `totalHours`.
    pub fn total_hours(&self) -> f64 {
        (self.as_hours() * 100.0).round() / 100.0
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
