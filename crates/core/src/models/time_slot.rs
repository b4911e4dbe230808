//! Calendar date, time-of-day and their composition into an instant.
//!
//! All values are naive wall-clock values: no timezone conversion happens
//! anywhere in the scheduling core. Keeping every composition behind this
//! module means a timezone-aware mode only has to change [`combine`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a strict, zero-padded `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> BookingResult<NaiveDate> {
    let invalid = || BookingError::Validation("Invalid date format. Use YYYY-MM-DD".to_string());

    if !matches_shape(input, "dddd-dd-dd") {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses a strict, zero-padded 24-hour `HH:MM` time of day.
pub fn parse_time(input: &str) -> BookingResult<NaiveTime> {
    let invalid = || BookingError::Validation("Invalid time format. Use HH:MM".to_string());

    if !matches_shape(input, "dd:dd") {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(input, TIME_FORMAT).map_err(|_| invalid())
}

pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

// chrono accepts unpadded fields and signed years, so the layout is checked first.
fn matches_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'd' => c.is_ascii_digit(),
            other => c == other,
        })
}

/// A date and time-of-day together with the instant they compose to.
///
/// Fields are private so `instant` can never drift from `date` and `time`.
/// Deserialization ignores any incoming `instant` and recomputes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SlotParts")]
pub struct TimeSlot {
    date: NaiveDate,
    time: NaiveTime,
    instant: NaiveDateTime,
}

#[derive(Deserialize)]
struct SlotParts {
    date: NaiveDate,
    time: NaiveTime,
}

impl From<SlotParts> for TimeSlot {
    fn from(parts: SlotParts) -> Self {
        TimeSlot::new(parts.date, parts.time)
    }
}

impl TimeSlot {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            instant: combine(date, time),
        }
    }

    /// Builds a slot from raw request strings, rejecting partial input.
    pub fn parse(date: Option<&str>, time: Option<&str>) -> BookingResult<Self> {
        match (date, time) {
            (Some(date), Some(time)) => Ok(Self::new(parse_date(date)?, parse_time(time)?)),
            (None, None) => Err(BookingError::Validation(
                "Date and time are required".to_string(),
            )),
            (Some(_), None) => Err(BookingError::Validation("Time is required".to_string())),
            (None, Some(_)) => Err(BookingError::Validation("Date is required".to_string())),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }
}
