mod calendar;
mod clock;
mod consts;
mod epoch;
mod format;
mod input;
mod prelude;
mod seasons;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{
    clamp_day_to_epoch, clamp_month_to_epoch, day_bounds, is_leap_year, month_length, selectable_months,
};
pub use clock::{decimal_to_hms, format_seconds, format_time, format_utc_offset, Hms, TimeOfDay};
pub use consts::*;
pub use epoch::{Epoch, EpochError, EPH_DATE_MAX, EPH_DATE_MIN};
pub use format::{
    date_time_to_string, date_to_string, format_date, format_date_iso, format_date_time, format_date_time_iso,
    format_date_time_iso_with, try_date_time_to_string, try_date_to_string, FormatOptions, FormattedDateTime,
    IsoDateTime, StringOptions, YearStyle,
};
pub use input::{parse_day_field, parse_hour_field, parse_month_field, parse_year_field, FormInput};
pub use seasons::{EventRow, LookupQuery, LookupResponse, SeasonEvent, SeasonsData};
pub use types::{Day, Era, EraYear, Month, MonthName, Year};

use crate::clock::format_seconds_exact;
use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A calendar date in astronomical year numbering (year 0 is 1 BCE).
///
/// Ordering is lexicographic over `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AstronomicalDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be {}-{})", "_0", MIN_MONTH, MAX_MONTH)]
    InvalidMonth(i64),
    #[display(fmt = "Invalid date: [year, month, day] = [{year}, {month}, {day}]")]
    InvalidDay { year: i32, month: u8, day: i64 },
    #[display(fmt = "Invalid time: {hour}:{minute}:{second}")]
    InvalidTime { hour: i64, minute: i64, second: f64 },
    #[display(fmt = "Expected {expected} date/time components, found {found}")]
    MalformedSequence { expected: usize, found: usize },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl AstronomicalDate {
    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` when the
    /// month or day does not exist in `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year:  Year::new(year),
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// January 1 of `year`.
    pub const fn from_year(year: i32) -> Self {
        Self::from_raw(year, JANUARY, MIN_DAY)
    }

    /// Builds a date from components already known to be valid.
    pub(crate) const fn from_raw(year: i32, month: u8, day: u8) -> Self {
        Self {
            year:  Year::new(year),
            month: Month::from_raw(month),
            day:   Day::from_raw(day),
        }
    }

    /// Like [`AstronomicalDate::new`] but accepts wide integers, e.g. values
    /// decoded from JSON.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the year does not fit in `i32`, and
    /// the errors of [`AstronomicalDate::new`] otherwise.
    pub fn from_numbers(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        let year = i32::try_from(year).map_err(|_| DateError::InvalidYear(year))?;
        let month = Month::from_number(month)?.get();
        let day = u8::try_from(day).map_err(|_| DateError::InvalidDay { year, month, day })?;
        Self::new(year, month, day)
    }

    /// Reads a `[year, month, day]` sequence; fractional parts are dropped.
    ///
    /// # Errors
    /// Returns `DateError::MalformedSequence` if there are not exactly three
    /// values, and the errors of [`AstronomicalDate::from_numbers`] otherwise.
    pub fn from_sequence(values: &[f64]) -> Result<Self, DateError> {
        let [year, month, day] = values else {
            return Err(DateError::MalformedSequence {
                expected: DATE_COMPONENTS,
                found:    values.len(),
            });
        };
        Self::from_numbers(
            integer_component(*year)?,
            integer_component(*month)?,
            integer_component(*day)?,
        )
    }

    /// Returns the astronomical year number
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Components as a `(year, month, day)` tuple
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

/// Truncates a sequence component the way an integer parse would.
#[allow(clippy::cast_possible_truncation)]
fn integer_component(value: f64) -> Result<i64, DateError> {
    if !value.is_finite() {
        return Err(DateError::InvalidFormat(format!("Non-numeric component: {value}")));
    }
    Ok(value.trunc() as i64)
}

impl fmt::Display for AstronomicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date_iso(self, YearStyle::Signed))
    }
}

/// Parses `[±]Y-MM-DD`, `[±]Y-MM` or `[±]Y`; missing parts default to 1.
impl FromStr for AstronomicalDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if !body.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }
        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() > DATE_COMPONENTS {
            return Err(DateError::InvalidFormat(format!(
                "Too many {} separators: expected 0-2, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }
        let invalid = || DateError::InvalidFormat(trimmed.to_owned());

        let magnitude = parts[0].parse::<u32>().map_err(|_| invalid())?;
        let year = if negative {
            -i64::from(magnitude)
        } else {
            i64::from(magnitude)
        };
        let month = parts
            .get(1)
            .map_or(Ok(JANUARY), |p| p.parse::<u8>())
            .map_err(|_| invalid())?;
        let day = parts
            .get(2)
            .map_or(Ok(MIN_DAY), |p| p.parse::<u8>())
            .map_err(|_| invalid())?;

        let year = i32::try_from(year).map_err(|_| DateError::InvalidYear(year))?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for AstronomicalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for AstronomicalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An [`AstronomicalDate`] with a time of day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AstronomicalDateTime {
    date: AstronomicalDate,
    time: TimeOfDay,
}

impl AstronomicalDateTime {
    pub const fn new(date: AstronomicalDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// The date at noon.
    pub const fn from_date(date: AstronomicalDate) -> Self {
        Self {
            date,
            time: TimeOfDay::NOON,
        }
    }

    /// Creates a validated date/time from its six components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth`, `DateError::InvalidDay` or
    /// `DateError::InvalidTime` for out-of-range components.
    pub fn from_components(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, DateError> {
        Ok(Self {
            date: AstronomicalDate::new(year, month, day)?,
            time: TimeOfDay::new(hour, minute, second)?,
        })
    }

    /// Reads a `[year, month, day, hour, minute, second]` sequence. The first
    /// five values are truncated to integers, the second keeps its fraction.
    ///
    /// # Errors
    /// Returns `DateError::MalformedSequence` if there are not exactly six
    /// values, and a component error if any value is out of range.
    pub fn from_sequence(values: &[f64]) -> Result<Self, DateError> {
        let [year, month, day, hour, minute, second] = values else {
            return Err(DateError::MalformedSequence {
                expected: DATE_TIME_COMPONENTS,
                found:    values.len(),
            });
        };
        let date = AstronomicalDate::from_numbers(
            integer_component(*year)?,
            integer_component(*month)?,
            integer_component(*day)?,
        )?;

        let hour = integer_component(*hour)?;
        let minute = integer_component(*minute)?;
        let second = *second;
        let invalid_time = || DateError::InvalidTime { hour, minute, second };
        let time = TimeOfDay::new(
            u8::try_from(hour).map_err(|_| invalid_time())?,
            u8::try_from(minute).map_err(|_| invalid_time())?,
            second,
        )?;

        Ok(Self { date, time })
    }

    pub const fn date(&self) -> AstronomicalDate {
        self.date
    }

    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    pub const fn hour(&self) -> u8 {
        self.time.hour()
    }

    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub const fn second(&self) -> f64 {
        self.time.second()
    }
}

impl From<AstronomicalDate> for AstronomicalDateTime {
    fn from(date: AstronomicalDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for AstronomicalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iso = format_date_time_iso(self);
        write!(f, "{}{}{}", iso.date, DEFAULT_DELIMITER, iso.time)
    }
}

/// Parses a date, optionally followed by `T` or whitespace and a time.
/// Without a time the result is at noon.
impl FromStr for AstronomicalDateTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        match trimmed.split_once(|c: char| c == DATE_TIME_SEPARATOR || c.is_whitespace()) {
            Some((date, time)) => Ok(Self {
                date: date.parse()?,
                time: time.parse()?,
            }),
            None => trimmed.parse().map(Self::from_date),
        }
    }
}

/// Same layout as `Display`, but seconds keep their full precision so the
/// value deserializes back unchanged.
impl serde::Serialize for AstronomicalDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let time = self.time;
        serializer.serialize_str(&format!(
            "{}{}{:02}{}{:02}{}{}",
            self.date,
            DEFAULT_DELIMITER,
            time.hour(),
            TIME_SEPARATOR,
            time.minute(),
            TIME_SEPARATOR,
            format_seconds_exact(time.second())
        ))
    }
}

impl<'de> serde::Deserialize<'de> for AstronomicalDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
