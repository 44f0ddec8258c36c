use crate::calendar::{days_in_month, is_leap_year};
use crate::consts::{DAYS_IN_MONTH, MAX_MONTH, MIN_DAY, MONTHS};
use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// An astronomical year number.
///
/// Year 0 is 1 BCE, year -1 is 2 BCE, and positive years count CE. Every
/// `i32` is a valid year, including 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the astronomical year number
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }

    /// Civil era of this year: CE for positive years, BCE otherwise.
    pub const fn era(self) -> Era {
        if self.0 > 0 { Era::Ce } else { Era::Bce }
    }

    /// Civil year number within its era (`0` becomes `1 BCE`).
    pub const fn era_year(self) -> EraYear {
        let number = if self.0 > 0 {
            self.0.unsigned_abs()
        } else {
            self.0.unsigned_abs() + 1
        };
        EraYear {
            number,
            era: self.era(),
        }
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Civil era of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Era {
    #[display(fmt = "BCE")]
    Bce,
    #[display(fmt = "CE")]
    Ce,
}

/// A year counted the civil way, e.g. `501 BCE` or `2000 CE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{number} {era}")]
pub struct EraYear {
    number: u32,
    era:    Era,
}

impl EraYear {
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub const fn era(&self) -> Era {
        self.era
    }
}

impl FromStr for EraYear {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(number), Some(era), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DateError::InvalidFormat(s.to_owned()));
        };
        let number = number
            .parse::<u32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;
        if number == 0 {
            return Err(DateError::InvalidYear(0));
        }
        let era = if era.eq_ignore_ascii_case("BCE") {
            Era::Bce
        } else if era.eq_ignore_ascii_case("CE") {
            Era::Ce
        } else {
            return Err(DateError::InvalidFormat(s.to_owned()));
        };
        Ok(Self { number, era })
    }
}

impl TryFrom<EraYear> for Year {
    type Error = DateError;

    fn try_from(value: EraYear) -> Result<Self, Self::Error> {
        let astronomical = match value.era {
            Era::Ce => i64::from(value.number),
            Era::Bce => 1 - i64::from(value.number),
        };
        i32::try_from(astronomical)
            .map(Self)
            .map_err(|_| DateError::InvalidYear(astronomical))
    }
}

/// Abbreviated and full English name of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthName {
    pub abbr: &'static str,
    pub name: &'static str,
}

/// Calendar month, `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Validated month number.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(i64::from(value)))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Like [`Month::new`] but accepts any integer, e.g. a value read from JSON.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is outside `1..=12`.
    pub fn from_number(value: i64) -> Result<Self, DateError> {
        u8::try_from(value)
            .map_err(|_| DateError::InvalidMonth(value))
            .and_then(Self::new)
    }

    pub(crate) const fn from_raw(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Self(non_zero),
            _ => panic!("month constant out of range"),
        }
    }

    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full English name, e.g. `January`
    pub const fn name(self) -> &'static str {
        MONTHS[self.0.get() as usize].name
    }

    /// Three-letter abbreviation, e.g. `Jan`
    pub const fn abbr(self) -> &'static str {
        MONTHS[self.0.get() as usize].abbr
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts a month number, a full month name, or its three-letter
/// abbreviation (case-insensitive): `1`, `January`, `jan`.
impl FromStr for Month {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        if let Ok(number) = trimmed.parse::<i64>() {
            return Self::from_number(number);
        }
        MONTHS
            .iter()
            .zip(0u8..)
            .skip(1)
            .find(|(names, _)| {
                names.name.eq_ignore_ascii_case(trimmed) || names.abbr.eq_ignore_ascii_case(trimmed)
            })
            .map_or_else(
                || Err(DateError::InvalidFormat(format!("Unknown month name: {trimmed}"))),
                |(_, number)| Self::new(number),
            )
    }
}

/// Day of month. Valid for the year and month it was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Validated day of `month` in `year`; February 29 exists only in leap years.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a bad month, or `DateError::InvalidDay`
    /// if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, DateError> {
        let month_typed = Month::new(month)?;
        let invalid = || DateError::InvalidDay {
            year,
            month,
            day: i64::from(value),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year, month_typed) {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_raw(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => panic!("day constant must be non-zero"),
        }
    }

    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// Checks `1..=31` only; use [`Day::new`] when the month is known.
impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let invalid = || DateError::InvalidDay {
            year:  0,
            month: 0,
            day:   i64::from(value),
        };
        let longest = DAYS_IN_MONTH.iter().copied().max().unwrap_or(MIN_DAY);
        if value > longest {
            return Err(invalid());
        }
        NonZeroU8::new(value).map(Self).ok_or_else(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
