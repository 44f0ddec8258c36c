use std::{ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{AstronomicalDate, DateError, RANGE_SEPARATOR, format::format_date, format::FormatOptions, prelude::*};

/// 29 January 3001 BCE, the first day covered by the DE406 ephemeris
pub const EPH_DATE_MIN: AstronomicalDate = AstronomicalDate::from_raw(-3000, 1, 29);
/// 6 May 3000 CE, the last day covered by the DE406 ephemeris
pub const EPH_DATE_MAX: AstronomicalDate = AstronomicalDate::from_raw(3000, 5, 6);

/// The span of dates a remote ephemeris can answer for.
///
/// Two validation policies are offered and each entry point uses exactly
/// one of them:
///
/// - [`Epoch::contains`] / [`Epoch::check`] compare whole dates and include
///   both bounds.
/// - [`Epoch::contains_year`] / [`Epoch::check_year`] look at the year only
///   and exclude both boundary years, since a boundary year is not fully
///   covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min}/{max}")]
pub struct Epoch {
    min: AstronomicalDate,
    max: AstronomicalDate,
}

/// Error type for epoch validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EpochError {
    /// Date falls before `epoch.min()` or after `epoch.max()`.
    #[error("Out of the ephemeris date range: {} \u{2013} {}", .epoch.min(), .epoch.max())]
    OutOfEpoch { date: AstronomicalDate, epoch: Epoch },

    /// Year is not strictly inside the epoch's years; see [`Epoch::year_range`].
    #[error("Out of the ephemeris date range: {} \u{2013} {}", .epoch.min(), .epoch.max())]
    OutOfYearRange { year: i32, epoch: Epoch },

    /// Min bound is after max bound.
    #[error("Invalid epoch: min ({min}) is after max ({max})")]
    InvalidRange { min: AstronomicalDate, max: AstronomicalDate },

    /// Error parsing a bound.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid epoch format.
    #[error("Invalid epoch format: {0}")]
    InvalidFormat(String),
}

impl Epoch {
    /// Coverage of the DE406 ephemeris, `EPH_DATE_MIN` to `EPH_DATE_MAX`.
    pub const EPHEMERIS: Self = Self {
        min: EPH_DATE_MIN,
        max: EPH_DATE_MAX,
    };

    /// Creates a new epoch with validation.
    ///
    /// # Errors
    /// Returns `EpochError::InvalidRange` if min > max.
    pub fn new(min: AstronomicalDate, max: AstronomicalDate) -> Result<Self, EpochError> {
        if min > max {
            return Err(EpochError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the first covered date
    pub const fn min(&self) -> AstronomicalDate {
        self.min
    }

    /// Returns the last covered date
    pub const fn max(&self) -> AstronomicalDate {
        self.max
    }

    /// Day-precision check, inclusive at both ends.
    pub fn contains(&self, date: &AstronomicalDate) -> bool {
        self.min <= *date && *date <= self.max
    }

    /// Year-only check, exclusive at both ends.
    pub const fn contains_year(&self, year: i32) -> bool {
        year > self.min.year() && year < self.max.year()
    }

    /// Years accepted by [`Epoch::contains_year`]. Empty when the bounds
    /// are less than two years apart.
    pub const fn year_range(&self) -> RangeInclusive<i32> {
        self.min.year().saturating_add(1)..=self.max.year().saturating_sub(1)
    }

    /// Day-precision validation.
    ///
    /// # Errors
    /// Returns `EpochError::OutOfEpoch` when [`Epoch::contains`] is false.
    pub fn check(&self, date: &AstronomicalDate) -> Result<(), EpochError> {
        if self.contains(date) {
            return Ok(());
        }
        tracing::debug!(%date, epoch = %self, "date outside ephemeris epoch");
        Err(EpochError::OutOfEpoch { date: *date, epoch: *self })
    }

    /// Year-only validation.
    ///
    /// # Errors
    /// Returns `EpochError::OutOfYearRange` when [`Epoch::contains_year`] is false.
    pub fn check_year(&self, year: i32) -> Result<(), EpochError> {
        if self.contains_year(year) {
            return Ok(());
        }
        tracing::debug!(year, epoch = %self, "year outside ephemeris epoch");
        Err(EpochError::OutOfYearRange { year, epoch: *self })
    }

    /// Both bounds in human-readable form, e.g.
    /// `January 29, 3001 BCE – May 6, 3000 CE`.
    pub fn describe(&self, options: &FormatOptions) -> String {
        format!("{} \u{2013} {}", format_date(&self.min, options), format_date(&self.max, options))
    }
}

impl Default for Epoch {
    fn default() -> Self {
        Self::EPHEMERIS
    }
}

/// Parses `min/max`, each bound in the [`AstronomicalDate`] string form.
impl FromStr for Epoch {
    type Err = EpochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((min, max)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(EpochError::InvalidFormat(format!(
                "expected `min{RANGE_SEPARATOR}max`: {trimmed}"
            )));
        };
        if max.contains(RANGE_SEPARATOR) {
            let found = trimmed.matches(RANGE_SEPARATOR).count();
            return Err(EpochError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {found}"
            )));
        }
        Self::new(min.trim().parse()?, max.trim().parse()?)
    }
}

impl Serialize for Epoch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Epoch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
