//! Month lengths and epoch-aware clamping of calendar fields.
//!
//! These helpers keep a date picker from representing dates outside an
//! [`Epoch`]. They never reject anything themselves; use
//! [`Epoch::check`] for that.

use std::ops::RangeInclusive;

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY, MIN_MONTH,
};
use crate::epoch::Epoch;
use crate::types::Month;
use crate::DateError;

/// Proleptic Gregorian leap-year rule, applied unchanged to years <= 0.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`.
pub fn month_length(year: i32, month: u8) -> Result<u8, DateError> {
    Month::new(month).map(|month| days_in_month(year, month))
}

/// Months that may be picked in `year` without leaving the epoch.
///
/// Only the two boundary years are restricted; every other year allows
/// the full `1..=12`.
pub fn selectable_months(epoch: &Epoch, year: i32) -> RangeInclusive<u8> {
    let min = epoch.min();
    let max = epoch.max();
    let first = if year == min.year() { min.month() } else { MIN_MONTH };
    let last = if year == max.year() { max.month() } else { MAX_MONTH };
    first..=last
}

/// Snaps `month` into [`selectable_months`] for `year`.
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`.
pub fn clamp_month_to_epoch(epoch: &Epoch, year: i32, month: u8) -> Result<u8, DateError> {
    let month = Month::new(month)?.get();
    let range = selectable_months(epoch, year);
    Ok(month.max(*range.start()).min(*range.end()))
}

/// Admissible days of `month` in `year`, narrowed at the epoch boundaries.
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`.
pub fn day_bounds(epoch: &Epoch, year: i32, month: u8) -> Result<RangeInclusive<u8>, DateError> {
    let month_typed = Month::new(month)?;
    let min = epoch.min();
    let max = epoch.max();

    let day_min = if year == min.year() && month == min.month() {
        min.day()
    } else {
        MIN_DAY
    };
    let mut day_max = days_in_month(year, month_typed);
    if year == max.year() && month == max.month() {
        day_max = day_max.min(max.day());
    }
    Ok(day_min..=day_max)
}

/// Clamps `day` into [`day_bounds`] for the given year and month.
///
/// Years strictly inside the epoch are only clamped to the month length.
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`.
pub fn clamp_day_to_epoch(epoch: &Epoch, year: i32, month: u8, day: u8) -> Result<u8, DateError> {
    let bounds = day_bounds(epoch, year, month)?;
    Ok(day.max(*bounds.start()).min(*bounds.end()))
}
