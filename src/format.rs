//! Human-readable and ISO 8601 renderings of astronomical dates.
//!
//! Human-readable dates carry an era label (`Jan 3, 501 BCE`); ISO dates
//! carry the astronomical year (`-0500-01-03`). Both share one time format,
//! `HH:MM:SS` with an optional `.sss` fraction.

use crate::clock::format_time;
use crate::consts::{DATE_SEPARATOR, DEFAULT_DELIMITER, ISO_YEAR_WIDTH};
use crate::{AstronomicalDate, AstronomicalDateTime, DateError};

/// Options for [`format_date_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    /// `January 3, 501 BCE` when true, `3 January 501 BCE` otherwise
    pub month_first:      bool,
    /// `Jan` instead of `January`
    pub abbreviate_month: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            month_first:      true,
            abbreviate_month: false,
        }
    }
}

/// How the year is written in an ISO date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearStyle {
    /// Explicit sign, zero-padded to four digits: `+0500`, `-3000`
    #[default]
    Signed,
    /// Bare year number: `500`, `-3000`
    Plain,
}

/// Human-readable rendering of a date/time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedDateTime {
    pub date:       String,
    pub time:       String,
    pub year_label: String,
}

/// ISO 8601 rendering of a date/time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsoDateTime {
    pub date: String,
    pub time: String,
}

/// Options for [`date_time_to_string`] and [`date_to_string`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringOptions {
    /// ISO rendering when true, human-readable otherwise
    pub iso:        bool,
    /// Placed between ISO date and time
    pub delimiter:  String,
    /// Year style of the ISO rendering
    pub year_style: YearStyle,
    /// Options of the human-readable rendering
    pub format:     FormatOptions,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            iso:        true,
            delimiter:  DEFAULT_DELIMITER.to_owned(),
            year_style: YearStyle::Plain,
            format:     FormatOptions::default(),
        }
    }
}

/// `January 3, 501 BCE` or `3 January 501 BCE`, per `options`.
pub fn format_date(date: &AstronomicalDate, options: &FormatOptions) -> String {
    let month = date.month_typed();
    let month_name = if options.abbreviate_month {
        month.abbr()
    } else {
        month.name()
    };
    let year_label = date.year_typed().era_year();

    if options.month_first {
        format!("{month_name} {}, {year_label}", date.day())
    } else {
        format!("{} {month_name} {year_label}", date.day())
    }
}

pub fn format_date_time(date_time: &AstronomicalDateTime, options: &FormatOptions) -> FormattedDateTime {
    let date = date_time.date();
    FormattedDateTime {
        date:       format_date(&date, options),
        time:       date_time.time().to_string(),
        year_label: date.year_typed().era_year().to_string(),
    }
}

/// `{year}-{MM}-{DD}` with the year written per `style`.
pub fn format_date_iso(date: &AstronomicalDate, style: YearStyle) -> String {
    let year = date.year();
    let (month, day) = (date.month(), date.day());
    match style {
        YearStyle::Signed => {
            format!("{year:+0width$}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}", width = ISO_YEAR_WIDTH)
        },
        YearStyle::Plain => format!("{year}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}"),
    }
}

/// ISO rendering with a signed, zero-padded year.
pub fn format_date_time_iso(date_time: &AstronomicalDateTime) -> IsoDateTime {
    format_date_time_iso_with(date_time, YearStyle::Signed)
}

pub fn format_date_time_iso_with(date_time: &AstronomicalDateTime, style: YearStyle) -> IsoDateTime {
    let time = date_time.time();
    IsoDateTime {
        date: format_date_iso(&date_time.date(), style),
        time: format_time(time.hour(), time.minute(), time.second()),
    }
}

/// Renders a `[year, month, day, hour, minute, second]` sequence.
///
/// ISO output joins date and time with `options.delimiter`; human-readable
/// output is `{date}, {time}`.
///
/// # Errors
/// Returns `DateError::MalformedSequence` if `values` does not hold exactly
/// six numbers, or a component error if a value is out of range.
pub fn try_date_time_to_string(values: &[f64], options: &StringOptions) -> Result<String, DateError> {
    let date_time = AstronomicalDateTime::from_sequence(values)?;
    if options.iso {
        let iso = format_date_time_iso_with(&date_time, options.year_style);
        Ok(format!("{}{}{}", iso.date, options.delimiter, iso.time))
    } else {
        let formatted = format_date_time(&date_time, &options.format);
        Ok(format!("{}, {}", formatted.date, formatted.time))
    }
}

/// Like [`try_date_time_to_string`], but a sequence of the wrong length
/// renders as an empty string.
///
/// # Errors
/// Returns a component error if a value is out of range.
pub fn date_time_to_string(values: &[f64], options: &StringOptions) -> Result<String, DateError> {
    tolerate_malformed(try_date_time_to_string(values, options))
}

/// Renders a `[year, month, day]` sequence.
///
/// # Errors
/// Returns `DateError::MalformedSequence` if `values` does not hold exactly
/// three numbers, or a component error if a value is out of range.
pub fn try_date_to_string(values: &[f64], options: &StringOptions) -> Result<String, DateError> {
    let date = AstronomicalDate::from_sequence(values)?;
    if options.iso {
        Ok(format_date_iso(&date, options.year_style))
    } else {
        Ok(format_date(&date, &options.format))
    }
}

/// Like [`try_date_to_string`], but a sequence of the wrong length renders
/// as an empty string.
///
/// # Errors
/// Returns a component error if a value is out of range.
pub fn date_to_string(values: &[f64], options: &StringOptions) -> Result<String, DateError> {
    tolerate_malformed(try_date_to_string(values, options))
}

fn tolerate_malformed(result: Result<String, DateError>) -> Result<String, DateError> {
    match result {
        Err(DateError::MalformedSequence { expected, found }) => {
            tracing::debug!(expected, found, "rendering malformed date/time sequence as empty");
            Ok(String::new())
        },
        other => other,
    }
}
