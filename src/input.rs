//! Lookup form fields.
//!
//! Each field parses to an `Option`: an empty field is unset, which is not
//! the same thing as the year 0 (1 BCE).

use crate::calendar::{clamp_day_to_epoch, clamp_month_to_epoch};
use crate::consts::{DEFAULT_HOUR, HOURS_PER_DAY, JANUARY, MIN_DAY};
use crate::seasons::LookupQuery;
use crate::{AstronomicalDate, AstronomicalDateTime, DateError, Day, Epoch, EpochError, EraYear, Month, TimeOfDay, Year};

/// Accepts an astronomical year (`-500`) or an era label (`501 BCE`).
///
/// # Errors
/// Returns `DateError::InvalidYear` if the number does not fit in `i32`,
/// `DateError::InvalidFormat` for anything else unparsable.
pub fn parse_year_field(raw: &str) -> Result<Option<Year>, DateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        let year = i32::try_from(value).map_err(|_| DateError::InvalidYear(value))?;
        return Ok(Some(Year::new(year)));
    }
    let era_year: EraYear = trimmed.parse()?;
    Year::try_from(era_year).map(Some)
}

/// Accepts `1`..`12`, a month name or its abbreviation.
///
/// # Errors
/// Returns the errors of [`Month`]'s `FromStr`.
pub fn parse_month_field(raw: &str) -> Result<Option<Month>, DateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Day of month. Checked against the month later, in [`FormInput::resolve`].
///
/// # Errors
/// Returns `DateError::InvalidFormat` for non-numbers and
/// `DateError::InvalidDay` outside `1..=31`.
pub fn parse_day_field(raw: &str) -> Result<Option<Day>, DateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(format!("Invalid day: {trimmed}")))?;
    Day::try_from(value).map(Some)
}

/// Hour on a 24-hour clock; `0` is midnight, not unset.
///
/// # Errors
/// Returns `DateError::InvalidFormat` for non-numbers and
/// `DateError::InvalidTime` for hours past 23.
pub fn parse_hour_field(raw: &str) -> Result<Option<u8>, DateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let hour = trimmed
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(format!("Invalid hour: {trimmed}")))?;
    if hour >= HOURS_PER_DAY {
        return Err(DateError::InvalidTime {
            hour:   i64::from(hour),
            minute: 0,
            second: 0.0,
        });
    }
    Ok(Some(hour))
}

/// Parsed state of the lookup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormInput {
    pub year:  Option<Year>,
    pub month: Option<Month>,
    pub day:   Option<Day>,
    pub hour:  Option<u8>,
}

impl FormInput {
    /// Parses the four raw fields.
    ///
    /// # Errors
    /// Returns the first field error, in year, month, day, hour order.
    pub fn from_fields(year: &str, month: &str, day: &str, hour: &str) -> Result<Self, DateError> {
        Ok(Self {
            year:  parse_year_field(year)?,
            month: parse_month_field(month)?,
            day:   parse_day_field(day)?,
            hour:  parse_hour_field(hour)?,
        })
    }

    /// A form with only the year filled in.
    pub const fn year_only(year: Year) -> Self {
        Self {
            year:  Some(year),
            month: None,
            day:   None,
            hour:  None,
        }
    }

    /// Fills unset fields and validates the date.
    ///
    /// Without a year the date is `today`. With a year, an unset month or
    /// day is 1. An unset hour is noon.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in the
    /// month, e.g. February 30.
    pub fn resolve(&self, today: AstronomicalDate) -> Result<AstronomicalDateTime, DateError> {
        let date = match self.year {
            None => today,
            Some(year) => AstronomicalDate::new(
                year.get(),
                self.month.map_or(JANUARY, Month::get),
                self.day.map_or(MIN_DAY, Day::get),
            )?,
        };
        let time = TimeOfDay::new(self.hour.unwrap_or(DEFAULT_HOUR), 0, 0.0)?;
        Ok(AstronomicalDateTime::new(date, time))
    }

    /// Snaps a set month and day into what `epoch` allows for the year,
    /// the way the form narrows its selectors in a boundary year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the snapped day still does not
    /// exist in the month.
    pub fn snap_to_epoch(&self, epoch: &Epoch) -> Result<Self, DateError> {
        let Some(year) = self.year else {
            return Ok(*self);
        };
        let year = year.get();
        let month = self
            .month
            .map(|m| clamp_month_to_epoch(epoch, year, m.get()).and_then(Month::new))
            .transpose()?;
        let day = match self.day {
            Some(day) => {
                let month = month.map_or(JANUARY, Month::get);
                let snapped = clamp_day_to_epoch(epoch, year, month, day.get())?;
                Some(Day::new(snapped, year, month)?)
            },
            None => None,
        };
        Ok(Self { month, day, ..*self })
    }

    /// The service request for this form: a whole-year lookup when only
    /// the year is set, an instant lookup otherwise.
    ///
    /// # Errors
    /// Returns the errors of [`FormInput::resolve`].
    pub fn to_query(&self, today: AstronomicalDate) -> Result<LookupQuery, DateError> {
        match (self.year, self.month, self.day, self.hour) {
            (Some(year), None, None, None) => Ok(LookupQuery::Year(year)),
            _ => self.resolve(today).map(LookupQuery::DateTime),
        }
    }

    /// Builds the query and validates it against `epoch`.
    ///
    /// # Errors
    /// Returns `EpochError::Date` for malformed input and the epoch errors of
    /// [`LookupQuery::validate`] for out-of-range requests.
    pub fn submit(&self, today: AstronomicalDate, epoch: &Epoch) -> Result<LookupQuery, EpochError> {
        let query = self.to_query(today)?;
        query.validate(epoch)?;
        tracing::debug!(query = %query, "form accepted");
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, date_time};

    #[test]
    fn test_parse_year_field() {
        struct TestCase {
            raw:      &'static str,
            expected: Option<i32>,
        }

        let cases = [
            TestCase { raw: "", expected: None },
            TestCase { raw: "   ", expected: None },
            TestCase { raw: "0", expected: Some(0) },
            TestCase { raw: "2024", expected: Some(2024) },
            TestCase { raw: " -500 ", expected: Some(-500) },
            TestCase { raw: "501 BCE", expected: Some(-500) },
            TestCase { raw: "1 bce", expected: Some(0) },
            TestCase { raw: "2000 CE", expected: Some(2000) },
        ];

        for case in &cases {
            let parsed = parse_year_field(case.raw).unwrap();
            assert_eq!(parsed.map(Year::get), case.expected, "field {:?}", case.raw);
        }

        assert!(matches!(parse_year_field("abc"), Err(DateError::InvalidFormat(_))));
        assert!(matches!(parse_year_field("0 BCE"), Err(DateError::InvalidYear(0))));
        assert!(matches!(
            parse_year_field("9999999999"),
            Err(DateError::InvalidYear(9_999_999_999))
        ));
    }

    #[test]
    fn test_parse_month_field() {
        assert_eq!(parse_month_field("").unwrap(), None);
        assert_eq!(parse_month_field("3").unwrap().map(Month::get), Some(3));
        assert_eq!(parse_month_field("Sep").unwrap().map(Month::get), Some(9));
        assert_eq!(parse_month_field("december").unwrap().map(Month::get), Some(12));
        assert!(matches!(parse_month_field("0"), Err(DateError::InvalidMonth(0))));
        assert!(matches!(parse_month_field("13"), Err(DateError::InvalidMonth(13))));
        assert!(matches!(parse_month_field("Smarch"), Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_day_and_hour_fields() {
        assert_eq!(parse_day_field("").unwrap(), None);
        assert_eq!(parse_day_field("31").unwrap().map(Day::get), Some(31));
        assert!(matches!(parse_day_field("0"), Err(DateError::InvalidDay { .. })));
        assert!(matches!(parse_day_field("32"), Err(DateError::InvalidDay { .. })));
        assert!(matches!(parse_day_field("x"), Err(DateError::InvalidFormat(_))));

        assert_eq!(parse_hour_field("").unwrap(), None);
        assert_eq!(parse_hour_field("0").unwrap(), Some(0));
        assert_eq!(parse_hour_field("23").unwrap(), Some(23));
        assert!(matches!(parse_hour_field("24"), Err(DateError::InvalidTime { hour: 24, .. })));
        assert!(matches!(parse_hour_field("-1"), Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_resolve_defaults() {
        let today = date(2026, 10, 18);

        let empty = FormInput::default();
        assert_eq!(empty.resolve(today).unwrap(), date_time(2026, 10, 18, 12, 0, 0.0));

        let year_zero = FormInput::from_fields("0", "", "", "").unwrap();
        assert_eq!(year_zero.resolve(today).unwrap(), date_time(0, 1, 1, 12, 0, 0.0));

        let midnight = FormInput::from_fields("-500", "Jan", "3", "0").unwrap();
        assert_eq!(midnight.resolve(today).unwrap(), date_time(-500, 1, 3, 0, 0, 0.0));
    }

    #[test]
    fn test_resolve_rejects_missing_day() {
        let input = FormInput::from_fields("2023", "2", "29", "").unwrap();
        assert!(matches!(
            input.resolve(date(2026, 1, 1)),
            Err(DateError::InvalidDay { year: 2023, month: 2, day: 29 })
        ));
    }

    #[test]
    fn test_snap_to_epoch() {
        let epoch = Epoch::EPHEMERIS;

        let input = FormInput::from_fields("-3000", "1", "5", "").unwrap();
        let snapped = input.snap_to_epoch(&epoch).unwrap();
        assert_eq!(snapped.day.map(Day::get), Some(29));

        let input = FormInput::from_fields("3000", "12", "31", "").unwrap();
        let snapped = input.snap_to_epoch(&epoch).unwrap();
        assert_eq!(snapped.month.map(Month::get), Some(5));
        assert_eq!(snapped.day.map(Day::get), Some(6));

        let inside = FormInput::from_fields("2024", "2", "29", "6").unwrap();
        assert_eq!(inside.snap_to_epoch(&epoch).unwrap(), inside);

        let no_year = FormInput::from_fields("", "12", "31", "").unwrap();
        assert_eq!(no_year.snap_to_epoch(&epoch).unwrap(), no_year);
    }

    #[test]
    fn test_to_query_kind() {
        let today = date(2026, 10, 18);

        let year_only = FormInput::year_only(Year::new(2024));
        assert_eq!(year_only.to_query(today).unwrap(), LookupQuery::Year(Year::new(2024)));

        let with_hour = FormInput::from_fields("2024", "", "", "0").unwrap();
        assert_eq!(
            with_hour.to_query(today).unwrap(),
            LookupQuery::DateTime(date_time(2024, 1, 1, 0, 0, 0.0))
        );

        let empty = FormInput::default();
        assert_eq!(
            empty.to_query(today).unwrap(),
            LookupQuery::DateTime(date_time(2026, 10, 18, 12, 0, 0.0))
        );
    }

    #[test]
    fn test_submit() {
        let epoch = Epoch::EPHEMERIS;
        let today = date(2026, 10, 18);

        assert!(FormInput::year_only(Year::new(-2999)).submit(today, &epoch).is_ok());
        assert!(matches!(
            FormInput::year_only(Year::new(-3000)).submit(today, &epoch),
            Err(EpochError::OutOfYearRange { year: -3000, .. })
        ));

        let boundary_day = FormInput::from_fields("-3000", "1", "29", "").unwrap();
        assert!(boundary_day.submit(today, &epoch).is_ok());

        let before = FormInput::from_fields("-3000", "1", "28", "").unwrap();
        assert!(matches!(before.submit(today, &epoch), Err(EpochError::OutOfEpoch { .. })));

        let bad_day = FormInput::from_fields("2023", "2", "29", "").unwrap();
        assert!(matches!(
            bad_day.submit(today, &epoch),
            Err(EpochError::Date(DateError::InvalidDay { .. }))
        ));
    }
}
