use std::fmt;
use std::str::FromStr;

use crate::consts::{DEFAULT_HOUR, HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_MINUTE, TIME_SEPARATOR};
use crate::DateError;

/// Time of day on a 24-hour clock. Seconds may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeOfDay {
    hour:   u8,
    minute: u8,
    second: f64,
}

impl TimeOfDay {
    /// 12:00:00, used whenever a date arrives without a time.
    pub const NOON: Self = Self {
        hour:   DEFAULT_HOUR,
        minute: 0,
        second: 0.0,
    };

    /// Creates a time of day, validating `hour < 24`, `minute < 60` and
    /// `0 <= second < 60`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if any component is out of range.
    pub fn new(hour: u8, minute: u8, second: f64) -> Result<Self, DateError> {
        let second_ok = second.is_finite() && (0.0..SECONDS_PER_MINUTE).contains(&second);
        if hour >= HOURS_PER_DAY || minute >= MINUTES_PER_HOUR || !second_ok {
            return Err(DateError::InvalidTime {
                hour: i64::from(hour),
                minute: i64::from(minute),
                second,
            });
        }
        // -0.0 + 0.0 is +0.0; keeps "-0" out of rendered seconds
        Ok(Self {
            hour,
            minute,
            second: second + 0.0,
        })
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> f64 {
        self.second
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::NOON
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.hour, self.minute, self.second))
    }
}

/// Parses `hh`, `hh:mm` or `hh:mm:ss[.fff]`; missing parts are zero.
impl FromStr for TimeOfDay {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).map(str::trim).collect();
        if parts.len() > 3 {
            return Err(DateError::InvalidFormat(format!(
                "Invalid time format (hh, hh:mm or hh:mm:ss): {trimmed}"
            )));
        }
        let invalid = || DateError::InvalidFormat(format!("Invalid time format (hh, hh:mm or hh:mm:ss): {trimmed}"));

        let hour = parts[0].parse::<u8>().map_err(|_| invalid())?;
        let minute = parts
            .get(1)
            .map_or(Ok(0), |p| p.parse::<u8>())
            .map_err(|_| invalid())?;
        let second = parts
            .get(2)
            .map_or(Ok(0.0), |p| p.parse::<f64>())
            .map_err(|_| invalid())?;

        Self::new(hour, minute, second)
    }
}

/// Renders seconds as `SS`, or `SS.sss` when there is a fractional part.
///
/// The fraction is truncated to whole milliseconds, never rounded, so the
/// integer part shown is always the integer part of `second`.
pub fn format_seconds(second: f64) -> String {
    let whole = second.trunc();
    // The epsilon absorbs representation error such as 59.999 * 1000 = 59998.99...
    let millis = (second * 1000.0 + 1e-6).floor().min(whole * 1000.0 + 999.0);
    let truncated = millis / 1000.0;
    if truncated.fract() == 0.0 {
        format!("{truncated:02.0}")
    } else {
        format!("{truncated:06.3}")
    }
}

/// Renders seconds at full precision, `SS` or `SS.f...` with the shortest
/// fraction that parses back to the same `f64`.
pub(crate) fn format_seconds_exact(second: f64) -> String {
    if second.fract() == 0.0 {
        format!("{second:02.0}")
    } else if second < 10.0 {
        format!("0{second}")
    } else {
        format!("{second}")
    }
}

/// Renders `HH:MM:SS[.sss]`.
pub fn format_time(hour: u8, minute: u8, second: f64) -> String {
    format!("{hour:02}:{minute:02}:{}", format_seconds(second))
}

/// A duration in hours split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hms {
    pub negative: bool,
    pub hours:    u32,
    pub minutes:  u8,
    pub seconds:  u8,
}

/// Converts decimal hours (e.g. a UTC offset) to hours, minutes and
/// rounded seconds, carrying 60 s into the next minute and 60 min into
/// the next hour.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn decimal_to_hms(decimal_hours: f64) -> Hms {
    let negative = decimal_hours < 0.0;
    let abs_hours = decimal_hours.abs();
    let whole_hours = abs_hours.trunc();
    let decimal_minutes = (abs_hours - whole_hours) * 60.0;
    let whole_minutes = decimal_minutes.trunc();

    let mut hours = whole_hours as u32;
    let mut minutes = whole_minutes as u8;
    let mut seconds = ((decimal_minutes - whole_minutes) * 60.0).round() as u8;

    if seconds == 60 {
        seconds = 0;
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        hours = hours.saturating_add(1);
    }

    Hms {
        negative,
        hours,
        minutes,
        seconds,
    }
}

/// Formats a UTC offset in decimal hours as `+HH:MM` / `-HH:MM`.
pub fn format_utc_offset(offset_hours: f64) -> String {
    let hms = decimal_to_hms(offset_hours);
    let sign = if offset_hours < 0.0 { '-' } else { '+' };
    format!("{sign}{:02}:{:02}", hms.hours, hms.minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "00");
        assert_eq!(format_seconds(7.0), "07");
        assert_eq!(format_seconds(1.5), "01.500");
        assert_eq!(format_seconds(59.999), "59.999");
        assert_eq!(format_seconds(0.12345), "00.123");
        assert_eq!(format_seconds(0.1), "00.100");
        assert_eq!(format_seconds(14.617_520_176_605_467), "14.617");
    }

    #[test]
    fn test_format_seconds_keeps_integer_part() {
        for (second, expected) in [(59.9999, "59.999"), (9.999_99, "09.999"), (59.999_999_999_9, "59.999"), (0.000_1, "00")] {
            let rendered = format_seconds(second);
            assert_eq!(rendered, expected, "second {second}");
            let parsed: f64 = rendered.parse().unwrap();
            assert_eq!(parsed.trunc(), second.trunc(), "second {second}");
        }
    }

    #[test]
    fn test_format_seconds_exact() {
        assert_eq!(format_seconds_exact(0.0), "00");
        assert_eq!(format_seconds_exact(42.0), "42");
        assert_eq!(format_seconds_exact(7.5), "07.5");
        assert_eq!(format_seconds_exact(14.617_520_176_605_467), "14.617520176605467");
        let back: f64 = format_seconds_exact(59.999_9).parse().unwrap();
        assert_eq!(back, 59.999_9);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(12, 0, 0.0), "12:00:00");
        assert_eq!(format_time(9, 30, 0.0), "09:30:00");
        assert_eq!(format_time(0, 0, 0.1), "00:00:00.100");
        assert_eq!(format_time(23, 59, 59.999), "23:59:59.999");
    }

    #[test]
    fn test_time_of_day_validation() {
        assert!(TimeOfDay::new(0, 0, 0.0).is_ok());
        assert!(TimeOfDay::new(23, 59, 59.999).is_ok());
        assert!(matches!(TimeOfDay::new(24, 0, 0.0), Err(DateError::InvalidTime { hour: 24, .. })));
        assert!(matches!(TimeOfDay::new(0, 60, 0.0), Err(DateError::InvalidTime { minute: 60, .. })));
        assert!(TimeOfDay::new(0, 0, 60.0).is_err());
        assert!(TimeOfDay::new(0, 0, -0.5).is_err());
        assert!(TimeOfDay::new(0, 0, f64::NAN).is_err());
    }

    #[test]
    fn test_time_of_day_negative_zero_second() {
        let time = TimeOfDay::new(1, 2, -0.0).unwrap();
        assert_eq!(time.to_string(), "01:02:00");
    }

    #[test]
    fn test_time_of_day_default_is_noon() {
        assert_eq!(TimeOfDay::default(), TimeOfDay::NOON);
        assert_eq!(TimeOfDay::NOON.to_string(), "12:00:00");
    }

    #[test]
    fn test_time_of_day_from_str() {
        let time: TimeOfDay = "18".parse().unwrap();
        assert_eq!((time.hour(), time.minute()), (18, 0));

        let time: TimeOfDay = "7:05".parse().unwrap();
        assert_eq!(time.to_string(), "07:05:00");

        let time: TimeOfDay = "23:59:14.617".parse().unwrap();
        assert_eq!(time.to_string(), "23:59:14.617");

        assert!(matches!("".parse::<TimeOfDay>(), Err(DateError::EmptyInput)));
        assert!(matches!("ab:cd".parse::<TimeOfDay>(), Err(DateError::InvalidFormat(_))));
        assert!(matches!("1:2:3:4".parse::<TimeOfDay>(), Err(DateError::InvalidFormat(_))));
        assert!(matches!("25:00".parse::<TimeOfDay>(), Err(DateError::InvalidTime { .. })));
    }

    #[test]
    fn test_decimal_to_hms_cases() {
        struct TestCase {
            decimal:  f64,
            expected: (bool, u32, u8, u8),
        }

        let cases = [
            TestCase { decimal: 0.0, expected: (false, 0, 0, 0) },
            TestCase { decimal: -0.0, expected: (false, 0, 0, 0) },
            TestCase { decimal: -0.5, expected: (true, 0, 30, 0) },
            TestCase { decimal: 1.5, expected: (false, 1, 30, 0) },
            TestCase { decimal: -1.5, expected: (true, 1, 30, 0) },
            TestCase { decimal: 2.75, expected: (false, 2, 45, 0) },
            TestCase { decimal: 1.999, expected: (false, 1, 59, 56) },
            TestCase { decimal: 1.9999, expected: (false, 2, 0, 0) },
            TestCase { decimal: 1.99999, expected: (false, 2, 0, 0) },
            TestCase { decimal: 10.5, expected: (false, 10, 30, 0) },
            TestCase { decimal: -10.75, expected: (true, 10, 45, 0) },
        ];

        for case in &cases {
            let hms = decimal_to_hms(case.decimal);
            assert_eq!(
                (hms.negative, hms.hours, hms.minutes, hms.seconds),
                case.expected,
                "decimal hours {}",
                case.decimal
            );
        }
    }

    #[test]
    fn test_decimal_to_hms_carry_saturates() {
        let hms = decimal_to_hms(4_294_967_295.999_99);
        assert_eq!((hms.hours, hms.minutes, hms.seconds), (u32::MAX, 0, 0));

        let hms = decimal_to_hms(1e12);
        assert_eq!(hms.hours, u32::MAX);
    }

    #[test]
    fn test_format_utc_offset() {
        assert_eq!(format_utc_offset(-8.0), "-08:00");
        assert_eq!(format_utc_offset(8.0), "+08:00");
        assert_eq!(format_utc_offset(0.0), "+00:00");
        assert_eq!(format_utc_offset(5.75), "+05:45");
        assert_eq!(format_utc_offset(-3.5), "-03:30");
    }
}
