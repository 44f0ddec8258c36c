use crate::types::MonthName;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names (index 0 is unused, months are 1-indexed)
pub const MONTHS: [MonthName; 13] = [
    MonthName { abbr: "", name: "" },
    MonthName { abbr: "Jan", name: "January" },
    MonthName { abbr: "Feb", name: "February" },
    MonthName { abbr: "Mar", name: "March" },
    MonthName { abbr: "Apr", name: "April" },
    MonthName { abbr: "May", name: "May" },
    MonthName { abbr: "Jun", name: "June" },
    MonthName { abbr: "Jul", name: "July" },
    MonthName { abbr: "Aug", name: "August" },
    MonthName { abbr: "Sep", name: "September" },
    MonthName { abbr: "Oct", name: "October" },
    MonthName { abbr: "Nov", name: "November" },
    MonthName { abbr: "Dec", name: "December" },
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Hour used when a date carries no time of day
pub const DEFAULT_HOUR: u8 = 12;
pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minimum width of a signed ISO year, sign included (`+0500`)
pub const ISO_YEAR_WIDTH: usize = 5;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between date and time in the ISO 8601 extended format
pub const DATE_TIME_SEPARATOR: char = 'T';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Default delimiter between the date and time of a rendered date/time
pub const DEFAULT_DELIMITER: &str = " ";

/// Number of components in a `[year, month, day, hour, minute, second]` sequence
pub const DATE_TIME_COMPONENTS: usize = 6;
/// Number of components in a `[year, month, day]` sequence
pub const DATE_COMPONENTS: usize = 3;
