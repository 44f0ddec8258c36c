//! Fixture constructors shared by the unit tests.

use crate::{AstronomicalDate, AstronomicalDateTime};

pub fn date(year: i32, month: u8, day: u8) -> AstronomicalDate {
    AstronomicalDate::new(year, month, day).expect("valid test date")
}

pub fn date_time(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> AstronomicalDateTime {
    AstronomicalDateTime::from_components(year, month, day, hour, minute, second).expect("valid test date/time")
}
