//! Typed request and response of the equinox/solstice lookup service.
//!
//! The service itself is remote; this module builds its query string,
//! decodes its JSON answer and turns the answer into display rows.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::format::{StringOptions, date_time_to_string};
use crate::prelude::*;
use crate::{AstronomicalDateTime, DateError, Epoch, EpochError, Year};

/// One of the four yearly events reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum SeasonEvent {
    #[display(fmt = "Vernal Equinox")]
    Vernal,
    #[display(fmt = "Summer Solstice")]
    Summer,
    #[display(fmt = "Autumnal Equinox")]
    Autumnal,
    #[display(fmt = "Winter Solstice")]
    Winter,
}

impl SeasonEvent {
    /// Events in calendar order
    pub const ALL: [Self; 4] = [Self::Vernal, Self::Summer, Self::Autumnal, Self::Winter];

    /// Prefix of this event's fields in the service response
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vernal => "vernal",
            Self::Summer => "summer",
            Self::Autumnal => "autumnal",
            Self::Winter => "winter",
        }
    }
}

/// What to ask the service for. The variant also decides which epoch
/// policy validates the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupQuery {
    /// Events of a whole year; validated with [`Epoch::check_year`]
    Year(Year),
    /// Coordinates at an instant; validated with [`Epoch::check`]
    DateTime(AstronomicalDateTime),
}

impl LookupQuery {
    /// # Errors
    /// Returns `EpochError` if the query falls outside `epoch`.
    pub fn validate(&self, epoch: &Epoch) -> Result<(), EpochError> {
        match self {
            Self::Year(year) => epoch.check_year(year.get()),
            Self::DateTime(date_time) => epoch.check(&date_time.date()),
        }
    }

    /// URL query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "year={year}"),
            Self::DateTime(dt) => write!(
                f,
                "year={}&month={}&day={}&hour={}&minute={}&second={}",
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            ),
        }
    }
}

/// Decoded service answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Failure { error: String },
    Success(SeasonsData),
}

impl LookupResponse {
    /// # Errors
    /// Returns the `serde_json` error if `json` is neither shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The payload, or the service's error message.
    ///
    /// # Errors
    /// Returns the message of a `Failure` response.
    pub fn into_result(self) -> Result<SeasonsData, String> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure { error } => Err(error),
        }
    }
}

/// Successful service payload.
///
/// `results` holds `<event>_time` as `[y, m, d, h, mi, s]` and
/// `<event>_ra` / `<event>_dec` in degrees, as numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonsData {
    pub year:    i32,
    #[serde(default)]
    pub month:   Option<f64>,
    #[serde(default)]
    pub day:     Option<f64>,
    #[serde(default)]
    pub hour:    Option<f64>,
    #[serde(default)]
    pub minute:  Option<f64>,
    #[serde(default)]
    pub second:  Option<f64>,
    pub results: BTreeMap<String, Value>,
}

/// One rendered line of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventRow {
    pub event: SeasonEvent,
    pub time:  String,
    pub ra:    String,
    pub dec:   String,
}

impl SeasonsData {
    /// The instant the service answered for; absent fields take the
    /// defaults January 1, 12:00:00.
    ///
    /// # Errors
    /// Returns `DateError` if the echoed fields are out of range.
    pub fn requested(&self) -> Result<AstronomicalDateTime, DateError> {
        AstronomicalDateTime::from_sequence(&[
            f64::from(self.year),
            self.month.unwrap_or(1.0),
            self.day.unwrap_or(1.0),
            self.hour.unwrap_or(12.0),
            self.minute.unwrap_or(0.0),
            self.second.unwrap_or(0.0),
        ])
    }

    /// `<event>_time` as numbers, if it is an array of numbers.
    pub fn event_time(&self, event: SeasonEvent) -> Option<Vec<f64>> {
        self.results
            .get(&format!("{}_time", event.key()))?
            .as_array()?
            .iter()
            .map(Value::as_f64)
            .collect()
    }

    pub fn ra(&self, event: SeasonEvent) -> Option<f64> {
        self.coordinate(&format!("{}_ra", event.key()))
    }

    pub fn dec(&self, event: SeasonEvent) -> Option<f64> {
        self.coordinate(&format!("{}_dec", event.key()))
    }

    fn coordinate(&self, field: &str) -> Option<f64> {
        match self.results.get(field)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// One row per event in calendar order. RA and Dec are fixed to three
    /// decimals; missing values and non-array times render empty.
    ///
    /// # Errors
    /// Returns `DateError` if an event time has out-of-range components.
    pub fn rows(&self, options: &StringOptions) -> Result<Vec<EventRow>, DateError> {
        SeasonEvent::ALL
            .iter()
            .map(|&event| {
                let time = match self.event_time(event) {
                    Some(values) => date_time_to_string(&values, options)?,
                    None => {
                        tracing::debug!(event = event.key(), "event time is not a numeric array");
                        String::new()
                    },
                };
                Ok(EventRow {
                    event,
                    time,
                    ra: fixed(self.ra(event)),
                    dec: fixed(self.dec(event)),
                })
            })
            .collect()
    }
}

fn fixed(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.3}")).unwrap_or_default()
}
