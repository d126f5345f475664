//! Time lapse model.
//!
//! A [`Lapse`] is a half-open range of whole hours `[start_hour, end_hour)`
//! on a single day. Both pay-rate entries and worked hours are built from it.

use std::ops::Range;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::day_code::{parse_day_code, serde_day_code};
use crate::error::{EngineError, EngineResult};

/// Hour value an end time of `00:00` is normalized to.
pub const END_OF_DAY: u32 = 24;

/// A contiguous range of hours on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lapse {
    /// The day the lapse falls on.
    #[serde(with = "serde_day_code")]
    pub day: Weekday,
    /// First hour included in the lapse.
    pub start_hour: u32,
    /// First hour after the lapse (24 for midnight).
    pub end_hour: u32,
}

impl Lapse {
    /// Creates a lapse from already-parsed values.
    pub fn new(day: Weekday, start_hour: u32, end_hour: u32) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
        }
    }

    /// Parses a lapse from a day code and two `HH:MM` time values.
    ///
    /// Only the hour part of each time is used; minutes are ignored. An end
    /// hour of `0` means midnight at the end of the day and becomes
    /// [`END_OF_DAY`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownDayCode`] for an unrecognised day and
    /// [`EngineError::InvalidHour`] when a time has no `:` or a non-numeric
    /// hour.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_engine::models::Lapse;
    /// use chrono::Weekday;
    ///
    /// let lapse = Lapse::parse("MO", "18:00", "00:00").unwrap();
    /// assert_eq!(lapse.day, Weekday::Mon);
    /// assert_eq!(lapse.start_hour, 18);
    /// assert_eq!(lapse.end_hour, 24);
    /// ```
    pub fn parse(day: &str, start: &str, end: &str) -> EngineResult<Self> {
        let day = parse_day_code(day.trim())?;
        let start_hour = parse_hour(start)?;
        let end_hour = match parse_hour(end)? {
            0 => END_OF_DAY,
            hour => hour,
        };

        Ok(Self::new(day, start_hour, end_hour))
    }

    /// Returns true if `hour` falls inside `[start_hour, end_hour)`.
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }

    /// Returns the range of whole hours covered by the lapse.
    ///
    /// The range is empty when `start_hour >= end_hour`.
    pub fn hours(&self) -> Range<u32> {
        self.start_hour..self.end_hour
    }

    /// Returns the number of whole hours in the lapse.
    pub fn duration_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }
}

/// Extracts the hour from an `HH:MM` value.
fn parse_hour(time: &str) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidHour {
        value: time.trim().to_string(),
    };

    let (hour, _minutes) = time.split_once(':').ok_or_else(invalid)?;
    hour.trim().parse::<u32>().map_err(|_| invalid())
}
