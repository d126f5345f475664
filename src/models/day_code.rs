//! Two-letter day codes.
//!
//! Rate tables and worked-hours records identify days with the tokens
//! `MO`, `TU`, `WE`, `TH`, `FR`, `SA` and `SU`. Internally a day is a
//! [`chrono::Weekday`].

use chrono::Weekday;

use crate::error::{EngineError, EngineResult};

/// Parses a two-letter day code into a weekday.
///
/// Matching is case sensitive.
///
/// # Example
///
/// ```
/// use pay_engine::models::parse_day_code;
/// use chrono::Weekday;
///
/// assert_eq!(parse_day_code("SA").unwrap(), Weekday::Sat);
/// assert!(parse_day_code("sa").is_err());
/// ```
pub fn parse_day_code(code: &str) -> EngineResult<Weekday> {
    match code {
        "MO" => Ok(Weekday::Mon),
        "TU" => Ok(Weekday::Tue),
        "WE" => Ok(Weekday::Wed),
        "TH" => Ok(Weekday::Thu),
        "FR" => Ok(Weekday::Fri),
        "SA" => Ok(Weekday::Sat),
        "SU" => Ok(Weekday::Sun),
        _ => Err(EngineError::UnknownDayCode {
            code: code.to_string(),
        }),
    }
}

/// Returns the two-letter code for a weekday.
pub fn day_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

/// Serde adapter that reads and writes weekdays as day codes.
pub(crate) mod serde_day_code {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::day_code(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let code = String::deserialize(deserializer)?;
        super::parse_day_code(&code).map_err(serde::de::Error::custom)
    }
}
