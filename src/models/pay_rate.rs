//! Pay rate model.

use serde::{Deserialize, Serialize};

use super::Lapse;
use crate::error::{EngineError, EngineResult};

/// An hourly rate that applies to every hour of a lapse.
///
/// # Example
///
/// ```
/// use pay_engine::models::PayRate;
///
/// let rate = PayRate::parse("MO", "09:00", "18:00", "15").unwrap();
/// assert_eq!(rate.hourly_rate, 15);
/// assert!(rate.lapse.contains(17));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayRate {
    /// The hours the rate applies to.
    pub lapse: Lapse,
    /// Amount paid for each hour in the lapse. Not validated.
    pub hourly_rate: i64,
}

impl PayRate {
    /// Creates a pay rate from a lapse and an hourly amount.
    pub fn new(lapse: Lapse, hourly_rate: i64) -> Self {
        Self { lapse, hourly_rate }
    }

    /// Parses a pay rate from the four fields of a rate-table line.
    ///
    /// # Errors
    ///
    /// Propagates [`Lapse::parse`] errors and returns
    /// [`EngineError::InvalidRate`] when `rate` is not an integer.
    pub fn parse(day: &str, start: &str, end: &str, rate: &str) -> EngineResult<Self> {
        let lapse = Lapse::parse(day, start, end)?;
        let hourly_rate = rate
            .trim()
            .parse::<i64>()
            .map_err(|_| EngineError::InvalidRate {
                value: rate.trim().to_string(),
            })?;

        Ok(Self::new(lapse, hourly_rate))
    }
}
