//! Pay calculation result models.
//!
//! This module contains the [`PayResult`] type returned by the pay
//! calculator and its per-lapse [`LapsePay`] lines.

use serde::{Deserialize, Serialize};

use super::Lapse;

/// Pay earned for one worked lapse.
///
/// # Example
///
/// ```
/// use pay_engine::models::{Lapse, LapsePay};
/// use chrono::Weekday;
///
/// let line = LapsePay {
///     lapse: Lapse::new(Weekday::Mon, 10, 12),
///     hours: 2,
///     unrated_hours: 0,
///     amount: 30,
/// };
/// assert_eq!(line.rated_hours(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapsePay {
    /// The worked lapse this line was computed for.
    #[serde(flatten)]
    pub lapse: Lapse,
    /// Number of whole hours in the lapse.
    pub hours: u32,
    /// Hours for which no rate entry matched (paid 0).
    pub unrated_hours: u32,
    /// Sum of the hourly rates applied to the lapse.
    pub amount: i64,
}

impl LapsePay {
    /// Hours that matched a rate entry.
    pub fn rated_hours(&self) -> u32 {
        self.hours.saturating_sub(self.unrated_hours)
    }
}

/// The result of calculating one employee's pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// The employee's name as given in the worked-hours record.
    pub name: String,
    /// Total pay across every worked lapse.
    pub total_pay: i64,
    /// One line per worked lapse, in record order.
    pub lines: Vec<LapsePay>,
}

impl PayResult {
    /// Builds a result from per-lapse lines, summing their amounts.
    ///
    /// Returns `None` if the total does not fit in an `i64`.
    pub fn from_lines(name: impl Into<String>, lines: Vec<LapsePay>) -> Option<Self> {
        let total_pay = lines
            .iter()
            .try_fold(0i64, |total, line| total.checked_add(line.amount))?;

        Some(Self {
            name: name.into(),
            total_pay,
            lines,
        })
    }

    /// Total hours with no matching rate across all lines.
    pub fn unrated_hours(&self) -> u32 {
        self.lines.iter().map(|line| line.unrated_hours).sum()
    }

    /// Consumes the result, returning the `(name, total_pay)` pair.
    pub fn into_pair(self) -> (String, i64) {
        (self.name, self.total_pay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn create_line(day: Weekday, start: u32, end: u32, amount: i64) -> LapsePay {
        LapsePay {
            lapse: Lapse::new(day, start, end),
            hours: end - start,
            unrated_hours: 0,
            amount,
        }
    }

    #[test]
    fn test_total_pay_equals_sum_of_lines() {
        let result = PayResult::from_lines(
            "ASTRID",
            vec![
                create_line(Weekday::Mon, 10, 12, 30),
                create_line(Weekday::Thu, 12, 14, 30),
                create_line(Weekday::Sun, 20, 21, 25),
            ],
        )
        .unwrap();

        assert_eq!(result.total_pay, 85);
        assert_eq!(result.name, "ASTRID");
    }

    #[test]
    fn test_empty_result_pays_nothing() {
        let result = PayResult::from_lines("NOBODY", vec![]).unwrap();

        assert_eq!(result.total_pay, 0);
        assert_eq!(result.unrated_hours(), 0);
    }

    #[test]
    fn test_unrated_hours_are_summed() {
        let mut line = create_line(Weekday::Wed, 1, 5, 0);
        line.unrated_hours = 4;
        let result = PayResult::from_lines("RENE", vec![line, create_line(Weekday::Mon, 9, 10, 15)])
            .unwrap();

        assert_eq!(result.unrated_hours(), 4);
        assert_eq!(result.lines[0].rated_hours(), 0);
        assert_eq!(result.lines[1].rated_hours(), 1);
    }

    #[test]
    fn test_total_overflow_yields_none() {
        let result = PayResult::from_lines(
            "RENE",
            vec![
                create_line(Weekday::Mon, 0, 1, i64::MAX),
                create_line(Weekday::Tue, 0, 1, 1),
            ],
        );

        assert!(result.is_none());
    }

    #[test]
    fn test_rated_hours_saturates_on_inconsistent_line() {
        let mut line = create_line(Weekday::Mon, 10, 12, 0);
        line.unrated_hours = 5;

        assert_eq!(line.rated_hours(), 0);
    }

    #[test]
    fn test_into_pair() {
        let result = PayResult::from_lines("RENE", vec![create_line(Weekday::Sat, 14, 18, 80)]).unwrap();
        assert_eq!(result.into_pair(), ("RENE".to_string(), 80));
    }

    #[test]
    fn test_pay_result_serialization() {
        let result = PayResult::from_lines("RENE", vec![create_line(Weekday::Sat, 14, 18, 80)]).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], "RENE");
        assert_eq!(json["total_pay"], 80);
        assert_eq!(json["lines"][0]["day"], "SA");
        assert_eq!(json["lines"][0]["start_hour"], 14);
        assert_eq!(json["lines"][0]["hours"], 4);
    }

    #[test]
    fn test_pay_result_deserialization() {
        let json = r#"{
            "name": "ASTRID",
            "total_pay": 25,
            "lines": [
                { "day": "SU", "start_hour": 20, "end_hour": 21, "hours": 1, "unrated_hours": 0, "amount": 25 }
            ]
        }"#;

        let result: PayResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.lines[0].lapse, Lapse::new(Weekday::Sun, 20, 21));
        assert_eq!(result.total_pay, 25);
    }
}
