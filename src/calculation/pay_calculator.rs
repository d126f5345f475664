//! Pay calculation for one employee.
//!
//! The calculator walks every whole hour of every worked lapse, looks up the
//! rate for that hour with [`find_rate`] and adds it to the lapse subtotal.
//! Rates are resolved per hour because one worked lapse can cross several
//! differently-rated lapses of the table.

use tracing::debug;

use super::rate_lookup::find_rate;
use crate::error::{EngineError, EngineResult};
use crate::models::{Lapse, LapsePay, PayRate, PayResult};
use crate::sources::{RateSource, TextWorkedTimeSource, WorkedTimeSource};

/// Calculates pay from a worked-time source and a rate table.
///
/// The calculator borrows both; neither is copied.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::PayCalculator;
/// use pay_engine::sources::{TextRateSource, TextWorkedTimeSource};
///
/// let mut rates = TextRateSource::new();
/// rates.import_rates(["MO|09:00|18:00|15", "MO|18:00|00:00|20"]).unwrap();
///
/// let mut worked = TextWorkedTimeSource::new();
/// worked.import_data("RENE=MO16:00-20:00").unwrap();
///
/// let result = PayCalculator::new(&worked)
///     .with_rate_source(&rates)
///     .calculate()
///     .unwrap();
///
/// assert_eq!(result.name, "RENE");
/// assert_eq!(result.total_pay, 15 + 15 + 20 + 20);
/// ```
pub struct PayCalculator<'a> {
    worked_time: &'a dyn WorkedTimeSource,
    rates: Option<&'a [PayRate]>,
}

impl<'a> PayCalculator<'a> {
    /// Creates a calculator with no rate table yet.
    pub fn new(worked_time: &'a dyn WorkedTimeSource) -> Self {
        Self {
            worked_time,
            rates: None,
        }
    }

    /// Uses the rates of `source`.
    pub fn with_rate_source(mut self, source: &'a dyn RateSource) -> Self {
        self.rates = Some(source.get_rates());
        self
    }

    /// Replaces the active rate table.
    pub fn set_rates(&mut self, rates: &'a [PayRate]) {
        self.rates = Some(rates);
    }

    /// Returns the active rate table, if one has been supplied.
    pub fn rates(&self) -> Option<&'a [PayRate]> {
        self.rates
    }

    /// Calculates the employee's pay.
    ///
    /// Hours with no matching rate are paid 0.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingConfiguration`] if no rate table was
    /// ever supplied. An explicitly supplied empty table is valid. Returns
    /// [`EngineError::PayOverflow`] if the total does not fit in an `i64`.
    pub fn calculate(&self) -> EngineResult<PayResult> {
        let rates = self.rates.ok_or_else(|| EngineError::MissingConfiguration {
            message: "no pay rates supplied to the calculator".to_string(),
        })?;

        let name = self.worked_time.get_name();
        let overflow = || EngineError::PayOverflow {
            name: name.to_string(),
        };

        let lines = self
            .worked_time
            .get_worked_lapses()
            .iter()
            .map(|lapse| calculate_lapse(lapse, rates).ok_or_else(overflow))
            .collect::<EngineResult<Vec<LapsePay>>>()?;

        let result = PayResult::from_lines(name, lines).ok_or_else(overflow)?;
        debug!(
            name = %result.name,
            total_pay = result.total_pay,
            unrated_hours = result.unrated_hours(),
            "Calculated pay"
        );

        Ok(result)
    }
}

/// Calculates pay for one worked lapse. Returns `None` if the amount
/// overflows.
fn calculate_lapse(lapse: &Lapse, rates: &[PayRate]) -> Option<LapsePay> {
    let mut amount: i64 = 0;
    let mut unrated_hours = 0;

    for hour in lapse.hours() {
        match find_rate(rates, lapse.day, hour) {
            Some(rate) => amount = amount.checked_add(rate.hourly_rate)?,
            None => unrated_hours += 1,
        }
    }

    Some(LapsePay {
        lapse: *lapse,
        hours: lapse.duration_hours(),
        unrated_hours,
        amount,
    })
}

/// Parses one worked-hours record and calculates its pay against `rates`.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::calculate_pay;
/// use pay_engine::models::PayRate;
///
/// let rates = vec![PayRate::parse("SU", "18:00", "00:00", "25").unwrap()];
/// let result = calculate_pay("ASTRID=SU20:00-21:00", &rates).unwrap();
///
/// assert_eq!(result.into_pair(), ("ASTRID".to_string(), 25));
/// ```
pub fn calculate_pay(record: &str, rates: &[PayRate]) -> EngineResult<PayResult> {
    let mut worked_time = TextWorkedTimeSource::new();
    worked_time.import_data(record)?;

    let mut calculator = PayCalculator::new(&worked_time);
    calculator.set_rates(rates);
    calculator.calculate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::TextRateSource;
    use chrono::Weekday;

    const RENE: &str =
        "RENE=MO10:00-12:00,TU10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00";
    const ASTRID: &str = "ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00";

    fn default_rate_lines() -> Vec<String> {
        let mut lines = Vec::new();
        for day in ["MO", "TU", "WE", "TH", "FR"] {
            lines.push(format!("{day}|00:00|09:00|25"));
            lines.push(format!("{day}|09:00|18:00|15"));
            lines.push(format!("{day}|18:00|00:00|20"));
        }
        for day in ["SA", "SU"] {
            lines.push(format!("{day}|00:00|09:00|30"));
            lines.push(format!("{day}|09:00|18:00|20"));
            lines.push(format!("{day}|18:00|00:00|25"));
        }
        lines
    }

    fn default_rates() -> TextRateSource {
        let mut source = TextRateSource::new();
        source.import_rates(default_rate_lines()).unwrap();
        source
    }

    fn worked(record: &str) -> TextWorkedTimeSource {
        let mut source = TextWorkedTimeSource::new();
        source.import_data(record).unwrap();
        source
    }

    #[test]
    fn test_rene_is_paid_215() {
        let rates = default_rates();
        let worked = worked(RENE);

        let result = PayCalculator::new(&worked)
            .with_rate_source(&rates)
            .calculate()
            .unwrap();

        assert_eq!(result.name, "RENE");
        assert_eq!(result.total_pay, 215);
        let amounts: Vec<i64> = result.lines.iter().map(|l| l.amount).collect();
        assert_eq!(amounts, vec![30, 30, 50, 80, 25]);
    }

    #[test]
    fn test_astrid_is_paid_85() {
        let rates = default_rates();
        let result = calculate_pay(ASTRID, rates.get_rates()).unwrap();

        assert_eq!(result.into_pair(), ("ASTRID".to_string(), 85));
    }

    #[test]
    fn test_missing_rates_is_a_configuration_error() {
        let worked = worked(ASTRID);
        let result = PayCalculator::new(&worked).calculate();

        assert!(matches!(
            result,
            Err(EngineError::MissingConfiguration { .. })
        ));
    }

    #[test]
    fn test_empty_rate_table_pays_zero() {
        let worked = worked(ASTRID);
        let mut calculator = PayCalculator::new(&worked);
        calculator.set_rates(&[]);

        let result = calculator.calculate().unwrap();
        assert_eq!(result.total_pay, 0);
        assert_eq!(result.unrated_hours(), 5);
    }

    #[test]
    fn test_set_rates_replaces_source_rates() {
        let rates = default_rates();
        let worked = worked("RENE=MO10:00-12:00");
        let flat = vec![PayRate::parse("MO", "00:00", "00:00", "100").unwrap()];

        let mut calculator = PayCalculator::new(&worked).with_rate_source(&rates);
        calculator.set_rates(&flat);

        assert_eq!(calculator.rates().unwrap().len(), 1);
        assert_eq!(calculator.calculate().unwrap().total_pay, 200);
    }

    #[test]
    fn test_set_rates_exposes_imported_entries() {
        let worked = TextWorkedTimeSource::new();
        let mut rates = TextRateSource::new();
        rates
            .import_rates(["MO|09:00|18:00|15", "MO|18:00|00:00|20"])
            .unwrap();

        let mut calculator = PayCalculator::new(&worked);
        calculator.set_rates(rates.get_rates());

        let rate = calculator.rates().unwrap()[1];
        assert_eq!(rate.lapse.start_hour, 18);
        assert_eq!(rate.lapse.end_hour, 24);
        assert_eq!(rate.lapse.day, Weekday::Mon);
        assert_eq!(rate.hourly_rate, 20);
    }

    #[test]
    fn test_lapse_crossing_rate_boundary_is_split_per_hour() {
        let rates = default_rates();
        let result = calculate_pay("RENE=TU07:00-11:00", rates.get_rates()).unwrap();

        // 07 and 08 at 25, 09 and 10 at 15.
        assert_eq!(result.total_pay, 80);
    }

    #[test]
    fn test_unmatched_hours_contribute_zero() {
        let rates = vec![PayRate::parse("MO", "09:00", "12:00", "15").unwrap()];
        let result = calculate_pay("RENE=MO08:00-13:00,TU09:00-10:00", &rates).unwrap();

        assert_eq!(result.total_pay, 45);
        assert_eq!(result.lines[0].unrated_hours, 2);
        assert_eq!(result.lines[1].unrated_hours, 1);
        assert_eq!(result.lines[1].amount, 0);
    }

    #[test]
    fn test_worked_until_midnight() {
        let rates = default_rates();
        let result = calculate_pay("RENE=SA22:00-00:00", rates.get_rates()).unwrap();

        assert_eq!(result.lines[0].hours, 2);
        assert_eq!(result.total_pay, 50);
    }

    #[test]
    fn test_inverted_lapse_pays_nothing() {
        let rates = default_rates();
        let result = calculate_pay("RENE=MO12:00-10:00", rates.get_rates()).unwrap();

        assert_eq!(result.total_pay, 0);
        assert_eq!(result.lines[0].hours, 0);
    }

    #[test]
    fn test_negative_rates_are_summed() {
        let rates = vec![PayRate::parse("FR", "00:00", "00:00", "-3").unwrap()];
        let result = calculate_pay("RENE=FR10:00-12:00", &rates).unwrap();

        assert_eq!(result.total_pay, -6);
    }

    #[test]
    fn test_extreme_rate_within_lapse_overflows() {
        let rates = vec![PayRate::parse("MO", "00:00", "00:00", "9223372036854775807").unwrap()];
        let result = calculate_pay("RENE=MO10:00-12:00", &rates);

        match result {
            Err(EngineError::PayOverflow { name }) => assert_eq!(name, "RENE"),
            other => panic!("Expected PayOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_extreme_rate_across_lapses_overflows() {
        let rates = vec![
            PayRate::parse("MO", "00:00", "00:00", "9223372036854775807").unwrap(),
            PayRate::parse("TU", "00:00", "00:00", "1").unwrap(),
        ];
        let result = calculate_pay("RENE=MO10:00-11:00,TU10:00-11:00", &rates);

        assert!(matches!(result, Err(EngineError::PayOverflow { .. })));
    }

    #[test]
    fn test_extreme_negative_rate_overflows() {
        let rates = vec![PayRate::parse("SU", "00:00", "00:00", "-9223372036854775808").unwrap()];
        let result = calculate_pay("RENE=SU10:00-12:00", &rates);

        assert!(matches!(result, Err(EngineError::PayOverflow { .. })));
    }

    #[test]
    fn test_largest_single_hour_does_not_overflow() {
        let rates = vec![PayRate::parse("MO", "00:00", "00:00", "9223372036854775807").unwrap()];
        let result = calculate_pay("RENE=MO10:00-11:00", &rates).unwrap();

        assert_eq!(result.total_pay, i64::MAX);
    }

    #[test]
    fn test_record_without_units_pays_zero() {
        let rates = default_rates();
        let result = calculate_pay("RENE=", rates.get_rates()).unwrap();

        assert_eq!(result.name, "RENE");
        assert_eq!(result.total_pay, 0);
        assert!(result.lines.is_empty());
    }

    #[test]
    fn test_calculate_pay_propagates_parse_errors() {
        let rates = default_rates();
        let result = calculate_pay("RENE=MOxx:00-12:00", rates.get_rates());

        assert!(matches!(result, Err(EngineError::InvalidHour { .. })));
    }
}
