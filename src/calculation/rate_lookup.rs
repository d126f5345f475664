//! Rate lookup for a single worked hour.

use chrono::Weekday;

use crate::models::PayRate;

/// Finds the rate that applies to `hour` on `day`.
///
/// Entries are scanned in table order and the first one whose lapse is on
/// `day` and contains `hour` wins. Returns `None` when nothing matches.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::find_rate;
/// use pay_engine::models::PayRate;
/// use chrono::Weekday;
///
/// let rates = vec![
///     PayRate::parse("MO", "09:00", "18:00", "15").unwrap(),
///     PayRate::parse("MO", "18:00", "00:00", "20").unwrap(),
/// ];
///
/// assert_eq!(find_rate(&rates, Weekday::Mon, 18).unwrap().hourly_rate, 20);
/// assert!(find_rate(&rates, Weekday::Mon, 3).is_none());
/// assert!(find_rate(&rates, Weekday::Tue, 10).is_none());
/// ```
pub fn find_rate(rates: &[PayRate], day: Weekday, hour: u32) -> Option<&PayRate> {
    rates
        .iter()
        .find(|rate| rate.lapse.day == day && rate.lapse.contains(hour))
}
