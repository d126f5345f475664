//! Calculation logic for the pay engine.
//!
//! This module contains the hourly rate lookup and the pay calculator that
//! accumulates rates over every worked hour.

mod pay_calculator;
mod rate_lookup;

pub use pay_calculator::{PayCalculator, calculate_pay};
pub use rate_lookup::find_rate;
