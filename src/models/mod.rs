//! Core data models for the pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_code;
mod lapse;
mod pay_rate;
mod pay_result;

pub use day_code::{day_code, parse_day_code};
pub use lapse::{END_OF_DAY, Lapse};
pub use pay_rate::PayRate;
pub use pay_result::{LapsePay, PayResult};
