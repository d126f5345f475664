//! Hourly pay engine
//!
//! This crate calculates an employee's pay from a table of hourly rates keyed
//! by day of week and hour range, and a record of the lapses the employee
//! worked. Every worked hour is paid at the first rate in the table that
//! covers it.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod sources;
