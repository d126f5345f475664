//! Configuration types for the pay engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML files.

use std::path::PathBuf;

use serde::Deserialize;

/// Default path of the pipe-delimited rate table.
pub const DEFAULT_RATES_PATH: &str = "payment_rates.txt";
/// Default path of the worked-hours file.
pub const DEFAULT_WORKED_HOURS_PATH: &str = "worked_hours.txt";
/// Default currency label printed after amounts.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Encoding of a rate table file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateFormat {
    /// One `DAY|HH:MM|HH:MM|RATE` entry per line.
    #[default]
    Text,
    /// A YAML document with a `rates` list.
    Yaml,
}

/// Where the rate table lives and how it is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatesConfig {
    /// Path to the rate table.
    #[serde(default = "default_rates_path")]
    pub path: PathBuf,
    /// Encoding of the rate table.
    #[serde(default)]
    pub format: RateFormat,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            path: default_rates_path(),
            format: RateFormat::default(),
        }
    }
}

/// Configuration for a payroll run, loaded from e.g. `payroll.yaml`.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollConfig {
    /// Rate table location.
    #[serde(default)]
    pub rates: RatesConfig,
    /// File holding one worked-hours record per line.
    #[serde(default = "default_worked_hours_path")]
    pub worked_hours: PathBuf,
    /// Currency label used when printing amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            rates: RatesConfig::default(),
            worked_hours: default_worked_hours_path(),
            currency: default_currency(),
        }
    }
}

/// One entry of a YAML rate table.
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntryConfig {
    /// Day code.
    pub day: String,
    /// Start time, `HH:MM`.
    pub start: String,
    /// End time, `HH:MM`.
    pub end: String,
    /// Hourly rate.
    pub rate: i64,
}

/// YAML rate table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableConfig {
    /// Rate entries in lookup order.
    pub rates: Vec<RateEntryConfig>,
}

fn default_rates_path() -> PathBuf {
    PathBuf::from(DEFAULT_RATES_PATH)
}

fn default_worked_hours_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORKED_HOURS_PATH)
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}
