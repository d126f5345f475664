//! Configuration loading for the pay engine.
//!
//! This module loads a payroll configuration from YAML: where the rate
//! table and worked-hours file live, how the rate table is encoded, and the
//! currency label for printed amounts. It also holds the deserialized shape
//! of YAML rate tables.
//!
//! # Example
//!
//! ```
//! use pay_engine::config::{ConfigLoader, RateFormat};
//!
//! let loader = ConfigLoader::from_yaml("rates:\n  format: yaml\n").unwrap();
//! assert_eq!(loader.config().rates.format, RateFormat::Yaml);
//! assert_eq!(loader.currency(), "USD");
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_CURRENCY, DEFAULT_RATES_PATH, DEFAULT_WORKED_HOURS_PATH, PayrollConfig, RateEntryConfig,
    RateFormat, RateTableConfig, RatesConfig,
};
