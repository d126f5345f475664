//! YAML pay-rate tables.
//!
//! The structured counterpart of the pipe-delimited table:
//!
//! ```yaml
//! rates:
//!   - { day: MO, start: "00:00", end: "09:00", rate: 25 }
//!   - { day: MO, start: "09:00", end: "18:00", rate: 15 }
//! ```
//!
//! Entries go through the same parsing as text lines, so `end: "00:00"`
//! still means midnight.

use std::path::Path;

use tracing::debug;

use super::{RateSource, read_source};
use crate::config::RateTableConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Lapse, PayRate};

/// Rate table imported from YAML.
#[derive(Debug, Clone, Default)]
pub struct YamlRateSource {
    rates: Vec<PayRate>,
}

impl YamlRateSource {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the rates in a YAML document to the table.
    ///
    /// `origin` names the document in error messages. Like
    /// [`TextRateSource::import_rates`](super::TextRateSource::import_rates)
    /// the import is all or nothing.
    pub fn import_yaml(&mut self, content: &str, origin: &str) -> EngineResult<usize> {
        let table: RateTableConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let rates = table
            .rates
            .iter()
            .map(|entry| {
                let lapse = Lapse::parse(&entry.day, &entry.start, &entry.end)?;
                Ok(PayRate::new(lapse, entry.rate))
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let imported = rates.len();
        debug!(origin, imported, "Imported pay rates from YAML");

        self.rates.extend(rates);
        Ok(imported)
    }

    /// Reads a YAML rate table file.
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> EngineResult<usize> {
        let path = path.as_ref();
        let content = read_source(path)?;
        self.import_yaml(&content, &path.display().to_string())
    }
}

impl RateSource for YamlRateSource {
    fn get_rates(&self) -> &[PayRate] {
        &self.rates
    }
}
