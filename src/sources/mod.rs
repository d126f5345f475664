//! Input sources for pay rates and worked hours.
//!
//! The pay calculator only depends on the [`RateSource`] and
//! [`WorkedTimeSource`] traits. Text implementations read the pipe-delimited
//! rate table and the `NAME=UNIT,...` worked-hours record; a YAML rate
//! source reads the same table from structured data.
//!
//! Sources are built in two steps: construct an empty source, then import
//! text into it.
//!
//! # Example
//!
//! ```
//! use pay_engine::sources::{RateSource, TextRateSource, TextWorkedTimeSource, WorkedTimeSource};
//!
//! let mut rates = TextRateSource::new();
//! rates.import_rates(["MO|09:00|18:00|15"]).unwrap();
//!
//! let mut worked = TextWorkedTimeSource::new();
//! worked.import_data("RENE=MO10:00-12:00").unwrap();
//!
//! assert_eq!(rates.get_rates().len(), 1);
//! assert_eq!(worked.get_name(), "RENE");
//! ```

mod text_rates;
mod text_worked;
mod yaml_rates;

use std::fs;
use std::path::Path;

use crate::config::RateFormat;
use crate::error::{EngineError, EngineResult};
use crate::models::{Lapse, PayRate};

pub use text_rates::{SkippedLine, TextRateSource};
pub use text_worked::TextWorkedTimeSource;
pub use yaml_rates::YamlRateSource;

/// Something that supplies an ordered pay-rate table.
pub trait RateSource {
    /// Returns every rate entry in table order.
    fn get_rates(&self) -> &[PayRate];
}

/// Something that supplies one employee's worked hours.
pub trait WorkedTimeSource {
    /// Returns the employee's name.
    fn get_name(&self) -> &str;

    /// Returns the worked lapses in record order.
    fn get_worked_lapses(&self) -> &[Lapse];
}

/// Reads a whole input file into a string.
///
/// # Errors
///
/// Returns [`EngineError::SourceNotFound`] if the file cannot be read.
pub fn read_source<P: AsRef<Path>>(path: P) -> EngineResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| EngineError::SourceNotFound {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Loads a rate table from `path` using the given format.
pub fn load_rate_source<P: AsRef<Path>>(
    path: P,
    format: RateFormat,
) -> EngineResult<Box<dyn RateSource>> {
    match format {
        RateFormat::Text => {
            let mut source = TextRateSource::new();
            source.import_file(path)?;
            Ok(Box::new(source))
        }
        RateFormat::Yaml => {
            let mut source = YamlRateSource::new();
            source.import_file(path)?;
            Ok(Box::new(source))
        }
    }
}
