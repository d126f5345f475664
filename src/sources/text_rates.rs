//! Pipe-delimited pay-rate tables.
//!
//! Each line has the form `DAY|HH:MM|HH:MM|RATE`, for example
//! `MO|00:00|09:00|25`. Lines that do not have exactly four fields are
//! dropped and recorded as [`SkippedLine`]s.

use std::path::Path;

use tracing::{debug, warn};

use super::{RateSource, read_source};
use crate::error::EngineResult;
use crate::models::PayRate;

const FIELD_SEPARATOR: char = '|';

/// A rate-table line that was dropped because it did not have four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position of the line within its import call.
    pub line_number: usize,
    /// The line as it was read.
    pub text: String,
}

/// Rate table imported from text lines.
#[derive(Debug, Clone, Default)]
pub struct TextRateSource {
    rates: Vec<PayRate>,
    skipped: Vec<SkippedLine>,
}

impl TextRateSource {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the rates described by `lines` to the table.
    ///
    /// Returns the number of rates imported. Lines that do not split into
    /// exactly four fields are skipped. The import is all or nothing: if any
    /// line fails to parse, the error is returned and the table is left as
    /// it was before the call.
    ///
    /// Day codes are matched exactly. An unknown code such as `mo` is an
    /// [`UnknownDayCode`](crate::error::EngineError::UnknownDayCode) error
    /// rather than an entry that is accepted and never matches, so one bad
    /// code rejects the whole import.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_engine::sources::{RateSource, TextRateSource};
    ///
    /// let mut source = TextRateSource::new();
    /// let imported = source
    ///     .import_rates(["MO|09:00|18:00|15", "not a rate", "MO|18:00|00:00|20"])
    ///     .unwrap();
    ///
    /// assert_eq!(imported, 2);
    /// assert_eq!(source.get_rates()[1].lapse.end_hour, 24);
    /// assert_eq!(source.skipped_lines()[0].line_number, 2);
    /// ```
    pub fn import_rates<I, S>(&mut self, lines: I) -> EngineResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rates = Vec::new();
        let mut skipped = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

            let [day, start, end, rate] = fields.as_slice() else {
                warn!(
                    line_number = index + 1,
                    fields = fields.len(),
                    "Skipping pay rate line without four fields"
                );
                skipped.push(SkippedLine {
                    line_number: index + 1,
                    text: line.to_string(),
                });
                continue;
            };

            rates.push(PayRate::parse(day, start, end, rate)?);
        }

        let imported = rates.len();
        debug!(imported, skipped = skipped.len(), "Imported pay rates");

        self.rates.extend(rates);
        self.skipped.extend(skipped);
        Ok(imported)
    }

    /// Reads a rate table file and imports its lines.
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> EngineResult<usize> {
        let path = path.as_ref();
        let content = read_source(path)?;
        debug!(path = %path.display(), "Reading pay rate table");
        self.import_rates(content.lines())
    }

    /// Lines dropped by previous imports.
    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.skipped
    }
}

impl RateSource for TextRateSource {
    fn get_rates(&self) -> &[PayRate] {
        &self.rates
    }
}
