//! Worked-hours records.
//!
//! A record has the form `NAME=UNIT,UNIT,...` where each unit is a day code
//! directly followed by `HH:MM-HH:MM`, for example
//! `RENE=MO10:00-12:00,SA14:00-18:00`.

use tracing::debug;

use super::WorkedTimeSource;
use crate::error::{EngineError, EngineResult};
use crate::models::Lapse;

const NAME_SEPARATOR: char = '=';
const UNIT_SEPARATOR: char = ',';
const TIME_SEPARATOR: char = '-';
const DAY_CODE_LEN: usize = 2;

/// One employee's worked hours imported from a text record.
#[derive(Debug, Clone, Default)]
pub struct TextWorkedTimeSource {
    name: String,
    worked_lapses: Vec<Lapse>,
}

impl TextWorkedTimeSource {
    /// Creates a source with no name and no worked lapses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a worked-hours record, replacing the current name and lapses.
    ///
    /// Empty units and units without both a start and an end time are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedRecord`] when the record has no `=`,
    /// and propagates [`Lapse::parse`] errors. On error the source is left
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_engine::sources::{TextWorkedTimeSource, WorkedTimeSource};
    ///
    /// let mut source = TextWorkedTimeSource::new();
    /// source.import_data("ASTRID=MO10:00-12:00,,TH12:00-14:00").unwrap();
    ///
    /// assert_eq!(source.get_name(), "ASTRID");
    /// assert_eq!(source.get_worked_lapses().len(), 2);
    /// ```
    pub fn import_data(&mut self, data: &str) -> EngineResult<()> {
        let (name, units) =
            data.split_once(NAME_SEPARATOR)
                .ok_or_else(|| EngineError::MalformedRecord {
                    record: data.trim().to_string(),
                    message: format!("missing '{}' between name and worked hours", NAME_SEPARATOR),
                })?;

        let mut worked_lapses = Vec::new();
        for unit in units.split(UNIT_SEPARATOR) {
            if let Some(lapse) = parse_unit(unit)? {
                worked_lapses.push(lapse);
            }
        }

        debug!(name, lapses = worked_lapses.len(), "Imported worked hours");

        self.name = name.to_string();
        self.worked_lapses = worked_lapses;
        Ok(())
    }
}

impl WorkedTimeSource for TextWorkedTimeSource {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_worked_lapses(&self) -> &[Lapse] {
        &self.worked_lapses
    }
}

/// Parses one `DDHH:MM-HH:MM` unit. Returns `None` for units that are skipped.
fn parse_unit(unit: &str) -> EngineResult<Option<Lapse>> {
    // A unit of two characters or fewer has no times to split.
    let Some((split_at, _)) = unit.char_indices().nth(DAY_CODE_LEN) else {
        return Ok(None);
    };

    let (day, times) = unit.split_at(split_at);
    let mut parts = times.split(TIME_SEPARATOR);

    match (parts.next(), parts.next()) {
        (Some(start), Some(end)) => Lapse::parse(day, start, end).map(Some),
        _ => Ok(None),
    }
}
