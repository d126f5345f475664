//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::sources::{RateSource, load_rate_source};

use super::types::PayrollConfig;

/// Loads and provides access to payroll configuration.
///
/// Relative paths inside the configuration file are resolved against the
/// directory containing that file.
///
/// # Example
///
/// ```no_run
/// use pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// let rates = loader.load_rates()?;
/// println!("Loaded {} rates", rates.get_rates().len());
/// # Ok::<(), pay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!(path = %path_str, "Loaded payroll configuration");

        Ok(Self { config, base_dir })
    }

    /// Parses configuration from YAML text. Paths stay relative to the
    /// current directory.
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        Ok(Self {
            config: Self::parse(content, "<inline>")?,
            base_dir: PathBuf::new(),
        })
    }

    fn parse(content: &str, origin: &str) -> EngineResult<PayrollConfig> {
        // An empty file deserializes to null; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(PayrollConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Path to the rate table, resolved against the configuration file.
    pub fn rates_path(&self) -> PathBuf {
        self.resolve(&self.config.rates.path)
    }

    /// Path to the worked-hours file, resolved against the configuration file.
    pub fn worked_hours_path(&self) -> PathBuf {
        self.resolve(&self.config.worked_hours)
    }

    /// Currency label for printed amounts.
    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Loads the configured rate table.
    pub fn load_rates(&self) -> EngineResult<Box<dyn RateSource>> {
        load_rate_source(self.rates_path(), self.config.rates.format)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
