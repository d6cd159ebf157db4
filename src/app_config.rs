use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use crate::errors::ConvertError;
use crate::file_utils::FileManager;

/// Application configuration module
/// Holds the output location, logging level and report limits. Every field
/// has a default so a partial config file is accepted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Where the vocabulary JSON is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Console report limits
    #[serde(default)]
    pub report: ReportConfig,
}

/// Limits applied to the console report
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    // @field: Skip reasons printed verbatim before summarizing the rest
    #[serde(default = "default_max_skipped_shown")]
    pub max_skipped_shown: usize,

    // @field: Distinct syllable counts listed in the distribution
    #[serde(default = "default_max_syllable_rows")]
    pub max_syllable_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_skipped_shown: default_max_skipped_shown(),
            max_syllable_rows: default_max_syllable_rows(),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// `data/vocabulary.json` next to the executable, or relative to the
/// working directory when the executable location is unknown.
pub fn default_output_path() -> PathBuf {
    let relative = PathBuf::from("data").join("vocabulary.json");
    match FileManager::executable_dir() {
        Some(dir) => dir.join(relative),
        None => relative,
    }
}

fn default_max_skipped_shown() -> usize {
    10
}

fn default_max_syllable_rows() -> usize {
    10
}

impl Config {
    /// Load a configuration file in JSON format
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ConvertError::Config("output path is empty".to_string()));
        }

        if self.output_path.file_name().is_none() {
            return Err(ConvertError::Config(format!(
                "output path has no file name: {}",
                self.output_path.display()
            )));
        }

        if self.report.max_skipped_shown == 0 || self.report.max_syllable_rows == 0 {
            return Err(ConvertError::Config("report limits must be at least 1".to_string()));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_path: default_output_path(),
            log_level: LogLevel::default(),
            report: ReportConfig::default(),
        }
    }
}
