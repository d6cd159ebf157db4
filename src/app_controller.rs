use anyhow::{Result, Context};
use log::{info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::Config;
use crate::document::{self, Conversion};
use crate::errors::ConvertError;
use crate::file_utils::FileManager;
use crate::record_parser;
use crate::statistics::{self, VocabStatistics};

// @module: Application controller for vocabulary conversion

/// Outcome of a single conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_entries: usize,
    pub skipped_entries: usize,
    /// `None` for a dry run
    pub output_path: Option<PathBuf>,
    /// Statistics report, independent of the log level
    pub report: Vec<String>,
}

/// Main application controller for TSV to JSON conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole pipeline on one input file.
    ///
    /// The input is checked before anything is written, so a missing file
    /// never leaves a partial output behind.
    pub fn run(&self, input_file: &Path, dry_run: bool) -> Result<RunSummary> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(input_file) {
            return Err(ConvertError::InputNotFound(input_file.to_path_buf()).into());
        }

        info!("Reading file: {}", input_file.display());
        let content = FileManager::read_to_string(input_file)?;

        let conversion = self.convert(&content, input_file);

        let report = self.report(&conversion);

        let output_path = if dry_run {
            info!("Dry run, nothing written");
            None
        } else {
            let path = self.write_document(&conversion)?;
            info!("");
            info!("✓ Vocabulary saved to: {}", path.display());
            Some(path)
        };

        debug!("Conversion finished in {}", Self::format_duration(start_time.elapsed()));

        Ok(RunSummary {
            total_entries: conversion.document.metadata.total_entries,
            skipped_entries: conversion.document.metadata.skipped_entries,
            output_path,
            report,
        })
    }

    /// Parse file content and assemble the output document
    pub fn convert(&self, content: &str, source_path: &Path) -> Conversion {
        let progress_bar = ProgressBar::new(content.lines().count() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar.set_message("Parsing");

        let pb = progress_bar.clone();
        let outcomes = record_parser::parse_content_with_progress(content, move |done, _total| {
            pb.set_position(done as u64);
        });
        progress_bar.finish_and_clear();

        document::assemble(outcomes, source_path)
    }

    /// Build the statistics report for a conversion
    pub fn report(&self, conversion: &Conversion) -> Vec<String> {
        let stats = VocabStatistics::from_entries(conversion.entries());
        let mut lines = vec![String::new()];
        lines.extend(statistics::render_report(
            &stats,
            conversion.document.metadata.total_entries,
            &conversion.skipped,
            &self.config.report,
        ));
        lines
    }

    /// Serialize the document to the configured output path
    pub fn write_document(&self, conversion: &Conversion) -> Result<PathBuf> {
        let json = conversion.document.to_json().map_err(ConvertError::from)?;
        let output_path = self.config.output_path.clone();
        FileManager::write_to_file(&output_path, &json)?;
        Ok(output_path)
    }

    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
