use std::path::Path;
use chrono::{DateTime, Local};
use crate::file_utils::FileManager;
use crate::record_parser::LineOutcome;
use crate::vocab_model::{Metadata, OutputDocument, SkipRecord, VocabEntry, FORMAT_VERSION};

// @module: Output document assembly

/// An assembled document plus the skip records that stay out of it
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: OutputDocument,
    pub skipped: Vec<SkipRecord>,
}

impl Conversion {
    pub fn entries(&self) -> &[VocabEntry] {
        &self.document.vocab
    }
}

/// Assemble with the current local time as `generated_at`
pub fn assemble<P: AsRef<Path>>(outcomes: Vec<LineOutcome>, source_path: P) -> Conversion {
    assemble_at(outcomes, source_path, Local::now())
}

/// Partition parse outcomes into entries and skips, preserving order, and
/// build the metadata block.
pub fn assemble_at<P: AsRef<Path>>(
    outcomes: Vec<LineOutcome>,
    source_path: P,
    generated_at: DateTime<Local>,
) -> Conversion {
    let mut vocab = Vec::new();
    let mut skipped = Vec::new();

    for outcome in outcomes {
        match outcome {
            LineOutcome::Entry(entry) => vocab.push(entry),
            LineOutcome::Skipped(record) => skipped.push(record),
        }
    }

    let metadata = Metadata {
        total_entries: vocab.len(),
        skipped_entries: skipped.len(),
        source_file: FileManager::file_name_of(source_path),
        generated_at: format_timestamp(&generated_at),
        format_version: FORMAT_VERSION.to_string(),
    };

    Conversion {
        document: OutputDocument { vocab, metadata },
        skipped,
    }
}

// @returns: Local ISO-8601 timestamp with microseconds
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
