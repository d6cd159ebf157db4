/*!
 * Error types for the thaivocab converter.
 *
 * `ConvertError` aborts a run. `SkipReason` only rejects one input line;
 * it is recorded and the conversion carries on.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input TSV file does not exist
    #[error("File '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// Reading the input file failed
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the output document failed
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The output document could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Why a single input line was not turned into a vocabulary entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than three tab-separated fields
    #[error("Not enough parts - {first_field}")]
    NotEnoughParts {
        /// First field of the line, or "empty"
        first_field: String,
    },

    /// No `<letters><sup>T</sup>` syllable in the romanization field
    #[error("Could not parse syllables - {thai}: {romanization}")]
    NoSyllables {
        /// Thai word of the rejected line
        thai: String,
        /// Raw romanization text that failed to match
        romanization: String,
    },
}
