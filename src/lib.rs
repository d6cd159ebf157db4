/*!
 * # thaivocab - Thai vocabulary converter for the tone quiz
 *
 * Converts a tab-separated vocabulary export into the JSON document loaded
 * by the Thai tone quiz app.
 *
 * ## Input
 *
 * One word per line, three tab-separated columns:
 * - Thai word
 * - English meaning
 * - Romanization with tones in `<sup>` tags, e.g. `sa<sup>L</sup> wat<sup>L</sup> dii<sup>M</sup>`
 *
 * ## Architecture
 *
 * - `record_parser`: line splitting and syllable/tone extraction
 * - `document`: assembly of the output document and its metadata
 * - `statistics`: syllable and tone distributions for the console report
 * - `vocab_model`: tones, syllables, entries, skip records, output document
 * - `app_controller`: drives a full conversion run
 * - `app_config`: configuration management
 * - `file_utils`: file system operations
 * - `errors`: error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod record_parser;
pub mod statistics;
pub mod vocab_model;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use document::Conversion;
pub use errors::{ConvertError, SkipReason};
pub use record_parser::{parse_line, parse_syllables, LineOutcome};
pub use statistics::VocabStatistics;
pub use vocab_model::{OutputDocument, SkipRecord, Syllable, Tone, VocabEntry};
