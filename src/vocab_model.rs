use std::fmt;
use std::str::FromStr;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use crate::errors::SkipReason;

// @module: Vocabulary data model

/// Version stamped into every generated document
pub const FORMAT_VERSION: &str = "1.0";

/// One of the five Thai tones, serialized as its single-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "M")]
    Mid,
    #[serde(rename = "R")]
    Rising,
    #[serde(rename = "F")]
    Falling,
    #[serde(rename = "H")]
    High,
}

impl Tone {
    /// Canonical report order
    pub const ALL: [Tone; 5] = [Tone::Low, Tone::Mid, Tone::Rising, Tone::Falling, Tone::High];

    // @returns: Single-letter tone code
    pub fn code(&self) -> char {
        match self {
            Self::Low => 'L',
            Self::Mid => 'M',
            Self::Rising => 'R',
            Self::Falling => 'F',
            Self::High => 'H',
        }
    }

    // @returns: Human-readable tone name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::Rising => "Rising",
            Self::Falling => "Falling",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Tone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" => Ok(Self::Low),
            "M" => Ok(Self::Mid),
            "R" => Ok(Self::Rising),
            "F" => Ok(Self::Falling),
            "H" => Ok(Self::High),
            _ => Err(anyhow!("Invalid tone code: {}", s)),
        }
    }
}

/// A romanized syllable tagged with its tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub romanization: String,
    pub tone: Tone,
}

impl Syllable {
    pub fn new(romanization: impl Into<String>, tone: Tone) -> Self {
        Self {
            romanization: romanization.into(),
            tone,
        }
    }
}

/// A single quiz word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    // @field: Word in Thai script
    pub thai: String,

    // @field: English meaning
    pub meaning: String,

    // @field: Syllables in pronunciation order, never empty
    pub syllables: Vec<Syllable>,
}

impl VocabEntry {
    // @creates: Entry only when at least one syllable is present
    pub fn new(thai: String, meaning: String, syllables: Vec<Syllable>) -> Option<Self> {
        if syllables.is_empty() {
            return None;
        }
        Some(Self { thai, meaning, syllables })
    }
}

/// A rejected input line. Reported on the console, never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRecord {
    /// 1-based physical line number in the source file
    pub line_number: usize,
    pub reason: SkipReason,
}

impl fmt::Display for SkipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.reason)
    }
}

/// Document metadata block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_entries: usize,
    pub skipped_entries: usize,
    pub source_file: String,
    pub generated_at: String,
    pub format_version: String,
}

/// The JSON document consumed by the quiz app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub vocab: Vec<VocabEntry>,
    pub metadata: Metadata,
}

impl OutputDocument {
    /// Render as pretty JSON (2-space indent, non-ASCII kept literal)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a previously generated document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of syllables across all entries
    pub fn syllable_count(&self) -> usize {
        self.vocab.iter().map(|entry| entry.syllables.len()).sum()
    }
}
