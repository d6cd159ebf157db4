use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;
use crate::errors::SkipReason;
use crate::vocab_model::{SkipRecord, Syllable, Tone, VocabEntry};

// @module: TSV line parsing into vocabulary entries

// @const: Tone-tagged syllable, e.g. `wat<sup>L</sup>`
// Only ASCII letters and colons are accepted before the tag.
static SYLLABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z:]+)<sup>([LMRFH])</sup>").expect("syllable pattern is valid")
});

/// Result of parsing one non-blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Entry(VocabEntry),
    Skipped(SkipRecord),
}

/// Parse a single raw line.
///
/// Returns `None` for blank lines, which count neither as processed nor as
/// skipped.
pub fn parse_line(line: &str, line_number: usize) -> Option<LineOutcome> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split('\t').collect();

    if parts.len() < 3 {
        let first_field = parts.first().copied().unwrap_or("empty").to_string();
        return Some(skip(line_number, SkipReason::NotEnoughParts { first_field }));
    }

    let thai = parts[0].trim().to_string();
    let meaning = parts[1].trim().to_string();

    // Upstream exports sometimes break the romanization cell onto a new
    // physical line, which shows up here as a 4th field. Only that one extra
    // field is recovered.
    let romanization = if parts.len() > 3 {
        if parts.len() > 4 {
            debug!("Line {}: ignoring {} extra field(s)", line_number, parts.len() - 4);
        }
        format!("{} {}", parts[2].trim(), parts[3].trim())
    } else {
        parts[2].trim().to_string()
    };

    let syllables = parse_syllables(&romanization);

    match VocabEntry::new(thai.clone(), meaning, syllables) {
        Some(entry) => Some(LineOutcome::Entry(entry)),
        None => Some(skip(line_number, SkipReason::NoSyllables { thai, romanization })),
    }
}

/// Extract every tone-tagged syllable, left to right.
pub fn parse_syllables(text: &str) -> Vec<Syllable> {
    SYLLABLE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let tone = caps[2].parse::<Tone>().ok()?;
            Some(Syllable::new(caps[1].trim(), tone))
        })
        .collect()
}

/// Parse a whole file's content, numbering physical lines from 1.
pub fn parse_content(content: &str) -> Vec<LineOutcome> {
    parse_content_with_progress(content, |_, _| {})
}

/// Same as `parse_content`, calling `on_line(done, total)` after every
/// physical line, blank ones included.
pub fn parse_content_with_progress<F>(content: &str, mut on_line: F) -> Vec<LineOutcome>
where
    F: FnMut(usize, usize),
{
    let lines: Vec<&str> = content.lines().collect();
    let total = lines.len();

    let mut outcomes = Vec::with_capacity(total);
    for (index, line) in lines.iter().enumerate() {
        if let Some(outcome) = parse_line(line, index + 1) {
            outcomes.push(outcome);
        }
        on_line(index + 1, total);
    }
    outcomes
}

fn skip(line_number: usize, reason: SkipReason) -> LineOutcome {
    debug!("Skipping line {}: {}", line_number, reason);
    LineOutcome::Skipped(SkipRecord { line_number, reason })
}
