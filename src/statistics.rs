/*!
 * Distribution statistics for a converted vocabulary.
 *
 * Nothing computed here is persisted; the numbers only feed the console
 * report printed after a conversion.
 */

use std::collections::BTreeMap;
use crate::app_config::ReportConfig;
use crate::vocab_model::{SkipRecord, Tone, VocabEntry};

/// Syllable-count and tone histograms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabStatistics {
    /// Syllables per entry -> number of entries, ascending keys
    pub syllable_histogram: BTreeMap<usize, usize>,

    /// Tone -> occurrences across all syllables, in L, M, R, F, H order
    pub tone_histogram: BTreeMap<Tone, usize>,
}

impl VocabStatistics {
    /// Compute both histograms in one pass
    pub fn from_entries(entries: &[VocabEntry]) -> Self {
        let mut stats = Self::default();

        for entry in entries {
            *stats.syllable_histogram.entry(entry.syllables.len()).or_insert(0) += 1;
            for syllable in &entry.syllables {
                *stats.tone_histogram.entry(syllable.tone).or_insert(0) += 1;
            }
        }

        stats
    }

    /// Occurrences of a tone, zero when absent
    pub fn tone_count(&self, tone: Tone) -> usize {
        self.tone_histogram.get(&tone).copied().unwrap_or(0)
    }

    pub fn total_syllables(&self) -> usize {
        self.tone_histogram.values().sum()
    }

    pub fn total_entries(&self) -> usize {
        self.syllable_histogram.values().sum()
    }
}

/// Render the human-readable conversion report, one line per element.
///
/// Blank strings separate sections.
pub fn render_report(
    stats: &VocabStatistics,
    processed: usize,
    skipped: &[SkipRecord],
    limits: &ReportConfig,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("✓ Successfully processed {} vocabulary entries", processed));
    lines.push(format!("✓ Skipped {} entries", skipped.len()));

    if !skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped entries:".to_string());
        for record in skipped.iter().take(limits.max_skipped_shown) {
            lines.push(format!("  - {}", record));
        }
        if skipped.len() > limits.max_skipped_shown {
            lines.push(format!("  ... and {} more", skipped.len() - limits.max_skipped_shown));
        }
    }

    lines.push(String::new());
    lines.push("Syllable distribution:".to_string());
    for (count, words) in stats.syllable_histogram.iter().take(limits.max_syllable_rows) {
        lines.push(format!("  {} syllable(s): {} words", count, words));
    }

    lines.push(String::new());
    lines.push("Tone distribution:".to_string());
    for tone in Tone::ALL {
        let count = stats.tone_count(tone);
        if count > 0 {
            lines.push(format!("  {} ({}): {}", tone.code(), tone.name(), count));
        }
    }

    lines
}
