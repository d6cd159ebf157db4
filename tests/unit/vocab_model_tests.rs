/*!
 * Tests for the vocabulary data model
 */

use anyhow::Result;
use serde_json::json;
use thaivocab::vocab_model::{Metadata, OutputDocument, SkipRecord, Syllable, Tone, VocabEntry, FORMAT_VERSION};
use thaivocab::SkipReason;

fn sample_document() -> OutputDocument {
    let entry = VocabEntry::new(
        "สวัสดี".to_string(),
        "hello".to_string(),
        vec![
            Syllable::new("sa", Tone::Low),
            Syllable::new("wat", Tone::Low),
            Syllable::new("dii", Tone::Mid),
        ],
    )
    .expect("entry has syllables");

    OutputDocument {
        vocab: vec![entry],
        metadata: Metadata {
            total_entries: 1,
            skipped_entries: 0,
            source_file: "NewVocab.tsv".to_string(),
            generated_at: "2026-10-19T09:30:00.000000".to_string(),
            format_version: FORMAT_VERSION.to_string(),
        },
    }
}

/// Test tone codes and names
#[test]
fn test_tone_codesAndNames_shouldMatchFixedTable() {
    let table: Vec<(char, &str)> = Tone::ALL.iter().map(|t| (t.code(), t.name())).collect();
    assert_eq!(
        table,
        vec![('L', "Low"), ('M', "Mid"), ('R', "Rising"), ('F', "Falling"), ('H', "High")]
    );
}

/// Test parsing tone codes
#[test]
fn test_tone_fromStr_withValidAndInvalidCodes_shouldParseStrictly() {
    assert_eq!("R".parse::<Tone>().unwrap(), Tone::Rising);
    assert_eq!("H".parse::<Tone>().unwrap(), Tone::High);
    assert!("r".parse::<Tone>().is_err());
    assert!("Low".parse::<Tone>().is_err());
    assert!("".parse::<Tone>().is_err());
}

/// Test that a tone serializes as its code
#[test]
fn test_syllable_serialization_shouldUseToneCode() -> Result<()> {
    let value = serde_json::to_value(Syllable::new("maew", Tone::Mid))?;
    assert_eq!(value, json!({"romanization": "maew", "tone": "M"}));
    Ok(())
}

/// Test that entries without syllables cannot be built
#[test]
fn test_vocabEntry_new_withNoSyllables_shouldReturnNone() {
    assert!(VocabEntry::new("ก".to_string(), "k".to_string(), Vec::new()).is_none());
}

/// Test skip record display
#[test]
fn test_skipRecord_display_shouldPrefixLineNumber() {
    let record = SkipRecord {
        line_number: 12,
        reason: SkipReason::NotEnoughParts { first_field: "bad".to_string() },
    };
    assert_eq!(record.to_string(), "Line 12: Not enough parts - bad");
}

/// Test the JSON shape expected by the quiz app
#[test]
fn test_outputDocument_toJson_shouldMatchQuizShape() -> Result<()> {
    let json = sample_document().to_json()?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert_eq!(value["vocab"][0]["thai"], "สวัสดี");
    assert_eq!(value["vocab"][0]["syllables"][2]["tone"], "M");
    assert_eq!(value["metadata"]["format_version"], "1.0");
    assert_eq!(value["metadata"]["source_file"], "NewVocab.tsv");
    Ok(())
}

/// Test pretty printing and literal Thai text
#[test]
fn test_outputDocument_toJson_shouldIndentTwoSpacesAndKeepThai() -> Result<()> {
    let json = sample_document().to_json()?;

    assert!(json.contains("\n  \"vocab\": ["));
    assert!(json.contains("สวัสดี"));
    assert!(!json.contains("\\u"));
    Ok(())
}

/// Test lossless JSON round trip
#[test]
fn test_outputDocument_roundTrip_shouldBeLossless() -> Result<()> {
    let document = sample_document();
    let parsed = OutputDocument::from_json(&document.to_json()?)?;

    assert_eq!(parsed, document);
    assert_eq!(parsed.syllable_count(), 3);
    Ok(())
}

/// Test that unknown tone codes are rejected on load
#[test]
fn test_outputDocument_fromJson_withUnknownTone_shouldFail() {
    let json = r#"{"vocab":[{"thai":"ก","meaning":"k","syllables":[{"romanization":"ko","tone":"X"}]}],
        "metadata":{"total_entries":1,"skipped_entries":0,"source_file":"a.tsv",
        "generated_at":"2026-10-19T09:30:00.000000","format_version":"1.0"}}"#;
    assert!(OutputDocument::from_json(json).is_err());
}
