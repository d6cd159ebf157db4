/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use thaivocab::file_utils::FileManager;
use thaivocab::ConvertError;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "vocab.tsv", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for directories and missing files
#[test]
fn test_file_exists_withDirectoryOrMissingFile_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.tsv")));
    Ok(())
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/// Test that write_to_file creates the parent directory
#[test]
fn test_write_to_file_withMissingParent_shouldCreateItAndWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("data").join("vocabulary.json");

    FileManager::write_to_file(&target, "{}")?;

    assert_eq!(FileManager::read_to_string(&target)?, "{}");
    Ok(())
}

/// Test that reading a missing file reports the path
#[test]
fn test_read_to_string_withMissingFile_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("nope.tsv");

    match FileManager::read_to_string(&missing) {
        Err(ConvertError::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected a read error, got {:?}", other),
    }
    Ok(())
}

/// Test base file name extraction
#[test]
fn test_file_name_of_withVariousPaths_shouldReturnBaseName() {
    assert_eq!(FileManager::file_name_of("/tmp/input/NewVocab.tsv"), "NewVocab.tsv");
    assert_eq!(FileManager::file_name_of(Path::new("NewVocab.tsv")), "NewVocab.tsv");
    assert_eq!(FileManager::file_name_of("/"), "");
}

/// Test that the executable directory is the directory of the running binary
#[test]
fn test_executable_dir_shouldContainCurrentExe() -> Result<()> {
    let exe = std::env::current_exe()?;
    let dir = FileManager::executable_dir().expect("executable directory");

    assert!(dir.is_dir());
    assert_eq!(exe.parent(), Some(dir.as_path()));
    Ok(())
}
