// wmark-core/tests/discovery_tests.rs

use wmark_core::discovery::find_processable_files;
use wmark_core::error::CoreError;

use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_find_processable_files_mixed_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("a.jpg"))?;
    File::create(input_dir.join("b.mp4"))?;
    File::create(input_dir.join("c.MKV"))?; // Test case insensitivity
    File::create(input_dir.join("readme.txt"))?;
    File::create(input_dir.join("noextension"))?;
    fs::create_dir(input_dir.join("subdir"))?;
    File::create(input_dir.join("subdir").join("nested.mp4"))?; // Top level only

    let mut files = find_processable_files(input_dir)?;
    files.sort();

    assert_eq!(files.len(), 3);
    assert_eq!(files[0].file_name().unwrap(), "a.jpg");
    assert_eq!(files[1].file_name().unwrap(), "b.mp4");
    assert_eq!(files[2].file_name().unwrap(), "c.MKV"); // Original case preserved

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_processable_files_empty_is_not_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("document.txt"))?;
    fs::create_dir(input_dir.join("subdir"))?;

    let files = find_processable_files(input_dir)?;
    assert!(files.is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_processable_files_nonexistent_dir() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    let result = find_processable_files(&non_existent_path);
    assert!(result.is_err());
    match result.err().unwrap() {
        CoreError::Io(_) => {} // Expected error type
        e => panic!("Unexpected error type: {:?}", e),
    }
}
