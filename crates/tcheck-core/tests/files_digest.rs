use std::fs;

use tcheck_core::{compare_files, file_digest, regular_file_len, FileComparison};

#[test]
fn digest_is_independent_of_chunk_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("payload.txt");
    fs::write(&path, b"hello world").expect("write");
    let expected = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
    for chunk in [1, 4, 0x10000] {
        assert_eq!(file_digest(&path, chunk).expect("digest"), expected);
    }
}

#[test]
fn size_mismatch_is_reported_before_reading() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"short").expect("write");
    fs::write(&b, b"much longer").expect("write");
    assert_eq!(
        compare_files(&a, &b, 0x10000).expect("compare"),
        FileComparison::SizeMismatch { left: 5, right: 11 }
    );
}

#[test]
fn files_are_really_compared() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"abcdef").expect("write");
    fs::write(&b, b"abcxef").expect("write");
    assert_eq!(
        compare_files(&a, &b, 0x10000).expect("compare"),
        FileComparison::ContentMismatch { offset: 0 }
    );
}

#[test]
fn missing_and_directory_paths_are_typed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");
    assert!(regular_file_len(&missing).unwrap_err().is_not_found());
    assert!(regular_file_len(dir.path()).unwrap_err().is_directory());
    assert!(compare_files(dir.path(), &missing, 16).is_err());
}
