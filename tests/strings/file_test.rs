/*!
 * File Buffering Tests
 * Whole-file reads into the arena, empty versus missing files
 */

use brocopy::memory::{Arena, ArenaError};
use brocopy::strings::{buffer_whole_file, FileError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_reads_whole_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.csv");
    fs::write(&path, "key,path\r\nfoo,/a\r\n").unwrap();

    let arena = Arena::new(1024).unwrap();
    let text = buffer_whole_file(&arena, &path).unwrap();
    assert_eq!(text, "key,path\r\nfoo,/a\r\n");
    assert!(arena.offset_of(text.as_bytes()).is_some());
}

#[test]
fn test_empty_file_is_ok_and_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let arena = Arena::new(64).unwrap();
    let text = buffer_whole_file(&arena, &path).unwrap();
    assert!(text.is_empty());
    assert_eq!(arena.position(), 0);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let arena = Arena::new(64).unwrap();

    let err = buffer_whole_file(&arena, &dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, FileError::Open { .. }));
}

#[test]
fn test_file_larger_than_arena() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.csv");
    fs::write(&path, vec![b'x'; 200]).unwrap();

    let arena = Arena::new(100).unwrap();
    let err = buffer_whole_file(&arena, &path).unwrap_err();
    assert!(matches!(
        err,
        FileError::Arena(ArenaError::OutOfSpace { requested: 200, .. })
    ));
    assert_eq!(arena.position(), 0);
}

#[test]
fn test_scratch_returns_buffer_space() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.csv");
    fs::write(&path, "key,path\nfoo,/a\n").unwrap();

    let arena = Arena::new(1024).unwrap();
    let scratch = arena.checkpoint().unwrap();
    let text = buffer_whole_file(&scratch, &path).unwrap();
    assert_eq!(text, "key,path\nfoo,/a\n");
    assert!(arena.position() > scratch.origin());

    let missing = buffer_whole_file(&scratch, &dir.path().join("missing.csv"));
    assert!(matches!(missing, Err(FileError::Open { .. })));

    scratch.restore();
    assert_eq!(arena.position(), 0);
}
