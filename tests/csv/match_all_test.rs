/*!
 * Match All Tests
 * Every data row in file order, with the safety cap
 */

use brocopy::core::limits::MAX_CSV_ROWS;
use brocopy::csv::{match_all, CsvMatcher};
use brocopy::memory::Arena;
use brocopy::strings::StrSlice;
use pretty_assertions::assert_eq;

fn paths(csv: &str) -> Vec<String> {
    let arena = Arena::new(64 * 1024).unwrap();
    let matches = match_all(&arena, StrSlice::new(csv)).unwrap();
    assert_eq!(matches.count, matches.paths.len());
    matches.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_every_row() {
    assert_eq!(paths("key,path\na,/x\nb,/y\n"), ["/x", "/y"]);
}

#[test]
fn test_crlf_rows() {
    assert_eq!(paths("key,path\r\na,/x\r\nb,/y"), ["/x", "/y"]);
}

#[test]
fn test_empty_inputs() {
    assert!(paths("").is_empty());
    assert!(paths("key,path\n").is_empty());
}

#[test]
fn test_default_cap() {
    let mut csv = String::from("key,path\n");
    for i in 0..MAX_CSV_ROWS + 5 {
        csv.push_str(&format!("k{},/p/{}\n", i, i));
    }

    let arena = Arena::new(1024 * 1024).unwrap();
    let matches = CsvMatcher::default()
        .match_all(&arena, StrSlice::new(&csv))
        .unwrap();
    assert_eq!(matches.count, MAX_CSV_ROWS);
    assert!(matches.truncated);
    assert_eq!(matches.iter().last(), Some(StrSlice::new("/p/999")));
}
