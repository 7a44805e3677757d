/*!
 * Slice Tests
 * Comparison, sentinel searches, clamping and arena formatting
 */

use brocopy::arena_format;
use brocopy::memory::Arena;
use brocopy::strings::{concat_in, copy_in, write_into, StrSlice};
use pretty_assertions::assert_eq;

#[test]
fn test_constructors() {
    let buf = *b"abc\0def";
    assert_eq!(StrSlice::from_buf(&buf).len(), 7);
    assert_eq!(StrSlice::from_nul_terminated(&buf), "abc");
    assert_eq!(StrSlice::from_nul_terminated(b"no nul"), "no nul");
    assert_eq!(StrSlice::with_len(&buf, 2), "ab");
    assert_eq!(StrSlice::with_len(&buf, 100).len(), 7);
}

#[test]
fn test_equality() {
    let a = StrSlice::new("Report.PRN");
    assert!(a.equals("Report.PRN".into()));
    assert!(!a.equals("report.prn".into()));
    assert!(a.equals_insensitive("report.prn".into()));
    assert!(!a.equals_insensitive("report.prn ".into()));
}

#[test]
fn test_prefix_matching() {
    let long = StrSlice::new("keyboard");
    assert!(long.match_prefix("key".into(), 3));
    assert!(!long.match_prefix("ke".into(), 3));
    assert!(long.match_prefix_insensitive("KEY".into(), 3));
}

#[test]
fn test_not_found_sentinel_is_len() {
    let s = StrSlice::new("a,b,c");
    assert_eq!(s.index_of(b','), 1);
    assert_eq!(s.last_index_of(b','), 3);
    assert_eq!(s.index_of(b';'), s.len());
    assert_eq!(s.last_index_of(b';'), s.len());
    assert_eq!(s.index_of_substr("b,".into()), 2);
    assert_eq!(s.index_of_substr("zz".into()), s.len());
    assert_eq!(StrSlice::empty().index_of(b'x'), 0);
}

#[test]
fn test_clamping_never_fails() {
    let s = StrSlice::new("hello");
    assert_eq!(s.skip(2), "llo");
    assert_eq!(s.skip(99), "");
    assert_eq!(s.prefix(2), "he");
    assert_eq!(s.prefix(99), "hello");
    assert_eq!(s.suffix_of_length(3), "llo");
    assert_eq!(s.suffix_of_length(99), "hello");
}

#[test]
fn test_views_alias_the_buffer() {
    let text = String::from("one,two");
    let s = StrSlice::new(&text);
    let tail = s.skip(s.index_of(b',') + 1);
    assert_eq!(tail.as_bytes().as_ptr(), text[4..].as_ptr());
}

#[test]
fn test_arena_copies_are_nul_terminated() {
    let arena = Arena::new(256).unwrap();

    let formatted = arena_format!(&arena, "{}:{:03}", "row", 7).unwrap();
    assert_eq!(formatted.as_slice(), "row:007");
    assert_eq!(formatted.as_bytes_with_nul().last(), Some(&0));

    let copy = copy_in(&arena, "dest".into()).unwrap();
    assert_eq!(copy.as_bytes_with_nul(), b"dest\0");

    let joined = concat_in(&arena, "C:\\out\\".into(), "file.prn".into()).unwrap();
    assert_eq!(joined.as_slice(), "C:\\out\\file.prn");
    assert!(joined.to_cstr().is_some());
}

#[test]
fn test_write_into_truncates() {
    let mut buf = [0xFFu8; 6];
    let written = write_into(&mut buf, format_args!("{}", "overflowing"));
    assert_eq!(written, 5);
    assert_eq!(&buf, b"overf\0");
}
