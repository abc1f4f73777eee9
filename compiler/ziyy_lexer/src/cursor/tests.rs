use super::*;
use proptest::prelude::*;

#[test]
fn current_and_advance() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), Some(b'a'));
    cursor.advance();
    assert_eq!(cursor.current(), Some(b'b'));
    cursor.advance();
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn advance_at_eof_is_a_no_op() {
    let mut cursor = Cursor::new("");
    cursor.advance();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_char_skips_multibyte() {
    let mut cursor = Cursor::new("é<");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.slice_from(0), "é");

    let mut cursor = Cursor::new("🦀");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), None);
}

#[test]
fn tag_whitespace_counts_newlines() {
    let mut cursor = Cursor::new(" \t\r\n \n x");
    assert_eq!(cursor.eat_tag_whitespace(), 2);
    assert_eq!(cursor.current(), Some(b'x'));
}

#[test]
fn ident_and_digits() {
    let mut cursor = Cursor::new("my_var2.");
    cursor.eat_ident_continue();
    assert_eq!(cursor.slice_from(0), "my_var2");

    let mut cursor = Cursor::new("0150,");
    cursor.eat_digits();
    assert_eq!(cursor.slice_from(0), "0150");
}

#[test]
fn text_run_stops_at_open_angle_or_backslash() {
    let mut cursor = Cursor::new("one\ntwo > three<b>");
    assert_eq!(cursor.skip_to_text_delim(), 1);
    assert_eq!(cursor.slice_from(0), "one\ntwo > three");
    assert_eq!(cursor.current(), Some(b'<'));

    let mut cursor = Cursor::new("a\\<");
    assert_eq!(cursor.skip_to_text_delim(), 0);
    assert_eq!(cursor.current(), Some(b'\\'));
}

#[test]
fn text_run_without_delimiter_reaches_eof() {
    let mut cursor = Cursor::new("plain\n\ntext");
    assert_eq!(cursor.skip_to_text_delim(), 2);
    assert_eq!(cursor.current(), None);
}

proptest! {
    #[test]
    fn text_run_matches_scalar_search(s in "[a-z<\\\\\n ]{0,40}") {
        let mut cursor = Cursor::new(&s);
        let newlines = cursor.skip_to_text_delim();
        let expected_len = s.find(['<', '\\']).unwrap_or(s.len());
        prop_assert_eq!(cursor.pos(), expected_len);
        let expected_newlines = s[..expected_len].matches('\n').count();
        prop_assert_eq!(newlines as usize, expected_newlines);
    }
}
