use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ziyy_ir::ColorName;

fn kinds(source: &str) -> Vec<TokenKind> {
    Scanner::new(source).map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<&str> {
    Scanner::new(source).map(|t| t.text).collect()
}

#[test]
fn empty_source_is_just_eof() {
    let mut scanner = Scanner::new("");
    let tok = scanner.scan_next();
    assert_eq!(tok.kind, TokenKind::Eof);
    assert_eq!(tok.span, Span::new(0, 0));
    assert_eq!(tok.line, 1);
}

#[test]
fn eof_is_sticky() {
    let mut scanner = Scanner::new("hi");
    assert_eq!(scanner.scan_next().kind, TokenKind::Text);
    for _ in 0..3 {
        assert_eq!(scanner.scan_next().kind, TokenKind::Eof);
    }
}

#[test]
fn plain_text_is_one_run() {
    assert_eq!(texts("hello, world > all"), vec!["hello, world > all"]);
}

#[test]
fn close_angle_at_start_of_text_is_its_own_token() {
    assert_eq!(kinds(">a"), vec![TokenKind::CloseTag, TokenKind::Text]);
}

#[test]
fn simple_tag_pair() {
    assert_eq!(
        kinds("<b>hi</b>"),
        vec![
            TokenKind::OpenTag,
            TokenKind::Bold,
            TokenKind::CloseTag,
            TokenKind::Text,
            TokenKind::OpenTag,
            TokenKind::Slash,
            TokenKind::Bold,
            TokenKind::CloseTag,
        ]
    );
}

#[test]
fn color_tag() {
    assert_eq!(
        kinds("<c.red>"),
        vec![
            TokenKind::OpenTag,
            TokenKind::Fg,
            TokenKind::Dot,
            TokenKind::Color(ColorName::Red),
            TokenKind::CloseTag,
        ]
    );
}

#[test]
fn rgb_tag_skips_whitespace() {
    let mut scanner = Scanner::new("< x . rgb( 1 ,20, 255 ) >");
    let mut seen = Vec::new();
    for tok in scanner.by_ref() {
        seen.push((tok.kind, tok.text));
    }
    assert_eq!(
        seen,
        vec![
            (TokenKind::OpenTag, "<"),
            (TokenKind::Bg, "x"),
            (TokenKind::Dot, "."),
            (TokenKind::Rgb, "rgb"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Number, "1"),
            (TokenKind::Comma, ","),
            (TokenKind::Number, "20"),
            (TokenKind::Comma, ","),
            (TokenKind::Number, "255"),
            (TokenKind::RightParen, ")"),
            (TokenKind::CloseTag, ">"),
        ]
    );
    assert_eq!(scanner.state(), ScanState::Text(Escape::None));
}

#[test]
fn identifiers_that_are_not_keywords() {
    let toks: Vec<_> = Scanner::new("<bold my_var2 Red>").collect();
    assert_eq!(toks[1].kind, TokenKind::Ident);
    assert_eq!(toks[1].text, "bold");
    assert_eq!(toks[2].kind, TokenKind::Ident);
    assert_eq!(toks[2].text, "my_var2");
    // keywords are case-sensitive
    assert_eq!(toks[3].kind, TokenKind::Ident);
}

#[test]
fn escaped_open_angle_is_text() {
    let toks: Vec<_> = Scanner::new("a\\<b").collect();
    let seen: Vec<_> = toks.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        seen,
        vec![
            (TokenKind::Text, "a"),
            (TokenKind::BackSlash, "\\"),
            (TokenKind::Text, "<"),
            (TokenKind::Text, "b"),
        ]
    );
}

#[test]
fn escape_states_are_visible_between_calls() {
    let mut scanner = Scanner::new("a\\\\");
    scanner.scan_next();
    assert_eq!(scanner.state(), ScanState::Text(Escape::PendingBackslash));
    scanner.scan_next();
    assert_eq!(scanner.state(), ScanState::Text(Escape::PendingLiteral));
    let tok = scanner.scan_next();
    assert_eq!(tok.text, "\\");
    assert_eq!(tok.kind, TokenKind::Text);
    assert_eq!(scanner.scan_next().kind, TokenKind::Eof);
}

#[test]
fn escaped_multibyte_char_is_taken_whole() {
    assert_eq!(texts("\\é!"), vec!["\\", "é", "!"]);
}

#[test]
fn trailing_backslash_ends_in_eof() {
    assert_eq!(kinds("x\\"), vec![TokenKind::Text, TokenKind::BackSlash]);
}

#[test]
fn unexpected_character_in_tag() {
    let toks: Vec<_> = Scanner::new("<#b>").collect();
    assert_eq!(toks[1].kind, TokenKind::Error);
    assert_eq!(toks[1].error_code, UNEXPECTED_CHARACTER);
    assert_eq!(toks[1].text, "#");
    assert_eq!(toks[1].span, Span::new(1, 2));
    // scanning resumes after the bad character
    assert_eq!(toks[2].kind, TokenKind::Bold);
}

#[test]
fn unexpected_multibyte_character_spans_whole_char() {
    let toks: Vec<_> = Scanner::new("<ß>").collect();
    assert_eq!(toks[1].kind, TokenKind::Error);
    assert_eq!(toks[1].text, "ß");
    assert_eq!(toks[1].span, Span::new(1, 3));
}

#[test]
fn lines_advance_in_text_and_tags() {
    let toks: Vec<_> = Scanner::new("one\ntwo<\nb>\\\nz").collect();
    let lines: Vec<_> = toks.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        lines,
        vec![
            (TokenKind::Text, 1),
            (TokenKind::OpenTag, 2),
            (TokenKind::Bold, 3),
            (TokenKind::CloseTag, 3),
            (TokenKind::BackSlash, 3),
            (TokenKind::Text, 3),
            (TokenKind::Text, 4),
        ]
    );
}

#[test]
fn unterminated_tag_reaches_eof() {
    let mut scanner = Scanner::new("<b");
    assert_eq!(scanner.scan_next().kind, TokenKind::OpenTag);
    assert_eq!(scanner.scan_next().kind, TokenKind::Bold);
    assert!(scanner.state().is_tag());
    assert_eq!(scanner.scan_next().kind, TokenKind::Eof);
}

proptest! {
    #[test]
    fn token_text_matches_its_span(s in "[a-z0-9<>\\\\/.,() \n#é]{0,48}") {
        let mut last_end = 0;
        for tok in Scanner::new(&s) {
            prop_assert!(tok.span.start as usize >= last_end);
            prop_assert_eq!(&s[tok.span.to_range()], tok.text);
            prop_assert!(!tok.text.is_empty());
            last_end = tok.span.end as usize;
        }
    }

    #[test]
    fn text_without_delimiters_round_trips(s in "[^<>\\\\]{1,64}") {
        let joined: String = Scanner::new(&s).map(|t| t.text).collect();
        prop_assert_eq!(joined, s);
    }
}
