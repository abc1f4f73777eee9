use super::*;
use pretty_assertions::assert_eq;

#[test]
fn color_index_follows_sgr_order() {
    let indexes: Vec<u8> = ColorName::ALL.iter().map(|c| c.index()).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn color_spelling_round_trips_through_display() {
    for color in ColorName::ALL {
        assert_eq!(color.to_string(), color.as_str());
    }
}

#[test]
fn fixed_lexemes() {
    assert_eq!(TokenKind::OpenTag.lexeme(), Some("<"));
    assert_eq!(TokenKind::BackSlash.lexeme(), Some("\\"));
    assert_eq!(TokenKind::Fg.lexeme(), Some("c"));
    assert_eq!(TokenKind::Bg.lexeme(), Some("x"));
    assert_eq!(TokenKind::Color(ColorName::Magenta).lexeme(), Some("magenta"));
    assert_eq!(TokenKind::Rgb.lexeme(), Some("rgb"));
    assert_eq!(TokenKind::Text.lexeme(), None);
    assert_eq!(TokenKind::Eof.lexeme(), None);
}

#[test]
fn display_names_tokens_for_messages() {
    assert_eq!(TokenKind::CloseTag.to_string(), "`>`");
    assert_eq!(TokenKind::Ident.to_string(), "identifier");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
    assert_eq!(TokenKind::Error.to_string(), "invalid character");
}

#[test]
fn color_keywords() {
    assert!(TokenKind::Rgb.is_color_keyword());
    assert!(TokenKind::Color(ColorName::Black).is_color_keyword());
    assert!(!TokenKind::Fg.is_color_keyword());
    assert!(!TokenKind::Ident.is_color_keyword());
}

#[test]
fn error_token_carries_code() {
    let tok = Token::error(1, "#", Span::new(3, 4), 2);
    assert_eq!(tok.kind, TokenKind::Error);
    assert_eq!(tok.error_code, 1);
    assert_eq!(tok.line, 2);

    let tok = Token::new(TokenKind::Text, "hi", Span::new(0, 2), 1);
    assert_eq!(tok.error_code, 0);
    assert!(!tok.is_eof());
}
