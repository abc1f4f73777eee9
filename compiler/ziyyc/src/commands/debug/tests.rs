use super::*;
use pretty_assertions::assert_eq;

#[test]
fn lists_tokens_with_lines() {
    assert_eq!(
        format_tokens("hi\n<b>"),
        "   1 text Text             \"hi\\n\"\n\
         \x20  2 text OpenTag          \"<\"\n\
         \x20  2 tag  Bold             \"b\"\n\
         \x20  2 tag  CloseTag         \">\"\n"
    );
}

#[test]
fn escaped_angle_stays_in_text_mode() {
    let modes: Vec<String> = format_tokens("a\\<b")
        .lines()
        .map(|line| line[5..9].trim_end().to_owned())
        .collect();
    assert_eq!(modes, vec!["text", "text", "text", "text"]);
}

#[test]
fn marks_error_tokens() {
    let dump = format_tokens("<#>");
    assert!(dump.contains("tag  Error            \"#\" (error 1)"), "{dump}");
}
