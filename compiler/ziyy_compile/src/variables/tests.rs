use super::*;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let vars = Variables::default();
    assert_eq!(vars.len(), 2);
    assert_eq!(vars.get("green"), Some("\x1b[38;2;0;150;75m"));
    assert_eq!(vars.get("cyan"), Some("\x1b[38;2;0;150;150m"));
    assert_eq!(vars.get("red"), None);
}

#[test]
fn empty_has_nothing() {
    let vars = Variables::empty();
    assert!(vars.is_empty());
    assert_eq!(vars.get("green"), None);
}

#[test]
fn insert_replaces() {
    let mut vars = Variables::empty();
    assert_eq!(vars.insert("warn", "\x1b[33m"), None);
    assert_eq!(vars.insert("warn", "\x1b[31m"), Some("\x1b[33m".to_string()));
    assert_eq!(vars.get("warn"), Some("\x1b[31m"));
}

#[test]
fn collects_from_pairs() {
    let vars: Variables = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(vars.len(), 2);
    assert_eq!(vars.get("b"), Some("2"));
}
