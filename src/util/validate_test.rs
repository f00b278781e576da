use super::*;

#[test]
fn accepts_when_both_fields_have_content() {
    assert!(is_valid_submission("Иван", "Привет!"));
    assert!(is_valid_submission("a", "b"));
}

#[test]
fn accepts_content_with_surrounding_whitespace() {
    assert!(is_valid_submission("  Иван  ", "\n\tПривет!  "));
}

#[test]
fn rejects_empty_fields() {
    assert!(!is_valid_submission("", ""));
    assert!(!is_valid_submission("", "Привет!"));
    assert!(!is_valid_submission("Иван", ""));
}

#[test]
fn rejects_whitespace_only_fields() {
    assert!(!is_valid_submission("   ", "   "));
    assert!(!is_valid_submission("Иван", " \t\n"));
    assert!(!is_valid_submission("   ", "Привет!"));
}
