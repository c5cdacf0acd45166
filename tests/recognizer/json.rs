//! Integration tests for recognizing JSON with the built-in language

use lexgram_foundation::{ErrorKind, Position};
use lexgram_grammar::Grammar;
use lexgram_recognizer::{Language, Recognizer, RecognizerConfig};

fn json() -> Language {
    Language::json().unwrap()
}

// =============================================================================
// Accept
// =============================================================================

#[test]
fn object_with_one_entry() {
    assert!(json().check_text(r#"{"a": 1}"#).is_ok());
}

#[test]
fn list_of_three() {
    assert!(json().check_text("[1, 2, 3]").is_ok());
}

#[test]
fn scalars() {
    let language = json();
    for text in ["true", "false", "null", "0", "-12.5e-3", r#""text""#] {
        assert!(language.check_text(text).is_ok(), "{text}");
    }
}

#[test]
fn empty_containers() {
    let language = json();
    assert!(language.check_text("[]").is_ok());
    assert!(language.check_text("{}").is_ok());
    assert!(language.check_text("[[], {}, [[]]]").is_ok());
}

#[test]
fn multi_line_document() {
    let text = "{\n  \"name\": \"lexgram\",\n  \"tags\": [\"lexer\", \"grammar\"],\n  \"stable\": false\n}";
    assert!(json().check_text(text).is_ok());
}

// =============================================================================
// Reject
// =============================================================================

#[test]
fn missing_value() {
    let err = json().check_text(r#"{"a": }"#).unwrap_err();
    assert!(err.is_syntax_error());
    assert_eq!(err.position(), Some(Position::new(1, 7)));
    assert_eq!(
        err.to_string(),
        "syntax error at 1:7: unexpected }, expected one of: \
         BOOLEAN, LEFT_BRACE, LEFT_BRACKET, NULL, NUMBER, STRING"
    );
}

#[test]
fn missing_colon_rejects_whole_candidate() {
    // The object rule fails to align as a unit, so no step ever moves past
    // the opening brace.
    let err = json().check_text(r#"{"a" 1}"#).unwrap_err();
    assert_eq!(err.position(), Some(Position::new(1, 1)));
}

#[test]
fn unclosed_list() {
    assert!(json().check_text("[1, 2").unwrap_err().is_syntax_error());
}

#[test]
fn extra_closer() {
    let err = json().check_text("[1]]").unwrap_err();
    assert_eq!(err.position(), Some(Position::new(1, 4)));
    assert!(err.to_string().contains("unexpected ]"));
}

#[test]
fn non_string_key() {
    assert!(json().check_text("{1: 2}").unwrap_err().is_syntax_error());
}

#[test]
fn blank_input() {
    let err = json().check_text("   \n  ").unwrap_err();
    assert!(err.is_syntax_error());
    assert_eq!(err.position(), None);
}

#[test]
fn error_on_later_line() {
    let err = json().check_text("[\n  1,\n  2,\n]").unwrap_err();
    assert_eq!(err.position(), Some(Position::new(4, 1)));
}

#[test]
fn lex_errors_come_first() {
    let err = json().check_text("{\"a\": #}").unwrap_err();
    assert!(err.is_lex_error());
}

// =============================================================================
// Empty Grammar
// =============================================================================

#[test]
fn empty_grammar_is_detected_before_parse() {
    let grammar = Grammar::default();
    assert!(grammar.start().is_none());
    let err = Recognizer::new(&grammar).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingStartSymbol));
}

#[test]
fn bounded_search_still_skips_whitespace() {
    let language = json().with_config(RecognizerConfig::bounded(10_000));
    assert!(language.check_text("[1, 2]").is_ok());
    assert!(language.check_text(r#"{"a": [true, null]}"#).is_ok());
}
