//! Integration tests for Error types
//!
//! Tests error construction, display, context, and classification.

use lexgram_foundation::{Error, ErrorContext, ErrorKind, Position, SearchLimit};

// =============================================================================
// Classification
// =============================================================================

#[test]
fn config_errors() {
    assert!(Error::malformed_spec(1, "A", "expected NAME : PATTERN").is_config_error());
    assert!(Error::invalid_pattern("A", "(", "unclosed group").is_config_error());
    assert!(!Error::lex(Position::at_start(), "#").is_config_error());
}

#[test]
fn lex_and_syntax_errors_are_distinct() {
    let lex = Error::lex(Position::new(1, 2), "#");
    let syntax = Error::syntax(Some(Position::new(1, 2)), "}", Vec::new());
    assert!(lex.is_lex_error() && !lex.is_syntax_error());
    assert!(syntax.is_syntax_error() && !syntax.is_lex_error());
}

#[test]
fn limit_errors_have_no_position() {
    let err = Error::limit_exceeded(SearchLimit::MaxSteps { limit: 10 });
    assert_eq!(err.position(), None);
    assert!(!err.is_syntax_error());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_malformed_spec() {
    let err = Error::malformed_spec(5, "NAME :", "missing pattern");
    assert_eq!(err.to_string(), "malformed spec at line 5: missing pattern: NAME :");
}

#[test]
fn display_invalid_pattern() {
    let err = Error::invalid_pattern("OPEN", "(", "unclosed group");
    let msg = err.to_string();
    assert!(msg.contains("OPEN"));
    assert!(msg.contains("unclosed group"));
}

#[test]
fn display_syntax_at_end_of_input() {
    let err = Error::syntax(None, "", vec!["NUMBER".to_string()]);
    assert_eq!(
        err.to_string(),
        "syntax error: unexpected end of input, expected one of: NUMBER"
    );
}

#[test]
fn display_syntax_without_hints() {
    let err = Error::syntax(Some(Position::new(3, 4)), "2", Vec::new());
    assert_eq!(err.to_string(), "syntax error at 3:4: unexpected 2");
}

#[test]
fn display_limits() {
    let steps = Error::limit_exceeded(SearchLimit::MaxSteps { limit: 100 });
    assert_eq!(steps.to_string(), "limit exceeded: max derivation steps (100) exceeded");

    let frontier = Error::limit_exceeded(SearchLimit::MaxFrontier {
        limit: 8,
        symbol: Some("<E>".to_string()),
    });
    assert_eq!(
        frontier.to_string(),
        "limit exceeded: max frontier size (8) exceeded while expanding <E>"
    );
}

#[test]
fn display_io() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = Error::io("json.cfg", &source);
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert_eq!(err.to_string(), "failed to read json.cfg: no such file");
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_is_attached_not_displayed() {
    let err = Error::malformed_spec(2, "<A> x", "expected <NAME> = RULES")
        .with_context(ErrorContext::new().with_source("json.cfg").with_section("grammar"));
    assert!(err.to_string().starts_with("malformed spec at line 2"));
    let context = err.context.unwrap();
    assert_eq!(context.to_string(), "in json.cfg (grammar section)");
}

#[test]
fn context_partial_display() {
    assert_eq!(ErrorContext::new().with_source("a.cfg").to_string(), "in a.cfg");
    assert_eq!(ErrorContext::new().with_section("token").to_string(), "in token section");
    assert_eq!(ErrorContext::new().to_string(), "");
}
