//! Integration tests for tokenizing JSON with the built-in token types

use lexgram_foundation::Position;
use lexgram_grammar::fixtures::{JSON_TOKENS, WHITESPACE};
use lexgram_lexer::{IgnoreSet, Lexer, Token};

fn json_lexer() -> Lexer {
    Lexer::from_spec(JSON_TOKENS).unwrap()
}

fn without_whitespace() -> IgnoreSet {
    [WHITESPACE.to_string()].into()
}

fn kinds(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.kind.as_str()).collect()
}

// =============================================================================
// Token Streams
// =============================================================================

#[test]
fn object_tokens() {
    let tokens = json_lexer()
        .tokenize_text(r#"{"a": 1}"#, &without_whitespace())
        .unwrap();
    assert_eq!(
        kinds(&tokens),
        vec!["LEFT_BRACE", "STRING", "COLON", "NUMBER", "RIGHT_BRACE"]
    );
    assert_eq!(tokens[1].text, "\"a\"");
    assert_eq!(tokens[3].text, "1");
}

#[test]
fn whitespace_is_emitted_unless_ignored() {
    let tokens = json_lexer().tokenize_all(&["[1, 2]"]).unwrap();
    assert!(tokens.iter().any(|t| t.is(WHITESPACE)));
}

#[test]
fn literals() {
    let tokens = json_lexer()
        .tokenize_text("true false null -1.5e3 \"x\\\"y\"", &without_whitespace())
        .unwrap();
    assert_eq!(kinds(&tokens), vec!["BOOLEAN", "BOOLEAN", "NULL", "NUMBER", "STRING"]);
    assert_eq!(tokens[3].text, "-1.5e3");
    assert_eq!(tokens[4].text, "\"x\\\"y\"");
}

#[test]
fn coordinates_across_lines() {
    let lines = ["{", "  \"key\": [", "    10", "  ]", "}"];
    let tokens = json_lexer().tokenize(&lines, &without_whitespace()).unwrap();
    let coords: Vec<String> = tokens.iter().map(Token::coords).collect();
    assert_eq!(coords, vec!["1:1", "2:3", "2:8", "2:10", "3:5", "4:3", "5:1"]);
}

#[test]
fn byte_lines_are_accepted() {
    let lines: Vec<Vec<u8>> = vec![b"[true,".to_vec(), b" null]".to_vec()];
    let tokens = json_lexer().tokenize(&lines, &without_whitespace()).unwrap();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[3].position(), Position::new(2, 2));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unmatched_hash() {
    let err = json_lexer().tokenize_all(&["[1,", "  # 2]"]).unwrap_err();
    assert!(err.is_lex_error());
    assert_eq!(err.position(), Some(Position::new(2, 3)));
    assert_eq!(err.to_string(), "failed to tokenize at 2:3: # 2]");
}

#[test]
fn single_hash_preview() {
    let err = json_lexer().tokenize_all(&["#"]).unwrap_err();
    assert_eq!(err.to_string(), "failed to tokenize at 1:1: #");
}

#[test]
fn unterminated_string() {
    let err = json_lexer().tokenize_all(&["\"open"]).unwrap_err();
    assert!(err.is_lex_error());
    assert_eq!(err.position(), Some(Position::at_start()));
}

#[test]
fn no_partial_output_on_failure() {
    let result = json_lexer().tokenize_all(&["[1, 2]", "@"]);
    assert!(result.is_err());
}
