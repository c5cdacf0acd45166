//! Integration tests for config sources

use lexgram_foundation::ErrorKind;
use lexgram_runtime::{ConfigSource, load_language, read_line_bytes};

use crate::temp_file;

const ARITHMETIC: &str = "\
# Sums of numbers
NUMBER : [0-9]+
PLUS   : \\+
SPACE  : [ ]+
---
<SUM>  = NUMBER <MORE>
<MORE> = EPSILON | PLUS NUMBER <MORE>
";

#[test]
fn reads_sections_from_file() {
    let path = temp_file("sections.cfg", ARITHMETIC);
    let source = ConfigSource::read(&path).unwrap();
    assert_eq!(source.token_lines.len(), 3);
    assert_eq!(source.grammar_lines.len(), 2);
}

#[test]
fn loads_language_from_file() {
    let path = temp_file("arithmetic.cfg", ARITHMETIC);
    let language = load_language(Some(&path)).unwrap();
    assert_eq!(language.grammar().start(), Some("<SUM>"));

    let tokens = language
        .tokenize(&["1 + 2"], &["SPACE".to_string()].into_iter().collect())
        .unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(language.parse(&tokens).is_ok());
}

#[test]
fn grammar_error_names_file_and_section() {
    let path = temp_file("broken_grammar.cfg", "A : a\n---\n<S> A\n");
    let err = load_language(Some(&path)).unwrap_err();
    assert!(err.is_config_error());

    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some(path.display().to_string().as_str()));
    assert_eq!(context.section.as_deref(), Some("grammar"));
}

#[test]
fn token_error_names_token_section() {
    let path = temp_file("broken_tokens.cfg", "A : (\n---\n<S> = A\n");
    let err = load_language(Some(&path)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    assert_eq!(err.context.unwrap().section.as_deref(), Some("token"));
}

#[test]
fn missing_config_is_io_error() {
    let path = std::env::temp_dir().join("lexgram_tests_missing").join("none.cfg");
    let err = load_language(Some(&path)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
}

#[test]
fn input_file_keeps_raw_lines() {
    let path = temp_file("input.json", "{\r\n  \"a\": 1\r\n}\n");
    let lines = read_line_bytes(&path).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], b"  \"a\": 1".to_vec());
}
