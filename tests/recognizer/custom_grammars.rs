//! Integration tests for recognizing with user-supplied grammars

use lexgram_foundation::{ErrorKind, SearchLimit};
use lexgram_recognizer::{Language, RecognizerConfig};

const ARITHMETIC_TOKENS: &str = r"
NUMBER : [0-9]+
PLUS   : \+
TIMES  : \*
OPEN   : \(
CLOSE  : \)
SPACE  : \s+
";

const ARITHMETIC_GRAMMAR: &str = "
<EXPR>      = <TERM> <EXPR_TAIL>
<EXPR_TAIL> = EPSILON | PLUS <TERM> <EXPR_TAIL>
<TERM>      = <FACTOR> <TERM_TAIL>
<TERM_TAIL> = EPSILON | TIMES <FACTOR> <TERM_TAIL>
<FACTOR>    = NUMBER | OPEN <EXPR> CLOSE
";

fn arithmetic() -> Language {
    Language::from_specs(ARITHMETIC_TOKENS, ARITHMETIC_GRAMMAR)
        .unwrap()
        .with_config(RecognizerConfig::default().with_skip_types(["SPACE"]))
}

#[test]
fn arithmetic_expressions() {
    let language = arithmetic();
    for text in ["1", "1 + 2", "1 + 2 * 3", "(1 + 2) * 3", "((4))", "2 * (3 + 4) * 5"] {
        assert!(language.check_text(text).is_ok(), "{text}");
    }
}

#[test]
fn broken_arithmetic() {
    let language = arithmetic();
    for text in ["+", "1 +", "(1", "1 2", "()", "1 * * 2"] {
        assert!(language.check_text(text).is_err(), "{text}");
    }
}

#[test]
fn chained_non_terminals_keep_trailing_symbols() {
    // <S> reaches `a` only through <A>, whose rule is followed by `b`.
    let language = Language::from_specs("A : a\nB : b", "<S> = <A> B\n<A> = A").unwrap();
    assert!(language.check_text("ab").is_ok());
    assert!(language.check_text("a").is_err());
    assert!(language.check_text("b").is_err());
}

#[test]
fn nullable_chain() {
    let language =
        Language::from_specs("X : x", "<S> = <A> <B> X\n<A> = EPSILON\n<B> = EPSILON | X").unwrap();
    assert!(language.check_text("x").is_ok());
    assert!(language.check_text("xx").is_ok());
    assert!(language.check_text("xxx").is_err());
}

#[test]
fn ambiguous_grammar_is_fine() {
    let language = Language::from_specs("A : a", "<S> = A <S> | A <S> A | A").unwrap();
    for text in ["a", "aa", "aaa", "aaaaa"] {
        assert!(language.check_text(text).is_ok(), "{text}");
    }
    assert!(language.check_text("").is_err());
}

#[test]
fn left_recursion_needs_a_limit() {
    let language = Language::from_specs("N : n\nP : p", "<E> = <E> P N | N")
        .unwrap()
        .with_config(RecognizerConfig::bounded(500));
    let err = language.check_text("npn").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(SearchLimit::MaxSteps { limit: 500 })
    ));
}

#[test]
fn undeclared_terminal_never_matches() {
    let language = Language::from_specs("A : a", "<S> = A | MISSING").unwrap();
    assert_eq!(language.unknown_terminals(), vec!["MISSING"]);
    assert!(language.check_text("a").is_ok());
}

#[test]
fn undeclared_non_terminal_has_no_derivations() {
    let language = Language::from_specs("A : a", "<S> = <MISSING> | A").unwrap();
    assert!(language.check_text("a").is_ok());
}
