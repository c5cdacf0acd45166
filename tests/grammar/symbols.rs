//! Integration tests for grammar symbols

use lexgram_grammar::{EPSILON, Rule, Symbol};

#[test]
fn classification_is_lexical() {
    assert!(Symbol::parse("<anything goes>").is_non_terminal());
    assert!(Symbol::parse("NUMBER").is_terminal());
    assert!(Symbol::parse(EPSILON).is_epsilon());
    assert!(Symbol::parse("epsilon").is_terminal());
}

#[test]
fn rule_parses_whitespace_separated_symbols() {
    let rule = Rule::parse("  LEFT_BRACKET   <JSON>\t<ITEMS> RIGHT_BRACKET ");
    assert_eq!(rule.len(), 4);
    assert_eq!(rule.first(), Some(&Symbol::Terminal("LEFT_BRACKET".into())));
    assert_eq!(rule.to_string(), "LEFT_BRACKET <JSON> <ITEMS> RIGHT_BRACKET");
}

#[test]
fn empty_rule() {
    let rule = Rule::parse("   ");
    assert!(rule.is_empty());
    assert_eq!(rule.first(), None);
}
