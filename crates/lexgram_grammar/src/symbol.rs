//! Grammar symbols.
//!
//! Classification is purely lexical: a symbol wrapped in angle brackets is a
//! non-terminal, the literal `EPSILON` is the empty string, and anything else
//! is a terminal naming a token type.

use std::fmt;

/// The reserved symbol for the empty string.
pub const EPSILON: &str = "EPSILON";

/// A symbol in a production rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A token type name.
    Terminal(String),
    /// A derivable category, written `<NAME>`.
    NonTerminal(String),
    /// The empty string.
    Epsilon,
}

impl Symbol {
    /// Classifies a whitespace-free word from a grammar line.
    #[must_use]
    pub fn parse(word: &str) -> Self {
        if is_non_terminal(word) {
            Self::NonTerminal(word.to_string())
        } else if word == EPSILON {
            Self::Epsilon
        } else {
            Self::Terminal(word.to_string())
        }
    }

    /// Returns true for terminals and `EPSILON`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !self.is_non_terminal()
    }

    /// Returns true for `<X>` symbols.
    #[must_use]
    pub const fn is_non_terminal(&self) -> bool {
        matches!(self, Self::NonTerminal(_))
    }

    /// Returns true for `EPSILON`.
    #[must_use]
    pub const fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// Returns the symbol as written in the grammar.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Terminal(name) | Self::NonTerminal(name) => name,
            Self::Epsilon => EPSILON,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `word` is written as `<NAME>`.
#[must_use]
pub fn is_non_terminal(word: &str) -> bool {
    word.len() >= 2 && word.starts_with('<') && word.ends_with('>')
}
