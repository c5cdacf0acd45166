//! Derivation steps and front-alignment.
//!
//! A step pairs the symbols still to be matched with the position of the
//! first unconsumed token. Steps are plain values: every transition builds
//! a new one and nothing points back at its parent.

use std::fmt;

use lexgram_grammar::Symbol;
use lexgram_lexer::Token;

/// One node of the search frontier.
///
/// Whenever a step sits in the worklist its sentence is either empty or
/// led by a non-terminal; leading terminals are matched by [`align`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationStep {
    /// Pending grammar symbols, leftmost first.
    pub sentence: Vec<Symbol>,
    /// Index of the first unconsumed token.
    pub cursor: usize,
}

impl DerivationStep {
    /// The initial step: the start symbol against every token.
    #[must_use]
    pub fn seed(start: &str) -> Self {
        Self {
            sentence: vec![Symbol::NonTerminal(start.to_string())],
            cursor: 0,
        }
    }

    /// Returns the leading non-terminal, if the sentence starts with one.
    #[must_use]
    pub fn head(&self) -> Option<&str> {
        match self.sentence.first() {
            Some(Symbol::NonTerminal(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns true if tokens remain past the cursor.
    #[must_use]
    pub fn has_input(&self, total: usize) -> bool {
        self.cursor < total
    }

    /// Returns true if both the sentence and the tokens are used up.
    #[must_use]
    pub fn is_complete(&self, total: usize) -> bool {
        self.sentence.is_empty() && self.cursor == total
    }

    /// Replaces the leading symbol with `expansion` and aligns the result.
    ///
    /// Returns `None` if a leading terminal disagrees with the tokens.
    #[must_use]
    pub fn derive(&self, expansion: &[Symbol], tokens: &[&Token]) -> Option<Self> {
        let rest = self.sentence.get(1..).unwrap_or_default();
        let sentence: Vec<Symbol> = expansion
            .iter()
            .chain(rest)
            .filter(|symbol| !symbol.is_epsilon())
            .cloned()
            .collect();
        align(sentence, tokens, self.cursor)
    }
}

impl fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.sentence {
            write!(f, "{symbol} ")?;
        }
        write!(f, "@ {}", self.cursor)
    }
}

/// Matches the sentence's leading terminals against tokens from `cursor`.
///
/// Walks both sides in lockstep until a non-terminal leads the sentence.
/// A terminal must equal the token's type exactly; a terminal left over
/// once the tokens run out can never match, so it rejects as well.
#[must_use]
pub fn align(mut sentence: Vec<Symbol>, tokens: &[&Token], cursor: usize) -> Option<DerivationStep> {
    let mut matched = 0;
    let mut position = cursor;

    for symbol in &sentence {
        match symbol {
            Symbol::NonTerminal(_) => break,
            Symbol::Epsilon => {}
            Symbol::Terminal(name) => {
                let token = tokens.get(position)?;
                if token.kind != *name {
                    return None;
                }
                position += 1;
            }
        }
        matched += 1;
    }

    sentence.drain(..matched);
    Some(DerivationStep {
        sentence,
        cursor: position,
    })
}
