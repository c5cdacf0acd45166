//! Grammar model and loader.
//!
//! A grammar maps each non-terminal to its alternatives in declaration
//! order. The first declared non-terminal is the start symbol.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use lexgram_foundation::{Error, Result};
use tracing::debug;

use crate::symbol::{Symbol, is_non_terminal};

/// One alternative of a non-terminal: an ordered sequence of symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    symbols: Vec<Symbol>,
}

impl Rule {
    /// Creates a rule from its symbols.
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Parses a whitespace-separated alternative.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::new(text.split_whitespace().map(Symbol::parse).collect())
    }

    /// Returns the symbols in order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the leading symbol.
    #[must_use]
    pub fn first(&self) -> Option<&Symbol> {
        self.symbols.first()
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the rule has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// A context-free grammar.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    /// Non-terminals in declaration order.
    non_terminals: Vec<String>,
    /// Alternatives for each non-terminal.
    rules: HashMap<String, Vec<Rule>>,
    /// Terminals used anywhere, sorted, without `EPSILON`.
    terminals: Vec<String>,
}

impl Grammar {
    /// Parses grammar lines of the form `<NAME> = ALT | ALT ...`.
    ///
    /// Blank lines are skipped. A non-terminal declared twice keeps its first
    /// position and gains the later alternatives.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedSpec` error if a line has no `=`, its left side is
    /// not a `<NAME>` symbol, or an alternative is empty.
    pub fn load<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut grammar = Self::default();
        let mut terminals = BTreeSet::new();

        for (idx, line) in lines.iter().enumerate() {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            let (name, alternatives) = parse_line(idx + 1, line)?;

            for rule in &alternatives {
                for symbol in rule.symbols() {
                    if let Symbol::Terminal(t) = symbol {
                        terminals.insert(t.clone());
                    }
                }
            }

            match grammar.rules.get_mut(&name) {
                Some(existing) => existing.extend(alternatives),
                None => {
                    grammar.non_terminals.push(name.clone());
                    grammar.rules.insert(name, alternatives);
                }
            }
        }

        grammar.terminals = terminals.into_iter().collect();
        debug!(
            non_terminals = grammar.non_terminals.len(),
            terminals = grammar.terminals.len(),
            "loaded grammar"
        );
        Ok(grammar)
    }

    /// Parses a block of grammar lines.
    ///
    /// # Errors
    ///
    /// See [`Grammar::load`].
    pub fn from_spec(spec: &str) -> Result<Self> {
        let lines: Vec<&str> = spec.lines().collect();
        Self::load(&lines)
    }

    /// Returns the start symbol, or `None` for an empty grammar.
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.non_terminals.first().map(String::as_str)
    }

    /// Returns true if no non-terminal is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.non_terminals.is_empty()
    }

    /// Returns the declared non-terminals in order.
    #[must_use]
    pub fn non_terminals(&self) -> &[String] {
        &self.non_terminals
    }

    /// Returns the sorted set of terminals, for diagnostics.
    #[must_use]
    pub fn terminals(&self) -> &[String] {
        &self.terminals
    }

    /// Returns the alternatives of a non-terminal.
    ///
    /// An undeclared non-terminal has no alternatives.
    #[must_use]
    pub fn rules_for(&self, non_terminal: &str) -> &[Rule] {
        self.rules
            .get(non_terminal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns non-terminals referenced by some rule but never declared.
    #[must_use]
    pub fn undeclared_references(&self) -> Vec<String> {
        let missing: BTreeSet<&str> = self
            .rules
            .values()
            .flatten()
            .flat_map(Rule::symbols)
            .filter_map(|symbol| match symbol {
                Symbol::NonTerminal(name) if !self.rules.contains_key(name) => Some(name.as_str()),
                _ => None,
            })
            .collect();
        missing.into_iter().map(str::to_string).collect()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.non_terminals {
            write!(f, "{name} =")?;
            for (i, rule) in self.rules_for(name).iter().enumerate() {
                if i > 0 {
                    f.write_str(" |")?;
                }
                write!(f, " {rule}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<(String, Vec<Rule>)> {
    let Some((name, body)) = line.split_once('=') else {
        return Err(Error::malformed_spec(line_no, line, "expected <NAME> = RULES"));
    };
    let name = name.trim();
    if !is_non_terminal(name) {
        return Err(Error::malformed_spec(
            line_no,
            line,
            "left side must be a <NAME> non-terminal",
        ));
    }
    if body.trim().is_empty() {
        return Err(Error::malformed_spec(line_no, line, "missing rules"));
    }

    let alternatives: Vec<Rule> = body.split('|').map(Rule::parse).collect();
    if alternatives.iter().any(Rule::is_empty) {
        return Err(Error::malformed_spec(line_no, line, "empty alternative"));
    }

    Ok((name.to_string(), alternatives))
}
