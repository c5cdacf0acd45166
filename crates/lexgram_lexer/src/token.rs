//! Token types and produced tokens.
//!
//! A [`TokenType`] is a declaration from the token section of a config;
//! a [`Token`] is what the lexer produces when one of them matches.

use std::fmt;

use lexgram_foundation::{Error, Position, Result};

/// A named token pattern, declared as `NAME : PATTERN`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenType {
    /// Name referenced by grammar terminals.
    pub name: String,
    /// Regular expression, matched anchored at the scan offset.
    pub pattern: String,
}

impl TokenType {
    /// Creates a new token type.
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Parses one declaration line.
    ///
    /// The line is split on the first `:` into a name and a pattern, both
    /// trimmed. Returns `Ok(None)` for blank lines. `line_no` is 1-based and
    /// only used for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedSpec` error if the line has no `:` or either side
    /// is empty.
    pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let Some((name, pattern)) = line.split_once(':') else {
            return Err(Error::malformed_spec(
                line_no,
                line,
                "expected NAME : PATTERN",
            ));
        };
        let (name, pattern) = (name.trim(), pattern.trim());
        if name.is_empty() {
            return Err(Error::malformed_spec(line_no, line, "missing token type name"));
        }
        if pattern.is_empty() {
            return Err(Error::malformed_spec(line_no, line, "missing pattern"));
        }

        Ok(Some(Self::new(name, pattern)))
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.pattern)
    }
}

/// A token produced by the lexer.
///
/// Coordinates are 0-based; `col` counts characters consumed on the line
/// before this token, ignored tokens included.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Name of the token type that matched.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// The matched text, exactly as it appeared in the input.
    pub text: String,
    /// 0-based line index.
    pub row: usize,
    /// 0-based column offset in characters.
    pub col: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>, row: usize, col: usize) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            row,
            col,
        }
    }

    /// Returns true if this token has the given type.
    #[must_use]
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Returns the 1-based position of this token.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::from_zero_based(self.row, self.col)
    }

    /// Formats the 1-based position as `row:col`.
    #[must_use]
    pub fn coords(&self) -> String {
        self.position().to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at {}", self.kind, self.text, self.position())
    }
}
