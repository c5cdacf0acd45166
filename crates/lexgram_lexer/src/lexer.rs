//! Regex-driven lexer.
//!
//! The lexer compiles its token types once, at construction, into an
//! immutable matcher set. Tokenization walks each line from left to right;
//! at every offset the patterns are tried in declaration order and the first
//! one that matches consumes its text.
//!
//! Input lines are bytes, but token text is UTF-8. A match that is not
//! valid UTF-8 is reported as a lex error at its first byte.

use std::collections::BTreeSet;

use lexgram_foundation::{Error, Position, Result, preview};
use regex::bytes::Regex;
use tracing::{debug, trace};

use crate::token::{Token, TokenType};

/// Token type names whose matches are consumed but not emitted.
pub type IgnoreSet = BTreeSet<String>;

/// A compiled token type.
#[derive(Clone, Debug)]
struct Matcher {
    name: String,
    regex: Regex,
}

/// Lexer built from an ordered list of token types.
#[derive(Clone, Debug)]
pub struct Lexer {
    /// Declarations, in priority order.
    types: Vec<TokenType>,
    /// One matcher per declaration, anchored with `^`.
    matchers: Vec<Matcher>,
}

impl Lexer {
    /// Compiles the given token types.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPattern` error if a pattern does not compile.
    pub fn new(types: Vec<TokenType>) -> Result<Self> {
        let matchers = types
            .iter()
            .map(|tt| {
                let anchored = format!("^(?:{})", tt.pattern);
                Regex::new(&anchored)
                    .map(|regex| Matcher {
                        name: tt.name.clone(),
                        regex,
                    })
                    .map_err(|e| Error::invalid_pattern(&tt.name, &tt.pattern, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = matchers.len(), "compiled token patterns");
        Ok(Self { types, matchers })
    }

    /// Parses `NAME : PATTERN` lines and compiles them.
    ///
    /// Blank lines are skipped; line numbers in errors count every line.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedSpec` error for a line that does not split into a
    /// name and a pattern, or `InvalidPattern` if a pattern does not compile.
    pub fn load<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut types = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            if let Some(tt) = TokenType::parse_line(idx + 1, line.as_ref())? {
                types.push(tt);
            }
        }
        Self::new(types)
    }

    /// Parses a block of declarations, one per line.
    ///
    /// # Errors
    ///
    /// See [`Lexer::load`].
    pub fn from_spec(spec: &str) -> Result<Self> {
        let lines: Vec<&str> = spec.lines().collect();
        Self::load(&lines)
    }

    /// Returns the declared token types in priority order.
    #[must_use]
    pub fn token_types(&self) -> &[TokenType] {
        &self.types
    }

    /// Returns true if some declaration has this name.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.types.iter().any(|tt| tt.name == name)
    }

    /// Tokenizes the given lines.
    ///
    /// Row indices follow line positions; columns restart at 0 on every line.
    /// Tokens whose type is in `ignore` are consumed but not returned.
    ///
    /// # Errors
    ///
    /// Returns a `Lex` error at the first offset where no pattern matches.
    /// No partial output is returned.
    pub fn tokenize<L: AsRef<[u8]>>(&self, lines: &[L], ignore: &IgnoreSet) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            self.tokenize_line(row, line.as_ref(), ignore, &mut tokens)?;
        }
        Ok(tokens)
    }

    /// Tokenizes the given lines without suppressing any type.
    ///
    /// # Errors
    ///
    /// See [`Lexer::tokenize`].
    pub fn tokenize_all<L: AsRef<[u8]>>(&self, lines: &[L]) -> Result<Vec<Token>> {
        self.tokenize(lines, &IgnoreSet::new())
    }

    /// Splits `text` on line breaks and tokenizes the result.
    ///
    /// # Errors
    ///
    /// See [`Lexer::tokenize`].
    pub fn tokenize_text(&self, text: &str, ignore: &IgnoreSet) -> Result<Vec<Token>> {
        let lines: Vec<&str> = text.lines().collect();
        self.tokenize(&lines, ignore)
    }

    fn tokenize_line(
        &self,
        row: usize,
        line: &[u8],
        ignore: &IgnoreSet,
        out: &mut Vec<Token>,
    ) -> Result<()> {
        let mut offset = 0;
        let mut col = 0;

        while offset < line.len() {
            let rest = &line[offset..];
            let Some((name, len)) = self.first_match(rest) else {
                let remaining = String::from_utf8_lossy(rest);
                let position = Position::from_zero_based(row, col);
                debug!(%position, "no token pattern matched");
                return Err(Error::lex(position, preview(&remaining)));
            };

            let Ok(text) = std::str::from_utf8(&rest[..len]) else {
                let position = Position::from_zero_based(row, col);
                debug!(%position, kind = name, "token text is not UTF-8");
                return Err(Error::lex(position, preview(&String::from_utf8_lossy(rest))));
            };
            let width = text.chars().count();
            if !ignore.contains(name) {
                trace!(kind = name, text, row, col, "token");
                out.push(Token::new(name, text, row, col));
            }
            offset += len;
            col += width;
        }

        Ok(())
    }

    /// Finds the first declared pattern matching at the start of `rest`.
    ///
    /// Empty matches never count: they would consume nothing and stall.
    fn first_match(&self, rest: &[u8]) -> Option<(&str, usize)> {
        self.matchers.iter().find_map(|m| {
            m.regex
                .find(rest)
                .filter(|found| found.start() == 0 && found.end() > 0)
                .map(|found| (m.name.as_str(), found.end()))
        })
    }
}
