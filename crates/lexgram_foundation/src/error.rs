//! Error types for the lexgram system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is terminal: no layer recovers locally or downgrades one
//! kind into another.

use std::fmt;

use thiserror::Error;

use crate::position::Position;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for lexgram operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed specification error for a declaration line.
    #[must_use]
    pub fn malformed_spec(
        line: usize,
        content: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::MalformedSpec {
            line,
            content: content.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid pattern error for a token type.
    #[must_use]
    pub fn invalid_pattern(
        name: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            name: name.into(),
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates a tokenization error at a 1-based position.
    #[must_use]
    pub fn lex(position: Position, preview: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lex {
            position,
            preview: preview.into(),
        })
    }

    /// Creates a syntax error.
    ///
    /// A `None` position means the search ran out of input.
    #[must_use]
    pub fn syntax(
        position: Option<Position>,
        preview: impl Into<String>,
        expected: Vec<String>,
    ) -> Self {
        Self::new(ErrorKind::Syntax {
            position,
            preview: preview.into(),
            expected,
        })
    }

    /// Creates a search limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SearchLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, source: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: source.to_string(),
        })
    }

    /// Returns true for malformed configuration (token or grammar declarations).
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MalformedSpec { .. } | ErrorKind::InvalidPattern { .. }
        )
    }

    /// Returns true if no token pattern matched during tokenization.
    #[must_use]
    pub fn is_lex_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Lex { .. })
    }

    /// Returns true if the recognizer rejected the token stream.
    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    /// Returns the 1-based position this error points at, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match &self.kind {
            ErrorKind::Lex { position, .. } => Some(*position),
            ErrorKind::Syntax { position, .. } => *position,
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A token or grammar declaration line has the wrong shape.
    #[error("malformed spec at line {line}: {reason}: {content}")]
    MalformedSpec {
        /// Line number within its section (1-indexed).
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A token pattern is not a valid regular expression.
    #[error("invalid pattern for token type {name} ({pattern}): {message}")]
    InvalidPattern {
        /// The token type name.
        name: String,
        /// The pattern as written.
        pattern: String,
        /// Message from the regex compiler.
        message: String,
    },

    /// No token pattern matched at the current scan offset.
    #[error("failed to tokenize at {position}: {preview}")]
    Lex {
        /// Where scanning stopped.
        position: Position,
        /// At most the first ten characters of the unmatched text.
        preview: String,
    },

    /// The derivation search exhausted its worklist.
    #[error("{}", describe_syntax(.position, .preview, .expected))]
    Syntax {
        /// First unconsumed token of the last step that still had input.
        position: Option<Position>,
        /// At most the first ten characters of that token.
        preview: String,
        /// Terminals that would have been accepted there, sorted.
        expected: Vec<String>,
    },

    /// The grammar declares no non-terminals, so there is nothing to derive.
    #[error("grammar has no start symbol")]
    MissingStartSymbol,

    /// Search limit exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SearchLimit),

    /// Reading configuration or input failed.
    #[error("failed to read {path}: {message}")]
    Io {
        /// The path that could not be read.
        path: String,
        /// The underlying OS message.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn describe_syntax(position: &Option<Position>, preview: &str, expected: &[String]) -> String {
    let mut msg = match position {
        Some(position) => format!("syntax error at {position}: unexpected {preview}"),
        None => "syntax error: unexpected end of input".to_string(),
    };
    if !expected.is_empty() {
        msg.push_str(", expected one of: ");
        msg.push_str(&expected.join(", "));
    }
    msg
}

/// Search limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchLimit {
    /// Maximum dequeued derivation steps exceeded.
    MaxSteps {
        /// The configured limit.
        limit: usize,
    },
    /// Maximum worklist length exceeded.
    MaxFrontier {
        /// The configured limit.
        limit: usize,
        /// The non-terminal being expanded when the limit tripped.
        symbol: Option<String>,
    },
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSteps { limit } => write!(f, "max derivation steps ({limit}) exceeded"),
            Self::MaxFrontier { limit, symbol } => {
                write!(f, "max frontier size ({limit}) exceeded")?;
                if let Some(symbol) = symbol {
                    write!(f, " while expanding {symbol}")?;
                }
                Ok(())
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Config file or input name.
    pub source: Option<String>,
    /// Section of the config the error came from.
    pub section: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the config section.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, &self.section) {
            (Some(source), Some(section)) => write!(f, "in {source} ({section} section)"),
            (Some(source), None) => write!(f, "in {source}"),
            (None, Some(section)) => write!(f, "in {section} section"),
            (None, None) => Ok(()),
        }
    }
}
