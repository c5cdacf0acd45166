//! Config files and input files.
//!
//! A config file holds the token section, a separator line of three or
//! more dashes, then the grammar section:
//!
//! ```text
//! # tokens
//! NUMBER : [0-9]+
//! PLUS   : \+
//! ---
//! # grammar
//! <SUM> = NUMBER <MORE>
//! <MORE> = EPSILON | PLUS NUMBER <MORE>
//! ```
//!
//! Lines are trimmed; blank lines and `#` comments are dropped from both
//! sections. A file without a separator is all tokens and no grammar.

use std::fs;
use std::path::Path;

use lexgram_foundation::{Error, ErrorContext, Result};
use lexgram_recognizer::Language;
use tracing::debug;

/// The two sections of a config source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigSource {
    /// Token declarations, `NAME : PATTERN`.
    pub token_lines: Vec<String>,
    /// Grammar rules, `<NAME> = ALT | ALT`.
    pub grammar_lines: Vec<String>,
}

impl ConfigSource {
    /// Splits config text into its token and grammar sections.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedSpec` error if a second separator appears.
    pub fn parse(text: &str) -> Result<Self> {
        let mut source = Self::default();
        let mut in_grammar = false;

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if is_separator(line) {
                if in_grammar {
                    return Err(Error::malformed_spec(
                        idx + 1,
                        line,
                        "more than one section separator",
                    ));
                }
                in_grammar = true;
                continue;
            }

            if in_grammar {
                source.grammar_lines.push(line.to_string());
            } else {
                source.token_lines.push(line.to_string());
            }
        }

        debug!(
            tokens = source.token_lines.len(),
            rules = source.grammar_lines.len(),
            "split config source"
        );
        Ok(source)
    }

    /// Reads and splits a config file.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be read as UTF-8 text, or a
    /// `MalformedSpec` error as for [`ConfigSource::parse`].
    pub fn read(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| Error::io(&name, &e))?;
        Self::parse(&text).map_err(|e| e.with_context(ErrorContext::new().with_source(name)))
    }

    /// Returns true if the source has no grammar rules.
    #[must_use]
    pub fn is_tokens_only(&self) -> bool {
        self.grammar_lines.is_empty()
    }

    /// Builds the language this source describes.
    ///
    /// # Errors
    ///
    /// See [`Language::load`].
    pub fn language(&self) -> Result<Language> {
        Language::load(&self.token_lines, &self.grammar_lines)
    }
}

/// Loads a language from a config file, or the built-in JSON language.
///
/// Errors from the file carry its path along with the section they came
/// from.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, or a config error if
/// either section is malformed.
pub fn load_language(path: Option<&Path>) -> Result<Language> {
    let Some(path) = path else {
        return Language::json();
    };
    let name = path.display().to_string();
    ConfigSource::read(path)?.language().map_err(|mut e| {
        let context = e.context.take().unwrap_or_default().with_source(name);
        e.with_context(context)
    })
}

/// Reads a file as raw byte lines.
///
/// Lines end at `\n`; a trailing `\r` is stripped. A final line terminator
/// does not start another line.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read.
pub fn read_line_bytes(path: &Path) -> Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path).map_err(|e| Error::io(path.display().to_string(), &e))?;
    Ok(split_line_bytes(&bytes))
}

/// Splits bytes into lines the same way [`read_line_bytes`] does.
#[must_use]
pub fn split_line_bytes(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}

fn is_separator(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}
