//! A lexer and a grammar loaded together.

use lexgram_foundation::{ErrorContext, Result};
use lexgram_grammar::Grammar;
use lexgram_grammar::fixtures::{JSON_GRAMMAR, JSON_TOKENS};
use lexgram_lexer::{IgnoreSet, Lexer, Token};
use tracing::warn;

use crate::config::RecognizerConfig;
use crate::recognizer::Recognizer;

/// A complete language: token types, grammar, and recognizer settings.
#[derive(Clone, Debug)]
pub struct Language {
    lexer: Lexer,
    grammar: Grammar,
    config: RecognizerConfig,
}

impl Language {
    /// Loads a language from its token lines and grammar lines.
    ///
    /// Grammar terminals that name no token type are reported as warnings;
    /// they can never match, but the language still loads.
    ///
    /// # Errors
    ///
    /// Returns a config error from either section, tagged with the section
    /// it came from.
    pub fn load<T, G>(token_lines: &[T], grammar_lines: &[G]) -> Result<Self>
    where
        T: AsRef<str>,
        G: AsRef<str>,
    {
        let lexer = Lexer::load(token_lines)
            .map_err(|e| e.with_context(ErrorContext::new().with_section("token")))?;
        let grammar = Grammar::load(grammar_lines)
            .map_err(|e| e.with_context(ErrorContext::new().with_section("grammar")))?;

        let language = Self {
            lexer,
            grammar,
            config: RecognizerConfig::default(),
        };
        for terminal in language.unknown_terminals() {
            warn!(%terminal, "grammar terminal names no token type");
        }
        for non_terminal in language.grammar.undeclared_references() {
            warn!(%non_terminal, "grammar references an undeclared non-terminal");
        }
        Ok(language)
    }

    /// Loads a language from two blocks of config text.
    ///
    /// # Errors
    ///
    /// See [`Language::load`].
    pub fn from_specs(tokens: &str, grammar: &str) -> Result<Self> {
        let token_lines: Vec<&str> = tokens.lines().collect();
        let grammar_lines: Vec<&str> = grammar.lines().collect();
        Self::load(&token_lines, &grammar_lines)
    }

    /// Loads the built-in JSON language.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the fixture goes through the regular loaders.
    pub fn json() -> Result<Self> {
        Self::from_specs(JSON_TOKENS, JSON_GRAMMAR)
    }

    /// Builder method to replace the recognizer settings.
    #[must_use]
    pub fn with_config(mut self, config: RecognizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the lexer.
    #[must_use]
    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    /// Returns the grammar.
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the recognizer settings.
    #[must_use]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Returns grammar terminals that no token type declares.
    #[must_use]
    pub fn unknown_terminals(&self) -> Vec<&str> {
        self.grammar
            .terminals()
            .iter()
            .filter(|terminal| !self.lexer.declares(terminal))
            .map(String::as_str)
            .collect()
    }

    /// Tokenizes lines with this language's lexer.
    ///
    /// # Errors
    ///
    /// See [`Lexer::tokenize`].
    pub fn tokenize<L: AsRef<[u8]>>(&self, lines: &[L], ignore: &IgnoreSet) -> Result<Vec<Token>> {
        self.lexer.tokenize(lines, ignore)
    }

    /// Recognizes a token stream against the grammar.
    ///
    /// # Errors
    ///
    /// Returns `MissingStartSymbol` for an empty grammar, otherwise see
    /// [`Recognizer::parse`].
    pub fn parse(&self, tokens: &[Token]) -> Result<()> {
        Recognizer::with_config(&self.grammar, self.config.clone())?.parse(tokens)
    }

    /// Tokenizes then recognizes, returning the first error.
    ///
    /// # Errors
    ///
    /// Returns a `Lex` error if tokenization fails, otherwise see
    /// [`Language::parse`].
    pub fn check<L: AsRef<[u8]>>(&self, lines: &[L], ignore: &IgnoreSet) -> Result<()> {
        let tokens = self.tokenize(lines, ignore)?;
        self.parse(&tokens)
    }

    /// Checks a block of text, split on line breaks.
    ///
    /// # Errors
    ///
    /// See [`Language::check`].
    pub fn check_text(&self, text: &str) -> Result<()> {
        let lines: Vec<&str> = text.lines().collect();
        self.check(&lines, &IgnoreSet::new())
    }
}
