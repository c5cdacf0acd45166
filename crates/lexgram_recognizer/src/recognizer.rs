//! Breadth-first derivation search.
//!
//! The worklist holds [`DerivationStep`]s in FIFO order. Each dequeued step
//! has its leading non-terminal replaced by every terminal-anchored
//! expansion; candidates that align with the tokens are enqueued, and the
//! search accepts as soon as one candidate consumes both the sentence and
//! the tokens.
//!
//! On reject the error points at the first unconsumed token of the last
//! dequeued step that still had input. With FIFO order that is the
//! furthest-progressing step explored most recently, and the location is
//! reproducible from run to run.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use lexgram_foundation::{Error, ErrorKind, Result, SearchLimit, preview};
use lexgram_grammar::{Grammar, Symbol};
use lexgram_lexer::Token;
use tracing::{debug, instrument, trace};

use crate::config::RecognizerConfig;
use crate::expansion::{expansions, leading_terminals};
use crate::step::DerivationStep;

/// Decides whether token streams derive from a grammar's start symbol.
#[derive(Clone, Debug)]
pub struct Recognizer<'g> {
    grammar: &'g Grammar,
    start: &'g str,
    config: RecognizerConfig,
}

impl<'g> Recognizer<'g> {
    /// Creates a recognizer with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingStartSymbol` if the grammar declares no non-terminal.
    pub fn new(grammar: &'g Grammar) -> Result<Self> {
        Self::with_config(grammar, RecognizerConfig::default())
    }

    /// Creates a recognizer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingStartSymbol` if the grammar declares no non-terminal.
    pub fn with_config(grammar: &'g Grammar, config: RecognizerConfig) -> Result<Self> {
        let start = grammar
            .start()
            .ok_or_else(|| Error::new(ErrorKind::MissingStartSymbol))?;
        Ok(Self {
            grammar,
            start,
            config,
        })
    }

    /// Returns the start symbol.
    #[must_use]
    pub fn start(&self) -> &str {
        self.start
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Recognizes `tokens` against the grammar.
    ///
    /// Tokens whose type the configuration skips are removed first.
    ///
    /// # Errors
    ///
    /// Returns a `Syntax` error if no derivation consumes every token, or
    /// `LimitExceeded` if a configured limit stops the search first.
    #[instrument(skip_all, fields(tokens = tokens.len()))]
    pub fn parse(&self, tokens: &[Token]) -> Result<()> {
        let tokens: Vec<&Token> = tokens
            .iter()
            .filter(|token| !self.config.skips(&token.kind))
            .collect();
        let total = tokens.len();

        let mut budget = self.config.budget();
        let mut closures: HashMap<String, Vec<Vec<Symbol>>> = HashMap::new();
        let mut worklist = VecDeque::from([DerivationStep::seed(self.start)]);
        let mut last_progress: Option<DerivationStep> = None;

        while let Some(step) = worklist.pop_front() {
            budget.charge()?;
            trace!(%step, "dequeued");
            if step.has_input(total) {
                last_progress = Some(step.clone());
            }
            let Some(head) = step.head() else {
                continue;
            };

            let forms = match closures.entry(head.to_string()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    entry.insert(expansions(self.grammar, head, &mut budget)?)
                }
            };

            for form in forms.iter() {
                let Some(next) = step.derive(form, &tokens) else {
                    continue;
                };
                if next.is_complete(total) {
                    debug!(steps = budget.used(), "accepted");
                    return Ok(());
                }
                if let Some(limit) = self.config.max_frontier {
                    if worklist.len() >= limit {
                        return Err(Error::limit_exceeded(SearchLimit::MaxFrontier {
                            limit,
                            symbol: Some(head.to_string()),
                        }));
                    }
                }
                worklist.push_back(next);
            }
        }

        debug!(steps = budget.used(), "rejected");
        Err(self.syntax_error(last_progress.as_ref(), &tokens))
    }

    /// Returns true if `tokens` derive from the start symbol.
    ///
    /// Limit errors count as a reject.
    #[must_use]
    pub fn accepts(&self, tokens: &[Token]) -> bool {
        self.parse(tokens).is_ok()
    }

    fn syntax_error(&self, step: Option<&DerivationStep>, tokens: &[&Token]) -> Error {
        let Some(step) = step else {
            return Error::syntax(None, "", Vec::new());
        };
        let Some(token) = tokens.get(step.cursor) else {
            return Error::syntax(None, "", Vec::new());
        };

        let expected = match step.sentence.split_first() {
            Some((Symbol::NonTerminal(head), rest)) => leading_terminals(self.grammar, head, rest),
            Some((Symbol::Terminal(name), _)) => vec![name.clone()],
            _ => Vec::new(),
        };
        Error::syntax(Some(token.position()), preview(&token.text), expected)
    }
}
