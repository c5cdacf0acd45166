//! Configuration for the derivation search.

use std::collections::BTreeSet;

use lexgram_foundation::{Error, Result, SearchLimit};
use lexgram_grammar::fixtures::WHITESPACE;

/// Configuration for the recognizer.
///
/// Controls which token types are dropped before matching and how much
/// work the search may do before giving up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Token types removed from the stream before recognition.
    pub skip_types: BTreeSet<String>,

    /// Maximum units of search work (dequeued steps plus expansion forms).
    pub max_steps: Option<usize>,

    /// Maximum number of steps waiting in the worklist.
    pub max_frontier: Option<usize>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            skip_types: BTreeSet::from([WHITESPACE.to_string()]),
            max_steps: None,
            max_frontier: None,
        }
    }
}

impl RecognizerConfig {
    /// Creates a default configuration with a cap on search work.
    ///
    /// Suited to grammars of unknown quality, where left recursion through
    /// non-terminals alone would otherwise never finish.
    #[must_use]
    pub fn bounded(max_steps: usize) -> Self {
        Self::default().with_max_steps(max_steps)
    }

    /// Builder method to replace the skipped token types.
    #[must_use]
    pub fn with_skip_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to keep every token.
    #[must_use]
    pub fn without_skipping(mut self) -> Self {
        self.skip_types.clear();
        self
    }

    /// Builder method to set the work limit.
    #[must_use]
    pub fn with_max_steps(mut self, limit: usize) -> Self {
        self.max_steps = Some(limit);
        self
    }

    /// Builder method to set the worklist limit.
    #[must_use]
    pub fn with_max_frontier(mut self, limit: usize) -> Self {
        self.max_frontier = Some(limit);
        self
    }

    /// Returns true if tokens of this type are dropped.
    #[must_use]
    pub fn skips(&self, kind: &str) -> bool {
        self.skip_types.contains(kind)
    }

    pub(crate) fn budget(&self) -> Budget {
        Budget {
            used: 0,
            limit: self.max_steps,
        }
    }
}

/// Work counter shared by one search and its expansion closures.
#[derive(Debug)]
pub(crate) struct Budget {
    used: usize,
    limit: Option<usize>,
}

impl Budget {
    /// A budget that never runs out.
    pub(crate) fn unlimited() -> Self {
        Self {
            used: 0,
            limit: None,
        }
    }

    /// Records one unit of work.
    pub(crate) fn charge(&mut self) -> Result<()> {
        self.used += 1;
        match self.limit {
            Some(limit) if self.used > limit => {
                Err(Error::limit_exceeded(SearchLimit::MaxSteps { limit }))
            }
            _ => Ok(()),
        }
    }

    /// Units of work recorded so far.
    pub(crate) fn used(&self) -> usize {
        self.used
    }
}
