//! lexgram - Regex-driven tokenizer and breadth-first grammar recognizer
//!
//! This crate re-exports all layers of the lexgram system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: lexgram_runtime     Config files, CLI, REPL, tracing setup
//! Layer 2: lexgram_recognizer  Derivation search, Language facade
//! Layer 1: lexgram_lexer       Token types, tokens, lexer
//!          lexgram_grammar     Symbols, rules, grammar, JSON fixture
//! Layer 0: lexgram_foundation  Error, Position, SearchLimit, preview
//! ```

pub use lexgram_foundation as foundation;
pub use lexgram_grammar as grammar;
pub use lexgram_lexer as lexer;
pub use lexgram_recognizer as recognizer;
pub use lexgram_runtime as runtime;
