//! Grammar recognition by breadth-first derivation search.
//!
//! This crate provides:
//! - [`Recognizer`] - Decides whether a token stream derives from a grammar
//! - [`DerivationStep`] - One node of the search frontier
//! - [`RecognizerConfig`] - Skipped token types and search limits
//! - [`Language`] - A lexer and grammar loaded together
//!
//! # Search
//!
//! ```text
//! worklist: [ <JSON> @ 0 ]
//!     │ dequeue, expand leading non-terminal until a terminal leads
//!     ▼
//! LEFT_BRACE STRING COLON <JSON> <ENTRIES> RIGHT_BRACE
//!     │ align leading terminals against tokens
//!     ▼
//! worklist: [ <JSON> <ENTRIES> RIGHT_BRACE @ 3 ]
//!     │ ...
//!     ▼
//! accept when sentence and tokens run out together
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod expansion;
pub mod language;
pub mod recognizer;
pub mod step;


pub use config::RecognizerConfig;
pub use language::Language;
pub use recognizer::Recognizer;
pub use step::DerivationStep;
