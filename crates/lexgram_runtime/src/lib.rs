//! Config loading, CLI, and REPL for lexgram.
//!
//! This crate provides:
//! - [`ConfigSource`] - Splits a config file into token and grammar sections
//! - [`Cli`] and [`run`] - The `lexgram` command line
//! - [`Repl`] - Interactive checking against a language
//! - [`init_tracing`] - Log output for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;

pub use cli::{Cli, Command, run, token_table};
pub use config::{ConfigSource, load_language, read_line_bytes};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_tracing;
pub use repl::Repl;
