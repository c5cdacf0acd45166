//! Context-free grammar model and loader.
//!
//! This crate provides:
//! - [`Symbol`] - Terminal, non-terminal (`<X>`), or `EPSILON`
//! - [`Rule`] - One alternative of a non-terminal
//! - [`Grammar`] - Rules keyed by non-terminal, start symbol, terminal set
//! - [`fixtures`] - The built-in JSON language, as config text
//!
//! Grammar lines look like `<LIST> = LEFT_BRACKET <ITEMS> RIGHT_BRACKET | EPSILON`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixtures;
pub mod grammar;
pub mod symbol;

pub use grammar::{Grammar, Rule};
pub use symbol::{EPSILON, Symbol};
