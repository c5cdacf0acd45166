//! Ordered regex token rules and line-by-line tokenization.
//!
//! This crate provides:
//! - [`TokenType`] - A named pattern, declared as `NAME : PATTERN`
//! - [`Token`] - A typed, positioned slice of input
//! - [`Lexer`] - Compiles token types once and tokenizes lines greedily
//!
//! Token types form a priority list: at every offset the first declared
//! pattern that matches wins.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod token;


pub use lexer::{IgnoreSet, Lexer};
pub use token::{Token, TokenType};
