//! Core types shared by every lexgram layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with an [`ErrorKind`] and optional context
//! - [`Position`] - 1-based row/column locations for diagnostics
//! - [`SearchLimit`] - Kill switches for the recognizer's derivation search
//! - [`preview`] - Capped text excerpts used in error messages

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod position;
pub mod text;

pub use error::{Error, ErrorContext, ErrorKind, Result, SearchLimit};
pub use position::Position;
pub use text::{PREVIEW_LIMIT, preview};
