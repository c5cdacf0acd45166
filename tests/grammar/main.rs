//! Integration tests for Layer 1: Grammar
//!
//! Tests for symbol classification and grammar loading.

mod symbols;
