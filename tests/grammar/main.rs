//! Integration tests for the zapros_grammar crate.
//!
//! Tests for grammar compilation and matching:
//! - Syntax compilation and error reporting
//! - Compile/render round trips
//! - Structural matching

mod compile;
mod matcher;
