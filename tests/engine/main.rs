//! Integration tests for the zapros_engine crate.
//!
//! Tests for the message analysis pipeline:
//! - Keyboard-layout transliteration
//! - Lexicon expansion
//! - End-to-end analysis with the standard vocabulary
//! - Date resolution
//! - Serialization of analysis results
//! - Property-based checks

mod properties;
mod serialize;
mod translit;
