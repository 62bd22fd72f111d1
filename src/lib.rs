//! Zapros - Intent recognition for schedule-bot chat messages
//!
//! This crate re-exports all layers of the Zapros engine for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: zapros_engine     — Lexicon, classification, intents, Analyser
//! Layer 1: zapros_grammar    — Grammar tree, syntax compiler, matcher
//! Layer 0: zapros_foundation — Core types (ChunkType, Error)
//! ```

pub use zapros_engine as engine;
pub use zapros_foundation as foundation;
pub use zapros_grammar as grammar;
