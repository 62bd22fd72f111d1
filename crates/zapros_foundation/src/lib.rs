//! Core vocabulary and error types for Zapros.
//!
//! This crate provides:
//! - [`ChunkType`] - The closed set of token categories the engine detects
//! - [`Error`] - Construction-time configuration errors
//!
//! Everything downstream (grammar compilation, lexicon building, message
//! analysis) speaks in terms of these types.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chunk;
pub mod error;

pub use chunk::ChunkType;
pub use error::{Error, Result};
