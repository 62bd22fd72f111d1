//! Grammar compilation and structural matching for Zapros.
//!
//! This crate provides:
//! - [`Part`] and [`Quantifier`] - The compiled grammar tree
//! - [`compile`] - Syntax string to tree compilation
//! - [`render`] - Tree back to syntax string
//! - [`evaluate`] - Structural matching against detected chunk types
//!
//! Grammars are compiled once at engine construction and are immutable
//! afterwards; matching is a pure function over the compiled tree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod matcher;
pub mod part;
pub mod pretty;

pub use compile::compile;
pub use matcher::{evaluate, Outcome};
pub use part::{Part, Quantifier};
pub use pretty::render;
