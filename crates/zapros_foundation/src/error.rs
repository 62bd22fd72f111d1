//! Error types for engine construction.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! All variants are configuration errors detected while building an engine:
//! a malformed grammar syntax string or a syntax word naming no chunk type.
//! Failing to recognize a message at runtime is not an error and never
//! surfaces here.

use thiserror::Error;

/// A convenient `Result` alias for construction-time operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A configuration error raised while compiling grammars.
///
/// The `context` fields carry the offending syntax string with the token
/// that triggered the error wrapped as `>token<`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A closing bracket of a different kind than the innermost open one.
    #[error("grammar syntax error: mismatched closing bracket: {context}")]
    MismatchedBracket {
        /// The syntax string with the offending token marked.
        context: String,
    },

    /// A closing bracket with no group open.
    #[error("grammar syntax error: closing bracket at top level: {context}")]
    UnexpectedClosing {
        /// The syntax string with the offending token marked.
        context: String,
    },

    /// Open brackets left unclosed at end of input.
    #[error("grammar syntax error: {count} unclosed group(s): {source_str}")]
    UnclosedGroups {
        /// How many groups were still open.
        count: usize,
        /// The full syntax string.
        source_str: String,
    },

    /// A syntax word that names no chunk type.
    #[error("grammar syntax error: unknown chunk type `{name}`: {context}")]
    UnknownChunkType {
        /// The unrecognized word.
        name: String,
        /// The syntax string with the offending token marked.
        context: String,
    },
}
