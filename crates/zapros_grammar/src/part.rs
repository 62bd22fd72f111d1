//! The compiled grammar tree.
//!
//! A grammar describes which chunk combinations constitute an action.
//! It is compiled once from a syntax string and never mutated afterwards.

use zapros_foundation::ChunkType;

/// How many members of a variant must be satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantifier {
    /// Every member of the variant must be satisfied.
    All,
    /// At least one member of the variant must be satisfied.
    Any,
}

/// A node of a compiled grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Part {
    /// A reference to a chunk type that must be present among the
    /// detected chunks.
    Leaf(ChunkType),
    /// A group of alternative member sequences.
    Group {
        /// Whether the group must be satisfied for its parent to succeed.
        /// An optional group reports success even when no variant matches.
        required: bool,
        /// How many members of a variant must be satisfied.
        quantifier: Quantifier,
        /// Alternative member sequences, tried in declared order.
        variants: Vec<Vec<Part>>,
    },
}

impl Part {
    /// Creates a leaf referencing `chunk_type`.
    #[must_use]
    pub fn leaf(chunk_type: ChunkType) -> Self {
        Self::Leaf(chunk_type)
    }

    /// Creates a group from its variants.
    #[must_use]
    pub fn group(required: bool, quantifier: Quantifier, variants: Vec<Vec<Part>>) -> Self {
        Self::Group {
            required,
            quantifier,
            variants,
        }
    }
}
