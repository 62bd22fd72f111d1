//! Structural grammar matching.
//!
//! Evaluates a compiled grammar tree against the set of chunk types
//! detected in a message, reporting both whether the tree is satisfied and
//! which chunk types the evaluation consumed.

use std::collections::HashSet;

use zapros_foundation::ChunkType;

use crate::part::{Part, Quantifier};

/// The result of evaluating one grammar node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the node is satisfied by the detected chunk types.
    pub satisfied: bool,
    /// Chunk types consumed by the evaluation, in evaluation order.
    ///
    /// For a group this is the accumulation of the last variant evaluated,
    /// even when the group only succeeded through the optional fallback -
    /// a failing optional group still reports the chunk types its last
    /// attempted variant managed to match.
    pub used: Vec<ChunkType>,
}

/// Evaluates a grammar node against the detected chunk types.
///
/// A leaf is satisfied iff its chunk type is present. A group tries its
/// variants in declared order and stops at the first satisfying one. Within
/// a variant, `need` starts at the variant length for an any-member group
/// and at one for an all-members group; every failing member decrements it,
/// and the variant fails as soon as `need` reaches zero. A required group
/// with no satisfying variant fails; an optional one still reports success.
#[must_use]
pub fn evaluate(part: &Part, present: &HashSet<ChunkType>) -> Outcome {
    match part {
        Part::Leaf(chunk_type) => {
            if present.contains(chunk_type) {
                Outcome {
                    satisfied: true,
                    used: vec![*chunk_type],
                }
            } else {
                Outcome::default()
            }
        }
        Part::Group {
            required,
            quantifier,
            variants,
        } => {
            let mut last_used = Vec::new();
            for variant in variants {
                let mut need = match quantifier {
                    Quantifier::Any => variant.len(),
                    Quantifier::All => 1,
                };
                let mut used = Vec::new();
                for member in variant {
                    let sub = evaluate(member, present);
                    if sub.satisfied {
                        for chunk_type in sub.used {
                            if !used.contains(&chunk_type) {
                                used.push(chunk_type);
                            }
                        }
                    } else {
                        need -= 1;
                        if need == 0 {
                            break;
                        }
                    }
                }
                let succeeded = need > 0;
                last_used = used;
                if succeeded {
                    return Outcome {
                        satisfied: true,
                        used: last_used,
                    };
                }
            }
            Outcome {
                satisfied: !required,
                used: last_used,
            }
        }
    }
}
