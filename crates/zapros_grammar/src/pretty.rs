//! Grammar re-serializer.
//!
//! Converts a compiled grammar tree back to an equivalent syntax string.
//! Compiling the rendered string reproduces an equal tree, which backs the
//! round-trip tests on the compiler.

use crate::part::{Part, Quantifier};

/// Renders a compiled grammar back to a syntax string.
///
/// The root group prints bare, matching the implicit group the compiler
/// wraps around the whole source. Optional groups always print with square
/// brackets; the syntax has no written form for an optional any-member
/// group, so one renders as `[ ... ]` too.
#[must_use]
pub fn render(part: &Part) -> String {
    match part {
        Part::Group { variants, .. } => render_variants(variants),
        Part::Leaf(_) => render_nested(part),
    }
}

fn render_variants(variants: &[Vec<Part>]) -> String {
    variants
        .iter()
        .map(|variant| {
            variant
                .iter()
                .map(render_nested)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_nested(part: &Part) -> String {
    match part {
        Part::Leaf(chunk_type) => chunk_type.name().to_string(),
        Part::Group {
            required,
            quantifier,
            variants,
        } => {
            let inner = render_variants(variants);
            match (required, quantifier) {
                (true, Quantifier::All) => format!("({inner})"),
                (true, Quantifier::Any) => format!("{{{inner}}}"),
                (false, _) => format!("[{inner}]"),
            }
        }
    }
}
