//! The alias lexicon.
//!
//! Expands the alias declarations of every chunk rule into one exact-match
//! table from a lowercase word to its (chunk type, value) pair. Expansion
//! covers word-initial abbreviations and keyboard-layout twins. The table
//! is built once at engine construction and is read-only afterwards.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::warn;
use zapros_foundation::ChunkType;

use crate::rules::{ChunkRule, ChunkValue};

/// The abbreviation marker inside an alias declaration.
const ABBREVIATION_MARKER: char = '+';

/// Expands one alias declaration into its accepted literal forms.
///
/// `"зв+онки"` yields `зв` and `звонки`; an alias without the marker
/// yields itself.
#[must_use]
pub fn expand_alias(alias: &str) -> Vec<String> {
    match alias.split_once(ABBREVIATION_MARKER) {
        Some((prefix, suffix)) => vec![prefix.to_string(), format!("{prefix}{suffix}")],
        None => vec![alias.to_string()],
    }
}

/// An exact-match table from a literal word to its resolved chunk.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: HashMap<String, (ChunkType, ChunkValue)>,
}

impl Lexicon {
    /// Builds the lexicon from the alias declarations of `rules`.
    ///
    /// Every expanded literal registers its keyboard-layout twin first and
    /// itself second. The first registration of a word wins; later
    /// duplicates are dropped with a warning.
    #[must_use]
    pub fn build(rules: &[ChunkRule]) -> Self {
        let mut lexicon = Self::default();
        for rule in rules {
            for (aliases, value) in rule.aliases() {
                for alias in aliases {
                    for literal in expand_alias(alias) {
                        let twin = crate::translit::switch_layout(&literal);
                        lexicon.register(twin, rule.chunk_type(), value);
                        lexicon.register(literal, rule.chunk_type(), value);
                    }
                }
            }
        }
        lexicon
    }

    /// Looks up a word verbatim.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&(ChunkType, ChunkValue)> {
        self.entries.get(word)
    }

    /// Number of registered words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no words are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn register(&mut self, word: String, chunk_type: ChunkType, value: &ChunkValue) {
        match self.entries.entry(word) {
            Entry::Occupied(occupied) => {
                warn!(
                    word = %occupied.key(),
                    chunk_type = %chunk_type,
                    "duplicate lexicon alias dropped, keeping the first registration"
                );
            }
            Entry::Vacant(vacant) => {
                vacant.insert((chunk_type, value.clone()));
            }
        }
    }
}
