//! Message word classification.
//!
//! Scans the lowercased words of a message in order and resolves each to a
//! typed chunk: first by exact lexicon lookup, then by the rules'
//! recognizer functions in declaration order. Unrecognized words are
//! ignored.

use std::ops::Range;

use serde::Serialize;
use zapros_foundation::ChunkType;

use crate::lexicon::Lexicon;
use crate::rules::{ChunkRule, ChunkValue};

/// A typed chunk detected in a message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Detection {
    /// The detected chunk type.
    pub chunk_type: ChunkType,
    /// The word indices this chunk covers. A single-word detection covers
    /// one index; an absorbing detection covers its marker and the whole
    /// tail it claimed.
    pub span: Range<usize>,
    /// The resolved value.
    pub value: ChunkValue,
}

impl Detection {
    /// The index of the detecting word.
    #[must_use]
    pub fn index(&self) -> usize {
        self.span.start
    }
}

/// Detects chunks in the given lowercased words.
///
/// At most one detection per chunk type survives; a later occurrence
/// overwrites an earlier one. When a detected rule carries an absorb hook,
/// the hook's value replaces the detection, the detection's span grows to
/// the end of the scannable words, and the scan limit shrinks to the
/// hook's `keep` so the absorbed tail is not reconsidered.
#[must_use]
pub fn detect(words: &[String], lexicon: &Lexicon, rules: &[ChunkRule]) -> Vec<Detection> {
    let mut detections: Vec<Detection> = Vec::new();
    let mut limit = words.len();
    let mut index = 0;
    while index < limit {
        let word = &words[index];
        let hit = lexicon.lookup(word).cloned().or_else(|| {
            rules
                .iter()
                .find_map(|rule| rule.recognize(word).map(|value| (rule.chunk_type(), value)))
        });
        let Some((chunk_type, mut value)) = hit else {
            index += 1;
            continue;
        };
        let mut span = index..index + 1;
        let rule = rules.iter().find(|rule| rule.chunk_type() == chunk_type);
        if let Some(absorbed) = rule.and_then(|rule| rule.absorb(&words[..limit], index)) {
            value = absorbed.value;
            span = index..limit;
            limit = absorbed.keep.min(limit);
        }
        let detection = Detection {
            chunk_type,
            span,
            value,
        };
        match detections
            .iter_mut()
            .find(|existing| existing.chunk_type == chunk_type)
        {
            Some(existing) => *existing = detection,
            None => detections.push(detection),
        }
        index += 1;
    }
    detections
}
