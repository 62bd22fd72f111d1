//! The analyser.
//!
//! Ties the pipeline together: lexicon and grammar compilation at
//! construction, then detection, grammar matching, action selection and
//! payload materialization per message.

use std::collections::HashSet;

use tracing::debug;
use zapros_foundation::{ChunkType, Result};
use zapros_grammar::{compile, evaluate, Part};

use crate::classify::{detect, Detection};
use crate::intent::{
    ActionKind, ActionRule, Analysis, DateSpec, Intent, ScheduleQuery, Target, WordUsage,
};
use crate::lexicon::Lexicon;
use crate::rules::{ChunkRule, ChunkValue};

/// An action rule with its grammar compiled.
#[derive(Clone, Debug)]
struct CompiledAction {
    kind: ActionKind,
    grammar: Part,
}

/// The intent recognition engine.
///
/// Immutable after construction; `analyse` is a pure function, so one
/// instance may serve arbitrarily many concurrent callers.
pub struct Analyser {
    rules: Vec<ChunkRule>,
    lexicon: Lexicon,
    actions: Vec<CompiledAction>,
}

impl Analyser {
    /// Builds an engine from chunk and action rules.
    ///
    /// The lexicon is expanded and every action grammar is compiled here;
    /// the tables are read-only afterwards.
    ///
    /// # Errors
    /// Returns a configuration error when an action's syntax string is
    /// malformed or names an unknown chunk type.
    pub fn new(chunk_rules: Vec<ChunkRule>, action_rules: Vec<ActionRule>) -> Result<Self> {
        let lexicon = Lexicon::build(&chunk_rules);
        let actions = action_rules
            .into_iter()
            .map(|rule| {
                Ok(CompiledAction {
                    kind: rule.kind,
                    grammar: compile(&rule.syntax)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rules: chunk_rules,
            lexicon,
            actions,
        })
    }

    /// Recognizes the intent of one message.
    ///
    /// Returns `None` when no action's grammar is satisfied by the
    /// detected chunks; that is the ordinary outcome for an unrecognized
    /// message, not an error.
    #[must_use]
    pub fn analyse(&self, message: &str) -> Option<Analysis> {
        let original: Vec<&str> = message.split_whitespace().collect();
        let words: Vec<String> = original.iter().map(|word| word.to_lowercase()).collect();
        let detections = detect(&words, &self.lexicon, &self.rules);
        let present: HashSet<ChunkType> = detections.iter().map(|d| d.chunk_type).collect();

        for action in &self.actions {
            let outcome = evaluate(&action.grammar, &present);
            if !outcome.satisfied {
                continue;
            }
            let used: Vec<&Detection> = detections
                .iter()
                .filter(|d| outcome.used.contains(&d.chunk_type))
                .collect();
            let Some(intent) = materialize(action.kind, &used) else {
                debug!(
                    action = ?action.kind,
                    "satisfied action skipped, payload could not be materialized"
                );
                continue;
            };

            let mut flags = vec![false; words.len()];
            for detection in &used {
                for index in detection.span.clone() {
                    if let Some(flag) = flags.get_mut(index) {
                        *flag = true;
                    }
                }
            }
            let words = original
                .iter()
                .zip(&flags)
                .map(|(word, &used)| WordUsage {
                    text: (*word).to_string(),
                    used,
                })
                .collect();
            return Some(Analysis {
                action: action.kind,
                intent,
                words,
                all_words_used: flags.iter().all(|&used| used),
            });
        }
        None
    }
}

/// Builds the action payload from the chunks the matcher consumed.
///
/// Returns `None` only when a chunk binding the payload requires is
/// missing or carries an unexpected value, which a well-formed rule table
/// cannot produce.
fn materialize(kind: ActionKind, used: &[&Detection]) -> Option<Intent> {
    let find = |chunk_type: ChunkType| used.iter().find(|d| d.chunk_type == chunk_type);
    match kind {
        ActionKind::Command => {
            let ChunkValue::Command(command) = find(ChunkType::Command)?.value else {
                return None;
            };
            Some(Intent::Command { command })
        }
        ActionKind::Subscribe => Some(Intent::Subscribe {
            target: target_from(used),
        }),
        ActionKind::Schedule => {
            let mut date = DateSpec::default();
            if let Some(detection) = find(ChunkType::Date) {
                let ChunkValue::Date(partial) = detection.value else {
                    return None;
                };
                date.date = Some(partial);
            }
            if let Some(detection) = find(ChunkType::DayShift) {
                let ChunkValue::Shift(shift) = detection.value else {
                    return None;
                };
                date.day_shift = shift;
            }
            if let Some(detection) = find(ChunkType::WeekShift) {
                let ChunkValue::Shift(shift) = detection.value else {
                    return None;
                };
                date.week_shift = shift;
            }
            if let Some(detection) = find(ChunkType::Weekday) {
                let ChunkValue::Weekday(weekday) = detection.value else {
                    return None;
                };
                date.weekday = Some(weekday);
            }
            Some(Intent::Schedule(ScheduleQuery {
                date,
                week: find(ChunkType::Week).is_some(),
                target: target_from(used),
            }))
        }
        ActionKind::Feedback => {
            let ChunkValue::Text(ref text) = find(ChunkType::Feedback)?.value else {
                return None;
            };
            Some(Intent::Feedback { text: text.clone() })
        }
    }
}

/// Extracts the group or query target, preferring an explicit group.
fn target_from(used: &[&Detection]) -> Option<Target> {
    for detection in used {
        match &detection.value {
            ChunkValue::Group(group) if detection.chunk_type == ChunkType::Group => {
                return Some(Target::Group(group.clone()));
            }
            _ => {}
        }
    }
    for detection in used {
        match &detection.value {
            ChunkValue::Text(text) if detection.chunk_type == ChunkType::Query => {
                return Some(Target::Query(text.clone()));
            }
            _ => {}
        }
    }
    None
}
