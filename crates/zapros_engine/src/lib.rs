//! Message analysis engine for Zapros.
//!
//! Turns a short free-form chat message into a structured [`Intent`] plus
//! word-usage annotations. The pipeline:
//!
//! 1. [`translit`] - keyboard-layout transliteration of alias words
//! 2. [`lexicon`] - exact-match alias table built from [`ChunkRule`]s
//! 3. [`classify`] - message words to typed [`Detection`]s
//! 4. [`engine`] - grammar matching, action selection, materialization
//!
//! The [`vocabulary`] module carries the embedded schedule-bot tables;
//! [`Analyser::standard`] builds an engine from them. Any other table may
//! be supplied through [`Analyser::new`].
//!
//! An [`Analyser`] is immutable after construction and may be shared
//! across threads without locking; `analyse` is pure and deterministic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod engine;
pub mod intent;
pub mod lexicon;
pub mod rules;
pub mod translit;
pub mod vocabulary;

pub use classify::Detection;
pub use engine::Analyser;
pub use intent::{
    ActionKind, ActionRule, Analysis, DateSpec, Intent, PartialDate, ScheduleQuery, Target,
    WordUsage,
};
pub use lexicon::Lexicon;
pub use rules::{Absorbed, BotCommand, ChunkRule, ChunkValue};
pub use translit::switch_layout;
