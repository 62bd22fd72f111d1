//! Chunk detection rules.
//!
//! A [`ChunkRule`] declares how one chunk type is detected: by an alias
//! list expanded into the lexicon, by a recognizer function, or both. A
//! rule may also carry an absorb hook that lets the detecting chunk claim
//! the rest of the message.

use serde::Serialize;
use zapros_foundation::ChunkType;

use crate::intent::PartialDate;

/// A bot command resolved from a command-name chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BotCommand {
    /// Show the bell schedule.
    Bells,
    /// Show the help text.
    Help,
    /// Show the schedule-format reference.
    Format,
    /// Toggle broadcast delivery.
    Mute,
    /// Forget the user and their subscription.
    OptOut,
    /// Show usage statistics.
    Stats,
}

/// A resolved chunk value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkValue {
    /// A bot command name.
    Command(BotCommand),
    /// A pure presence flag with no payload.
    Marker,
    /// A study-group identifier.
    Group(String),
    /// Free text, absorbed from the words after a marker.
    Text(String),
    /// A calendar date, possibly partial.
    Date(PartialDate),
    /// A relative day or week shift.
    Shift(i64),
    /// A weekday number, 1 = Monday .. 6 = Saturday.
    Weekday(u32),
}

/// The result of an absorb hook.
#[derive(Clone, Debug, PartialEq)]
pub struct Absorbed {
    /// The replacement value for the detecting chunk.
    pub value: ChunkValue,
    /// How many leading words remain scannable; words at and beyond this
    /// index belong to the absorbing chunk and are not reconsidered.
    pub keep: usize,
}

/// Joins every word after the detecting index into one text value.
///
/// The standard absorb hook: it backs both the free-text query and the
/// feedback message.
#[must_use]
pub fn absorb_tail(words: &[String], index: usize) -> Absorbed {
    Absorbed {
        value: ChunkValue::Text(words[index + 1..].join(" ")),
        keep: index + 1,
    }
}

type Recognizer = Box<dyn Fn(&str) -> Option<ChunkValue> + Send + Sync>;
type AbsorbHook = Box<dyn Fn(&[String], usize) -> Absorbed + Send + Sync>;

/// How one chunk type is detected.
///
/// Built with the builder methods; declaration order across rules matters,
/// since recognizers are tried in that order.
pub struct ChunkRule {
    chunk_type: ChunkType,
    aliases: Vec<(Vec<String>, ChunkValue)>,
    recognizer: Option<Recognizer>,
    absorb: Option<AbsorbHook>,
}

impl ChunkRule {
    /// Creates an empty rule for `chunk_type`.
    #[must_use]
    pub fn new(chunk_type: ChunkType) -> Self {
        Self {
            chunk_type,
            aliases: Vec::new(),
            recognizer: None,
            absorb: None,
        }
    }

    /// Adds an alias set resolving to `value`.
    ///
    /// An alias may contain the abbreviation marker `+`; the part before it
    /// is also accepted on its own (`"зв+онки"` accepts both `зв` and
    /// `звонки`).
    #[must_use]
    pub fn with_alias(mut self, aliases: &[&str], value: ChunkValue) -> Self {
        self.aliases
            .push((aliases.iter().map(|a| (*a).to_string()).collect(), value));
        self
    }

    /// Sets the recognizer function for words no alias matched.
    #[must_use]
    pub fn with_recognizer(
        mut self,
        recognizer: impl Fn(&str) -> Option<ChunkValue> + Send + Sync + 'static,
    ) -> Self {
        self.recognizer = Some(Box::new(recognizer));
        self
    }

    /// Sets the absorb hook invoked after this rule's chunk is detected.
    #[must_use]
    pub fn with_absorb(
        mut self,
        absorb: impl Fn(&[String], usize) -> Absorbed + Send + Sync + 'static,
    ) -> Self {
        self.absorb = Some(Box::new(absorb));
        self
    }

    /// The chunk type this rule detects.
    #[must_use]
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    /// The declared alias sets and their values.
    #[must_use]
    pub fn aliases(&self) -> &[(Vec<String>, ChunkValue)] {
        &self.aliases
    }

    /// Runs the recognizer against a word.
    #[must_use]
    pub fn recognize(&self, word: &str) -> Option<ChunkValue> {
        self.recognizer.as_ref().and_then(|r| r(word))
    }

    /// Runs the absorb hook, if the rule declares one.
    #[must_use]
    pub fn absorb(&self, words: &[String], index: usize) -> Option<Absorbed> {
        self.absorb.as_ref().map(|hook| hook(words, index))
    }
}

impl std::fmt::Debug for ChunkRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkRule")
            .field("chunk_type", &self.chunk_type)
            .field("aliases", &self.aliases)
            .field("recognizer", &self.recognizer.is_some())
            .field("absorb", &self.absorb.is_some())
            .finish()
    }
}
