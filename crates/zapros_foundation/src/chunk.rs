//! The closed set of chunk types.
//!
//! A chunk is a typed value extracted from one or more message words.
//! Grammar syntax strings refer to chunk types by their snake_case names,
//! so the set doubles as the leaf vocabulary of compiled grammars.

use std::fmt;

/// A category of token the classifier can detect.
///
/// The set is fixed at compile time; grammars referring to anything else
/// fail at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChunkType {
    /// A bot command name (bells, help, ...).
    Command,
    /// The subscription marker word.
    Subscribe,
    /// A study-group identifier such as `1-23м`.
    Group,
    /// The free-text query marker; absorbs the rest of the message.
    Query,
    /// A calendar date, possibly partial (`15`, `15.03`, `15.03.26`).
    Date,
    /// The week marker word (show a whole week).
    Week,
    /// A relative week shift (`следующий` = +1, `предыдущий` = -1).
    WeekShift,
    /// A relative day shift (`сегодня` = 0, `завтра` = +1, `вчера` = -1).
    DayShift,
    /// A weekday name (1 = Monday .. 6 = Saturday).
    Weekday,
    /// The feedback marker; absorbs the rest of the message.
    Feedback,
}

impl ChunkType {
    /// All chunk types, in no particular order.
    pub const ALL: [Self; 10] = [
        Self::Command,
        Self::Subscribe,
        Self::Group,
        Self::Query,
        Self::Date,
        Self::Week,
        Self::WeekShift,
        Self::DayShift,
        Self::Weekday,
        Self::Feedback,
    ];

    /// The name this type goes by in grammar syntax strings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Subscribe => "subscribe",
            Self::Group => "group",
            Self::Query => "query",
            Self::Date => "date",
            Self::Week => "week",
            Self::WeekShift => "week_shift",
            Self::DayShift => "day_shift",
            Self::Weekday => "weekday",
            Self::Feedback => "feedback",
        }
    }

    /// Resolves a grammar syntax word to a chunk type.
    ///
    /// Returns `None` for words outside the vocabulary; callers turn that
    /// into a configuration error.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "command" => Some(Self::Command),
            "subscribe" => Some(Self::Subscribe),
            "group" => Some(Self::Group),
            "query" => Some(Self::Query),
            "date" => Some(Self::Date),
            "week" => Some(Self::Week),
            "week_shift" => Some(Self::WeekShift),
            "day_shift" => Some(Self::DayShift),
            "weekday" => Some(Self::Weekday),
            "feedback" => Some(Self::Feedback),
            _ => None,
        }
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
