//! Structured intents and analysis results.
//!
//! One [`Intent`] variant exists per action kind, so materialization is an
//! exhaustive match checked at compile time. All types here serialize, so
//! transport adapters can ship an [`Analysis`] as JSON unchanged.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::rules::BotCommand;

/// The closed set of actions the engine can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A bot command such as the help text or the bell schedule.
    Command,
    /// A subscription change.
    Subscribe,
    /// A schedule query.
    Schedule,
    /// A free-text feedback message.
    Feedback,
}

/// Constructor input tying an action kind to its grammar syntax string.
///
/// Actions are evaluated in declared order; the first satisfied one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRule {
    /// The action this rule selects.
    pub kind: ActionKind,
    /// The grammar syntax string, compiled at engine construction.
    pub syntax: String,
}

impl ActionRule {
    /// Creates a rule for `kind` with the given syntax string.
    #[must_use]
    pub fn new(kind: ActionKind, syntax: impl Into<String>) -> Self {
        Self {
            kind,
            syntax: syntax.into(),
        }
    }
}

/// What a subscription or schedule query is aimed at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Target {
    /// A study-group identifier.
    Group(String),
    /// A free-text search query.
    Query(String),
}

/// A calendar date as written in a message, possibly incomplete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PartialDate {
    /// Day of month, 1..=31.
    pub day: u32,
    /// Month, 1..=12, if written.
    pub month: Option<u32>,
    /// Year, if written. Two-digit years resolve into the 2000s.
    pub year: Option<i32>,
}

/// The date portion of a schedule query, kept relative.
///
/// The engine never reads the clock; callers resolve the spec against an
/// explicit `today`, which keeps analysis deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DateSpec {
    /// An explicit date, if the message carried one.
    pub date: Option<PartialDate>,
    /// Days to add, from words like `завтра`.
    pub day_shift: i64,
    /// Weeks to add, from words like `следующая`.
    pub week_shift: i64,
    /// A weekday to snap to, 1 = Monday .. 6 = Saturday.
    pub weekday: Option<u32>,
}

impl DateSpec {
    /// Resolves the spec to a concrete date.
    ///
    /// The explicit date is applied onto `today` first (missing month and
    /// year come from `today`, a two-digit year gains 2000, the day is
    /// clamped to the month length). The date then snaps to the requested
    /// weekday within its Sunday-started week, and finally the shifts are
    /// added.
    #[must_use]
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        let mut date = match self.date {
            Some(partial) => {
                let year = match partial.year {
                    Some(year) if year < 100 => year + 2000,
                    Some(year) => year,
                    None => today.year(),
                };
                let month = partial.month.unwrap_or_else(|| today.month());
                let day = partial.day.clamp(1, days_in_month(year, month));
                NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today)
            }
            None => today,
        };
        if let Some(weekday) = self.weekday {
            let from_sunday = i64::from(date.weekday().num_days_from_sunday());
            date += Duration::days(i64::from(weekday) - from_sunday);
        }
        date + Duration::days(self.week_shift * 7 + self.day_shift)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(28)
}

/// A recognized schedule query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleQuery {
    /// Which date or date range the query is about.
    pub date: DateSpec,
    /// Whether the whole week was requested.
    pub week: bool,
    /// Whose schedule, when named explicitly.
    pub target: Option<Target>,
}

/// A recognized intent with its extracted arguments.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    /// Run a bot command.
    Command {
        /// Which command was named.
        command: BotCommand,
    },
    /// Subscribe to a group or query, or show the current subscription
    /// when no target is named.
    Subscribe {
        /// What to subscribe to.
        target: Option<Target>,
    },
    /// Look up a schedule.
    Schedule(ScheduleQuery),
    /// Leave a feedback message.
    Feedback {
        /// The message text after the feedback marker.
        text: String,
    },
}

/// One message word and whether the analysis consumed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordUsage {
    /// The word as written, before case folding.
    pub text: String,
    /// Whether a used chunk covered this word.
    pub used: bool,
}

/// The full result of analysing one message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    /// The selected action.
    pub action: ActionKind,
    /// The structured payload built from the matched chunks.
    pub intent: Intent,
    /// Every message word, annotated used or unused.
    pub words: Vec<WordUsage>,
    /// Whether every word was claimed by a used chunk.
    pub all_words_used: bool,
}
