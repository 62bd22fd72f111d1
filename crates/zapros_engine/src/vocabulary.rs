//! The standard schedule-bot vocabulary.
//!
//! The program-embedded chunk and action tables. They are plain data;
//! [`Analyser::new`] accepts any other table with the same shapes.

use regex::Regex;
use zapros_foundation::ChunkType;

use crate::engine::Analyser;
use crate::intent::{ActionKind, ActionRule, PartialDate};
use crate::rules::{absorb_tail, BotCommand, ChunkRule, ChunkValue};

/// The chunk detection rules, in declaration order.
///
/// Order matters twice: recognizers are tried in it, and the date rule
/// comes first so bare numbers resolve as dates before anything else sees
/// them.
#[must_use]
pub fn standard_chunk_rules() -> Vec<ChunkRule> {
    let date = Regex::new(r"^(\d{1,2})(?:\.(\d{1,2})(?:\.(\d{2,4}))?)?$")
        .expect("date pattern is well formed");
    let group = Regex::new(r"^\d-?\d\d[мбс](?:[-/][а-я0-9])?$")
        .expect("group pattern is well formed");
    vec![
        ChunkRule::new(ChunkType::Date).with_recognizer(move |word| recognize_date(&date, word)),
        ChunkRule::new(ChunkType::Command)
            .with_alias(&["зв+онки", "bells"], ChunkValue::Command(BotCommand::Bells))
            .with_alias(&["справка", "help"], ChunkValue::Command(BotCommand::Help))
            .with_alias(&["формат", "format"], ChunkValue::Command(BotCommand::Format))
            .with_alias(&["рассылка", "mute"], ChunkValue::Command(BotCommand::Mute))
            .with_alias(
                &["забудь", "wipe", "optout"],
                ChunkValue::Command(BotCommand::OptOut),
            )
            .with_alias(&["файлы", "stats"], ChunkValue::Command(BotCommand::Stats)),
        ChunkRule::new(ChunkType::Group).with_recognizer(move |word| {
            group
                .is_match(word)
                .then(|| ChunkValue::Group(word.to_string()))
        }),
        ChunkRule::new(ChunkType::Query)
            .with_alias(&["по+иск"], ChunkValue::Text(String::new()))
            .with_absorb(absorb_tail),
        ChunkRule::new(ChunkType::Subscribe).with_alias(&["под+пиши"], ChunkValue::Marker),
        ChunkRule::new(ChunkType::Week)
            .with_alias(&["нед+еля", "неделю", "неделе"], ChunkValue::Marker),
        ChunkRule::new(ChunkType::WeekShift)
            .with_alias(
                &["сл+едующий", "следующая", "следующее"],
                ChunkValue::Shift(1),
            )
            .with_alias(
                &["пред+ыдущий", "предыдущая", "предыдущее"],
                ChunkValue::Shift(-1),
            ),
        ChunkRule::new(ChunkType::DayShift)
            .with_alias(&["се+годня"], ChunkValue::Shift(0))
            .with_alias(&["за+втра"], ChunkValue::Shift(1))
            .with_alias(&["вч+ера"], ChunkValue::Shift(-1)),
        ChunkRule::new(ChunkType::Weekday)
            .with_alias(&["пн", "понедельник"], ChunkValue::Weekday(1))
            .with_alias(&["вт+орник"], ChunkValue::Weekday(2))
            .with_alias(&["ср+еда"], ChunkValue::Weekday(3))
            .with_alias(&["чт", "четверг"], ChunkValue::Weekday(4))
            .with_alias(&["пт", "пятница"], ChunkValue::Weekday(5))
            .with_alias(&["сб", "суббота"], ChunkValue::Weekday(6)),
        ChunkRule::new(ChunkType::Feedback)
            .with_alias(&["отзыв"], ChunkValue::Text(String::new()))
            .with_absorb(absorb_tail),
    ]
}

/// The action rules, in priority order.
#[must_use]
pub fn standard_action_rules() -> Vec<ActionRule> {
    vec![
        ActionRule::new(ActionKind::Command, "command"),
        ActionRule::new(ActionKind::Subscribe, "subscribe [group | query]"),
        ActionRule::new(
            ActionKind::Schedule,
            "{(day_shift | [week_shift] (weekday | week) | date [week]) (group | query)}",
        ),
        ActionRule::new(ActionKind::Feedback, "feedback"),
    ]
}

fn recognize_date(pattern: &Regex, word: &str) -> Option<ChunkValue> {
    let captures = pattern.captures(word)?;
    let day: u32 = captures[1].parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    let month = match captures.get(2) {
        Some(month) => {
            let month: u32 = month.as_str().parse().ok()?;
            if !(1..=12).contains(&month) {
                return None;
            }
            Some(month)
        }
        None => None,
    };
    let year = match captures.get(3) {
        Some(year) => Some(year.as_str().parse::<i32>().ok()?),
        None => None,
    };
    Some(ChunkValue::Date(PartialDate { day, month, year }))
}

impl Analyser {
    /// Builds the engine with the standard schedule-bot vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_chunk_rules(), standard_action_rules())
            .expect("the embedded grammars compile")
    }
}
