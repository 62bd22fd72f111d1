//! Syntax compilation tests.

use zapros_foundation::{ChunkType, Error};
use zapros_grammar::{compile, Part, Quantifier};

#[test]
fn compiles_the_schedule_grammar() {
    let part = compile(
        "{(day_shift | [week_shift] (weekday | week) | date [week]) (group | query)}",
    )
    .unwrap();
    let Part::Group { variants, .. } = part else {
        panic!("root is a group");
    };
    // One variant holding the single brace group.
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].len(), 1);
    let Part::Group {
        required,
        quantifier,
        ref variants,
    } = variants[0][0]
    else {
        panic!("the brace group");
    };
    assert!(required);
    assert_eq!(quantifier, Quantifier::Any);
    // Its single variant holds the two paren groups.
    assert_eq!(variants[0].len(), 2);
}

#[test]
fn bracket_kinds_set_required_and_quantifier() {
    let all = compile("(week)").unwrap();
    let any = compile("{week}").unwrap();
    let optional = compile("[week]").unwrap();

    let inner = |part: &Part| -> (bool, Quantifier) {
        let Part::Group { variants, .. } = part else {
            panic!("root is a group");
        };
        let Part::Group {
            required,
            quantifier,
            ..
        } = variants[0][0]
        else {
            panic!("inner part is a group");
        };
        (required, quantifier)
    };

    assert_eq!(inner(&all), (true, Quantifier::All));
    assert_eq!(inner(&any), (true, Quantifier::Any));
    assert_eq!(inner(&optional), (false, Quantifier::All));
}

#[test]
fn alternation_builds_sibling_variants() {
    let part = compile("day_shift | weekday week | date").unwrap();
    let Part::Group { variants, .. } = part else {
        panic!("root is a group");
    };
    assert_eq!(
        variants,
        vec![
            vec![Part::leaf(ChunkType::DayShift)],
            vec![Part::leaf(ChunkType::Weekday), Part::leaf(ChunkType::Week)],
            vec![Part::leaf(ChunkType::Date)],
        ]
    );
}

#[test]
fn mismatched_closing_bracket_is_a_construction_error() {
    assert_eq!(
        compile("{ week )").unwrap_err(),
        Error::MismatchedBracket {
            context: "{ week >)<".to_string(),
        }
    );
}

#[test]
fn top_level_closing_bracket_is_a_construction_error() {
    assert_eq!(
        compile("] week").unwrap_err(),
        Error::UnexpectedClosing {
            context: ">]< week".to_string(),
        }
    );
}

#[test]
fn unclosed_brackets_are_a_construction_error() {
    assert_eq!(
        compile("( week").unwrap_err(),
        Error::UnclosedGroups {
            count: 1,
            source_str: "( week".to_string(),
        }
    );
}

#[test]
fn unknown_syntax_words_are_a_construction_error() {
    assert_eq!(
        compile("subscribe [thing]").unwrap_err(),
        Error::UnknownChunkType {
            name: "thing".to_string(),
            context: "subscribe [>thing<]".to_string(),
        }
    );
}
