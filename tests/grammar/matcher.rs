//! Structural matching tests.

use std::collections::HashSet;

use zapros_foundation::ChunkType;
use zapros_grammar::{compile, evaluate};

fn present(types: &[ChunkType]) -> HashSet<ChunkType> {
    types.iter().copied().collect()
}

#[test]
fn all_group_requires_every_member() {
    let part = compile("(subscribe group week)").unwrap();
    let full = present(&[ChunkType::Subscribe, ChunkType::Group, ChunkType::Week]);
    assert!(evaluate(&part, &full).satisfied);

    for missing in [ChunkType::Subscribe, ChunkType::Group, ChunkType::Week] {
        let mut partial = full.clone();
        partial.remove(&missing);
        assert!(
            !evaluate(&part, &partial).satisfied,
            "matched without {missing}"
        );
    }
}

#[test]
fn any_group_with_three_members_succeeds_on_exactly_one() {
    let part = compile("{date week weekday}").unwrap();
    for only in [ChunkType::Date, ChunkType::Week, ChunkType::Weekday] {
        let outcome = evaluate(&part, &present(&[only]));
        assert!(outcome.satisfied, "failed with only {only}");
        assert_eq!(outcome.used, vec![only]);
    }
    assert!(!evaluate(&part, &present(&[])).satisfied);
}

#[test]
fn optional_group_reports_satisfied_regardless_of_chunks() {
    let part = compile("[date week]").unwrap();
    assert!(evaluate(&part, &present(&[])).satisfied);
    assert!(evaluate(&part, &present(&[ChunkType::Date])).satisfied);
    assert!(evaluate(&part, &present(&[ChunkType::Command])).satisfied);
}

#[test]
fn failing_optional_group_keeps_the_partial_consumption_of_its_last_variant() {
    // `date` matches, `week` does not; no variant succeeds, but the group
    // reports satisfied with the partially matched chunk types.
    let part = compile("[date week]").unwrap();
    let outcome = evaluate(&part, &present(&[ChunkType::Date]));
    assert!(outcome.satisfied);
    assert_eq!(outcome.used, vec![ChunkType::Date]);
}

#[test]
fn earlier_variants_shadow_later_ones() {
    let part = compile("group | query").unwrap();
    let outcome = evaluate(&part, &present(&[ChunkType::Group, ChunkType::Query]));
    assert_eq!(outcome.used, vec![ChunkType::Group]);

    let outcome = evaluate(&part, &present(&[ChunkType::Query]));
    assert_eq!(outcome.used, vec![ChunkType::Query]);
}

#[test]
fn schedule_grammar_matches_its_documented_shapes() {
    let part = compile(
        "{(day_shift | [week_shift] (weekday | week) | date [week]) (group | query)}",
    )
    .unwrap();

    let cases: &[(&[ChunkType], bool)] = &[
        (&[ChunkType::DayShift], true),
        (&[ChunkType::Week], true),
        (&[ChunkType::WeekShift, ChunkType::Weekday], true),
        (&[ChunkType::Date], true),
        (&[ChunkType::Date, ChunkType::Week], true),
        (&[ChunkType::Group], true),
        (&[ChunkType::Query], true),
        (&[], false),
        (&[ChunkType::Subscribe], false),
        (&[ChunkType::WeekShift], false),
    ];
    for (types, expected) in cases {
        assert_eq!(
            evaluate(&part, &present(types)).satisfied,
            *expected,
            "set {types:?}"
        );
    }
}
