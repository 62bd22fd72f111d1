//! Keyboard-layout transliteration tests.

use zapros_engine::switch_layout;

#[test]
fn maps_between_the_two_key_rows() {
    assert_eq!(switch_layout("сегодня"), "ctujlyz");
    assert_eq!(switch_layout("ctujlyz"), "сегодня");
    assert_eq!(switch_layout("зв"), "pd");
}

#[test]
fn direction_follows_the_first_character() {
    // `x` sits on the Latin row, so the whole token maps Latin to Cyrillic.
    assert_eq!(switch_layout("xn"), "чт");
    // `ч` sits on the Cyrillic row, so the token maps the other way.
    assert_eq!(switch_layout("чт"), "xn");
}

#[test]
fn characters_outside_the_source_row_pass_through() {
    assert_eq!(switch_layout("15.03"), "15.03");
    assert_eq!(switch_layout("з-1"), "p-1");
}

#[test]
fn double_application_restores_single_row_tokens() {
    for token in [
        "подпиши",
        "неделя",
        "звонки",
        "справка",
        "hello",
        "bells",
        "",
    ] {
        assert_eq!(switch_layout(&switch_layout(token)), token);
    }
}
