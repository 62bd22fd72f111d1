//! Keyboard-layout transliteration.
//!
//! Maps a token between the Russian ЙЦУКЕН and Latin QWERTY key rows, so
//! that a message typed with the wrong layout still hits its aliases.

/// The ЙЦУКЕН letters, in physical key order.
const CYRILLIC: &str = "йцукенгшщзхъфывапролджэячсмитьбю";
/// The QWERTY characters on the same keys.
const LATIN: &str = "qwertyuiop[]asdfghjkl;'zxcvbnm,.";

/// Maps every character of `token` to the other keyboard layout.
///
/// The direction is chosen by the first character: a token starting on the
/// Latin row maps Latin to Cyrillic, anything else maps Cyrillic to Latin.
/// Characters absent from the source row pass through unchanged, so the
/// function is total and the empty string maps to itself.
#[must_use]
pub fn switch_layout(token: &str) -> String {
    let latin_first = token
        .chars()
        .next()
        .is_some_and(|c| LATIN.contains(c));
    let (from, to) = if latin_first {
        (LATIN, CYRILLIC)
    } else {
        (CYRILLIC, LATIN)
    };
    token.chars().map(|c| map_char(c, from, to)).collect()
}

fn map_char(c: char, from: &str, to: &str) -> char {
    match from.chars().position(|f| f == c) {
        Some(index) => to.chars().nth(index).unwrap_or(c),
        None => c,
    }
}
