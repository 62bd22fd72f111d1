//! Property-based checks over the engine.

use proptest::prelude::*;
use zapros_engine::{switch_layout, Analyser};

proptest! {
    /// Transliterating a single-row token twice restores it.
    #[test]
    fn transliteration_is_an_involution_on_cyrillic_tokens(
        token in "[йцукенгшщзхъфывапролджэячсмитьбю]{1,12}",
    ) {
        prop_assert_eq!(switch_layout(&switch_layout(&token)), token);
    }

    /// The Latin row round-trips the same way.
    #[test]
    fn transliteration_is_an_involution_on_latin_tokens(token in "[a-z]{1,12}") {
        prop_assert_eq!(switch_layout(&switch_layout(&token)), token);
    }

    /// Analysis never panics, whatever the message contains.
    #[test]
    fn analyse_never_panics(message in "\\PC{0,60}") {
        let analyser = Analyser::standard();
        let _ = analyser.analyse(&message);
    }

    /// Every analysis annotates exactly the message's words.
    #[test]
    fn word_annotations_cover_the_whole_message(
        message in "(подпиши|поиск|сегодня|неделя|справка|бла| ){1,8}",
    ) {
        let analyser = Analyser::standard();
        if let Some(analysis) = analyser.analyse(&message) {
            prop_assert_eq!(analysis.words.len(), message.split_whitespace().count());
            let all = analysis.words.iter().all(|word| word.used);
            prop_assert_eq!(analysis.all_words_used, all);
        }
    }
}
