//! Property-based tests for the readability engine.
//!
//! These check invariants that must hold for any input: analysis never
//! panics, is deterministic, and its counts stay mutually consistent.

use legible_core::{LexiconSet, analyze, count_syllables};
use proptest::prelude::*;

fn lexicon() -> LexiconSet {
    LexiconSet::builtin().unwrap()
}

/// Lowercase ASCII words of one to twelve letters.
fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// A capitalized sentence of three to ten words.
///
/// Ends with `!` so a trailing abbreviation cannot swallow the boundary.
fn sentence() -> impl Strategy<Value = String> {
    ("[A-Z]", prop::collection::vec(word(), 3..10))
        .prop_map(|(initial, words)| format!("{initial}{}!", words.join(" ")))
}

const DENSE: &str = "The implementation of the comprehensive organizational restructuring \
                     initiative necessitated the establishment of interdepartmental \
                     communication protocols.";

/// Three to five one-syllable words, such as "The cat sat on the mat!".
fn short_sentence() -> impl Strategy<Value = String> {
    const WORDS: &[&str] = &["cat", "sat", "mat", "dog", "ran", "hat", "sun", "red", "big", "box"];
    prop::collection::vec(prop::sample::select(WORDS), 2..5)
        .prop_map(|words| format!("The {}!", words.join(" ")))
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(text in any::<String>()) {
        let _ = analyze(&text, &lexicon());
    }

    #[test]
    fn analysis_is_deterministic(text in "[A-Za-z0-9 .,!?;:'\n-]{0,300}") {
        let lexicon = lexicon();
        prop_assert_eq!(analyze(&text, &lexicon), analyze(&text, &lexicon));
    }

    #[test]
    fn counts_are_consistent(text in "[A-Za-z .!?\n]{0,300}") {
        let report = analyze(&text, &lexicon());
        prop_assert!(report.unique_word_count <= report.word_count);
        prop_assert!(report.difficult_words <= report.word_count);
        prop_assert!(report.complex_word_count <= report.word_count);
        prop_assert!(report.long_word_count <= report.word_count);
        prop_assert!(report.letter_count <= report.character_count);
        prop_assert!(report.syllable_count >= report.word_count);
        if report.word_count == 0 {
            prop_assert!(report.flesch_reading_ease.is_none());
            prop_assert!(report.text_standard.is_none());
        } else {
            prop_assert!(report.sentence_count >= 1);
            prop_assert!(report.text_standard.is_some());
        }
    }

    #[test]
    fn alphabetic_words_have_a_syllable(w in "[A-Za-z]{1,20}") {
        prop_assert!(count_syllables(&w) >= 1);
    }

    #[test]
    fn scores_are_rounded_to_two_places(sentences in prop::collection::vec(sentence(), 1..6)) {
        let report = analyze(&sentences.join(" "), &lexicon());
        for score in [
            report.flesch_reading_ease,
            report.flesch_kincaid_grade,
            report.gunning_fog,
            report.coleman_liau_index,
        ]
        .into_iter()
        .flatten()
        {
            prop_assert!((score * 100.0 - (score * 100.0).round()).abs() < 1e-6);
        }
    }

    #[test]
    fn appending_sentences_adds_words(
        base in prop::collection::vec(sentence(), 1..5),
        extra in sentence(),
    ) {
        let lexicon = lexicon();
        let text = base.join(" ");
        let before = analyze(&text, &lexicon);
        let after = analyze(&format!("{text} {extra}"), &lexicon);
        prop_assert!(after.word_count > before.word_count);
        prop_assert_eq!(after.sentence_count, before.sentence_count + 1);
        prop_assert!(after.reading_time > before.reading_time);
    }

    #[test]
    fn short_sentences_make_dense_text_easier(
        extra in prop::collection::vec(short_sentence(), 1..6),
    ) {
        let lexicon = lexicon();
        let before = analyze(DENSE, &lexicon);
        let after = analyze(&format!("{DENSE} {}", extra.join(" ")), &lexicon);
        let (Some(before), Some(after)) =
            (before.flesch_reading_ease, after.flesch_reading_ease)
        else {
            return Err(TestCaseError::fail("reading ease missing"));
        };
        prop_assert!(after >= before, "{after} < {before}");
    }
}
