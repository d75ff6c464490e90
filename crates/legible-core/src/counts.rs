//! The counting snapshot every formula reads from.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of leading words the Linsear Write formula samples.
pub const LINSEAR_SAMPLE_WORDS: usize = 100;

/// Raw statistics for one document.
///
/// Built in a single pass by [`classify`](crate::lexicon::classify) and
/// then only read. All formulas share one snapshot, so they can never
/// disagree about the underlying counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Counts {
    /// Word tokens (numerals and punctuation excluded).
    pub word_count: usize,
    /// Distinct case-folded words.
    pub unique_word_count: usize,
    /// Sentences.
    pub sentence_count: usize,
    /// Estimated syllables across all words.
    pub syllable_count: usize,
    /// Words missing from the familiar-word list.
    pub difficult_word_count: usize,
    /// Non-whitespace characters, including numerals and punctuation.
    pub character_count: usize,
    /// Alphabetic characters.
    pub letter_count: usize,
    /// Words of seven or more characters.
    pub long_word_count: usize,
    /// Words of three or more syllables, inflectional endings aside.
    pub complex_word_count: usize,
    /// The leading-words sample used by Linsear Write.
    pub linsear: LinsearSample,
}

impl Counts {
    /// Whether ratio-based formulas have non-zero denominators.
    pub const fn is_scorable(&self) -> bool {
        self.word_count > 0 && self.sentence_count > 0
    }

    /// Average words per sentence, if there are sentences and words.
    pub fn words_per_sentence(&self) -> Option<f64> {
        self.is_scorable()
            .then(|| self.word_count as f64 / self.sentence_count as f64)
    }

    /// Average syllables per word, if there are sentences and words.
    pub fn syllables_per_word(&self) -> Option<f64> {
        self.is_scorable()
            .then(|| self.syllable_count as f64 / self.word_count as f64)
    }
}

/// Easy/hard split of the first [`LINSEAR_SAMPLE_WORDS`] words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LinsearSample {
    /// Sampled words with fewer than three syllables.
    pub easy_words: usize,
    /// Sampled words with three or more syllables.
    pub hard_words: usize,
    /// Sentences that contributed at least one sampled word.
    pub sentences: usize,
}

impl LinsearSample {
    /// Total sampled words.
    pub const fn words(&self) -> usize {
        self.easy_words + self.hard_words
    }
}
