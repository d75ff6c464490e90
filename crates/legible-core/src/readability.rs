//! The analysis pipeline: tokenize, classify, score, report.
//!
//! ```
//! use legible_core::{LexiconSet, analyze};
//!
//! let lexicon = LexiconSet::builtin().unwrap();
//! let report = analyze("The cat sat on the mat. The dog ran fast.", &lexicon);
//! assert_eq!(report.sentence_count, 2);
//! assert_eq!(report.word_count, 10);
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::formulas::{self, DEFAULT_WORDS_PER_MINUTE};
use crate::lexicon::{self, LexiconSet};
use crate::report::{Report, build_report};
use crate::text::{self, Document};

/// Tunables that do not affect counting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    words_per_minute: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl AnalysisOptions {
    /// Options with a custom reading speed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] unless the speed is a positive, finite number.
    pub fn with_words_per_minute(words_per_minute: f64) -> ConfigResult<Self> {
        if !(words_per_minute.is_finite() && words_per_minute > 0.0) {
            return Err(ConfigError::Invalid {
                field: "words_per_minute",
                reason: format!("must be a positive number, got {words_per_minute}"),
            });
        }
        Ok(Self { words_per_minute })
    }

    /// Reading speed used for reading time.
    pub const fn words_per_minute(&self) -> f64 {
        self.words_per_minute
    }
}

/// Analyze `text` with default options.
pub fn analyze(text: &str, lexicon: &LexiconSet) -> Report {
    analyze_with(text, lexicon, &AnalysisOptions::default())
}

/// Analyze `text`.
///
/// Never fails: empty or whitespace-only input yields zero counts and
/// undefined (`None`) scores. The same text, lexicon and options always
/// produce the same report.
#[tracing::instrument(skip(text, lexicon, options), fields(text_len = text.len()))]
pub fn analyze_with(text: &str, lexicon: &LexiconSet, options: &AnalysisOptions) -> Report {
    let sentences = text::tokenize(&Document::new(text));
    let counts = lexicon::classify(&sentences, lexicon);
    debug!(
        words = counts.word_count,
        sentences = counts.sentence_count,
        syllables = counts.syllable_count,
        "counted"
    );
    let results = formulas::evaluate(&counts, options.words_per_minute);
    build_report(&counts, &results)
}

/// A report checked against a maximum grade.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityCheck {
    /// The full report.
    pub report: Report,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<u32>,
    /// Whether the text standard grade exceeds the maximum.
    pub over_max: bool,
}

/// Analyze `text` and compare its text standard grade with `max_grade`.
///
/// Text without a grade (no words or sentences) is never over the maximum.
#[tracing::instrument(skip(text, lexicon, options), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    lexicon: &LexiconSet,
    options: &AnalysisOptions,
    max_grade: Option<u32>,
) -> ReadabilityCheck {
    let report = analyze_with(text, lexicon, options);
    let over_max = match (report.text_standard_grade, max_grade) {
        (Some(grade), Some(max)) => grade > max,
        _ => false,
    };
    ReadabilityCheck {
        report,
        max_grade,
        over_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> LexiconSet {
        LexiconSet::builtin().unwrap()
    }

    #[test]
    fn basic_readability() {
        let report = analyze("The cat sat on the mat. The dog ran fast.", &lexicon());
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.word_count, 10);
        assert!(report.flesch_kincaid_grade.unwrap() < 10.0);
        assert_eq!(report.difficult_words, 0);
    }

    #[test]
    fn the_cat_sat() {
        let report = analyze("The cat sat.", &lexicon());
        assert_eq!(report.word_count, 3);
        assert_eq!(report.sentence_count, 1);
        assert_eq!(report.syllable_count, 3);
        assert_eq!(report.flesch_reading_ease, Some(119.19));
        assert_eq!(report.flesch_kincaid_grade, Some(-2.62));
        assert_eq!(report.text_standard.as_deref(), Some("Kindergarten"));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        for text in ["", "   \n\t  "] {
            let report = analyze(text, &lexicon());
            assert_eq!(report.word_count, 0);
            assert_eq!(report.sentence_count, 0);
            assert!(report.flesch_reading_ease.is_none());
            assert!(report.text_standard.is_none());
            assert_eq!(report.reading_time, 0.0);
        }
    }

    #[test]
    fn numerals_only() {
        let report = analyze("42 17 2024.", &lexicon());
        assert_eq!(report.word_count, 0);
        assert!(report.character_count > 0);
        assert!(report.gunning_fog.is_none());
    }

    #[test]
    fn single_word_without_punctuation() {
        let report = analyze("Hello", &lexicon());
        assert_eq!(report.word_count, 1);
        assert_eq!(report.sentence_count, 1);
        assert!(report.flesch_reading_ease.is_some());
    }

    #[test]
    fn analysis_is_idempotent() {
        let text = "Readability metrics summarize text. They are estimates, not verdicts.";
        let lexicon = lexicon();
        assert_eq!(analyze(text, &lexicon), analyze(text, &lexicon));
    }

    #[test]
    fn harder_text_scores_harder() {
        let lexicon = lexicon();
        let simple = analyze("The cat sat on the mat. The dog ran fast.", &lexicon);
        let dense = analyze(
            "The implementation of the comprehensive organizational restructuring \
             initiative necessitated the establishment of interdepartmental \
             communication protocols that facilitated the dissemination of \
             procedural documentation.",
            &lexicon,
        );
        assert!(dense.flesch_reading_ease < simple.flesch_reading_ease);
        assert!(dense.flesch_kincaid_grade > simple.flesch_kincaid_grade);
        assert!(dense.gunning_fog > simple.gunning_fog);
        assert!(dense.difficult_words > simple.difficult_words);
    }

    #[test]
    fn smog_on_thirty_five_sentences() {
        // Three words of three or more syllables in every sentence.
        let text = [
            "The analysis of the parameter was typical.",
            "Our algorithm found a numerical benefit.",
            "Each memory test showed a regular pattern in history.",
            "The team will develop a general document.",
            "We consider each element an evident gain.",
            "The family kept a minimum and a maximum.",
            "An operator made an optimal periodic plan.",
            "The calculus of capital is a hard criterion.",
            "This abstraction made the computer fast on each continent.",
            "A deficit in delivery hurt the animal.",
            "The industry used an integral molecular test.",
            "A political group set a similar terminal rule.",
            "The uniform vitamin plan was tolerant of risk.",
            "A permanent cinema sits on the galaxy map.",
            "Our energy property fits the policy.",
            "The company set a quality and security goal.",
            "A majority saw the inventory in the laboratory.",
            "The accuracy of each category in the territory was low.",
            "A diagonal dominant line fed the monitor.",
            "The visitor and the editor met the senator.",
            "The president made an argument with an instrument.",
            "The agency found an allergy in a medical file.",
            "A chemical and physical check was critical.",
            "The digital and natural plans were federal.",
            "A mineral test at the festival was radical.",
            "The hospital kept a typical and regular log.",
            "The probability of the benefit was numerical.",
            "An economy needs a general and optimal plan.",
            "The senator read the history of the company.",
            "Our laboratory had a minimum and a maximum.",
            "The editor kept the document for the agency.",
            "Each instrument in the hospital was digital.",
            "The animal had a vitamin deficit.",
            "A visitor saw the capital of the territory.",
            "The computer kept a memory of the operator.",
        ]
        .join(" ");
        let report = analyze(&text, &lexicon());
        assert_eq!(report.sentence_count, 35);
        // 1.043 * sqrt(105 * 30 / 35) + 3.1291
        let smog = report.smog_index.unwrap();
        assert!((smog - 13.02).abs() <= 2.5, "smog {smog}");
    }

    #[test]
    fn reading_speed_option() {
        let text = "word ".repeat(119);
        let options = AnalysisOptions::with_words_per_minute(119.0).unwrap();
        let report = analyze_with(&text, &lexicon(), &options);
        assert_eq!(report.reading_time, 60.0);
        assert_eq!(report.reading_time_display, "1 min 0 sec");
    }

    #[test]
    fn invalid_reading_speed() {
        assert!(AnalysisOptions::with_words_per_minute(0.0).is_err());
        assert!(AnalysisOptions::with_words_per_minute(-5.0).is_err());
        assert!(AnalysisOptions::with_words_per_minute(f64::INFINITY).is_err());
    }

    #[test]
    fn over_max_grade() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        let check = check_readability(text, &lexicon(), &AnalysisOptions::default(), Some(5));
        assert!(check.over_max);
        assert_eq!(check.max_grade, Some(5));
    }

    #[test]
    fn empty_text_is_never_over_max() {
        let check = check_readability("", &lexicon(), &AnalysisOptions::default(), Some(0));
        assert!(!check.over_max);
    }
}
