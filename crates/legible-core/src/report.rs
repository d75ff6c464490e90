//! The consolidated metrics record.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::Counts;
use crate::formulas::FormulaResults;

/// Every metric for one text, in a fixed field order.
///
/// Field names are stable and serialize as snake_case JSON. Scores that are
/// undefined for the input (no words or no sentences) serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// Flesch Reading Ease (higher is easier).
    pub flesch_reading_ease: Option<f64>,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: Option<f64>,
    /// Automated Readability Index.
    pub automated_readability_index: Option<f64>,
    /// SMOG index.
    pub smog_index: Option<f64>,
    /// Coleman-Liau index.
    pub coleman_liau_index: Option<f64>,
    /// Dale-Chall readability score.
    pub dale_chall_readability_score: Option<f64>,
    /// Linsear Write formula.
    pub linsear_write_formula: Option<f64>,
    /// Gunning Fog index.
    pub gunning_fog: Option<f64>,
    /// Consensus grade band, e.g. `"7th and 8th grade"`.
    pub text_standard: Option<String>,
    /// Consensus grade as a number.
    pub text_standard_grade: Option<u32>,
    /// Word tokens.
    pub word_count: usize,
    /// Distinct case-folded words.
    pub unique_word_count: usize,
    /// Words outside the familiar-word list.
    pub difficult_words: usize,
    /// Sentences.
    pub sentence_count: usize,
    /// Estimated syllables.
    pub syllable_count: usize,
    /// Non-whitespace characters.
    pub character_count: usize,
    /// Alphabetic characters.
    pub letter_count: usize,
    /// Words of seven or more characters.
    pub long_word_count: usize,
    /// Words of three or more syllables.
    pub complex_word_count: usize,
    /// Words per sentence.
    pub avg_sentence_length: Option<f64>,
    /// Syllables per word.
    pub avg_syllables_per_word: Option<f64>,
    /// Estimated reading time in seconds.
    pub reading_time: f64,
    /// Reading time for display.
    pub reading_time_display: String,
}

/// One metric value, for display.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// A formula score or average.
    Score(f64),
    /// A count.
    Count(usize),
    /// A label.
    Text(String),
    /// Not defined for this input.
    Undefined,
}

impl From<Option<f64>> for MetricValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Undefined, Self::Score)
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        Self::Count(value)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(v) => write!(f, "{v:.2}"),
            Self::Count(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Undefined => f.write_str("n/a"),
        }
    }
}

impl Report {
    /// The report as ordered `(field name, value)` pairs.
    ///
    /// Names match the serialized field names.
    pub fn entries(&self) -> Vec<(&'static str, MetricValue)> {
        vec![
            ("flesch_reading_ease", self.flesch_reading_ease.into()),
            ("flesch_kincaid_grade", self.flesch_kincaid_grade.into()),
            (
                "automated_readability_index",
                self.automated_readability_index.into(),
            ),
            ("smog_index", self.smog_index.into()),
            ("coleman_liau_index", self.coleman_liau_index.into()),
            (
                "dale_chall_readability_score",
                self.dale_chall_readability_score.into(),
            ),
            ("linsear_write_formula", self.linsear_write_formula.into()),
            ("gunning_fog", self.gunning_fog.into()),
            (
                "text_standard",
                self.text_standard
                    .clone()
                    .map_or(MetricValue::Undefined, MetricValue::Text),
            ),
            (
                "text_standard_grade",
                self.text_standard_grade
                    .map_or(MetricValue::Undefined, |g| MetricValue::Count(g as usize)),
            ),
            ("word_count", self.word_count.into()),
            ("unique_word_count", self.unique_word_count.into()),
            ("difficult_words", self.difficult_words.into()),
            ("sentence_count", self.sentence_count.into()),
            ("syllable_count", self.syllable_count.into()),
            ("character_count", self.character_count.into()),
            ("letter_count", self.letter_count.into()),
            ("long_word_count", self.long_word_count.into()),
            ("complex_word_count", self.complex_word_count.into()),
            ("avg_sentence_length", self.avg_sentence_length.into()),
            ("avg_syllables_per_word", self.avg_syllables_per_word.into()),
            ("reading_time", MetricValue::Score(self.reading_time)),
            (
                "reading_time_display",
                MetricValue::Text(self.reading_time_display.clone()),
            ),
        ]
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Assemble a [`Report`] from a counts snapshot and its formula results.
pub fn build_report(counts: &Counts, results: &FormulaResults) -> Report {
    let standard = results.text_standard.as_ref();
    Report {
        flesch_reading_ease: results.flesch_reading_ease,
        flesch_kincaid_grade: results.flesch_kincaid_grade,
        automated_readability_index: results.automated_readability_index,
        smog_index: results.smog_index,
        coleman_liau_index: results.coleman_liau_index,
        dale_chall_readability_score: results.dale_chall_readability_score,
        linsear_write_formula: results.linsear_write_formula,
        gunning_fog: results.gunning_fog,
        text_standard: standard.map(|s| s.label.clone()),
        text_standard_grade: standard.map(|s| s.grade),
        word_count: counts.word_count,
        unique_word_count: counts.unique_word_count,
        difficult_words: counts.difficult_word_count,
        sentence_count: counts.sentence_count,
        syllable_count: counts.syllable_count,
        character_count: counts.character_count,
        letter_count: counts.letter_count,
        long_word_count: counts.long_word_count,
        complex_word_count: counts.complex_word_count,
        avg_sentence_length: counts.words_per_sentence().map(round2),
        avg_syllables_per_word: counts.syllables_per_word().map(round2),
        reading_time: results.reading_time.seconds,
        reading_time_display: results.reading_time.display.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::{DEFAULT_WORDS_PER_MINUTE, evaluate};

    fn sample() -> Report {
        let counts = Counts {
            word_count: 12,
            unique_word_count: 10,
            sentence_count: 2,
            syllable_count: 16,
            character_count: 50,
            letter_count: 45,
            ..Counts::default()
        };
        build_report(&counts, &evaluate(&counts, DEFAULT_WORDS_PER_MINUTE))
    }

    #[test]
    fn entries_follow_field_order() {
        let report = sample();
        let names: Vec<_> = report.entries().into_iter().map(|(n, _)| n).collect();

        let json = serde_json::to_value(&report).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(names.len(), object.len());
        for name in &names {
            assert!(object.contains_key(*name), "{name} missing from JSON");
        }
        assert_eq!(names.first(), Some(&"flesch_reading_ease"));
        assert_eq!(names.last(), Some(&"reading_time_display"));
    }

    #[test]
    fn serialized_order_is_fixed() {
        let json = serde_json::to_string(&sample()).unwrap();
        let fre = json.find("\"flesch_reading_ease\"").unwrap();
        let words = json.find("\"word_count\"").unwrap();
        let display = json.find("\"reading_time_display\"").unwrap();
        assert!(fre < words && words < display);
    }

    #[test]
    fn empty_input_serializes_nulls() {
        let counts = Counts::default();
        let report = build_report(&counts, &evaluate(&counts, DEFAULT_WORDS_PER_MINUTE));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["flesch_reading_ease"].is_null());
        assert!(json["text_standard"].is_null());
        assert!(json["avg_sentence_length"].is_null());
        assert_eq!(json["word_count"], 0);
        assert_eq!(json["reading_time_display"], "0 sec");
    }

    #[test]
    fn averages_are_copied_from_counts() {
        let report = sample();
        assert_eq!(report.avg_sentence_length, Some(6.0));
        assert_eq!(report.avg_syllables_per_word, Some(1.33));
        assert_eq!(report.difficult_words, 0);
    }

    #[test]
    fn metric_values_display() {
        assert_eq!(MetricValue::Score(3.14159).to_string(), "3.14");
        assert_eq!(MetricValue::Count(7).to_string(), "7");
        assert_eq!(MetricValue::Undefined.to_string(), "n/a");
        assert_eq!(MetricValue::from(None).to_string(), "n/a");
    }
}
