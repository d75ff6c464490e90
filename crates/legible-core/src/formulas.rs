//! The readability formulas.
//!
//! Every formula is a pure function of one [`Counts`] snapshot and returns
//! `None` when the text has no words or no sentences. Scores are rounded to
//! two decimals.
//!
//! | Formula | Definition |
//! |---|---|
//! | Flesch Reading Ease | `206.835 - 1.015 (W/S) - 84.6 (Syl/W)` |
//! | Flesch-Kincaid Grade | `0.39 (W/S) + 11.8 (Syl/W) - 15.59` |
//! | Automated Readability Index | `4.71 (C/W) + 0.5 (W/S) - 21.43` |
//! | SMOG | `1.043 sqrt(complex * 30 / S) + 3.1291` |
//! | Coleman-Liau | `0.0588 L - 0.296 S' - 15.8` (per 100 words) |
//! | Dale-Chall | `0.1579 pct + 0.0496 (W/S)`, `+3.6365` when `pct > 5` |
//! | Linsear Write | `r = (easy + 3 hard) / sentences` over the first 100 words |
//! | Gunning Fog | `0.4 (W/S + 100 complex/W)` |

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::Counts;

/// Default silent reading speed, in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 238.0;

/// Dale-Chall adjustment applies above this share of difficult words.
const DALE_CHALL_THRESHOLD_PCT: f64 = 5.0;

/// Linsear Write switches branches above this raw score.
const LINSEAR_THRESHOLD: f64 = 20.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `(W/S, Syl/W)` for scorable counts.
fn ratios(counts: &Counts) -> Option<(f64, f64)> {
    Some((counts.words_per_sentence()?, counts.syllables_per_word()?))
}

/// Flesch Reading Ease. Higher is easier; typical prose lands in 0..100
/// but the scale is unbounded.
pub fn flesch_reading_ease(counts: &Counts) -> Option<f64> {
    let (wps, spw) = ratios(counts)?;
    Some(round2(206.835 - 1.015 * wps - 84.6 * spw))
}

/// Flesch-Kincaid Grade Level.
pub fn flesch_kincaid_grade(counts: &Counts) -> Option<f64> {
    let (wps, spw) = ratios(counts)?;
    Some(round2(0.39f64.mul_add(wps, 11.8 * spw) - 15.59))
}

/// Automated Readability Index, from characters per word.
pub fn automated_readability_index(counts: &Counts) -> Option<f64> {
    let wps = counts.words_per_sentence()?;
    let cpw = counts.character_count as f64 / counts.word_count as f64;
    Some(round2(4.71f64.mul_add(cpw, 0.5 * wps) - 21.43))
}

/// SMOG index.
///
/// Normalised to a 30-sentence sample; shorter texts are scored as-is.
pub fn smog_index(counts: &Counts) -> Option<f64> {
    if !counts.is_scorable() {
        return None;
    }
    let scaled = counts.complex_word_count as f64 * 30.0 / counts.sentence_count as f64;
    Some(round2(1.043f64.mul_add(scaled.sqrt(), 3.1291)))
}

/// Coleman-Liau index, from letters and sentences per 100 words.
pub fn coleman_liau_index(counts: &Counts) -> Option<f64> {
    if !counts.is_scorable() {
        return None;
    }
    let per_hundred = 100.0 / counts.word_count as f64;
    let letters = counts.letter_count as f64 * per_hundred;
    let sentences = counts.sentence_count as f64 * per_hundred;
    Some(round2(0.0588f64.mul_add(letters, -0.296 * sentences) - 15.8))
}

/// Dale-Chall readability score.
pub fn dale_chall_readability_score(counts: &Counts) -> Option<f64> {
    let wps = counts.words_per_sentence()?;
    let pct = counts.difficult_word_count as f64 * 100.0 / counts.word_count as f64;
    let mut score = 0.1579f64.mul_add(pct, 0.0496 * wps);
    if pct > DALE_CHALL_THRESHOLD_PCT {
        score += 3.6365;
    }
    Some(round2(score))
}

/// Linsear Write formula over the leading-words sample.
pub fn linsear_write_formula(counts: &Counts) -> Option<f64> {
    let sample = counts.linsear;
    if !counts.is_scorable() || sample.sentences == 0 {
        return None;
    }
    let raw = (sample.easy_words + 3 * sample.hard_words) as f64 / sample.sentences as f64;
    let score = if raw > LINSEAR_THRESHOLD {
        raw / 2.0
    } else {
        (raw - 2.0) / 2.0
    };
    Some(round2(score))
}

/// Gunning Fog index.
pub fn gunning_fog(counts: &Counts) -> Option<f64> {
    let wps = counts.words_per_sentence()?;
    let complex_pct = counts.complex_word_count as f64 * 100.0 / counts.word_count as f64;
    Some(round2(0.4 * (wps + complex_pct)))
}

/// Estimated silent reading time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTime {
    /// Seconds, rounded to two decimals.
    pub seconds: f64,
    /// Whole-second display form (`"1 min 23 sec"`).
    pub display: String,
}

/// Reading time for `counts` at `words_per_minute`.
///
/// Defined for every input: no words reads in zero seconds. A non-positive
/// or non-finite speed falls back to [`DEFAULT_WORDS_PER_MINUTE`].
pub fn reading_time(counts: &Counts, words_per_minute: f64) -> ReadingTime {
    let wpm = if words_per_minute.is_finite() && words_per_minute > 0.0 {
        words_per_minute
    } else {
        DEFAULT_WORDS_PER_MINUTE
    };
    let seconds = round2(counts.word_count as f64 / wpm * 60.0);
    ReadingTime {
        seconds,
        display: format_duration(seconds),
    }
}

/// Format seconds as `"N min M sec"`, or `"M sec"` under a minute.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (minutes, secs) = (total / 60, total % 60);
    if minutes == 0 {
        format!("{secs} sec")
    } else {
        format!("{minutes} min {secs} sec")
    }
}

/// The consensus grade across all grade-producing formulas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStandard {
    /// US school grade; 0 is kindergarten.
    pub grade: u32,
    /// Human-readable band, e.g. `"7th and 8th grade"`.
    pub label: String,
}

impl TextStandard {
    fn new(grade: u32) -> Self {
        Self {
            grade,
            label: grade_label(grade),
        }
    }
}

/// Every formula's score for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormulaResults {
    /// Flesch Reading Ease.
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
    /// Consensus grade.
    pub text_standard: Option<TextStandard>,
    /// Estimated reading time.
    pub reading_time: ReadingTime,
}

/// Run every formula against `counts`.
pub fn evaluate(counts: &Counts, words_per_minute: f64) -> FormulaResults {
    let mut results = FormulaResults {
        flesch_reading_ease: flesch_reading_ease(counts),
        flesch_kincaid_grade: flesch_kincaid_grade(counts),
        automated_readability_index: automated_readability_index(counts),
        smog_index: smog_index(counts),
        coleman_liau_index: coleman_liau_index(counts),
        dale_chall_readability_score: dale_chall_readability_score(counts),
        linsear_write_formula: linsear_write_formula(counts),
        gunning_fog: gunning_fog(counts),
        text_standard: None,
        reading_time: reading_time(counts, words_per_minute),
    };
    results.text_standard = text_standard(&results);
    results
}

/// Consensus grade: the most common grade vote, lower grade on ties.
///
/// Grade-valued formulas vote both their rounded value and their ceiling.
/// Flesch Reading Ease and Dale-Chall vote through their published score
/// bands. Votes below zero count as kindergarten.
pub fn text_standard(results: &FormulaResults) -> Option<TextStandard> {
    let votes = grade_votes(results);
    let mut tally: BTreeMap<u32, usize> = BTreeMap::new();
    for vote in votes {
        *tally.entry(vote).or_default() += 1;
    }

    // Ascending iteration with a strict comparison keeps the lowest grade on ties.
    let mut best: Option<(u32, usize)> = None;
    for (grade, count) in tally {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((grade, count));
        }
    }
    best.map(|(grade, _)| TextStandard::new(grade))
}

fn grade_votes(results: &FormulaResults) -> Vec<u32> {
    let grade_formulas = [
        results.flesch_kincaid_grade,
        results.smog_index,
        results.coleman_liau_index,
        results.automated_readability_index,
        results.linsear_write_formula,
        results.gunning_fog,
    ];

    let mut votes = Vec::with_capacity(16);
    for score in grade_formulas.into_iter().flatten() {
        votes.push(clamp_grade(score.round()));
        votes.push(clamp_grade(score.ceil()));
    }
    if let Some(score) = results.flesch_reading_ease {
        votes.extend_from_slice(flesch_bands(score));
    }
    if let Some(score) = results.dale_chall_readability_score {
        votes.extend_from_slice(dale_chall_bands(score));
    }
    votes
}

fn clamp_grade(score: f64) -> u32 {
    // Saturating float-to-int cast; negatives land on 0.
    score.max(0.0) as u32
}

fn flesch_bands(score: f64) -> &'static [u32] {
    match score {
        s if s >= 90.0 => &[5],
        s if s >= 80.0 => &[6],
        s if s >= 70.0 => &[7],
        s if s >= 60.0 => &[8, 9],
        s if s >= 50.0 => &[10, 12],
        s if s >= 30.0 => &[13, 16],
        _ => &[17],
    }
}

fn dale_chall_bands(score: f64) -> &'static [u32] {
    match score {
        s if s < 5.0 => &[4],
        s if s < 6.0 => &[5, 6],
        s if s < 7.0 => &[7, 8],
        s if s < 8.0 => &[9, 10],
        s if s < 9.0 => &[11, 12],
        s if s < 10.0 => &[13, 15],
        _ => &[16],
    }
}

/// Label for a grade: `"Kindergarten"`, then `"{n-1} and {n} grade"`.
pub fn grade_label(grade: u32) -> String {
    match grade {
        0 => "Kindergarten".to_string(),
        1 => "Kindergarten and 1st grade".to_string(),
        g => format!("{} and {} grade", ordinal(g - 1), ordinal(g)),
    }
}

/// English ordinal: `1st`, `2nd`, `3rd`, `11th`, `22nd`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
