//! Core library for legible.
//!
//! Computes standard readability metrics for plain English text: reading
//! ease and grade-level formulas, word/sentence/syllable statistics, a
//! consensus "text standard" grade and an estimated reading time.
//!
//! The pipeline is tokenize, classify, score, report:
//!
//! - [`text`] - Sentence and word tokenization
//! - [`syllables`] - Syllable estimation
//! - [`lexicon`] - Familiar-word list and the one-pass [`Counts`] snapshot
//! - [`formulas`] - The readability formulas
//! - [`report`] - The ordered [`Report`] record
//! - [`readability`] - Entry points tying the stages together
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use legible_core::{LexiconSet, analyze};
//!
//! let lexicon = LexiconSet::builtin().expect("built-in list is valid");
//! let report = analyze("The cat sat on the mat.", &lexicon);
//!
//! assert_eq!(report.word_count, 6);
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod counts;
pub mod dictionaries;
pub mod error;
pub mod formulas;
pub mod lexicon;
pub mod readability;
pub mod report;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use counts::Counts;
pub use error::{ConfigError, ConfigResult, LexiconError, LexiconResult};
pub use formulas::{DEFAULT_WORDS_PER_MINUTE, FormulaResults, ReadingTime, TextStandard};
pub use lexicon::LexiconSet;
pub use readability::{AnalysisOptions, ReadabilityCheck, analyze, analyze_with, check_readability};
pub use report::{MetricValue, Report};
pub use syllables::count_syllables;
pub use text::{Document, SentenceList, tokenize};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
