//! Familiar-word lexicon and the difficult-word classifier.
//!
//! A [`LexiconSet`] is built once (usually from the embedded Dale-Chall
//! list), validated at construction, and then only borrowed. It is
//! `Send + Sync`, so any number of concurrent analyses can share one
//! instance behind a reference or an `Arc`.
//!
//! Familiarity follows the Dale-Chall convention: regular inflections of a
//! listed word (`cats`, `bakes`, `babies`, `jumped`, `stopping`, `bigger`,
//! `kindly`, `dog's`) are familiar too.

use std::collections::HashSet;

use camino::Utf8Path;

use crate::counts::{Counts, LINSEAR_SAMPLE_WORDS};
use crate::dictionaries::dale_chall;
use crate::error::{LexiconError, LexiconResult};
use crate::syllables::COMPLEX_SYLLABLES;
use crate::text::{SentenceList, Word};

/// Origin label for the embedded list.
pub const BUILTIN_ORIGIN: &str = "built-in";

/// Inflectional endings and the text that restores the root.
const INFLECTIONS: &[(&str, &str)] = &[
    ("iest", "y"),
    ("ier", "y"),
    ("ies", "y"),
    ("ied", "y"),
    ("ily", "y"),
    ("ing", ""),
    ("ing", "e"),
    ("est", ""),
    ("est", "e"),
    ("ed", ""),
    ("ed", "e"),
    ("er", ""),
    ("er", "e"),
    ("es", ""),
    ("ly", ""),
    ("s", ""),
];

/// Shortest root an inflection may be stripped down to.
const MIN_ROOT_CHARS: usize = 2;

/// An immutable set of familiar words.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    words: HashSet<String>,
    origin: String,
}

impl LexiconSet {
    /// The embedded Dale-Chall familiar-word list.
    pub fn builtin() -> LexiconResult<Self> {
        Self::from_word_list(dale_chall::WORD_LIST, BUILTIN_ORIGIN)
    }

    /// Parse a word list (see [`dale_chall::entries`] for the format).
    ///
    /// `origin` names the list in error messages.
    pub fn from_word_list(list: &str, origin: impl Into<String>) -> LexiconResult<Self> {
        let origin = origin.into();
        let mut words = HashSet::new();
        for (line, entry) in dale_chall::entries(list) {
            words.insert(validate_entry(entry, &origin, line)?);
        }
        if words.is_empty() {
            return Err(LexiconError::Empty { origin });
        }
        tracing::debug!(origin = %origin, entries = words.len(), "lexicon built");
        Ok(Self { words, origin })
    }

    /// Read and parse a word list file.
    #[tracing::instrument]
    pub fn from_path(path: &Utf8Path) -> LexiconResult<Self> {
        let list = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_word_list(&list, path.as_str())
    }

    /// Add extra familiar words on top of this list.
    pub fn with_words<I, S>(mut self, extra: I) -> LexiconResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origin = format!("{} (extra words)", self.origin);
        for (index, entry) in extra.into_iter().enumerate() {
            let entry = validate_entry(entry.as_ref(), &origin, index + 1)?;
            self.words.insert(entry);
        }
        Ok(self)
    }

    /// Where the list came from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Number of listed entries (inflections not included).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `folded` is listed exactly.
    pub fn contains(&self, folded: &str) -> bool {
        self.words.contains(folded)
    }

    /// Whether a case-folded word is familiar, inflections and compounds included.
    pub fn is_familiar(&self, folded: &str) -> bool {
        if self.words.contains(folded) {
            return true;
        }
        if folded.contains('-') {
            let mut parts = folded.split('-').filter(|part| !part.is_empty()).peekable();
            return parts.peek().is_some() && parts.all(|part| self.is_familiar_simple(part));
        }
        self.is_familiar_simple(folded)
    }

    fn is_familiar_simple(&self, folded: &str) -> bool {
        let word = folded
            .strip_suffix("'s")
            .or_else(|| folded.strip_suffix('\''))
            .unwrap_or(folded);
        self.words.contains(word) || inflection_roots(word).any(|root| self.words.contains(&root))
    }
}

fn validate_entry(entry: &str, origin: &str, line: usize) -> LexiconResult<String> {
    let folded = entry.trim().to_lowercase();
    let mut chars = folded.chars();
    let valid = chars.next().is_some_and(char::is_alphabetic)
        && chars.all(|c| c.is_alphabetic() || c == '\'' || c == '-');
    if valid {
        Ok(folded)
    } else {
        Err(LexiconError::InvalidEntry {
            origin: origin.to_string(),
            line,
            entry: entry.to_string(),
        })
    }
}

/// Candidate roots for an inflected word, most specific rule first.
fn inflection_roots(word: &str) -> impl Iterator<Item = String> + '_ {
    INFLECTIONS.iter().flat_map(move |&(suffix, restore)| {
        let mut roots = Vec::new();
        if let Some(stem) = word.strip_suffix(suffix)
            && stem.chars().count() >= MIN_ROOT_CHARS
        {
            roots.push(format!("{stem}{restore}"));
            if restore.is_empty()
                && let Some(undoubled) = undouble(stem)
            {
                roots.push(undoubled.to_string());
            }
        }
        roots
    })
}

/// `stopp` -> `stop`, `bigg` -> `big`.
fn undouble(stem: &str) -> Option<&str> {
    let mut rev = stem.chars().rev();
    let last = rev.next()?;
    let before = rev.next()?;
    (last == before && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u'))
        .then(|| &stem[..stem.len() - last.len_utf8()])
}

/// Whether a word counts as difficult.
///
/// Difficult words are unfamiliar, and neither proper nouns (capitalized
/// mid-sentence) nor numbers.
pub fn is_difficult(word: &Word, lexicon: &LexiconSet) -> bool {
    !word.has_digit() && !word.is_proper_noun() && !lexicon.is_familiar(word.folded())
}

/// Number of words (numerals and punctuation excluded).
pub fn lexicon_count(sentences: &SentenceList) -> usize {
    sentences.words().count()
}

/// Number of distinct case-folded words.
pub fn unique_word_count(sentences: &SentenceList) -> usize {
    sentences
        .words()
        .map(Word::folded)
        .collect::<HashSet<_>>()
        .len()
}

/// Compute every count in one pass.
#[tracing::instrument(skip_all, fields(sentences = sentences.len(), lexicon = lexicon.origin()))]
pub fn classify(sentences: &SentenceList, lexicon: &LexiconSet) -> Counts {
    let mut counts = Counts {
        sentence_count: sentences.len(),
        ..Counts::default()
    };
    let mut unique = HashSet::new();

    for sentence in sentences {
        counts.character_count += sentence.character_count();
        counts.letter_count += sentence.letter_count();

        let mut sampled = false;
        for word in sentence.words() {
            counts.word_count += 1;
            counts.syllable_count += word.syllables();
            unique.insert(word.folded());
            if is_difficult(word, lexicon) {
                counts.difficult_word_count += 1;
            }
            if word.is_long() {
                counts.long_word_count += 1;
            }
            if word.is_complex() {
                counts.complex_word_count += 1;
            }
            if counts.linsear.words() < LINSEAR_SAMPLE_WORDS {
                if word.syllables() >= COMPLEX_SYLLABLES {
                    counts.linsear.hard_words += 1;
                } else {
                    counts.linsear.easy_words += 1;
                }
                sampled = true;
            }
        }
        if sampled {
            counts.linsear.sentences += 1;
        }
    }

    counts.unique_word_count = unique.len();
    tracing::debug!(
        words = counts.word_count,
        difficult = counts.difficult_word_count,
        "classified"
    );
    counts
}
