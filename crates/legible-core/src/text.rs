//! Tokenization: documents into sentences, sentences into words.
//!
//! Sentence boundaries come from a character scan with abbreviation and
//! initial awareness. Words are whitespace-separated tokens with outer
//! punctuation trimmed; tokens without a letter (numerals, stray
//! punctuation) are not words but still count as characters.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::syllables;

/// Words with at least this many characters count as long.
pub const LONG_WORD_CHARS: usize = 7;

/// Initials and dotted initialisms without the final period (`J`, `J.K`, `U.S.A`).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Lu}(?:\.\p{Lu})*$").expect("valid regex"));

/// Plain text to analyze. Borrowed and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    text: &'a str,
}

impl<'a> Document<'a> {
    /// Wrap already-decoded plain text.
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The underlying text.
    pub const fn as_str(&self) -> &'a str {
        self.text
    }
}

impl<'a> From<&'a str> for Document<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

/// A word token.
///
/// Keeps the original casing for display and a folded form for lexicon
/// lookup. The syllable count is estimated once, at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    text: String,
    folded: String,
    syllables: usize,
    sentence_initial: bool,
}

impl Word {
    /// Build a word from a trimmed token.
    ///
    /// `sentence_initial` marks the first word of a sentence, whose
    /// capitalization says nothing about being a proper noun.
    pub fn new(text: &str, sentence_initial: bool) -> Self {
        let folded = text.replace(['\u{2019}', '\u{2018}'], "'").to_lowercase();
        Self {
            syllables: syllables::count_syllables(text),
            text: text.to_string(),
            folded,
            sentence_initial,
        }
    }

    /// The word as written.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased form with typographic apostrophes normalized.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Estimated syllable count.
    pub const fn syllables(&self) -> usize {
        self.syllables
    }

    /// Whether this word opened its sentence.
    pub const fn is_sentence_initial(&self) -> bool {
        self.sentence_initial
    }

    /// Capitalized somewhere other than the start of a sentence.
    pub fn is_proper_noun(&self) -> bool {
        !self.sentence_initial && self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Whether the token contains a digit (`2nd`, `mp3`).
    pub fn has_digit(&self) -> bool {
        self.text.chars().any(|c| c.is_ascii_digit())
    }

    /// Number of characters in the token.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// At least [`LONG_WORD_CHARS`] characters.
    pub fn is_long(&self) -> bool {
        self.char_count() >= LONG_WORD_CHARS
    }

    /// Three or more syllables, not counting inflectional endings.
    pub fn is_complex(&self) -> bool {
        syllables::is_complex(&self.text, self.syllables)
    }
}

/// One sentence: its trimmed source text and its word tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    words: Vec<Word>,
}

impl Sentence {
    /// Tokenize one sentence worth of text.
    pub fn from_text(text: &str) -> Self {
        let mut words = Vec::new();
        let tokens = text
            .split(|c: char| c.is_whitespace() || is_word_separator(c))
            // A typed dash (`--`) separates words; a single hyphen joins them.
            .flat_map(|token| token.split("--"));
        for token in tokens {
            let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());
            if !trimmed.chars().any(char::is_alphabetic) {
                continue;
            }
            let sentence_initial = words.is_empty();
            words.push(Word::new(trimmed, sentence_initial));
        }
        Self {
            text: text.to_string(),
            words,
        }
    }

    /// The sentence text, trimmed of surrounding whitespace.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word tokens in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Non-whitespace characters, numerals and punctuation included.
    pub fn character_count(&self) -> usize {
        self.text.chars().filter(|c| !c.is_whitespace()).count()
    }

    /// Alphabetic characters only.
    pub fn letter_count(&self) -> usize {
        self.text.chars().filter(|c| c.is_alphabetic()).count()
    }
}

/// The sentences of a document, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceList {
    sentences: Vec<Sentence>,
}

impl SentenceList {
    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether there are no sentences (blank input).
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over sentences.
    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// Iterate over every word of every sentence.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.sentences.iter().flat_map(|s| s.words.iter())
    }
}

impl<'a> IntoIterator for &'a SentenceList {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split a document into sentences and words.
#[tracing::instrument(skip_all, fields(text_len = document.as_str().len()))]
pub fn tokenize(document: &Document<'_>) -> SentenceList {
    let sentences: Vec<Sentence> = split_sentences(document.as_str())
        .into_iter()
        .map(Sentence::from_text)
        .collect();
    tracing::trace!(sentences = sentences.len(), "tokenized");
    SentenceList { sentences }
}

/// Split text into trimmed sentence slices.
///
/// A run of `.`, `!` or `?` (plus any closing quotes or brackets) ends a
/// sentence when whitespace and an uppercase letter follow, or when nothing
/// but whitespace follows. A lone period after an abbreviation or an
/// initial does not end a sentence, and neither does an ellipsis before
/// the end of the text.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_sentence_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut run_end = i;
        while run_end + 1 < chars.len() && is_sentence_terminator(chars[run_end + 1].1) {
            run_end += 1;
        }
        let mut close = run_end;
        while close + 1 < chars.len() && is_closer(chars[close + 1].1) {
            close += 1;
        }

        if is_boundary(&chars, run_start, run_end, close) {
            let end = chars.get(close + 1).map_or(text.len(), |&(offset, _)| offset);
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
        i = close + 1;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    // Guillemets point either way depending on the language.
    matches!(
        ch,
        '"' | '\''
            | ')'
            | ']'
            | '}'
            | '\u{201D}'
            | '\u{2019}'
            | '\u{00AB}'
            | '\u{00BB}'
            | '\u{2039}'
            | '\u{203A}'
    )
}

const fn is_opener(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\''
            | '('
            | '['
            | '{'
            | '\u{201C}'
            | '\u{2018}'
            | '\u{00AB}'
            | '\u{00BB}'
            | '\u{2039}'
            | '\u{203A}'
    )
}

const fn is_word_separator(ch: char) -> bool {
    matches!(ch, '\u{2014}' | '\u{2013}' | '/' | '\u{2026}')
}

fn is_boundary(chars: &[(usize, char)], run_start: usize, run_end: usize, close: usize) -> bool {
    let rest = &chars[close + 1..];
    match rest.iter().position(|&(_, c)| !c.is_whitespace()) {
        // Only whitespace left
        None => return true,
        // Glued to the next token ("3.14", "e.g.,")
        Some(0) => return false,
        Some(skip) => {
            let next = rest[skip..]
                .iter()
                .map(|&(_, c)| c)
                .find(|&c| !is_opener(c));
            if !next.is_some_and(char::is_uppercase) {
                return false;
            }
        }
    }

    let periods_only = chars[run_start..=run_end].iter().all(|&(_, c)| c == '.');
    if !periods_only {
        return true;
    }
    if run_end > run_start {
        // Ellipsis
        return false;
    }

    let word = word_before(chars, run_start);
    !(is_abbreviation(&word) || is_initial(&word))
}

/// The token immediately before `pos`, keeping internal periods (`U.S`).
fn word_before(chars: &[(usize, char)], pos: usize) -> String {
    let mut word: Vec<char> = chars[..pos]
        .iter()
        .rev()
        .map(|&(_, c)| c)
        .take_while(|&c| c.is_alphanumeric() || c == '.')
        .collect();
    word.reverse();
    word.into_iter().collect::<String>().trim_start_matches('.').to_string()
}

fn is_initial(word: &str) -> bool {
    word != "I" && INITIALS_PATTERN.is_match(word)
}
