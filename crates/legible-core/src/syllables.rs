//! Syllable estimation using a vowel-group heuristic.
//!
//! There is no pronunciation dictionary behind this: the count is an
//! approximation, and the rules below are the whole contract. Every
//! syllable-based formula is only as reproducible as these rules are
//! deterministic.
//!
//! 1. Hyphenated tokens are summed over their parts.
//! 2. Letters are lowercased; anything that is not a letter (apostrophes,
//!    digits) is ignored. Vowels are `a e i o u`, their common accented
//!    forms, and `y` unless it is followed by a vowel at the start of the
//!    word or right after another vowel (`yes`, `player`, `beyond`).
//! 3. Each maximal run of vowels counts once.
//! 4. A final `e` after a consonant is silent when the count is above one.
//! 5. A final `le` after a consonant other than `l` keeps its syllable
//!    (`table`, `simple`, but not `belle`).
//! 6. A final `ed` after a consonant other than `t` or `d` is silent
//!    (`jumped`, not `wanted`), and a final `es` after a consonant is silent
//!    unless the stem ends in `s`, `x`, `z`, `c`, `g`, `ch` or `sh`
//!    (`makes`, not `boxes`). Syllabic `l` stems keep the syllable
//!    (`settled`, `tables`). Both rules need a count above one.
//! 7. Any token with a letter has at least one syllable; tokens without
//!    letters have none.

/// Minimum syllables for a word to count as complex.
pub const COMPLEX_SYLLABLES: usize = 3;

/// Suffixes that do not make a word complex on their own.
const INFLECTION_SUFFIXES: &[&str] = &["es", "ed", "ing"];

/// Estimate the number of syllables in a word.
///
/// Returns 0 for tokens with no letters (`""`, `"42"`, `"--"`).
pub fn count_syllables(word: &str) -> usize {
    word.split('-').map(count_part).sum()
}

/// Whether a word with `syllables` syllables counts as complex.
///
/// Complex words have three or more syllables, except when the third
/// syllable only comes from an `-es`, `-ed` or `-ing` ending (`wondering`).
pub fn is_complex(word: &str, syllables: usize) -> bool {
    if syllables < COMPLEX_SYLLABLES {
        return false;
    }
    let folded = word.to_lowercase();
    !INFLECTION_SUFFIXES.iter().any(|suffix| {
        folded
            .strip_suffix(suffix)
            .is_some_and(|stem| !stem.is_empty() && count_syllables(stem) < COMPLEX_SYLLABLES)
    })
}

fn count_part(part: &str) -> usize {
    let letters: Vec<char> = part
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;
    for i in 0..letters.len() {
        let vowel = is_vowel(&letters, i);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }

    let n = letters.len();
    let consonant_at = |i: usize| !is_vowel(&letters, i);

    // Silent e, with the -le exception
    if syllables > 1 && n >= 2 && letters[n - 1] == 'e' && consonant_at(n - 2) {
        let syllabic_le = n >= 3 && letters[n - 2] == 'l' && is_syllabic_l(&letters, n - 2);
        if !syllabic_le {
            syllables -= 1;
        }
    }

    if syllables > 1 && n >= 3 && letters[n - 2] == 'e' && consonant_at(n - 3) {
        let stem = &letters[..n - 2];
        let silent = match letters[n - 1] {
            'd' => !matches!(letters[n - 3], 't' | 'd') && !is_syllabic_l(&letters, n - 3),
            's' => !ends_in_sibilant(stem) && !is_syllabic_l(&letters, n - 3),
            _ => false,
        };
        if silent {
            syllables -= 1;
        }
    }

    syllables.max(1)
}

const fn is_plain_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e'
            | 'i'
            | 'o'
            | 'u'
            | 'à'
            | 'á'
            | 'â'
            | 'ä'
            | 'è'
            | 'é'
            | 'ê'
            | 'ë'
            | 'ì'
            | 'í'
            | 'î'
            | 'ï'
            | 'ò'
            | 'ó'
            | 'ô'
            | 'ö'
            | 'ù'
            | 'ú'
            | 'û'
            | 'ü'
    )
}

fn is_vowel(letters: &[char], i: usize) -> bool {
    let c = letters[i];
    if c != 'y' {
        return is_plain_vowel(c);
    }
    let vowel_follows = letters.get(i + 1).is_some_and(|&next| is_plain_vowel(next));
    let opens_syllable = i == 0 || is_plain_vowel(letters[i - 1]);
    !(vowel_follows && opens_syllable)
}

/// An `l` at `i` preceded by a consonant other than `l` (`tabl-`, `settl-`).
fn is_syllabic_l(letters: &[char], i: usize) -> bool {
    letters[i] == 'l' && i >= 1 && letters[i - 1] != 'l' && !is_vowel(letters, i - 1)
}

fn ends_in_sibilant(stem: &[char]) -> bool {
    match stem {
        [.., 'c' | 's', 'h'] => true,
        [.., last] => matches!(last, 's' | 'x' | 'z' | 'c' | 'g'),
        [] => false,
    }
}
