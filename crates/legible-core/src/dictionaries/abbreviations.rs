//! Abbreviations that end in a period without ending a sentence.
//!
//! Entries are stored lowercase, without the trailing period. Internal
//! periods are kept (`u.s`, `ph.d`).

use std::collections::HashSet;
use std::sync::LazyLock;

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "st", "hon", "esq", "capt", "col",
    "gen", "lt", "maj", "sgt", "cpl", "adm", "cmdr", "sen", "rep", "gov", "pres", "supt",
];

const DEGREES: &[&str] = &["ph.d", "m.d", "b.a", "b.s", "m.a", "m.s", "m.b.a", "j.d", "ed.d"];

const LATIN: &[&str] = &["etc", "e.g", "i.e", "vs", "cf", "viz", "al", "ibid", "approx", "ca"];

const CALENDAR: &[&str] = &[
    "a.m", "p.m", "b.c", "a.d", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "mon", "tue", "tues", "thu", "thurs", "fri",
];

const PLACES: &[&str] = &[
    "ave", "blvd", "rd", "mt", "ft", "apt", "dept", "u.s", "u.k", "u.s.a", "e.u", "n.y", "d.c",
];

const ORGANIZATIONS: &[&str] = &["inc", "corp", "ltd", "co", "bros", "assn", "intl", "univ"];

// No entries that are also common words ("sat", "no", "fig").
const REFERENCES: &[&str] = &["vol", "vols", "pp", "ch", "eq", "misc"];

/// Every known abbreviation, folded to lowercase.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        TITLES,
        DEGREES,
        LATIN,
        CALENDAR,
        PLACES,
        ORGANIZATIONS,
        REFERENCES,
    ]
    .into_iter()
    .flatten()
    .copied()
    .collect()
});

/// Check whether `word` (with or without trailing periods) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let folded = word.trim_end_matches('.').to_lowercase();
    ABBREVIATIONS.contains(folded.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_and_latin() {
        assert!(is_abbreviation("Mr"));
        assert!(is_abbreviation("Dr."));
        assert!(is_abbreviation("etc"));
        assert!(is_abbreviation("e.g"));
    }

    #[test]
    fn dotted_country_codes() {
        assert!(is_abbreviation("U.S"));
        assert!(is_abbreviation("U.S."));
        assert!(is_abbreviation("u.k"));
    }

    #[test]
    fn ordinary_words_are_not_abbreviations() {
        assert!(!is_abbreviation("cat"));
        assert!(!is_abbreviation("mat"));
        assert!(!is_abbreviation("store"));
        assert!(!is_abbreviation("sat"));
        assert!(!is_abbreviation("no"));
    }
}
