//! The Dale-Chall familiar-word list, embedded at compile time.

/// Raw list text in the word-list file format (see [`entries`]).
pub const WORD_LIST: &str = include_str!("../../data/dale_chall.txt");

/// Iterate over the entries of a word list, paired with their 1-based line numbers.
///
/// Lines may hold several whitespace-separated entries. Everything after a
/// `#` is a comment.
pub fn entries(list: &str) -> impl Iterator<Item = (usize, &str)> {
    list.lines().enumerate().flat_map(|(index, line)| {
        let content = line.split_once('#').map_or(line, |(before, _)| before);
        content.split_whitespace().map(move |entry| (index + 1, entry))
    })
}
