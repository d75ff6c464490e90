//! Static word data used by the engine.
//!
//! [`abbreviations`] feeds sentence splitting; [`dale_chall`] is the raw
//! familiar-word list that [`LexiconSet`](crate::lexicon::LexiconSet) is
//! built from.

pub mod abbreviations;
pub mod dale_chall;
