//! Syllables command: per-word estimates.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use legible_core::syllables::{count_syllables, is_complex};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to count.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordSyllables<'a> {
    word: &'a str,
    syllables: usize,
    complex: bool,
}

fn estimate(word: &str) -> WordSyllables<'_> {
    let syllables = count_syllables(word);
    WordSyllables {
        word,
        syllables,
        complex: is_complex(word, syllables),
    }
}

/// Print the estimated syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing syllables command");

    let estimates: Vec<_> = args.words.iter().map(|w| estimate(w)).collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
        return Ok(());
    }

    for e in &estimates {
        if e.complex {
            println!("{} {} {}", e.word.bold(), e.syllables, "(complex)".yellow());
        } else {
            println!("{} {}", e.word.bold(), e.syllables);
        }
    }
    Ok(())
}
