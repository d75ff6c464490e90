//! Analyze command: the full readability report.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use legible_core::{AnalysisOptions, LexiconSet, MetricValue, readability};

use super::InputArgs;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Display name for a report field.
fn metric_label(name: &str) -> &str {
    match name {
        "flesch_reading_ease" => "Flesch reading ease",
        "flesch_kincaid_grade" => "Flesch-Kincaid grade",
        "automated_readability_index" => "Automated readability index",
        "smog_index" => "SMOG index",
        "coleman_liau_index" => "Coleman-Liau index",
        "dale_chall_readability_score" => "Dale-Chall score",
        "linsear_write_formula" => "Linsear Write",
        "gunning_fog" => "Gunning Fog",
        "text_standard" => "Text standard",
        "text_standard_grade" => "Text standard grade",
        "word_count" => "Words",
        "unique_word_count" => "Unique words",
        "difficult_words" => "Difficult words",
        "sentence_count" => "Sentences",
        "syllable_count" => "Syllables",
        "character_count" => "Characters",
        "letter_count" => "Letters",
        "long_word_count" => "Long words",
        "complex_word_count" => "Complex words",
        "avg_sentence_length" => "Avg sentence length",
        "avg_syllables_per_word" => "Avg syllables per word",
        "reading_time" => "Reading time (s)",
        "reading_time_display" => "Reading time",
        other => other,
    }
}

/// Print every metric for the input.
#[instrument(name = "cmd_analyze", skip_all, fields(input = %args.input.label()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    lexicon: &LexiconSet,
    options: &AnalysisOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(input = %args.input.label(), "executing analyze command");

    let content = args.input.read(max_input_bytes)?;
    let report = readability::analyze_with(&content, lexicon, options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.input.label().bold());
    for (name, value) in report.entries() {
        // The seconds value is shown through its display form.
        if name == "reading_time" {
            continue;
        }
        let label = format!("{:<28}", metric_label(name));
        match value {
            MetricValue::Undefined => println!("  {} {}", label.cyan(), value.dimmed()),
            _ => println!("  {} {}", label.cyan(), value),
        }
    }

    if report.word_count == 0 {
        println!(
            "\n{} no words found; scores are undefined.",
            "note:".yellow()
        );
    }

    Ok(())
}
