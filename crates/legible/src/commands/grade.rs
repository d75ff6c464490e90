//! Grade command: the consensus grade level, optionally gated.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use legible_core::{AnalysisOptions, LexiconSet, readability};

use super::InputArgs;

/// Arguments for the `grade` subcommand.
#[derive(Args, Debug)]
pub struct GradeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum acceptable grade level (fails when exceeded).
    #[arg(long)]
    pub max_grade: Option<u32>,
}

/// Print the text standard grade, failing when it exceeds the maximum.
#[instrument(name = "cmd_grade", skip_all, fields(input = %args.input.label()))]
pub fn cmd_grade(
    args: GradeArgs,
    global_json: bool,
    config_max_grade: Option<u32>,
    lexicon: &LexiconSet,
    options: &AnalysisOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(max_grade = ?args.max_grade, "executing grade command");

    let content = args.input.read(max_input_bytes)?;
    let max_grade = args.max_grade.or(config_max_grade);
    let check = readability::check_readability(&content, lexicon, options, max_grade);
    let label = args.input.label();
    let standard = check.report.text_standard.as_deref().unwrap_or("n/a");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&check)?);
        if check.over_max {
            bail!("{label} is above the maximum grade");
        }
    } else if check.over_max {
        bail!(
            "{} reads at grade {} ({}), max {}. Shorten sentences or use simpler words.",
            label,
            check.report.text_standard_grade.unwrap_or_default(),
            standard,
            check.max_grade.unwrap_or_default(),
        );
    } else if let Some(max) = check.max_grade {
        println!(
            "{} {} reads at {} (max: {})",
            "PASS:".green(),
            label,
            standard,
            max,
        );
    } else {
        println!("{standard}");
    }

    Ok(())
}
