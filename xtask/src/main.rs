//! Development tasks: `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::{Shell, generate_to};

const BIN_NAME: &str = "legible";

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for legible")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and every subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
    /// Generate both man pages and completions under `target/dist`
    Dist,
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man_pages(&out),
        Task::Completions { out } => completions(&out),
        Task::Dist => {
            let dist = Path::new("target/dist");
            man_pages(&dist.join("man"))?;
            completions(&dist.join("completions"))
        }
    }
}

fn man_pages(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let cmd = legible::command();
    clap_mangen::generate_to(cmd, out)
        .with_context(|| format!("failed to write man pages to {}", out.display()))?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn completions(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let mut cmd = legible::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = generate_to(shell, &mut cmd, BIN_NAME, out)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
