//! Command implementations.

use std::io::Read;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

pub mod analyze;
pub mod grade;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod syllables;

/// Where the text to analyze comes from.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// File to analyze (`-` or omitted reads stdin).
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text instead of a file.
    #[arg(long, short = 't', value_name = "TEXT")]
    pub text: Option<String>,
}

impl InputArgs {
    /// Name shown in output for this input.
    pub fn label(&self) -> &str {
        match (&self.text, &self.file) {
            (Some(_), _) => "<text>",
            (None, Some(path)) if path.as_str() != "-" => path.as_str(),
            _ => "<stdin>",
        }
    }

    /// Read the input, enforcing `max_bytes`.
    pub fn read(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            check_size(self.label(), text.len(), max_bytes)?;
            return Ok(text.clone());
        }
        match self.file {
            Some(ref path) if path.as_str() != "-" => read_input_file(path, max_bytes),
            _ => read_stdin(max_bytes),
        }
    }
}

fn check_size(label: &str, size: usize, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let len = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_size(path.as_str(), len, max_bytes)?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut buf = String::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        // One byte past the limit is enough to know it was exceeded.
        Some(max) => stdin
            .take(max as u64 + 1)
            .read_to_string(&mut buf)
            .context("failed to read stdin")?,
        None => {
            let mut stdin = stdin;
            stdin.read_to_string(&mut buf).context("failed to read stdin")?
        }
    };
    check_size("<stdin>", buf.len(), max_bytes)?;
    Ok(buf)
}
