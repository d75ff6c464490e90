//! Logging setup for the CLI.
//!
//! Logs go to stderr in compact form, or to a JSONL file when one is
//! configured. The file is chosen from, in order:
//!
//! 1. `LEGIBLE_LOG_PATH` (an exact file path)
//! 2. `LEGIBLE_LOG_DIR` (a directory; the file is `legible.jsonl`)
//! 3. `log_dir` from the config file
//!
//! `RUST_LOG` always wins over `-q`/`-v` and the configured level.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "LEGIBLE_LOG_PATH";
const LOG_DIR_ENV: &str = "LEGIBLE_LOG_DIR";
const LOG_FILE_NAME: &str = "legible.jsonl";

/// Level used on stderr when nothing else asks for more.
pub const STDERR_DEFAULT_LEVEL: &str = "warn";

/// Where log output goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL log file, or `None` for stderr.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let env_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let env_dir = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from);
        Self {
            log_file: resolve_log_file(env_path, env_dir, config_log_dir),
        }
    }

    /// Whether logs go to a file rather than stderr.
    pub const fn writes_to_file(&self) -> bool {
        self.log_file.is_some()
    }
}

fn resolve_log_file(
    explicit: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| {
            env_dir
                .filter(|d| !d.as_os_str().is_empty())
                .or(config_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        })
}

/// Filter directive for the verbosity flags.
fn directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `RUST_LOG` if set, otherwise the flags and `default_level`.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(quiet, verbose, default_level)))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(ref path) = config.log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("failed to install stderr logger")?;
        return Ok(None);
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer),
        )
        .try_init()
        .context("failed to install file logger")?;
    Ok(Some(guard))
}
