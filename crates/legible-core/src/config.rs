//! Layered configuration.
//!
//! Settings are merged from lowest to highest precedence:
//!
//! 1. built-in defaults
//! 2. the user file, `config.{toml,yaml,yml,json}` in the platform config
//!    directory (`~/.config/legible/` on Linux)
//! 3. project files, `.legible.<ext>` then `legible.<ext>`, from the closest
//!    directory at or above the search root that has any (the walk stops at
//!    a `.git` directory)
//! 4. files named explicitly, in the order given
//! 5. `LEGIBLE_*` environment variables
//!
//! Within one directory every matching file is merged, TOML first and JSON
//! last.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use legible_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load().unwrap();
//! println!("{:?} wpm from {:?}", config.words_per_minute, sources.primary_file());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, LexiconResult};
use crate::lexicon::LexiconSet;
use crate::readability::AnalysisOptions;

/// Config file extensions, lowest precedence first.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Name used for project config files and the user config directory.
const APP_NAME: &str = "legible";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "LEGIBLE_";

/// A directory containing this entry ends the upward project search.
const BOUNDARY_MARKER: &str = ".git";

/// Effective settings for analysis, input handling and logging.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level used when logging to a file.
    pub log_level: LogLevel,
    /// Directory for `legible.jsonl`. Unset means logs go to stderr.
    pub log_dir: Option<Utf8PathBuf>,
    /// Reading speed for reading-time estimates (default: 238).
    pub words_per_minute: Option<f64>,
    /// Grade ceiling for `grade` when `--max-grade` is not given.
    pub max_grade: Option<u32>,
    /// Word list that replaces the built-in Dale-Chall list.
    ///
    /// A relative path is taken from the directory of the highest-precedence
    /// config file.
    pub lexicon: Option<Utf8PathBuf>,
    /// Words added to the familiar list.
    pub familiar_words: Vec<String>,
    /// Input ceiling in bytes for the CLI and the MCP tools.
    pub max_input_bytes: Option<usize>,
    /// Accept input of any size; overrides `max_input_bytes`.
    pub disable_input_limit: bool,
}

impl Config {
    /// Analysis options from the configured reading speed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a non-positive reading speed.
    pub fn analysis_options(&self) -> ConfigResult<AnalysisOptions> {
        self.words_per_minute
            .map_or_else(|| Ok(AnalysisOptions::default()), AnalysisOptions::with_words_per_minute)
    }

    /// Build the lexicon this config describes.
    ///
    /// Starts from `lexicon` (or the built-in list) and adds `familiar_words`.
    /// `config_dir` anchors a relative `lexicon` path.
    pub fn build_lexicon(&self, config_dir: Option<&Utf8Path>) -> LexiconResult<LexiconSet> {
        let base = match &self.lexicon {
            Some(path) => LexiconSet::from_path(&resolve_relative(path, config_dir))?,
            None => LexiconSet::builtin()?,
        };
        if self.familiar_words.is_empty() {
            Ok(base)
        } else {
            base.with_words(&self.familiar_words)
        }
    }

    /// The effective input size limit, or `None` when disabled.
    pub fn input_limit(&self, default: usize) -> Option<usize> {
        (!self.disable_input_limit).then(|| self.max_input_bytes.unwrap_or(default))
    }
}

fn resolve_relative(path: &Utf8Path, base: Option<&Utf8Path>) -> Utf8PathBuf {
    match base {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Log level setting.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-stage analysis events.
    Debug,
    /// Startup and per-command summaries.
    #[default]
    Info,
    /// Recoverable problems only.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// The level as a filter directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The config files that were merged, by layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// User config file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Project files from the closest directory, in merge order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files named explicitly, in merge order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Every file, lowest precedence first.
    pub fn files(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }

    /// The highest-precedence file that was merged.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.files().last()
    }

    /// Directory of [`primary_file`](Self::primary_file).
    pub fn primary_dir(&self) -> Option<&Utf8Path> {
        self.primary_file().and_then(Utf8Path::parent)
    }
}

/// Discovers config files and merges them into a [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_dir: Option<Utf8PathBuf>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user config directory and nothing else yet.
    pub fn new() -> Self {
        Self {
            search_root: None,
            user_dir: user_config_dir(),
            explicit_files: Vec::new(),
        }
    }

    /// Search for project files from `dir` upward.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Merge `path` above every discovered file. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Find the files to merge without reading them.
    pub fn discover(&self) -> ConfigSources {
        ConfigSources {
            user_file: self
                .user_dir
                .as_deref()
                .and_then(|dir| existing_files(dir, "config").into_iter().next()),
            project_files: self
                .search_root
                .as_deref()
                .map(find_project_files)
                .unwrap_or_default(),
            explicit_files: self.explicit_files.clone(),
        }
    }

    /// Merge defaults, discovered files, explicit files and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when a file cannot be parsed or
    /// a value has the wrong type.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        tracing::debug!(files = ?sources.files().collect::<Vec<_>>(), "merging configuration");

        let figment = sources
            .files()
            .fold(Figment::from(Serialized::defaults(Config::default())), merge_file)
            // LEGIBLE_MAX_GRADE=8, LEGIBLE_WORDS_PER_MINUTE=200, ...
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            config_file = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Files named `{stem}.{ext}` that exist in `dir`, in merge order.
fn existing_files(dir: &Utf8Path, stem: &str) -> Vec<Utf8PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .filter(|path| path.is_file())
        .collect()
}

/// Project files from the closest directory at or above `start` that has any.
fn find_project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let mut found = existing_files(dir, &format!(".{APP_NAME}"));
        found.extend(existing_files(dir, APP_NAME));
        if !found.is_empty() {
            return found;
        }
        // A config next to the marker still counts.
        if dir.join(BOUNDARY_MARKER).exists() {
            break;
        }
    }
    Vec::new()
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// The platform config directory for legible, if a home directory exists.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}
