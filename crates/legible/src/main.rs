//! legible CLI
#![deny(unsafe_code)]

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use legible::{Cli, Commands, commands};
use legible_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let default_level = if obs_config.writes_to_file() {
        config.log_level.as_str()
    } else {
        observability::STDERR_DEFAULT_LEVEL
    };
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, default_level);
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let max_input = config.input_limit(legible_core::DEFAULT_MAX_INPUT_BYTES);
    let options = config
        .analysis_options()
        .context("invalid configuration")?;

    // Built once, before any text is read; a bad word list stops everything.
    let lexicon = if command.needs_lexicon() {
        let lexicon = config
            .build_lexicon(config_sources.primary_dir())
            .context("failed to load familiar-word list")?;
        debug!(origin = lexicon.origin(), words = lexicon.len(), "lexicon ready");
        Some(Arc::new(lexicon))
    } else {
        None
    };
    let lexicon = || lexicon.as_ref().context("lexicon was not loaded");

    let result = match command {
        Commands::Analyze(args) => {
            commands::analyze::cmd_analyze(args, cli.json, lexicon()?, &options, max_input)
        }
        Commands::Grade(args) => commands::grade::cmd_grade(
            args,
            cli.json,
            config.max_grade,
            lexicon()?,
            &options,
            max_input,
        ),
        Commands::Syllables(args) => commands::syllables::cmd_syllables(args, cli.json),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &config_sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => {
            let lexicon = Arc::clone(lexicon()?);
            let rt = tokio::runtime::Runtime::new()
                .context("failed to create async runtime for MCP server")?;
            rt.block_on(commands::serve::cmd_serve(args, lexicon, options, max_input))
        }
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
