//! readscore CLI
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use readscore::{Cli, Commands, commands};
use readscore_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Settings and FILE both resolve against the new directory.
    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, sources) = load_config(cli.config.as_deref())?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf),
    );
    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, filter)
        .context("failed to initialize logging")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        config_file = ?sources.primary_file(),
        "readscore starting"
    );

    let result = match cli.command {
        Some(Commands::Info(args)) => commands::info::cmd_info(args, cli.json, &config, &sources),
        None => commands::score::cmd_score(cli.score, cli.json, &config),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

/// Discover settings from the current directory, plus `--config` if given.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = utf8(std::env::current_dir().context("failed to determine current directory")?)
        .context("current directory is not valid UTF-8")?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(path) = explicit {
        let path = utf8(path.to_path_buf()).context("config path is not valid UTF-8")?;
        loader = loader.with_file(path);
    }
    loader.load().context("failed to load configuration")
}

fn utf8(path: std::path::PathBuf) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow::anyhow!("{} is not valid UTF-8", path.display()))
}
