use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use prio::app::App;
use prio::cli::Cli;
use prio::config::PrioConfig;
use prio::logging;
use prio::prompt::{LinePrompter, listen_for_signals};
use prio::storage::JsonStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, root) = load_config(cli.config.as_deref())?;
    logging::init(
        cli.verbose,
        cli.log_file.or_else(|| config.log_path(&root)),
    )?;

    let path = cli.file.unwrap_or_else(|| config.data_path(&root));
    let store = JsonStore::new(&path).with_pretty(config.prio.pretty);

    let prompter = LinePrompter::stdio(listen_for_signals());
    let mut app = App::load(store, prompter)
        .with_context(|| format!("Failed to load projects from {}", path.display()))?;

    let outcome = app.run().await;
    let saved = app.shutdown();

    let reason = outcome.context("Menu loop failed")?;
    saved.with_context(|| format!("Failed to save projects to {}", path.display()))?;
    tracing::debug!(?reason, "Exiting");
    Ok(())
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<(PrioConfig, PathBuf)> {
    let loaded = match explicit {
        Some(path) => PrioConfig::load_from(path),
        None => PrioConfig::load(&std::env::current_dir()?),
    };
    loaded.context("Failed to load prio configuration")
}
