//! Tinta CLI
//!
//! Inspect the theme catalog and change the persisted theme selection.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use tinta_theme::{ClassList, FileStorage, ThemeCatalog, ThemeStore};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::TintaConfig;

#[derive(Parser)]
#[command(name = "tinta")]
#[command(author, version, about = "Tinta theme selection tool", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./tinta.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// State file holding the selected theme (overrides the config)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let config = match &cli.config {
        Some(path) => TintaConfig::load(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            TintaConfig::discover(&cwd)?
        }
    };

    let mut store = open_store(&config, cli.state)?;
    store.initialize();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &mut store, &mut out)
}

/// Build the store from config: catalog, file-backed storage, class list root
fn open_store(
    config: &TintaConfig,
    state_override: Option<PathBuf>,
) -> Result<ThemeStore<FileStorage, ClassList>> {
    let catalog = match &config.theme.catalog {
        Some(path) => ThemeCatalog::from_toml_file(path)
            .with_context(|| format!("Failed to load theme catalog {}", path.display()))?,
        None => ThemeCatalog::builtin(),
    };

    let state_path = state_override.unwrap_or_else(|| config.state.path.clone());
    tracing::debug!(
        state = %state_path.display(),
        themes = catalog.len(),
        "opening theme store"
    );

    Ok(ThemeStore::new(
        catalog,
        config.theme.clone(),
        FileStorage::new(state_path),
        ClassList::new(),
    ))
}
