//! # CLI Behavior
//!
//! This is **one possible UI client** for the Artistly engine. It is the only
//! place that knows about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution
//!
//! Running `artistly` with no subcommand shows the unfiltered gallery, the
//! same as `artistly artists`.
//!
//! ## Configuration
//!
//! Settings are resolved from environment variables first, then the file
//! given with `--config`, then `./artistly.toml`, then compiled defaults.
//! Command-line flags override all of them.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing-subscriber`. The filter comes
//! from `ARTISTLY_LOG`, then `RUST_LOG`, then `-v`/`-vv`; the default only
//! shows warnings.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `handlers`: Per-command handlers that drive the session
//! - `render`: Template and JSON output

mod handlers;
mod render;
pub mod setup;

use anyhow::{bail, Context};
use artistly::config::{EngineConfig, CONFIG_FILE_NAME};
use artistly::dataset::Dataset;
use artistly::session::Session;
use artistly::store::memory::InMemoryStore;
use clap::Parser;
use handlers::AppState;
use render::Renderer;
use setup::{Cli, Commands};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let dataset = load_dataset(cli.dataset.as_deref().or(config.dataset.as_deref()))?;
    let store = InMemoryStore::from_dataset(dataset)?;
    let mut state = AppState {
        session: Session::new(store, &config)?,
        renderer: Renderer::new(cli.output)?,
    };

    let output = match cli.command {
        None => handlers::artists(&mut state, Default::default())?,
        Some(Commands::Artists(args)) => handlers::artists(&mut state, args)?,
        Some(Commands::Dashboard(args)) => handlers::dashboard(&mut state, args)?,
        Some(Commands::Catalog) => handlers::catalog(&state)?,
    };
    println!("{output}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("ARTISTLY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let mut files: Vec<PathBuf> = Vec::new();
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        files.push(path.to_path_buf());
    }
    files.push(PathBuf::from(CONFIG_FILE_NAME));

    let config = EngineConfig::load(&files).context("failed to load configuration")?;
    debug!(?config, "configuration resolved");
    Ok(config)
}

fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    match path {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("failed to load dataset {}", path.display())),
        None => Ok(Dataset::sample()?),
    }
}
