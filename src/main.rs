//! displayblocks - attachable-item blocks for a voxel game add-on
//!
//! Command-line host for inspecting catalogs and replaying interaction sessions.

mod config;
mod session_script;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use displayblocks_testkit::JsonlSink;
use displayblocks_world::{AddonConfig, SimWorld};
use serde_json::json;
use session_script::SessionScript;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Coloured pot and display item block components", long_about = None)]
struct Args {
    /// Add-on configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every registered component and its catalog as JSON
    Catalog,
    /// Replay a session script against an in-memory world
    Run {
        /// Session script (JSON)
        script: PathBuf,
        /// Also write the events as JSONL to this path
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Write the default configuration to the config path
    InitConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config warnings go through a scoped WARN subscriber; the global one
    // needs the config's own filter.
    let config = tracing::subscriber::with_default(
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("warn"))
            .finish(),
        || load_config(args.config.as_deref()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_filter))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    info!("Starting displayblocks v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Catalog => print_catalog(&config),
        Command::Run { script, events } => run_script(&config, &script, events.as_deref()),
        Command::InitConfig => {
            let path = args
                .config
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_ADDON_PATH));
            config::save_to_path(&AddonConfig::default(), &path)
                .with_context(|| format!("write {}", path.display()))?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> AddonConfig {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

fn print_catalog(config: &AddonConfig) -> Result<()> {
    let world = SimWorld::with_config(config).context("register block components")?;
    let components: Vec<_> = world
        .registry()
        .ids()
        .filter_map(|id| world.registry().get(id))
        .map(|component| component.describe())
        .collect();
    println!("{}", serde_json::to_string_pretty(&components)?);
    Ok(())
}

fn run_script(config: &AddonConfig, script: &Path, events: Option<&Path>) -> Result<()> {
    let mut world = SimWorld::with_config(config).context("register block components")?;
    let session = SessionScript::from_path(script)?;
    let log = session.run(&mut world)?;

    let mut sink = events.map(JsonlSink::create).transpose()?;
    for (tick, tick_events) in &log {
        for event in tick_events {
            println!("{}", json!({ "tick": tick.0, "event": event }));
        }
        if let Some(sink) = sink.as_mut() {
            sink.write_all(*tick, tick_events)?;
        }
    }

    info!(
        ticks = log.len(),
        spawned = world.spawned_items().len(),
        "Session finished"
    );
    Ok(())
}
