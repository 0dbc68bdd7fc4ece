//! make-crud CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use make_crud::commands::MakeCrudCommand;
use make_crud::config::{MakeCrudConfig, CONFIG_FILE};
use make_crud::observability;
use make_crud::plan::OptionSet;

#[derive(Parser)]
#[command(name = "make-crud")]
#[command(version)]
#[command(
    about = "Generates Model, Migration, Seeder, Resource Controllers and views for a given resource.",
    long_about = None
)]
struct Cli {
    /// The model to be created (e.g. `Post`, `admin/post`, `Admin.Post`)
    model: String,

    #[command(flatten)]
    options: OptionSet,

    /// Laravel project root (overrides `project_root` from the config)
    #[arg(long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Configuration file [default: make-crud.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => MakeCrudConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => MakeCrudConfig::load()
            .with_context(|| format!("Failed to load configuration from {CONFIG_FILE}"))?,
    };
    if let Some(path) = cli.path {
        config.project_root = path;
    }

    MakeCrudCommand::new(cli.model, cli.options, config).execute()
}
