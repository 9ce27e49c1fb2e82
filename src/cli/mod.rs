//! Command-line interface for go-getter
//!
//! `--update` rescans sources into the manifest, `--install` fetches everything
//! the manifest lists. Both may be given; update always runs first.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod settings;
mod utils;

pub use settings::Settings;

/// Collect external Go imports into a manifest and fetch them with go get
#[derive(Parser, Debug)]
#[command(name = "go-getter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Location of the libraries file, or a directory containing libraries.txt
    #[arg(long, value_name = "PATH")]
    pub libraries: Option<PathBuf>,

    /// Directory of Go files to scan for imports
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Update the libraries file from the imports found in --source
    #[arg(long)]
    pub update: bool,

    /// Fetch every library listed in the libraries file
    #[arg(long)]
    pub install: bool,

    /// Source file extensions to scan (comma-separated)
    #[arg(long, value_name = "EXTS")]
    pub extensions: Option<String>,

    /// Config file path (default: go-getter.toml / go-getter.yaml in the current directory)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();

    settings::validate(&cli)?;

    let default_dir = settings::executable_dir()?;
    let cwd = std::env::current_dir().context("Failed resolving current directory")?;
    let config = crate::config::load_config(&cwd, cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &default_dir, config);

    if cli.update {
        commands::update(&settings)?;
    }
    if cli.install {
        commands::install(&settings)?;
    }
    Ok(())
}
