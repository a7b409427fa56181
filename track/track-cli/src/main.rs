//! Race-track generator.
//!
//! Turns a control-point layout into a track mesh, its material library and
//! an animation centerline.
//!
//! # Commands
//!
//! - `trackgen init <layout.json>` - Write a square starter layout
//! - `trackgen build <layout.json>` - Generate and export the track
//!
//! Logging goes to stderr. `RUST_LOG` selects the level (default `info`);
//! `--verbose` forces `debug`.

mod build;
mod init;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Race-track generator
#[derive(Parser)]
#[command(name = "trackgen")]
#[command(about = "Generate race-track meshes from control-point layouts", long_about = None)]
#[command(version)]
struct Cli {
    /// Log every pipeline step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the track and export mesh, material and centerline
    Build(build::BuildArgs),

    /// Write a square starter layout
    Init {
        /// Layout file to create
        #[arg(name = "LAYOUT")]
        layout: PathBuf,

        /// Distance from the center to each side of the square
        #[arg(long, default_value_t = 2.0)]
        half_extent: f64,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build(args) => build::run(&args),
        Commands::Init {
            layout,
            half_extent,
            force,
        } => init::run(&layout, half_extent, force),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
