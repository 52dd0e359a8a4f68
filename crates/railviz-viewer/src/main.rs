//! Railviz Viewer - Main entry point
//!
//! Interactive 3D visualization of a rake: wagons with capacity bars,
//! order primitives, hover tooltips, and a per-wagon detail view.

mod app;
mod scene;
mod ui;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use railviz_core::fixture::sample_rake;
use railviz_core::load_rake_file;

#[derive(Parser, Debug)]
#[command(name = "railviz")]
#[command(about = "Interactive 3D rake and wagon load visualization")]
#[command(version)]
struct Args {
    /// Path to a rake JSON file (the built-in sample rake when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Railviz v{}", env!("CARGO_PKG_VERSION"));

    let rake = match &args.file {
        Some(path) => load_rake_file(path)?,
        None => {
            info!("No rake file given, showing the built-in sample rake");
            sample_rake()
        }
    };

    info!(rake = %rake.id, wagons = rake.wagons.len(), "Rake loaded");

    app::run(rake);
    Ok(())
}
