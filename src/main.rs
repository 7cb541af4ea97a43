mod commands;
mod prompt;
mod render;
mod session;
mod shell;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eventdesk_core::config::Config;
use tracing::Level;

use session::Session;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Record, edit, search and export a list of events. Events are kept in memory only.")]
struct Cli {
    /// Read settings (default category, export path) from this TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load configuration")?,
        None => Config::default(),
    };

    let mut session = Session::new(config);
    shell::run(&mut session)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
