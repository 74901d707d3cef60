use std::path::PathBuf;

use clap::Parser;

/// Aurora — a simulated desktop shell.
#[derive(Parser, Debug)]
#[command(name = "aurora", version, about)]
pub struct Args {
    /// Data directory override for persisted state.
    #[arg(short = 'd', long)]
    pub data_dir: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Run a scripted interactive session and dump desktop frames.
    #[arg(long)]
    pub demo: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
