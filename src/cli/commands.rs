use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prio")]
#[command(
    author,
    version,
    about = "A small interactive task manager for prioritising projects"
)]
pub struct Cli {
    /// Project file to load on start and save on exit (default: tasks.json)
    #[arg(env = "PRIO_FILE")]
    pub file: Option<PathBuf>,

    /// Path to config file (searches upward for .prio.toml or .prio.yml by default)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, env = "PRIO_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
