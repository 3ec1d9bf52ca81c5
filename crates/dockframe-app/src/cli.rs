use std::path::PathBuf;

use clap::Parser;

/// Dockframe: replay workspace layout commands against a single frame.
#[derive(Parser, Debug)]
#[command(name = "dockframe", version, about)]
pub struct Args {
    /// Command script (a JSON array or one command per line). Reads stdin
    /// when omitted.
    pub script: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Frame id to report in summaries. Random when omitted.
    #[arg(long)]
    pub frame_id: Option<String>,

    /// Stop at the first failing command.
    #[arg(long)]
    pub fail_fast: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
