use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "nextprompt",
    version,
    about = "Shows a random prompt over a random colour",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Prompt endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Request timeout in seconds. Unset means the transport default.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}
