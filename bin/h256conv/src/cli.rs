use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "h256conv", version)]
#[command(about = "Convert Solana Base58 addresses to Substrate H256 hashes and back", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Examples:\n  Forward:  h256conv CA4ALvCam45ecioBfZ7BzPsXMf3r6BRXZ8iKdGpPmqhp\n  Reverse:  h256conv --reverse 0xabcd...")]
pub struct Cli {
    /// Base58 address to convert to H256
    #[arg(value_name = "BASE58_ADDRESS", required_unless_present = "reverse", conflicts_with = "reverse")]
    pub address: Option<String>,

    /// Convert an H256 hex string back to a Base58 address
    #[arg(long, value_name = "H256_HEX")]
    pub reverse: Option<String>,

    /// Print both forms as a JSON object
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Print only the converted value
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a logging settings file (TOML, JSON or YAML)
    #[arg(long, value_name = "FILE")]
    pub log_config: Option<PathBuf>,
}

/// Which way a single invocation converts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction<'a> {
    /// Base58 address to H256
    Forward(&'a str),
    /// H256 to Base58 address
    Reverse(&'a str),
}

impl Cli {
    pub fn direction(&self) -> Option<Direction<'_>> {
        match (&self.reverse, &self.address) {
            (Some(hex), _) => Some(Direction::Reverse(hex)),
            (None, Some(address)) => Some(Direction::Forward(address)),
            (None, None) => None,
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
    Quiet,
}
