use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Verbosity levels for diagnostic output on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Only show errors
    Quiet,
    /// Use the configured log filter
    #[default]
    Normal,
    /// Show debug events
    Verbose,
    /// Show everything
    Debug,
}

impl VerbosityLevel {
    /// `tracing` filter directive overriding the configured one, if any.
    pub fn filter_override(&self) -> Option<&'static str> {
        match self {
            VerbosityLevel::Quiet => Some("error"),
            VerbosityLevel::Normal => None,
            VerbosityLevel::Verbose => Some("debug"),
            VerbosityLevel::Debug => Some("trace"),
        }
    }
}

/// Fetch a There FunZone description and print it as one line of JSON
#[derive(Parser, Debug, Clone)]
#[command(name = "funzone-scraper")]
#[command(about = "Fetch a FunZone record by URL and print it as JSON")]
#[command(version)]
#[command(
    after_help = "EXAMPLE:\n  funzone-scraper 'https://webapps.prod.there.com/funzone/funzone?op=view&id=10714117'"
)]
pub struct Cli {
    /// FunZone URL to scrape (must use https://)
    #[arg(help = "FunZone URL to scrape")]
    pub url: String,

    /// Configuration file (TOML or JSON)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout")]
    pub timeout: Option<u64>,

    /// Cache TTL in seconds
    #[arg(long = "cache-ttl")]
    pub cache_ttl: Option<u64>,

    /// Increase diagnostic output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Quiet mode",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else {
            match self.verbose {
                0 => VerbosityLevel::Normal,
                1 => VerbosityLevel::Verbose,
                _ => VerbosityLevel::Debug,
            }
        }
    }
}
