//! Command-line argument parsing for fizzbuzz
//!
//! The flags only tune stderr diagnostics; the printed sequence is fixed.

use clap::Parser;
use std::path::PathBuf;

/// fizzbuzz - print Fizz/Buzz/FizzBuzz for 1 through 100
#[derive(Parser, Debug)]
#[command(name = "fizzbuzz")]
#[command(version)]
#[command(about = "Print FizzBuzz for the integers 1 through 100", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -v (summary on stderr), -vv (also trace every line)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no diagnostics on stderr)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Verbosity from flags, or `None` when no verbosity flag was given
    pub fn verbosity_override(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else {
            match self.verbose {
                0 => None,
                1 => Some(Verbosity::Verbose),
                _ => Some(Verbosity::VeryVerbose),
            }
        }
    }

    /// Flags win over the configured default
    pub fn verbosity(&self, configured: Verbosity) -> Verbosity {
        self.verbosity_override().unwrap_or(configured)
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the config-file spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Errors and warnings on stderr
    pub fn show_diagnostics(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Run summary after the last line
    pub fn show_summary(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Per-line classification trace
    pub fn show_trace(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }
}
