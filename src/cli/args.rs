//! Command-line argument parsing for rotmin
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::search::Strategy;

/// rotmin - Find the minimum of a rotated sorted sequence
#[derive(Parser, Debug)]
#[command(name = "rotmin")]
#[command(version)]
#[command(about = "Find the minimum of a rotated sorted sequence", long_about = None)]
pub struct Args {
    /// Sequence values, e.g. `2,2,2,0,2,2` or `5 6 7 1 2`. Read from stdin when omitted
    #[arg(value_name = "SEQUENCE", allow_negative_numbers = true)]
    pub sequence: Vec<String>,

    /// Search strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Reject sequences that are not rotations of a sorted sequence
    #[arg(long)]
    pub validate: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the built-in example sequences
    Demo,

    /// Display current configuration
    Config,
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
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check that a sequence and a subcommand were not both given
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_some() && !self.sequence.is_empty() {
            return Err("Cannot specify a sequence with a subcommand.".to_string());
        }

        Ok(())
    }

    /// Sequence tokens joined into one parseable string
    pub fn sequence_text(&self) -> Option<String> {
        if self.sequence.is_empty() {
            None
        } else {
            Some(self.sequence.join(" "))
        }
    }

    /// Apply command-line overrides on top of file configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(strategy) = self.strategy {
            config.search.strategy = strategy;
        }
        if self.validate {
            config.search.validate = true;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.no_color {
            config.output.color = false;
        }
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

    /// Parse the configuration file spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }
}
