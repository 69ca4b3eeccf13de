//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use destinations::DuplicateIdPolicy;
use std::path::PathBuf;

/// Destinations: normalize the curated locations table into JSON
#[derive(Parser)]
#[command(name = "destinations")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the destinations document from the locations table
    Import {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path for the JSON document (overwritten)
        #[arg(short, long, default_value = "data/destinations.json")]
        output: PathBuf,
    },

    /// Build records and report issues without writing anything
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Output the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Flags shared by every command that reads the locations table.
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Path to the locations table (CSV/TSV)
    #[arg(short, long, default_value = "data/locations.csv")]
    pub input: PathBuf,

    /// Built-in column layout (v1, v2)
    #[arg(long, default_value = "v2", conflicts_with = "columns")]
    pub schema: String,

    /// JSON column map to use instead of a built-in layout
    #[arg(long, value_name = "FILE")]
    pub columns: Option<PathBuf>,

    /// Per-state gun-law table used when a row has no grade
    #[arg(long, value_name = "FILE")]
    pub gun_laws: Option<PathBuf>,

    /// What to do when two rows produce the same id (keep, reject)
    #[arg(long, default_value = "keep")]
    pub duplicate_ids: DuplicateIdPolicy,

    /// Field delimiter (default: auto-detect)
    #[arg(short, long)]
    pub delimiter: Option<DelimiterArg>,
}

/// A single-byte field delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelimiterArg(pub u8);

impl std::str::FromStr for DelimiterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" | "\\t" | "\t" => Ok(DelimiterArg(b'\t')),
            "comma" | "," => Ok(DelimiterArg(b',')),
            "semicolon" | ";" => Ok(DelimiterArg(b';')),
            "pipe" | "|" => Ok(DelimiterArg(b'|')),
            other if other.len() == 1 && other.is_ascii() => Ok(DelimiterArg(other.as_bytes()[0])),
            _ => Err(format!(
                "Unknown delimiter: {}. Use tab, comma, semicolon, pipe, or a single character.",
                s
            )),
        }
    }
}

impl std::fmt::Display for DelimiterArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            b'\t' => write!(f, "tab"),
            b => write!(f, "{}", b as char),
        }
    }
}
