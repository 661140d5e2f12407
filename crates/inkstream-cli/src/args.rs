//! Command-line argument definitions for the Inkstream CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input file, how it is split into
//! chunks, where the final elements are written, configuration file
//! selection, and logging verbosity.

use std::num::NonZeroUsize;

use clap::Parser;

/// Replay a JSON diagram file as a token stream
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON element array
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output JSON file with the final elements
    #[arg(short, long, default_value = "out.json")]
    pub output: String,

    /// Number of characters per streamed chunk
    #[arg(long, default_value = "16")]
    pub chunk_size: NonZeroUsize,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
