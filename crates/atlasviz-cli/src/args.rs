//! Command-line argument definitions for the poster generator.
//!
//! The poster content is fixed, so there is nothing to configure beyond
//! logging verbosity: the binary takes no positional arguments and writes
//! to its fixed output location.

use clap::Parser;

/// Command-line arguments for the ATLAS poster generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
