//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Default for `--max-file-size`: 16 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// One JSON object per line.
    Json,
}

/// All top-level subcommands exposed by the `zipcode` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Validate a single postal code.
    Check {
        /// The postal code to validate.
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
        /// Country code (e.g. `GB`) or the name of a field holding one.
        ///
        /// When omitted, no country is configured and every value passes.
        #[arg(long, short = 'c', value_name = "DIRECTIVE")]
        country: Option<String>,
        /// Another form field visible to country resolution (repeatable).
        #[arg(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
        /// Message to report instead of the default when the value is rejected.
        #[arg(long)]
        message: Option<String>,
    },

    /// Validate every record of a JSON batch file.
    Batch {
        /// Path to a batch file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// List the supported country codes.
    Countries,
}

/// Root CLI struct for the `zipcode` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "zipcode",
    version,
    about = "Country-aware postal code validator",
    long_about = "Validates postal codes against the rules of the resolved country.\n\
                  The country comes from a literal code, another field's value,\n\
                  or is left unconfigured."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only report rejected values; no summary (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Debug logging and timing on stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum batch input size in bytes.
    ///
    /// Can also be set via the `ZIPCODE_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "ZIPCODE_MAX_FILE_SIZE",
        default_value_t = DEFAULT_MAX_FILE_SIZE
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
