/// Errors of the `zipcode` binary and the exit code each one maps to.
///
/// A run ends in one of three ways:
///
/// - `0`: every value was accepted or skipped;
/// - `1`: every value was evaluated and at least one was rejected
///   ([`CliError::ValidationFailed`]);
/// - `2`: no verdict could be reached because the batch document, a
///   `--field` argument, or a country callback failed.
use std::fmt;
use std::path::PathBuf;

use zipcode_core::CallbackError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// Why a `zipcode` run did not end with exit code 0.
#[derive(Debug)]
pub enum CliError {
    /// The batch file does not exist.
    FileNotFound { path: PathBuf },

    /// The batch file exists but cannot be opened.
    PermissionDenied { path: PathBuf },

    /// The batch document is larger than `--max-file-size`.
    FileTooLarge {
        /// File path, or `-` for stdin.
        input: String,
        limit: u64,
        /// Known up front for files; stdin is only known to be over the limit.
        size: Option<u64>,
    },

    /// The batch document is not UTF-8.
    InvalidUtf8 { input: String, offset: usize },

    /// Reading the batch document from stdin failed.
    StdinReadError { detail: String },

    /// Any other read or write failure, on a batch file or an output stream.
    IoError { target: String, detail: String },

    /// The batch document is not `{"records": [...]}` JSON.
    ParseFailed { detail: String },

    /// A `check --field` argument without a `NAME=` part.
    InvalidField { arg: String },

    /// A country callback failed while resolving a record's country.
    Callback(CallbackError),

    /// `invalid` postal codes were rejected. Their report lines are already
    /// written.
    ValidationFailed { invalid: usize },
}

impl CliError {
    /// `1` when postal codes were rejected, `2` when no verdict was reached.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationFailed { .. } => 1,
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidField { .. }
            | Self::Callback(_) => 2,
        }
    }

    /// The line printed to stderr before exiting.
    pub fn message(&self) -> String {
        format!("error: {self}")
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => {
                write!(f, "batch file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                write!(f, "no permission to read batch file {}", path.display())
            }
            Self::FileTooLarge { input, limit, size } => {
                write!(f, "batch input {input} is too large")?;
                if let Some(size) = size {
                    write!(f, " ({size} bytes)")?;
                }
                write!(f, "; --max-file-size is {limit} bytes")
            }
            Self::InvalidUtf8 { input, offset } => {
                write!(f, "batch input {input} has invalid UTF-8 at byte {offset}")
            }
            Self::StdinReadError { detail } => write!(f, "reading stdin: {detail}"),
            Self::IoError { target, detail } => write!(f, "{target}: {detail}"),
            Self::ParseFailed { detail } => write!(f, "failed to parse batch input: {detail}"),
            Self::InvalidField { arg } => {
                write!(f, "invalid --field {arg:?}: expected NAME=VALUE")
            }
            Self::Callback(err) => write!(f, "{err}"),
            Self::ValidationFailed { invalid } => {
                let noun = if *invalid == 1 { "value" } else { "values" };
                write!(f, "{invalid} postal code {noun} rejected")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Callback(err) => Some(err),
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidField { .. }
            | Self::ValidationFailed { .. } => None,
        }
    }
}

impl From<CallbackError> for CliError {
    fn from(err: CallbackError) -> Self {
        Self::Callback(err)
    }
}
