/// Command modules for the `zipcode` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// parsed arguments plus the output writers and returns `Ok(())` on success
/// or a [`crate::error::CliError`] on failure.
pub mod batch;
pub mod check;
pub mod countries;

use crate::error::CliError;

/// Wraps a failed write to `target` (`"stdout"` or `"stderr"`).
fn write_failed(target: &str, e: &std::io::Error) -> CliError {
    CliError::IoError {
        target: target.to_owned(),
        detail: e.to_string(),
    }
}
