/// Loading the `batch` document from a file or stdin.
///
/// The document is held in memory whole, so its size is capped by
/// `--max-file-size`: a file is rejected from its metadata before it is
/// opened, and stdin is read up to one byte past the cap.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Label used for stdin in error messages.
const STDIN: &str = "-";

/// Loads the batch document named by `source`.
///
/// # Errors
///
/// Any failure is a [`CliError`] with exit code 2: the file is missing or
/// unreadable, the document is larger than `limit` bytes, or it is not UTF-8.
pub fn read_input(source: &PathOrStdin, limit: u64) -> Result<String, CliError> {
    let (label, bytes) = match source {
        PathOrStdin::Path(path) => (path.display().to_string(), load_file(path, limit)?),
        PathOrStdin::Stdin => (STDIN.to_owned(), load_stdin(limit)?),
    };
    tracing::debug!(input = %label, bytes = bytes.len(), "loaded batch document");
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        input: label,
        offset: e.utf8_error().valid_up_to(),
    })
}

fn load_file(path: &Path, limit: u64) -> Result<Vec<u8>, CliError> {
    let size = std::fs::metadata(path)
        .map_err(|e| file_error(path, &e))?
        .len();
    if size > limit {
        return Err(CliError::FileTooLarge {
            input: path.display().to_string(),
            limit,
            size: Some(size),
        });
    }
    std::fs::read(path).map_err(|e| file_error(path, &e))
}

fn load_stdin(limit: u64) -> Result<Vec<u8>, CliError> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;
    if bytes.len() as u64 > limit {
        return Err(CliError::FileTooLarge {
            input: STDIN.to_owned(),
            limit,
            size: None,
        });
    }
    Ok(bytes)
}

fn file_error(path: &Path, e: &std::io::Error) -> CliError {
    let path = path.to_path_buf();
    if e.kind() == ErrorKind::NotFound {
        CliError::FileNotFound { path }
    } else if e.kind() == ErrorKind::PermissionDenied {
        CliError::PermissionDenied { path }
    } else {
        CliError::IoError {
            target: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}
