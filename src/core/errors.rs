/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub use crate::memory::ArenaError;
pub use crate::strings::FileError;

/// Run result
pub type BrocopyResult<T> = Result<T, BrocopyError>;

/// Unified error with miette diagnostics
///
/// Everything here ends the run. Failures of individual copies or of the
/// source removal are logged and do not surface as errors.
#[derive(Error, Debug, Diagnostic)]
pub enum BrocopyError {
    #[error("Arena error: {0}")]
    #[diagnostic(transparent)]
    Arena(#[from] ArenaError),

    #[error("Could not buffer the CSV: {0}")]
    #[diagnostic(transparent)]
    File(#[from] FileError),

    #[error("Missing argument: {0}")]
    #[diagnostic(
        code(brocopy::missing_argument),
        help("Usage: brocopy [options] <src_path> <csv_path> <key> [<key> ...]")
    )]
    MissingArgument(String),

    #[error("\"{}\" is inaccessible", path.display())]
    #[diagnostic(
        code(brocopy::inaccessible),
        help("Both <src_path> and <csv_path> must exist and be readable.")
    )]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(brocopy::configuration),
        help("Review the command line and the BROCOPY_* environment variables.")
    )]
    Configuration(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(brocopy::io_error),
        help("Filesystem operation failed. Check file permissions and disk space.")
    )]
    Io(String),
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for BrocopyError {
    fn from(err: std::io::Error) -> Self {
        BrocopyError::Io(err.to_string())
    }
}
