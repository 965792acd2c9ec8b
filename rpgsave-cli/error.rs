//! Error types for `rpgsave` operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Formats an error message for stderr, respecting `-qq`.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output (e.g. `"rpgsave"`).
/// - `quiet`: Quiet level (as counted by `-q` occurrences).
/// - `err`: The I/O error returned by [`crate::run_cli`].
///
/// # Returns
///
/// Returns `None` when the message should be suppressed by `quiet`,
/// otherwise returns a formatted single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet >= 2 {
        return None;
    }

    if let Some(run_err) = err.get_ref().and_then(|e| e.downcast_ref::<Error>()) {
        return Some(format!("{program}: {run_err}"));
    }

    Some(format!("{program}: {err}"))
}

/// Main error type for conversion runs.
///
/// Every variant is terminal for the run. A declined overwrite is not an error,
/// see [`crate::Outcome::Declined`].
#[derive(Debug, Error)]
pub enum Error {
    /// No input file was given
    #[error("no input file given")]
    MissingArgument,

    /// Input file has neither a container nor a document extension
    #[error("{}: unsupported file format, expected a .rpgsave or .json file", path.display())]
    UnsupportedFormat {
        /// Path to the input file
        path: PathBuf,
    },

    /// Failed to open or read the input file
    #[error("{}: cannot read: {source}", path.display())]
    ReadFailure {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The codec rejected the container content
    #[error("{}: cannot decode save data: {source}", path.display())]
    DecodeFailure {
        /// Path to the container file
        path: PathBuf,
        /// Error reported by the codec
        #[source]
        source: rpgsave_core::Error,
    },

    /// The codec could not process the document content
    #[error("{}: cannot encode save data: {source}", path.display())]
    EncodeFailure {
        /// Path to the document file
        path: PathBuf,
        /// Error reported by the codec
        #[source]
        source: rpgsave_core::Error,
    },

    /// Failed to remove the previous output or to write the new one
    #[error("{}: cannot write: {source}", path.display())]
    WriteFailure {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to read the answer to the overwrite question
    #[error("{}: cannot read overwrite confirmation: {source}", path.display())]
    Prompt {
        /// Path to the existing output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for `rpgsave` operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::MissingArgument | Error::UnsupportedFormat { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            Error::DecodeFailure { .. } | Error::EncodeFailure { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            Error::ReadFailure { source, .. }
            | Error::WriteFailure { source, .. }
            | Error::Prompt { source, .. } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
        }
    }
}
