//! Defines application-specific error types.
//!
//! Every failure `mycat` can hit maps to one variant of [`Error`]. Validation and
//! rendering return these up to a single dispatcher in `main`, which writes the
//! diagnostic to stderr and picks the exit code.

use crate::target::FileKind;
use std::path::Path;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `mycat`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Usage Errors ---
    /// A flag that `mycat` does not recognize was passed.
    #[error("Unknown option `{0}', use '-h' for help.")]
    UnknownOption(String),

    /// No file arguments were supplied.
    #[error("Please enter at least one file to output, use '-h' for help.")]
    NoFiles,

    /// Any other command-line parsing failure reported by clap.
    #[error("{0}, use '-h' for help.")]
    Usage(String),

    // --- Path Errors ---
    /// The path could not be stat'ed.
    #[error("The file '{path}' does not exist, use '-h' for help.")]
    NotFound {
        /// The path as given on the command line.
        path: String,
    },

    /// The path exists but no read bit is set on it.
    #[error("You don't have permission to read '{path}', use '-h' for help.")]
    PermissionDenied {
        /// The path as given on the command line.
        path: String,
    },

    /// The path exists but is not a regular file.
    #[error("The file '{path}' is a {kind} and cannot be displayed, use '-h' for help.")]
    NotRegularFile {
        /// The path as given on the command line.
        path: String,
        /// What the path actually is.
        kind: FileKind,
    },

    // --- I/O Errors ---
    /// Error reading a file that passed validation (e.g. removed in between).
    #[error("I/O error reading '{path}': {source}, use '-h' for help.")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error writing to the output sink.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error. The tool is all-or-nothing, so every
    /// failure class exits with the same status.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Maps a failure to open `path` for reading.
///
/// The mode bits checked during validation cannot tell which class (owner, group,
/// other) applies to the caller, so the kernel's refusal at open time is reported
/// as [`Error::PermissionDenied`] too.
pub fn open_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    if source.kind() == std::io::ErrorKind::PermissionDenied {
        return Error::PermissionDenied {
            path: path.as_ref().display().to_string(),
        };
    }
    io_error_with_path(source, path)
}
