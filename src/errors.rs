/*!
 * Error types for the srtscribe application.
 *
 * Run-level failures (bad input directory, nothing to read, nothing
 * extracted, output not written) abort a conversion. File-level failures
 * are reported for that file and the run moves on.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input path is missing or is not a directory
    #[error("Invalid input path '{}': {reason}", path.display())]
    InvalidInputPath {
        path: PathBuf,
        reason: String,
    },

    /// The directory holds no file with the subtitle extension
    #[error("No {extension} files found in '{}'", dir.display())]
    NoMatchingFiles {
        dir: PathBuf,
        extension: String,
    },

    /// File content could not be decoded as text
    #[error("Failed to decode '{}': {reason}", path.display())]
    FileDecode {
        path: PathBuf,
        reason: String,
    },

    /// Any other failure while handling one file
    #[error("Failed to process '{}': {reason}", path.display())]
    FileProcessing {
        path: PathBuf,
        reason: String,
    },

    /// Every file was processed but none yielded text
    #[error("No text content extracted from any {extension} files")]
    EmptyResult {
        extension: String,
    },

    /// The combined transcript could not be written
    #[error("Error writing to output file '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the error concerns a single input file (the run continues)
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::FileDecode { .. } | Self::FileProcessing { .. })
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
