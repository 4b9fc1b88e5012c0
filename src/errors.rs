/// Errors raised by the wrapper itself.
///
/// Deliberately small: flag legality, numeric ranges, and mutual exclusion
/// are all left to the pipeline executable, which rejects bad input on its
/// own and prints its own diagnostics.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong before or while launching the pipeline.
#[derive(Debug, Error)]
pub enum CivetError {
    /// The input directory could not be scanned for identifier synthesis.
    #[error("Cannot scan input directory '{}': {source}", path.display())]
    InputScan {
        /// The directory that failed to read.
        path: PathBuf,
        /// The underlying filesystem error.
        source: io::Error,
    },

    /// The synthesized identifier file could not be created or written.
    #[error("Cannot write identifier file: {0}")]
    IdFile(#[source] io::Error),

    /// The pipeline executable could not be launched.
    #[error("Cannot launch '{}': {source}", path.display())]
    Launch {
        /// Path of the executable that failed to start.
        path: PathBuf,
        /// The underlying spawn error.
        source: io::Error,
    },

    /// The pipeline ran and exited nonzero; its own output says why.
    #[error("Pipeline exited with code {code}")]
    PipelineFailed {
        /// The child's exit code, passed through as our own.
        code: i32,
    },
}

impl CivetError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputScan { .. } | Self::IdFile(_) => 2,
            Self::Launch { .. } => 127,
            Self::PipelineFailed { code } => *code,
        }
    }
}
