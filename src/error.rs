use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the scan pipeline
#[derive(Debug, Error, Diagnostic)]
pub enum GhostScanError {
    /// The scan root does not exist or is not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A discovered file could not be read back from disk
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
