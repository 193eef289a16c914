use crate::error::GhostScanError;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Represents a discovered Python source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the file, as produced by traversal
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the file contents from disk.
    ///
    /// Every call re-reads; the extraction and scanning stages each pay
    /// for their own read rather than sharing a cached copy.
    pub fn read_contents(&self) -> Result<String, GhostScanError> {
        std::fs::read_to_string(&self.path).map_err(|source| GhostScanError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

/// Check whether a path names a Python source file
fn is_python_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("py")
}

/// Verify that the scan root is a directory
pub fn ensure_directory(path: &Path) -> Result<(), GhostScanError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(GhostScanError::NotADirectory(path.to_path_buf()))
    }
}

/// File finder for discovering Python sources under a root directory
pub struct FileFinder;

impl FileFinder {
    pub fn new() -> Self {
        Self
    }

    /// Find all .py files under the root, in filesystem traversal order.
    ///
    /// The walk is read-only and does not follow symlinks. Entries that
    /// cannot be stat'd are skipped.
    pub fn find_files(&self, root: &Path) -> Vec<SourceFile> {
        debug!("Scanning for Python files in: {}", root.display());

        let files: Vec<SourceFile> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_python_file(entry.path()))
            .map(|entry| {
                trace!("Found: {}", entry.path().display());
                SourceFile::new(entry.path().to_path_buf())
            })
            .collect();

        debug!("Found {} Python files", files.len());
        files
    }
}

impl Default for FileFinder {
    fn default() -> Self {
        Self::new()
    }
}
