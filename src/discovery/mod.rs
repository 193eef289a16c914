mod file_finder;

pub use file_finder::{ensure_directory, FileFinder, SourceFile};
