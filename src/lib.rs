//! GhostScan - naive dead code detection for Python source trees
//!
//! This library finds function and class definitions that are never
//! referenced anywhere else in a directory tree of Python files.
//!
//! # Architecture
//!
//! The pipeline is a single linear pass:
//! 1. **File Discovery** - find all .py files under a root directory
//! 2. **Parsing** - extract function/class definitions using tree-sitter
//! 3. **Reference Scanning** - substring-search every file for each name
//! 4. **Reporting** - list the definitions whose names were never seen
//!
//! The analysis is deliberately naive: usage is literal substring
//! containment per line, with no scoping, import resolution, or
//! word-boundary matching. See the scanner module for the exact rules.

pub mod discovery;
pub mod error;
pub mod parser;
pub mod report;
pub mod scanner;

pub use discovery::{FileFinder, SourceFile};
pub use error::GhostScanError;
pub use parser::{Definition, DefinitionKind, PythonParser};
pub use report::TerminalReporter;
pub use scanner::ReferenceScanner;
