use super::common::{descendants, node_text};
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::Parser as TsParser;

/// Kind of definition found in a Python file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Function,
    Class,
}

impl DefinitionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            DefinitionKind::Function => "function",
            DefinitionKind::Class => "class",
        }
    }
}

/// A function or class definition discovered in the corpus.
///
/// Definitions are never deduplicated: two definitions sharing a name are
/// two records, each reported independently.
#[derive(Debug, Clone)]
pub struct Definition {
    pub name: String,
    pub kind: DefinitionKind,
    pub file: PathBuf,
}

/// Python source parser using tree-sitter
pub struct PythonParser {
    parser: TsParser,
}

impl PythonParser {
    pub fn new() -> Self {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .expect("Failed to load Python grammar");
        Self { parser }
    }

    /// Extract every function and class definition from one file's source.
    ///
    /// The whole tree is walked, so nested definitions are reported too,
    /// each under its bare name and attributed to the containing file.
    /// A file whose parse contains syntax errors contributes nothing;
    /// partial corpora are acceptable and no diagnostic is surfaced.
    pub fn extract(&mut self, path: &Path, contents: &str) -> Vec<Definition> {
        let Some(tree) = self.parser.parse(contents, None) else {
            debug!("Parser produced no tree for {}", path.display());
            return Vec::new();
        };

        let root = tree.root_node();
        if root.has_error() {
            debug!("Skipping {} (syntax errors)", path.display());
            return Vec::new();
        }

        let mut definitions = Vec::new();
        for node in descendants(root) {
            let kind = match node.kind() {
                "function_definition" => DefinitionKind::Function,
                "class_definition" => DefinitionKind::Class,
                _ => continue,
            };
            if let Some(name_node) = node.child_by_field_name("name") {
                definitions.push(Definition {
                    name: node_text(name_node, contents).to_string(),
                    kind,
                    file: path.to_path_buf(),
                });
            }
        }

        debug!(
            "Extracted {} definitions from {}",
            definitions.len(),
            path.display()
        );
        definitions
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}
