use crate::discovery::SourceFile;
use crate::parser::Definition;
use std::collections::HashSet;
use tracing::debug;

/// Literal patterns checked per definition name, built once per scan
struct NamePatterns {
    name: String,
    def_line: String,
    class_line: String,
}

/// Scans the corpus for references to definition names.
///
/// A line counts as a reference when it contains the name as a literal
/// substring and does not contain the name's own `def <name>` or
/// `class <name>` declaration text. Matching is deliberately
/// substring-level: hits inside longer identifiers, string literals and
/// comments all mark a name as used. Only the bare name is tracked, so a
/// single use anywhere marks every same-named definition in the tree.
pub struct ReferenceScanner;

impl ReferenceScanner {
    pub fn new() -> Self {
        Self
    }

    /// Compute the set of definition names referenced anywhere in `files`.
    ///
    /// Each file's text is read once in this stage, independent of the
    /// read performed during extraction. Unreadable files are skipped.
    pub fn scan(&self, definitions: &[Definition], files: &[SourceFile]) -> HashSet<String> {
        // Deduplicate names up front; set membership is all that matters.
        let mut seen = HashSet::new();
        let patterns: Vec<NamePatterns> = definitions
            .iter()
            .filter(|d| seen.insert(d.name.clone()))
            .map(|d| NamePatterns {
                name: d.name.clone(),
                def_line: format!("def {}", d.name),
                class_line: format!("class {}", d.name),
            })
            .collect();

        let mut used = HashSet::new();
        for file in files {
            let contents = match file.read_contents() {
                Ok(contents) => contents,
                Err(err) => {
                    debug!("Skipping unreadable file: {}", err);
                    continue;
                }
            };

            for pattern in &patterns {
                if used.contains(&pattern.name) {
                    continue;
                }
                // Whole-text containment as a cheap pre-filter before the
                // per-line scan.
                if !contents.contains(&pattern.name) {
                    continue;
                }
                for line in contents.lines() {
                    if line.contains(&pattern.name)
                        && !line.contains(&pattern.def_line)
                        && !line.contains(&pattern.class_line)
                    {
                        used.insert(pattern.name.clone());
                        break;
                    }
                }
            }
        }

        debug!("{} of {} names referenced", used.len(), patterns.len());
        used
    }
}

impl Default for ReferenceScanner {
    fn default() -> Self {
        Self::new()
    }
}
