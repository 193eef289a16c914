use super::ghosts;
use crate::discovery::SourceFile;
use crate::parser::Definition;
use colored::Colorize;
use std::collections::HashSet;

/// Terminal reporter with colored output.
///
/// Colors disable automatically when stdout is not a tty, so piped
/// output stays plain text.
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    /// Print the full report: corpus counts, then every ghost definition
    /// in discovery order, then a total (or a no-ghosts line).
    pub fn report(
        &self,
        files: &[SourceFile],
        definitions: &[Definition],
        used: &HashSet<String>,
    ) {
        println!("Found {} Python files", files.len());
        println!("Found {} definitions", definitions.len());

        println!();
        println!("{}", "Ghosts (unused definitions):".yellow().bold());
        println!("{}", "─".repeat(40).dimmed());

        let ghosts = ghosts(definitions, used);
        for definition in &ghosts {
            println!(
                "{:<10} {:<30} in {}",
                definition.kind.display_name(),
                definition.name,
                definition.file.display()
            );
        }

        if ghosts.is_empty() {
            println!("{}", "No ghosts found!".green().bold());
        } else {
            println!();
            println!(
                "{}",
                format!("Total ghosts: {}", ghosts.len()).yellow().bold()
            );
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
