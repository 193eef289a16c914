mod terminal;

pub use terminal::TerminalReporter;

use crate::parser::Definition;
use std::collections::HashSet;

/// Definitions whose names never appeared outside their own declaration
/// line, in original discovery order.
pub fn ghosts<'a>(definitions: &'a [Definition], used: &HashSet<String>) -> Vec<&'a Definition> {
    definitions
        .iter()
        .filter(|d| !used.contains(&d.name))
        .collect()
}
