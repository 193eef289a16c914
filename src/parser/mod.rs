mod common;
mod python;

pub use python::{Definition, DefinitionKind, PythonParser};
