//! Integration tests for the GhostScan pipeline
//!
//! These tests drive the library stages directly over temporary trees:
//! discovery, extraction, reference scanning, and ghost classification.

use ghostscan::discovery::FileFinder;
use ghostscan::parser::{Definition, DefinitionKind, PythonParser};
use ghostscan::report::ghosts;
use ghostscan::scanner::ReferenceScanner;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn populate(temp: &TempDir, files: &[(&str, &str)]) {
    for (name, contents) in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}

fn run_pipeline(temp: &TempDir) -> (Vec<Definition>, HashSet<String>) {
    let files = FileFinder::new().find_files(temp.path());

    let mut parser = PythonParser::new();
    let mut definitions = Vec::new();
    for file in &files {
        if let Ok(contents) = file.read_contents() {
            definitions.extend(parser.extract(&file.path, &contents));
        }
    }

    let used = ReferenceScanner::new().scan(&definitions, &files);
    (definitions, used)
}

#[test]
fn test_unreferenced_definition_is_always_a_ghost() {
    let temp = TempDir::new().unwrap();
    populate(
        &temp,
        &[("app.py", "def helper():\n    pass\n\ndef main():\n    helper()\n")],
    );

    let (definitions, used) = run_pipeline(&temp);
    assert_eq!(definitions.len(), 2);

    let ghost_names: Vec<_> = ghosts(&definitions, &used)
        .iter()
        .map(|d| d.name.clone())
        .collect();
    assert_eq!(ghost_names, vec!["main"]);
}

#[test]
fn test_cross_file_use_covers_every_same_named_definition() {
    // Usage is tracked per name, not per (name, file): the single call in
    // caller.py marks both unrelated "render" definitions as used.
    let temp = TempDir::new().unwrap();
    populate(
        &temp,
        &[
            ("a.py", "def render():\n    pass\n"),
            ("c.py", "class render:\n    pass\n"),
            ("caller.py", "render()\n"),
        ],
    );

    let (definitions, used) = run_pipeline(&temp);
    assert_eq!(definitions.len(), 2);
    assert!(used.contains("render"));
    assert!(ghosts(&definitions, &used).is_empty());
}

#[test]
fn test_nested_definitions_are_extracted_with_bare_names() {
    let temp = TempDir::new().unwrap();
    populate(
        &temp,
        &[(
            "nested.py",
            "def outer():\n    def inner():\n        pass\n    return inner\n",
        )],
    );

    let (definitions, used) = run_pipeline(&temp);
    let names: Vec<_> = definitions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["outer", "inner"]);

    // inner is referenced by the return statement; outer never is.
    assert!(used.contains("inner"));
    let ghost_names: Vec<_> = ghosts(&definitions, &used)
        .iter()
        .map(|d| d.name.clone())
        .collect();
    assert_eq!(ghost_names, vec!["outer"]);
}

#[test]
fn test_malformed_file_does_not_abort_the_run() {
    let temp = TempDir::new().unwrap();
    populate(
        &temp,
        &[
            ("broken.py", "def broken(:\n    pass\n"),
            ("ok.py", "class Survivor:\n    pass\n"),
        ],
    );

    let (definitions, used) = run_pipeline(&temp);
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].name, "Survivor");
    assert_eq!(definitions[0].kind, DefinitionKind::Class);
    assert_eq!(ghosts(&definitions, &used).len(), 1);
}

#[test]
fn test_empty_tree_produces_empty_report_inputs() {
    let temp = TempDir::new().unwrap();

    let (definitions, used) = run_pipeline(&temp);
    assert!(definitions.is_empty());
    assert!(used.is_empty());
    assert!(ghosts(&definitions, &used).is_empty());
}

#[test]
fn test_definitions_are_attributed_to_their_files() {
    let temp = TempDir::new().unwrap();
    populate(
        &temp,
        &[
            ("alpha.py", "def first():\n    pass\n"),
            ("beta.py", "def second():\n    pass\n"),
        ],
    );

    let (definitions, _) = run_pipeline(&temp);
    assert_eq!(definitions.len(), 2);
    for definition in &definitions {
        let stem = definition.file.file_stem().unwrap().to_str().unwrap();
        match definition.name.as_str() {
            "first" => assert_eq!(stem, "alpha"),
            "second" => assert_eq!(stem, "beta"),
            other => panic!("unexpected definition: {}", other),
        }
    }
}
