use pyproject_scaffold::cli::Args;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Args for a non-dry run of `name` into `output_dir`, with nothing else requested.
pub fn args(name: &str, output_dir: &Path) -> Args {
    Args {
        name: name.to_string(),
        project_version: None,
        deps: vec![],
        optional_dep_values: vec![],
        optional_deps: vec![],
        scripts: vec![],
        defaults: false,
        defaults_file: None,
        template: None,
        output_dir: output_dir.to_path_buf(),
        dry_run: false,
        verbose: 2,
    }
}

/// Every file and directory below `root`, relative to it and sorted.
pub fn list_tree(root: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    entries.sort();
    entries
}

/// Parses the generated manifest and returns its `project` table.
pub fn read_project(root: &Path) -> toml::Table {
    let content = std::fs::read_to_string(root.join("pyproject.toml")).unwrap();
    let mut document: toml::Table = toml::from_str(&content).unwrap();
    match document.remove("project") {
        Some(toml::Value::Table(project)) => project,
        other => panic!("manifest has no project table: {other:?}"),
    }
}
