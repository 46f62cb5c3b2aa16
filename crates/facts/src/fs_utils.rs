//! File system helpers for relation directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extension of relation files.
pub const FACTS_EXTENSION: &str = "facts";

/// Ensure a directory exists (creates all parents if needed).
pub(crate) fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Relation files of `dir` as `(relation name, path)`, sorted by name.
///
/// Hidden files and files without the `.facts` extension are skipped.
pub(crate) fn list_fact_files(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name.starts_with('.') {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(FACTS_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.push((stem.to_string(), path.clone()));
        }
    }
    files.sort();
    Ok(files)
}

/// Path of the file holding relation `name` inside `dir`.
pub fn relation_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{FACTS_EXTENSION}"))
}
