//! Import extraction from a flat directory of Go sources.

use crate::error::{GetterError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub mod parser;
pub mod pattern;

pub use parser::parse_imports;
pub use pattern::is_external_import;

/// Scan the immediate files of `dir` and return every external import, once,
/// in first-seen order.
///
/// Files are visited sorted by name. Subdirectories are skipped entirely. The
/// first file whose import clause fails to parse aborts the scan.
pub fn extract_imports(dir: &Path, extensions: &[String]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut imports = Vec::new();

    for file in source_files(dir, extensions)? {
        tracing::debug!("Scanning {}", file.display());
        for import_path in parse_imports(&file)? {
            if is_external_import(&import_path) && seen.insert(import_path.clone()) {
                imports.push(import_path);
            }
        }
    }

    Ok(imports)
}

/// List the regular files directly inside `dir` whose extension is in `extensions`.
pub fn source_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(GetterError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "source directory not found"),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| GetterError::io(dir, e.into()))?;
        let path = entry.path();
        if !path.is_file() {
            tracing::debug!("Skipping non-file {}", path.display());
            continue;
        }
        if has_source_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
    if ext.is_empty() {
        return false;
    }
    extensions.iter().any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(&ext))
}
