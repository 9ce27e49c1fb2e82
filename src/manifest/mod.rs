//! Manifest file handling: path resolution, writing and reading.
//!
//! A manifest is plain UTF-8 text with one import path per line. Lines starting
//! with `#` are comments and blank lines are tolerated on read.

use crate::error::{GetterError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST_NAME: &str = "libraries.txt";

/// Resolve the manifest location.
///
/// An absent or empty `raw` falls back to `default_dir/manifest_name`, an existing
/// directory gets `manifest_name` appended, and anything else is used verbatim.
pub fn resolve_manifest_path(
    raw: Option<&Path>,
    default_dir: &Path,
    manifest_name: &str,
) -> PathBuf {
    match raw {
        None => default_dir.join(manifest_name),
        Some(path) if path.as_os_str().is_empty() => default_dir.join(manifest_name),
        Some(path) if path.is_dir() => path.join(manifest_name),
        Some(path) => path.to_path_buf(),
    }
}

/// Write `entries` to `path`, one per line, replacing any previous content.
pub fn write_manifest(path: &Path, entries: &[String]) -> Result<()> {
    let file = File::create(path).map_err(|e| GetterError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for entry in entries {
        writeln!(writer, "{entry}").map_err(|e| GetterError::io(path, e))?;
    }
    writer.flush().map_err(|e| GetterError::io(path, e))?;
    Ok(())
}

/// Read the dependency entries of the manifest at `path`, skipping blank and
/// comment lines.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| GetterError::io(path, e))?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| GetterError::io(path, e))?;
        if let Some(entry) = parse_line(&line) {
            entries.push(entry.to_string());
        }
    }
    Ok(entries)
}

/// Return the dependency named on a manifest line, if any.
fn parse_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn write_then_read_preserves_order() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("libraries.txt");
        let written = entries(&["github.com/b/two", "github.com/a/one", "gopkg.in/yaml.v3"]);

        write_manifest(&path, &written).expect("write");
        assert_eq!(read_manifest(&path).expect("read"), written);
        assert_eq!(
            fs::read_to_string(&path).expect("raw"),
            "github.com/b/two\ngithub.com/a/one\ngopkg.in/yaml.v3\n"
        );
    }

    #[test]
    fn write_truncates_previous_content() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("libraries.txt");
        fs::write(&path, "old/one\nold/two\nold/three\n").expect("seed");

        write_manifest(&path, &entries(&["github.com/new/dep"])).expect("write");
        assert_eq!(fs::read_to_string(&path).expect("raw"), "github.com/new/dep\n");
    }

    #[test]
    fn write_does_not_deduplicate() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("libraries.txt");
        write_manifest(&path, &entries(&["a.com/x", "a.com/x"])).expect("write");
        assert_eq!(read_manifest(&path).expect("read").len(), 2);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("missing").join("libraries.txt");
        let err = write_manifest(&path, &entries(&["a.com/x"])).expect_err("should fail");
        assert!(matches!(err, GetterError::Io { .. }));
    }

    #[test]
    fn read_skips_comments_and_blank_lines() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("libraries.txt");
        fs::write(&path, "# some-dependency\n\nfoo/bar\n   \n  # indented comment\nbaz\r\n")
            .expect("seed");

        assert_eq!(read_manifest(&path).expect("read"), entries(&["foo/bar", "baz"]));
    }

    #[test]
    fn read_missing_manifest_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = read_manifest(&tmp.path().join("none.txt")).expect_err("should fail");
        assert!(matches!(err, GetterError::Io { .. }));
    }

    #[test]
    fn resolve_directory_appends_manifest_name() {
        let tmp = TempDir::new().expect("tmp");
        let resolved =
            resolve_manifest_path(Some(tmp.path()), Path::new("/unused"), DEFAULT_MANIFEST_NAME);
        assert_eq!(resolved, tmp.path().join("libraries.txt"));
    }

    #[test]
    fn resolve_empty_uses_default_dir() {
        let default_dir = Path::new("/opt/go-getter");
        assert_eq!(
            resolve_manifest_path(None, default_dir, DEFAULT_MANIFEST_NAME),
            default_dir.join("libraries.txt")
        );
        assert_eq!(
            resolve_manifest_path(Some(Path::new("")), default_dir, DEFAULT_MANIFEST_NAME),
            default_dir.join("libraries.txt")
        );
    }

    #[test]
    fn resolve_file_path_is_verbatim() {
        let tmp = TempDir::new().expect("tmp");
        let file = tmp.path().join("deps.list");
        assert_eq!(
            resolve_manifest_path(Some(&file), Path::new("/unused"), DEFAULT_MANIFEST_NAME),
            file
        );
    }
}
