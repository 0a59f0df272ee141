//! Reading a repository checkout from disk.
//!
//! Produces the `(path, content)` pairs the extractor consumes. Paths are
//! relative to the root, use `/` separators and come back sorted, so the
//! same checkout always yields the same symbol order.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::languages;

/// List every file under `root` as a sorted, `/`-separated relative path.
///
/// Hidden entries, symbolic links and common build or vendor directories are
/// skipped. Subdirectories that cannot be read are logged and skipped; an unreadable
/// `root` is an error.
pub fn list_files(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(root)? {
        walk_entry(root, entry, &mut files);
    }

    let mut paths: Vec<String> = files
        .iter()
        .filter_map(|path| relative_path(root, path))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Read the given relative paths under `root`, dropping files that are not
/// valid UTF-8 or cannot be read. Input order is kept.
#[must_use]
pub fn read_files<P: AsRef<str>>(root: &Path, paths: &[P]) -> Vec<(String, String)> {
    paths
        .iter()
        .filter_map(|path| {
            let path = path.as_ref();
            match std::fs::read(root.join(path)) {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(content) => Some((path.to_string(), content)),
                    Err(_) => {
                        warn!(path, "File is not valid UTF-8, skipping");
                        None
                    }
                },
                Err(e) => {
                    warn!(path, error = %e, "Failed to read file, skipping");
                    None
                }
            }
        })
        .collect()
}

/// Read every file under `root` whose extension has a registered grammar.
pub fn read_source_files(root: &Path) -> Result<Vec<(String, String)>> {
    let paths: Vec<String> = list_files(root)?
        .into_iter()
        .filter(|path| languages::detect_language(path).is_some())
        .collect();
    debug!(root = %root.display(), count = paths.len(), "Found source files");
    Ok(read_files(root, &paths))
}

fn walk_entry(root: &Path, entry: std::io::Result<std::fs::DirEntry>, files: &mut Vec<PathBuf>) {
    let entry = match entry {
        Ok(e) => e,
        Err(e) => {
            warn!(root = %root.display(), error = %e, "Failed to read directory entry, skipping");
            return;
        }
    };

    let path = entry.path();
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return;
    };
    if name.starts_with('.') {
        return;
    }

    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cannot read file type, skipping");
            return;
        }
    };

    // Links are not followed; one pointing back into the tree would loop
    if file_type.is_symlink() {
        debug!(path = %path.display(), "Skipping symbolic link");
    } else if file_type.is_dir() {
        if is_excluded_dir(name) {
            return;
        }
        match std::fs::read_dir(&path) {
            Ok(entries) => {
                for entry in entries {
                    walk_entry(root, entry, files);
                }
            }
            Err(e) => {
                warn!(directory = %path.display(), error = %e, "Cannot read directory, skipping");
            }
        }
    } else if file_type.is_file() {
        files.push(path);
    }
}

fn is_excluded_dir(name: &str) -> bool {
    matches!(
        name,
        "target" | "node_modules" | "vendor" | "bin" | "obj" | "build" | "dist" | "__pycache__"
    )
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Option<Vec<&str>> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect();
    Some(segments?.join("/"))
}
