//! File discovery: recursive enumeration, build-artifact exclusion,
//! language filtering, and ordering.

use std::path::Path;

use anyhow::Result;
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::{Language, LanguageFilter, SourceFile};

/// Directory-name substrings that mark conventional build output.
/// Matched case-insensitively, so `Bin/`, `Debug/`, and also `Binaries/`
/// are excluded (substring match is intentional, see `is_build_artifact`).
const BUILD_MARKERS: &[&str] = &["bin", "debug"];

/// Recursively discover files under `root` that match `filter`.
///
/// Discovery order is whatever the directory walk produces; callers that
/// need a defined order go through [`order`].
pub fn discover(root: &Path, filter: LanguageFilter) -> Result<Vec<SourceFile>> {
    let mut selected = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Unreadable directories are skipped, same tier as a
                // per-file read failure later on.
                eprintln!("{}", console::style(format!("Warning: {err}")).yellow());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_build_artifact(path, root) {
            debug!(path = %path.display(), "skipping build artifact");
            continue;
        }
        let Some(language) = language_of(path) else {
            continue;
        };
        if !filter.matches(language) {
            continue;
        }
        let relative_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string();
        selected.push(SourceFile { path: path.to_path_buf(), relative_path, language });
    }
    debug!(files = selected.len(), "discovery complete");
    Ok(selected)
}

/// Order files for bundling. With `sort` set, files are grouped by tag
/// name ascending with path as the tie-break; otherwise plain lexicographic
/// path order.
pub fn order(files: &mut [SourceFile], sort: bool) {
    if sort {
        files.sort_by(|a, b| {
            a.language
                .as_str()
                .cmp(b.language.as_str())
                .then_with(|| a.path.cmp(&b.path))
        });
    } else {
        files.sort_by(|a, b| a.path.cmp(&b.path));
    }
}

fn language_of(path: &Path) -> Option<Language> {
    let ext = path.extension()?.to_str()?;
    Language::from_extension(ext)
}

/// A file is a build artifact when any directory component between the walk
/// root and the file has a lowercased name containing a build marker.
fn is_build_artifact(path: &Path, root: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let Some(parent) = relative.parent() else {
        return false;
    };
    parent.components().any(|component| {
        let name = component.as_os_str().to_string_lossy().to_lowercase();
        BUILD_MARKERS.iter().any(|marker| name.contains(marker))
    })
}
