//! The bundle writer: author header, note blocks, separators, and
//! per-file error tolerance.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::domain::{BundleOptions, SourceFile};
use crate::transform;

/// Separator line written after every file (and before each note header).
const SEPARATOR: &str = "--------------------";

/// Write the bundle for `files` (already ordered) to `output`.
///
/// The output handle stays open for the whole run. A file that cannot be
/// read is reported and skipped; the bundle is best-effort and partial.
/// Returns the number of files actually bundled.
pub fn write_bundle(output: &Path, files: &[SourceFile], options: &BundleOptions) -> Result<usize> {
    let file = File::create(output)
        .with_context(|| format!("invalid output path '{}'", output.display()))?;
    let mut writer = BufWriter::new(file);

    if let Some(author) = options.author.as_deref().filter(|a| !a.is_empty()) {
        writeln!(writer, "// Author: {author}")?;
    }

    let mut bundled = 0;
    for source in files {
        match append_file(&mut writer, source, options) {
            Ok(()) => bundled += 1,
            Err(err) => {
                warn!(path = %source.path.display(), %err, "skipping file");
                eprintln!(
                    "{}",
                    console::style(format!(
                        "Error processing file {}: {err}",
                        source.path.display()
                    ))
                    .yellow()
                );
            }
        }
    }

    writer.flush()?;
    Ok(bundled)
}

fn append_file<W: Write>(writer: &mut W, source: &SourceFile, options: &BundleOptions) -> Result<()> {
    let content = fs::read_to_string(&source.path)?;
    let content = transform::apply(content, options.remove_blank_lines, options.remove_comments);

    if options.note {
        writeln!(writer)?;
        writeln!(writer, "{SEPARATOR}")?;
        writeln!(writer)?;
        writeln!(writer, "// Source: {}", source.relative_path)?;
    }
    writer.write_all(content.as_bytes())?;
    // Keep the separator on its own line even when the transformed content
    // lost its trailing newline.
    if !content.is_empty() && !content.ends_with('\n') {
        writeln!(writer)?;
    }
    writeln!(writer, "{SEPARATOR}")?;
    writeln!(writer)?;
    Ok(())
}
