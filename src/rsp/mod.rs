//! Response files: interactive prompting, serialization to `bundle.rsp`,
//! and `@file` argument expansion for re-consumption.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Fixed name of the generated response file, in the working directory.
pub const RSP_FILE_NAME: &str = "bundle.rsp";

/// Answers collected by `create-rsp`, in prompt order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RspOptions {
    pub language: Option<String>,
    pub output: Option<String>,
    pub note: bool,
    pub sort: bool,
    pub remove: bool,
    pub author: Option<String>,
    pub remove_comments: bool,
}

/// Prompt for a string. Empty input (or EOF) keeps the default.
pub fn prompt_string<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: Option<String>,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        Ok(default)
    } else {
        Ok(Some(answer.to_string()))
    }
}

/// Prompt for a bool. Accepts `true`/`false` case-insensitively; empty
/// input (or EOF) keeps the default; anything else reprompts.
pub fn prompt_bool<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: bool,
) -> Result<bool> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        let answer = line.trim();
        if read == 0 || answer.is_empty() {
            return Ok(default);
        }
        match answer.to_ascii_lowercase().parse::<bool>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Invalid input. Please enter a valid value.")?,
        }
    }
}

/// Serialize non-empty / non-false options to `bundle.rsp` under `dir`,
/// overwriting any existing file. String options are written as
/// `--flag value` lines; switches as bare `--flag` lines so the file feeds
/// straight back into the `bundle` parser; `--remove-comments` keeps its
/// explicit value.
pub fn write_rsp(dir: &Path, options: &RspOptions) -> Result<PathBuf> {
    let path = dir.join(RSP_FILE_NAME);
    let mut lines = String::new();
    if let Some(language) = options.language.as_deref().filter(|v| !v.is_empty()) {
        lines.push_str(&format!("--language {language}\n"));
    }
    if let Some(output) = options.output.as_deref().filter(|v| !v.is_empty()) {
        lines.push_str(&format!("--output {output}\n"));
    }
    if options.note {
        lines.push_str("--note\n");
    }
    if options.sort {
        lines.push_str("--sort\n");
    }
    if options.remove {
        lines.push_str("--remove\n");
    }
    if let Some(author) = options.author.as_deref().filter(|v| !v.is_empty()) {
        lines.push_str(&format!("--author {author}\n"));
    }
    if options.remove_comments {
        lines.push_str("--remove-comments true\n");
    }
    fs::write(&path, lines)
        .with_context(|| format!("cannot write response file '{}'", path.display()))?;
    Ok(path)
}

/// Expand `@file` arguments in place: each is replaced by the
/// whitespace-separated tokens of the named file. Values containing
/// spaces are not representable in the flat `--flag value` format.
pub fn expand_args<I: IntoIterator<Item = String>>(args: I) -> Result<Vec<String>> {
    let mut expanded = Vec::new();
    for arg in args {
        if let Some(path) = arg.strip_prefix('@') {
            let content = fs::read_to_string(path)
                .with_context(|| format!("cannot read response file '{path}'"))?;
            expanded.extend(content.split_whitespace().map(str::to_string));
        } else {
            expanded.push(arg);
        }
    }
    Ok(expanded)
}
