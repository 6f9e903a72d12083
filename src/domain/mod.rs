//! Core domain types: language tags, the extension lookup table, and the
//! bundle configuration record.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;

/// A recognized source-code category, derived from a file extension.
///
/// The set is closed; anything outside it is "not a code file" and is never
/// bundled. `Pwsh` is accepted as a filter value but no extension maps to
/// it, so filtering on it selects nothing — kept for compatibility with
/// existing response files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Language {
    C,
    Cpp,
    Csharp,
    Fsharp,
    Html,
    Java,
    Javascript,
    Pwsh,
    Python,
    React,
    Sql,
    Vb,
}

impl Language {
    /// The tag name used on the command line and for sorting.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Csharp => "csharp",
            Language::Fsharp => "fsharp",
            Language::Html => "html",
            Language::Java => "java",
            Language::Javascript => "javascript",
            Language::Pwsh => "pwsh",
            Language::Python => "python",
            Language::React => "react",
            Language::Sql => "sql",
            Language::Vb => "vb",
        }
    }

    /// Static extension→tag lookup. `ext` is the extension without the
    /// leading dot. Unrecognized extensions are not code files.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "c" => Some(Language::C),
            "cpp" => Some(Language::Cpp),
            "cs" => Some(Language::Csharp),
            "fs" => Some(Language::Fsharp),
            "html" => Some(Language::Html),
            "java" => Some(Language::Java),
            "js" => Some(Language::Javascript),
            "py" => Some(Language::Python),
            "jsx" => Some(Language::React),
            "sql" => Some(Language::Sql),
            "vb" => Some(Language::Vb),
            _ => None,
        }
    }

    fn from_tag(tag: &str) -> Option<Language> {
        match tag {
            "c" => Some(Language::C),
            "cpp" => Some(Language::Cpp),
            "csharp" => Some(Language::Csharp),
            "fsharp" => Some(Language::Fsharp),
            "html" => Some(Language::Html),
            "java" => Some(Language::Java),
            "javascript" => Some(Language::Javascript),
            "pwsh" => Some(Language::Pwsh),
            "python" => Some(Language::Python),
            "react" => Some(Language::React),
            "sql" => Some(Language::Sql),
            "vb" => Some(Language::Vb),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `--language` filter: a single tag, or the wildcard matching any
/// recognized tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageFilter {
    All,
    One(Language),
}

impl LanguageFilter {
    /// Parse a filter string. Rejected before any file I/O happens.
    pub fn parse(value: &str) -> Result<LanguageFilter> {
        if value == "all" {
            return Ok(LanguageFilter::All);
        }
        match Language::from_tag(value) {
            Some(lang) => Ok(LanguageFilter::One(lang)),
            None => anyhow::bail!(
                "Invalid language '{value}'. Use: csharp|fsharp|vb|pwsh|html|sql|javascript|python|java|cpp|c|react|all"
            ),
        }
    }

    /// Whether a file with the given derived tag is selected.
    pub fn matches(self, language: Language) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::One(lang) => lang == language,
        }
    }
}

/// A discovered file that passed the language filter.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Path relative to the working directory, as written in note headers
    pub relative_path: String,

    /// Tag derived from the file extension
    pub language: Language,
}

/// Everything the bundle writer needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    pub note: bool,
    pub remove_blank_lines: bool,
    pub author: Option<String>,
    pub remove_comments: bool,
}
