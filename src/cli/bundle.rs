//! Bundle command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::bundle::write_bundle;
use crate::domain::{BundleOptions, LanguageFilter};
use crate::scan;

#[derive(Args)]
pub struct BundleArgs {
    /// Languages in the bundle (use 'all' to include all code files)
    #[arg(short, long, value_name = "TAG")]
    pub language: String,

    /// File path and name of the bundle to write
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Prefix each file's content with its source path as a comment
    #[arg(short, long)]
    pub note: bool,

    /// Sort the files by language tag instead of path
    #[arg(short, long)]
    pub sort: bool,

    /// Remove empty lines from code files
    #[arg(short, long)]
    pub remove: bool,

    /// Author of the bundle, written once at the top
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// Remove comment patterns from the bundled code
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set, default_value_t = false)]
    pub remove_comments: bool,
}

pub fn run(args: BundleArgs) -> Result<()> {
    // Validated before any file I/O.
    let filter = LanguageFilter::parse(&args.language)?;

    let cwd = std::env::current_dir()?;
    let mut files = scan::discover(&cwd, filter)?;
    scan::order(&mut files, args.sort);

    let options = BundleOptions {
        note: args.note,
        remove_blank_lines: args.remove,
        author: args.author,
        remove_comments: args.remove_comments,
    };
    let bundled = write_bundle(&args.output, &files, &options)?;

    println!("Bundled {bundled} file(s) into {}", args.output.display());
    Ok(())
}
