//! Create-rsp command implementation
//!
//! Prompts for each bundle option in a fixed sequence and serializes the
//! answers to `bundle.rsp` in the working directory. CLI-provided values
//! act as prompt defaults; an empty answer keeps the default.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;

use crate::rsp::{self, RspOptions};

#[derive(Args)]
pub struct CreateRspArgs {
    /// Languages (comma-separated, or 'all' for all files)
    #[arg(long, value_name = "STR")]
    pub language: Option<String>,

    /// Output file path
    #[arg(long, value_name = "STR")]
    pub output: Option<String>,

    /// Include notes with source code paths? (true/false)
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set, default_value_t = false)]
    pub note: bool,

    /// Sort files by type? (true/false)
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set, default_value_t = false)]
    pub sort: bool,

    /// Remove empty lines? (true/false)
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set, default_value_t = false)]
    pub remove: bool,

    /// Author name (optional)
    #[arg(long, value_name = "STR")]
    pub author: Option<String>,

    /// Remove comment lines? (true/false)
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set, default_value_t = false)]
    pub remove_comments: bool,
}

pub fn run(args: CreateRspArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let options = collect_options(args, &mut stdin.lock(), &mut stdout.lock())?;

    let cwd = std::env::current_dir()?;
    let path = rsp::write_rsp(&cwd, &options)?;
    println!("Response file created successfully: {}", path.display());
    Ok(())
}

/// Run the prompt sequence over arbitrary streams. Split out from [`run`]
/// so tests can drive it without a terminal.
pub fn collect_options<R: BufRead, W: Write>(
    args: CreateRspArgs,
    input: &mut R,
    out: &mut W,
) -> Result<RspOptions> {
    let language = rsp::prompt_string(
        input,
        out,
        "Enter languages (comma-separated, or 'all' for all files): ",
        args.language,
    )?;
    let output = rsp::prompt_string(input, out, "Enter output file path: ", args.output)?;
    let note = rsp::prompt_bool(
        input,
        out,
        "Include notes with source code paths? (true/false): ",
        args.note,
    )?;
    let sort = rsp::prompt_bool(input, out, "Sort files by type? (true/false): ", args.sort)?;
    let remove =
        rsp::prompt_bool(input, out, "Remove empty lines? (true/false): ", args.remove)?;
    let author = rsp::prompt_string(input, out, "Enter author name (optional): ", args.author)?;
    let remove_comments = rsp::prompt_bool(
        input,
        out,
        "Remove comments lines (optional): ",
        args.remove_comments,
    )?;

    Ok(RspOptions { language, output, note, sort, remove, author, remove_comments })
}
