//! Command-line interface for fb
//!
//! Provides `bundle` and `create-rsp` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::rsp;

mod bundle;
mod create_rsp;

/// Bundle source files from a directory tree into a single text file
#[derive(Parser)]
#[command(name = "fb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Concatenate matching source files into one bundle file
    Bundle(bundle::BundleArgs),

    /// Interactively create a response file for the bundle command
    CreateRsp(create_rsp::CreateRspArgs),
}

pub fn run() -> Result<()> {
    // `@file` arguments expand to the file's tokens before clap sees them,
    // so `fb bundle @bundle.rsp` replays a generated response file.
    let args = rsp::expand_args(std::env::args())?;
    let cli = Cli::parse_from(args);

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Bundle(args) => bundle::run(args),
        Commands::CreateRsp(args) => create_rsp::run(args),
    }
}
