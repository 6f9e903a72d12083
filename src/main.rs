//! fb: bundle source files from a directory tree into a single text file
//!
//! Walks the current working directory, selects files by language, and
//! concatenates their (optionally transformed) contents into one bundle.

use anyhow::Result;

fn main() -> Result<()> {
    file_bundler::cli::run()
}
