//! File Bundler: concatenate source files into a single annotated bundle
//!
//! This library provides the pieces behind the `fb` binary: language
//! classification, file discovery, content transforms, the bundle writer,
//! and response-file handling.

pub mod bundle;
pub mod cli;
pub mod domain;
pub mod rsp;
pub mod scan;
pub mod transform;
