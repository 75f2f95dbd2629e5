//! Library exports for cowork-cli.
//!
//! This module exports the CLI structure so the argument definitions can be
//! inspected outside the binary, for example to generate documentation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod prompt;
pub mod render;
pub mod utils;

pub use cli::Cli;
