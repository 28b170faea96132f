//! tabgen CLI
//!
//! This crate provides the command-line interface for tabgen including:
//! - generate: Write a completion script for a tree file
//! - records: Print the per-command definition records as JSON
//! - init: Create a starter tree file
//! - completion: Completion script for tabgen itself

pub mod commands;

pub use commands::{Cli, Commands};
