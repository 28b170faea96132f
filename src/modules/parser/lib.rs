//! Command tree loading for tabgen
//!
//! This crate turns tree files (YAML or JSON) and clap command definitions
//! into [`Program`]s, and validates them before generation.

pub mod clap_command;
pub mod validator;
pub mod yaml;

pub use clap_command::from_clap;
pub use validator::TreeValidator;
pub use yaml::YamlParser;

use tabgen_core::{Program, TabgenError};
use tracing::debug;

/// Parse a tree file from a path
pub fn parse_file(path: &str) -> Result<Program, TabgenError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TabgenError::Config(format!("Failed to read file '{}': {}", path, e)))?;

    parse_string(&content)
}

/// Parse a tree from a string
pub fn parse_string(content: &str) -> Result<Program, TabgenError> {
    // Parse YAML
    let program = YamlParser::parse(content)?;

    // Validate tree
    let validator = TreeValidator::new();
    validator.validate(&program)?;

    debug!(
        "Parsed tree for '{}': {} commands",
        program.prog,
        program.root.node_count()
    );
    Ok(program)
}
