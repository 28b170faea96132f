//! Completion script generation for tabgen
//!
//! This crate walks a command tree, classifies how each command's positional
//! arguments complete, and renders the result as a bash completion script.
//! Other shells are recognised and rejected with
//! [`TabgenError::UnsupportedShell`].

pub mod backend;
pub mod bash;
pub mod classifier;
pub mod walker;

pub use backend::{backend_for, backend_named, supported_shells, ShellBackend};
pub use bash::BashBackend;
pub use classifier::ClassifierRules;
pub use walker::TreeWalker;

use std::io::Write;

use tabgen_core::{DefinitionRecord, Program, TabgenError};
use tabgen_types::Shell;
use tracing::info;

/// Generate the completion script for a program
pub fn generate(program: &Program, shell: Shell) -> Result<String, TabgenError> {
    let backend = backend_for(shell)?;
    info!("Generating {} completion for: {}", shell, program.prog);
    backend.render(program)
}

/// Generate the completion script and write it to `sink`.
///
/// The script is rendered in full before the sink is touched, so a failure
/// never leaves partial output behind.
pub fn write_completion<W: Write>(
    program: &Program,
    shell: Shell,
    sink: &mut W,
) -> Result<(), TabgenError> {
    let script = generate(program, shell)?;
    sink.write_all(script.as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Definition records of every visible node, root first
pub fn definition_records(program: &Program) -> Result<Vec<DefinitionRecord>, TabgenError> {
    TreeWalker::new(&program.settings).walk(&program.root, &program.root_identifier())
}
