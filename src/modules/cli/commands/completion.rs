//! Hidden command to generate shell completions for tabgen itself.

use clap::{Args, CommandFactory};
use tabgen_core::TabgenError;
use tabgen_generator::{backend_named, write_completion};
use tabgen_parser::from_clap;

/// Generate shell completion scripts.
///
/// This command is intentionally hidden from normal `--help` output because it
/// exists primarily for installers and packaging scripts.
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for
    #[arg(default_value = "bash")]
    pub shell: String,
}

impl CompletionCommand {
    pub fn execute(&self) -> Result<(), TabgenError> {
        let shell = backend_named(&self.shell)?.shell();

        // tabgen's own clap definition goes through the same generator as any
        // user tree, so the completion always matches the real CLI surface.
        let program = from_clap(&crate::Cli::command());
        write_completion(&program, shell, &mut std::io::stdout().lock())
    }
}
