//! CLI commands

mod completion;
mod generate;
mod init;
mod records;

pub use completion::CompletionCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use records::RecordsCommand;

use clap::{Parser, Subcommand, ValueHint};

/// tabgen - bash completion scripts from command trees
#[derive(Parser, Debug)]
#[command(name = "tabgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command tree file (YAML or JSON)
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `tabgen generate -f dvc.yaml`.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "tabgen.yaml",
        value_hint = ValueHint::FilePath
    )]
    pub tree: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a completion script from the tree file
    Generate(GenerateCommand),

    /// Print the definition records of every command as JSON
    Records(RecordsCommand),

    /// Create a starter tree file
    Init(InitCommand),

    /// Generate the completion script for tabgen itself
    #[command(hide = true)]
    Completion(CompletionCommand),
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Tree file path
    pub fn tree_path(&self) -> &str {
        &self.tree
    }
}
