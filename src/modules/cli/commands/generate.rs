//! Generate command implementation

use clap::{Args, ValueHint};
use std::fs;
use std::io::Write;
use std::path::Path;
use tabgen_core::{Program, TabgenError};
use tabgen_generator::backend_named;
use tabgen_parser::{parse_file, TreeValidator};
use tracing::{debug, info};

/// Generate command arguments
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Shell to generate the script for
    #[arg(default_value = "bash")]
    pub shell: String,

    /// Override the program name the completion is registered for
    #[arg(long)]
    pub prog: Option<String>,

    /// Prefix for generated shell identifiers (default: `_<prog>`)
    #[arg(long)]
    pub prefix: Option<String>,

    /// File whose contents are inserted before the helper functions
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub preamble_file: Option<String>,

    /// Write the script to this file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<String>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, tree_path: &str) -> Result<(), TabgenError> {
        let script = self.render(tree_path)?;

        match &self.output {
            Some(path) => {
                fs::write(path, &script)?;
                info!("Wrote completion script: {}", Path::new(path).display());
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(script.as_bytes())?;
                handle.flush()?;
            }
        }

        Ok(())
    }

    /// Render the script without writing it anywhere
    pub fn render(&self, tree_path: &str) -> Result<String, TabgenError> {
        // Reject unknown shells before touching the tree file
        let backend = backend_named(&self.shell)?;

        info!("Loading command tree from: {}", tree_path);
        let program = self.apply_overrides(parse_file(tree_path)?)?;
        debug!("Root identifier: {}", program.root_identifier());

        backend.render(&program)
    }

    fn apply_overrides(&self, mut program: Program) -> Result<Program, TabgenError> {
        if let Some(prog) = &self.prog {
            program.prog = prog.clone();
        }
        if let Some(prefix) = &self.prefix {
            program.root_prefix = Some(prefix.clone());
        }
        if let Some(path) = &self.preamble_file {
            let preamble = fs::read_to_string(path).map_err(|e| {
                TabgenError::Config(format!("Failed to read preamble '{}': {}", path, e))
            })?;
            program.preamble = Some(preamble);
        }

        TreeValidator::new().validate(&program)?;
        Ok(program)
    }
}
