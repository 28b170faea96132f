//! Init command implementation

use clap::{Args, ValueHint};
use std::fs;
use std::path::Path;
use tabgen_core::TabgenError;
use tabgen_parser::parse_string;
use tracing::info;

/// Init command arguments
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Program name the completion is for
    #[arg(default_value = "my-tool")]
    pub name: String,

    /// Output directory
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub output: String,

    /// Overwrite an existing tree file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self) -> Result<(), TabgenError> {
        info!("Initializing tree file for: {}", self.name);

        let tree = self.generate_tree();
        // A bad program name shows up here instead of at the first `generate`
        parse_string(&tree)?;

        let output_dir = Path::new(&self.output);
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let tree_path = output_dir.join("tabgen.yaml");
        if tree_path.exists() && !self.force {
            return Err(TabgenError::Config(format!(
                "{} already exists (use --force to overwrite)",
                tree_path.display()
            )));
        }

        fs::write(&tree_path, tree)?;
        info!("Created: {}", tree_path.display());

        println!("\nNext steps:");
        println!("  1. Edit {} to describe {}'s commands", tree_path.display(), self.name);
        println!(
            "  2. Run: tabgen generate -f {} -o {}.bash",
            tree_path.display(),
            self.name
        );
        println!("  3. Source {}.bash from your ~/.bashrc", self.name);

        Ok(())
    }

    /// Starter tree file content
    fn generate_tree(&self) -> String {
        format!(
            r#"# tabgen command tree
#
# Options are listed per command; subcommands nest under `subcommands`.
# Positionals complete file paths unless their name suggests otherwise
# (`url`, `name`, ...). Use `complete: file` or `complete: dir` to force it.

prog: {name}

settings:
  top_level_options: [-h, --help, -V, --version]
  global_options: [-h, --help, -q, --quiet, -v, --verbose]

command:
  options:
    - [-h, --help]
    - [-V, --version]
  subcommands:
    build:
      options:
        - [-h, --help]
        - [-r, --release]
      positionals:
        - {{ dest: path, complete: dir }}
    config:
      options:
        - [-h, --help]
      positionals:
        - {{ dest: cmd, choices: [get, set] }}
      subcommands:
        get:
          positionals: [name]
        set:
          positionals: [name, value]
"#,
            name = self.name
        )
    }
}
