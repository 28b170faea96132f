//! Records command implementation

use clap::Args;
use tabgen_core::TabgenError;
use tabgen_generator::definition_records;
use tabgen_parser::parse_file;
use tracing::info;

/// Records command arguments
#[derive(Args, Debug)]
pub struct RecordsCommand {
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl RecordsCommand {
    /// Execute the records command
    pub fn execute(&self, tree_path: &str) -> Result<(), TabgenError> {
        println!("{}", self.render(tree_path)?);
        Ok(())
    }

    /// Definition records of the tree file as JSON
    pub fn render(&self, tree_path: &str) -> Result<String, TabgenError> {
        info!("Loading command tree from: {}", tree_path);
        let program = parse_file(tree_path)?;
        let records = definition_records(&program)?;

        let json = if self.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_records_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tree.yaml");
        fs::write(
            &path,
            "prog: git\ncommand:\n  subcommands:\n    clone:\n      positionals: [url]\n",
        )
        .unwrap();

        let json = RecordsCommand { pretty: false }
            .render(&path.to_string_lossy())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["identifier"], "_git");
        assert_eq!(value[0]["child_names"][0], "clone");
        assert_eq!(value[1]["identifier"], "_git_clone");
        assert_eq!(value[1]["strategy"], "none");
    }
}
