//! Root model: a command tree plus everything needed to render it

use serde::{Deserialize, Serialize};

use super::{sanitize, CommandNode, Settings};

/// A command-line program to generate completions for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Executable name the completion is registered for
    pub prog: String,

    /// Prefix for every generated shell identifier (default: `_<prog>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_prefix: Option<String>,

    /// Extra shell code inserted before the helper functions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,

    #[serde(default)]
    pub settings: Settings,

    /// Root of the command tree
    pub root: CommandNode,
}

impl Program {
    /// Create a program around the given root command
    pub fn new(prog: impl Into<String>, root: CommandNode) -> Self {
        Self {
            prog: prog.into(),
            root_prefix: None,
            preamble: None,
            settings: Settings::default(),
            root,
        }
    }

    pub fn with_root_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.root_prefix = Some(prefix.into());
        self
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Identifier of the root node; every other identifier starts with it
    pub fn root_identifier(&self) -> String {
        match &self.root_prefix {
            Some(prefix) => sanitize(prefix),
            None => sanitize(&format!("_{}", self.prog)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_identifier() {
        let program = Program::new("my-tool", CommandNode::new("my-tool"));
        assert_eq!(program.root_identifier(), "_my_tool");
    }

    #[test]
    fn test_custom_root_identifier() {
        let program =
            Program::new("dvc", CommandNode::new("dvc")).with_root_prefix("_shtab-dvc");
        assert_eq!(program.root_identifier(), "_shtab_dvc");
    }

    #[test]
    fn test_program_settings_default() {
        let program = Program::new("dvc", CommandNode::new("dvc"));
        assert_eq!(program.settings, Settings::default());
        assert!(program.preamble.is_none());
    }
}
