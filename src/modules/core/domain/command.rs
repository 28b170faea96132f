//! Command tree definitions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tabgen_types::PathHint;

/// One command or subcommand of a command-line tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandNode {
    /// Command name as typed on the command line (may contain hyphens)
    pub name: String,

    /// Optional (flag) arguments in declaration order
    #[serde(default)]
    pub options: Vec<OptionalArgument>,

    /// Positional arguments in declaration order
    #[serde(default)]
    pub positionals: Vec<PositionalSpec>,

    /// Child commands. Order carries no meaning; traversal sorts by name.
    #[serde(default)]
    pub subcommands: Vec<CommandNode>,

    /// Hidden commands are left out of the completion script
    #[serde(default)]
    pub hidden: bool,
}

/// An optional argument and all of its spellings (e.g. `-f`, `--force`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalArgument {
    pub option_strings: Vec<String>,

    /// Literal values the option's argument takes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,

    /// Path completion for the option's argument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<PathHint>,

    #[serde(default)]
    pub hidden: bool,
}

/// One positional argument slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalSpec {
    /// Destination name, used for display and for classification
    pub dest: String,

    /// Literal values this positional dispatches on. Each value names a subcommand.
    #[serde(default)]
    pub choices: Vec<String>,

    /// Explicit path completion hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<PathHint>,

    #[serde(default)]
    pub hidden: bool,
}

impl CommandNode {
    /// Create a new command with no arguments and no subcommands
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an optional argument spelled by the given option strings
    pub fn with_option<I, S>(mut self, option_strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.push(OptionalArgument::new(option_strings));
        self
    }

    /// Add a fully specified optional argument
    pub fn with_optional_argument(mut self, argument: OptionalArgument) -> Self {
        self.options.push(argument);
        self
    }

    /// Add a positional argument
    pub fn with_positional(mut self, positional: PositionalSpec) -> Self {
        self.positionals.push(positional);
        self
    }

    /// Add a child command
    pub fn with_subcommand(mut self, subcommand: CommandNode) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Mark this command as hidden
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Find a child command by name
    pub fn subcommand(&self, name: &str) -> Option<&CommandNode> {
        self.subcommands.iter().find(|c| c.name == name)
    }

    /// Option strings of all visible optional arguments, in declaration order
    pub fn option_strings(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| !o.hidden)
            .flat_map(|o| o.option_strings.iter().map(String::as_str))
    }

    /// Visible positionals that dispatch to subcommands
    pub fn dispatch_positionals(&self) -> impl Iterator<Item = &PositionalSpec> {
        self.positionals
            .iter()
            .filter(|p| !p.hidden && p.is_dispatch())
    }

    /// Visible positionals that take a free value
    pub fn plain_positionals(&self) -> impl Iterator<Item = &PositionalSpec> {
        self.positionals
            .iter()
            .filter(|p| !p.hidden && !p.is_dispatch())
    }

    /// Names of visible subcommands no dispatch positional refers to, sorted
    ///
    /// Trees built from frameworks that attach subcommands directly to a command
    /// (rather than through a choices positional) only have these.
    pub fn undispatched_subcommands(&self) -> Vec<&str> {
        let referenced: HashSet<&str> = self
            .positionals
            .iter()
            .flat_map(|p| p.choices.iter().map(String::as_str))
            .collect();

        let mut names: Vec<&str> = self
            .subcommands
            .iter()
            .filter(|c| !c.hidden && !referenced.contains(c.name.as_str()))
            .map(|c| c.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Total number of nodes in this tree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .subcommands
            .iter()
            .map(CommandNode::node_count)
            .sum::<usize>()
    }
}

impl OptionalArgument {
    pub fn new<I, S>(option_strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            option_strings: option_strings.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Complete the option's argument from a fixed list of values
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Complete the option's argument as a path
    pub fn with_hint(mut self, hint: PathHint) -> Self {
        self.complete = Some(hint);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns true if the option's argument has anything to complete
    pub fn completes_value(&self) -> bool {
        self.complete.is_some() || !self.choices.is_empty()
    }
}

impl PositionalSpec {
    /// Create a plain positional with the given destination name
    pub fn new(dest: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            ..Self::default()
        }
    }

    /// Create a positional dispatching to the given subcommand names
    pub fn dispatch<I, S>(dest: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dest: dest.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Attach an explicit path completion hint
    pub fn with_hint(mut self, hint: PathHint) -> Self {
        self.complete = Some(hint);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns true if this positional selects a subcommand
    pub fn is_dispatch(&self) -> bool {
        !self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabgen_types::PathKind;

    #[test]
    fn test_command_new() {
        let cmd = CommandNode::new("add");
        assert_eq!(cmd.name, "add");
        assert!(cmd.options.is_empty());
        assert!(cmd.positionals.is_empty());
        assert!(cmd.subcommands.is_empty());
        assert!(!cmd.hidden);
    }

    #[test]
    fn test_option_strings_skip_hidden() {
        let cmd = CommandNode::new("push")
            .with_option(["-r", "--remote"])
            .with_optional_argument(OptionalArgument::new(["--debug-internals"]).hidden())
            .with_option(["-j", "--jobs"]);

        let opts: Vec<&str> = cmd.option_strings().collect();
        assert_eq!(opts, vec!["-r", "--remote", "-j", "--jobs"]);
    }

    #[test]
    fn test_option_value_completion() {
        let plain = OptionalArgument::new(["-f", "--force"]);
        assert!(!plain.completes_value());

        let jobs = OptionalArgument::new(["--format"]).with_choices(["json", "yaml"]);
        assert!(jobs.completes_value());
        assert_eq!(jobs.choices, vec!["json", "yaml"]);

        let out = OptionalArgument::new(["-o", "--out"]).with_hint(PathHint::optional(PathKind::Directory));
        assert!(out.completes_value());
    }

    #[test]
    fn test_positional_partition() {
        let cmd = CommandNode::new("remote")
            .with_positional(PositionalSpec::dispatch("cmd", ["add", "remove"]))
            .with_positional(PositionalSpec::new("path").with_hint(PathHint::optional(PathKind::File)))
            .with_positional(PositionalSpec::new("secret").hidden());

        assert_eq!(cmd.dispatch_positionals().count(), 1);
        let plain: Vec<&str> = cmd.plain_positionals().map(|p| p.dest.as_str()).collect();
        assert_eq!(plain, vec!["path"]);
    }

    #[test]
    fn test_undispatched_subcommands_sorted() {
        let cmd = CommandNode::new("root")
            .with_positional(PositionalSpec::dispatch("cmd", ["pull"]))
            .with_subcommand(CommandNode::new("status"))
            .with_subcommand(CommandNode::new("pull"))
            .with_subcommand(CommandNode::new("add"))
            .with_subcommand(CommandNode::new("internal").hidden());

        assert_eq!(cmd.undispatched_subcommands(), vec!["add", "status"]);
    }

    #[test]
    fn test_find_subcommand_and_count() {
        let cmd = CommandNode::new("root").with_subcommand(
            CommandNode::new("remote").with_subcommand(CommandNode::new("add")),
        );
        assert!(cmd.subcommand("remote").is_some());
        assert!(cmd.subcommand("add").is_none());
        assert_eq!(cmd.node_count(), 3);
    }
}
