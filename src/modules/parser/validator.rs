//! Command tree validation

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tabgen_core::{sanitize, CommandNode, Program, TabgenError};

/// Program names: anything a shell can run without quoting
static PROG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.+-]+$").unwrap());

/// Command names whose sanitized form is a valid shell identifier fragment
static COMMAND_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").unwrap());

/// Option strings: one or two dashes followed by a non-blank word
static OPTION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^--?[^\s'-][^\s']*$").unwrap());

/// Shell identifiers
static IDENTIFIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Command tree validator
pub struct TreeValidator {
    /// Whether to validate names strictly
    strict_names: bool,
}

impl TreeValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self { strict_names: true }
    }

    /// Create a validator with lenient name checking
    pub fn lenient() -> Self {
        Self {
            strict_names: false,
        }
    }

    /// Validate the whole program
    pub fn validate(&self, program: &Program) -> Result<(), TabgenError> {
        self.validate_prog(&program.prog)?;
        self.validate_root_prefix(program)?;
        self.validate_settings(program)?;
        self.validate_command(&program.root, &program.prog)?;
        Ok(())
    }

    fn validate_prog(&self, prog: &str) -> Result<(), TabgenError> {
        if prog.is_empty() {
            return Err(TabgenError::Validation(
                "Program name cannot be empty".to_string(),
            ));
        }

        if !PROG_PATTERN.is_match(prog) {
            return Err(TabgenError::Validation(format!(
                "Invalid program name '{}': must not contain whitespace, quotes or slashes",
                prog
            )));
        }

        Ok(())
    }

    fn validate_root_prefix(&self, program: &Program) -> Result<(), TabgenError> {
        let identifier = program.root_identifier();
        if !IDENTIFIER_PATTERN.is_match(&identifier) {
            return Err(TabgenError::Validation(format!(
                "Root prefix '{}' is not a valid shell identifier",
                identifier
            )));
        }
        Ok(())
    }

    fn validate_settings(&self, program: &Program) -> Result<(), TabgenError> {
        let settings = &program.settings;
        for option in settings
            .top_level_options
            .iter()
            .chain(settings.global_options.iter())
        {
            self.validate_option_string(option, "settings")?;
        }

        if settings.project_file_pattern.is_empty() || settings.project_file_pattern.contains('\'') {
            return Err(TabgenError::Validation(format!(
                "Invalid project file pattern '{}'",
                settings.project_file_pattern
            )));
        }

        Ok(())
    }

    /// Validate one command and everything below it. `path` names the command
    /// in error messages (e.g. `dvc remote add`).
    fn validate_command(&self, node: &CommandNode, path: &str) -> Result<(), TabgenError> {
        for option in &node.options {
            if option.option_strings.is_empty() {
                return Err(TabgenError::Validation(format!(
                    "Command '{}' has an option without option strings",
                    path
                )));
            }
            for option_string in &option.option_strings {
                self.validate_option_string(option_string, path)?;
            }
            for choice in &option.choices {
                if choice.is_empty() || choice.contains(char::is_whitespace) {
                    return Err(TabgenError::Validation(format!(
                        "Invalid choice '{}' for option '{}' in '{}': must be a single word",
                        choice,
                        option.option_strings.join("/"),
                        path
                    )));
                }
            }
        }

        for positional in &node.positionals {
            if positional.dest.is_empty() {
                return Err(TabgenError::Validation(format!(
                    "Command '{}' has a positional with empty name",
                    path
                )));
            }
            for choice in &positional.choices {
                if node.subcommand(choice).is_none() {
                    return Err(TabgenError::MalformedTree(format!(
                        "Command '{}': choice '{}' of '{}' has no matching subcommand",
                        path, choice, positional.dest
                    )));
                }
            }
        }

        let mut names = HashSet::new();
        let mut identifiers = HashSet::new();
        for child in &node.subcommands {
            self.validate_command_name(&child.name, path)?;

            if !names.insert(child.name.as_str()) {
                return Err(TabgenError::MalformedTree(format!(
                    "Command '{}' has duplicate subcommand: '{}'",
                    path, child.name
                )));
            }

            if !identifiers.insert(sanitize(&child.name)) {
                return Err(TabgenError::MalformedTree(format!(
                    "Command '{}': subcommand '{}' collides with a sibling once hyphens become underscores",
                    path, child.name
                )));
            }

            self.validate_command(child, &format!("{} {}", path, child.name))?;
        }

        Ok(())
    }

    fn validate_command_name(&self, name: &str, parent: &str) -> Result<(), TabgenError> {
        if name.is_empty() {
            return Err(TabgenError::Validation(format!(
                "Command '{}' has a subcommand with empty name",
                parent
            )));
        }

        if self.strict_names && !COMMAND_PATTERN.is_match(name) {
            return Err(TabgenError::Validation(format!(
                "Invalid subcommand name '{}' under '{}': use letters, digits, '.', '-' or '_'",
                name, parent
            )));
        }

        if name.contains('\'') || name.contains(char::is_whitespace) {
            return Err(TabgenError::Validation(format!(
                "Invalid subcommand name '{}' under '{}': quotes and whitespace are not allowed",
                name, parent
            )));
        }

        Ok(())
    }

    fn validate_option_string(&self, option: &str, path: &str) -> Result<(), TabgenError> {
        if !OPTION_PATTERN.is_match(option) {
            return Err(TabgenError::Validation(format!(
                "Invalid option string '{}' in '{}': must start with '-' and contain no whitespace or quotes",
                option, path
            )));
        }
        Ok(())
    }
}

impl Default for TreeValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabgen_core::{OptionalArgument, PositionalSpec};

    fn program(root: CommandNode) -> Program {
        Program::new("dvc", root)
    }

    #[test]
    fn test_valid_program() {
        let root = CommandNode::new("dvc")
            .with_option(["-V", "--version"])
            .with_subcommand(
                CommandNode::new("remote")
                    .with_positional(PositionalSpec::dispatch("cmd", ["add"]))
                    .with_subcommand(CommandNode::new("add").with_option(["-d", "--default"])),
            )
            .with_subcommand(CommandNode::new("get-url"));

        assert!(TreeValidator::new().validate(&program(root)).is_ok());
    }

    #[test]
    fn test_invalid_prog() {
        let program = Program::new("my tool", CommandNode::new("my tool"));
        assert!(TreeValidator::new().validate(&program).is_err());
        let program = Program::new("", CommandNode::new(""));
        assert!(TreeValidator::new().validate(&program).is_err());
    }

    #[test]
    fn test_invalid_root_prefix() {
        let program = program(CommandNode::new("dvc")).with_root_prefix("9lives");
        let err = TreeValidator::new().validate(&program).unwrap_err();
        assert!(err.to_string().contains("not a valid shell identifier"));
    }

    #[test]
    fn test_invalid_option_string() {
        let root = CommandNode::new("dvc")
            .with_subcommand(CommandNode::new("add").with_option(["force"]));
        let err = TreeValidator::new().validate(&program(root)).unwrap_err();
        assert!(err.to_string().contains("'force' in 'dvc add'"));

        let root = CommandNode::new("dvc").with_option(["--two words"]);
        assert!(TreeValidator::new().validate(&program(root)).is_err());
    }

    #[test]
    fn test_invalid_option_choice() {
        let root = CommandNode::new("dvc").with_optional_argument(
            OptionalArgument::new(["--format"]).with_choices(["json", "two words"]),
        );
        let err = TreeValidator::new().validate(&program(root)).unwrap_err();
        assert!(err.to_string().contains("'two words' for option '--format'"));
    }

    #[test]
    fn test_unresolvable_choice() {
        let root = CommandNode::new("dvc").with_subcommand(
            CommandNode::new("remote").with_positional(PositionalSpec::dispatch("cmd", ["add"])),
        );
        let err = TreeValidator::new().validate(&program(root)).unwrap_err();
        assert!(matches!(err, TabgenError::MalformedTree(_)));
        assert!(err.to_string().contains("dvc remote"));
    }

    #[test]
    fn test_duplicate_subcommands() {
        let root = CommandNode::new("dvc")
            .with_subcommand(CommandNode::new("add"))
            .with_subcommand(CommandNode::new("add"));
        let err = TreeValidator::new().validate(&program(root)).unwrap_err();
        assert!(matches!(err, TabgenError::MalformedTree(_)));
    }

    #[test]
    fn test_colliding_subcommands() {
        let root = CommandNode::new("dvc")
            .with_subcommand(CommandNode::new("get-url"))
            .with_subcommand(CommandNode::new("get_url"));
        let err = TreeValidator::new().validate(&program(root)).unwrap_err();
        assert!(err.to_string().contains("collides"));
    }

    #[test]
    fn test_lenient_names() {
        let root = CommandNode::new("dvc").with_subcommand(CommandNode::new("run:all"));
        assert!(TreeValidator::new().validate(&program(root.clone())).is_err());
        assert!(TreeValidator::lenient().validate(&program(root)).is_ok());

        let root = CommandNode::new("dvc").with_subcommand(CommandNode::new("two words"));
        assert!(TreeValidator::lenient().validate(&program(root)).is_err());
    }
}
