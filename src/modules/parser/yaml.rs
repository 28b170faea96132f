//! YAML tree file parser

use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use tabgen_core::{CommandNode, OptionalArgument, PositionalSpec, Program, Settings, TabgenError};
use tabgen_types::PathHint;

/// YAML parser for tabgen tree files. JSON input works too.
pub struct YamlParser;

#[derive(Debug, Deserialize)]
struct TreeFile {
    prog: String,

    #[serde(default)]
    root_prefix: Option<String>,

    #[serde(default)]
    preamble: Option<String>,

    #[serde(default)]
    settings: Option<Settings>,

    #[serde(default)]
    command: RawCommand,
}

#[derive(Debug, Default, Deserialize)]
struct RawCommand {
    /// Required for list-style subcommands; map keys win otherwise.
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    options: Vec<RawOption>,

    #[serde(default)]
    positionals: Vec<RawPositional>,

    #[serde(default)]
    subcommands: RawSubcommands,

    #[serde(default)]
    hidden: bool,
}

/// `--force`, `[-f, --force]`, or `{ flags: [...], choices: [...], complete: file }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOption {
    Single(String),
    Flags(Vec<String>),
    Full {
        flags: Vec<String>,
        #[serde(default)]
        choices: Vec<String>,
        #[serde(default)]
        complete: Option<String>,
        #[serde(default)]
        hidden: bool,
    },
}

/// `targets` or `{ dest: targets, complete: file, ... }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPositional {
    Dest(String),
    Full {
        dest: String,
        #[serde(default)]
        choices: Vec<String>,
        #[serde(default)]
        complete: Option<String>,
        #[serde(default)]
        hidden: bool,
    },
}

/// Subcommands keyed by name, or a list of commands carrying `name`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSubcommands {
    Map(BTreeMap<String, Option<RawCommand>>),
    List(Vec<RawCommand>),
}

impl Default for RawSubcommands {
    fn default() -> Self {
        RawSubcommands::List(Vec::new())
    }
}

impl YamlParser {
    /// Parse a YAML string into a Program
    pub fn parse(content: &str) -> Result<Program, TabgenError> {
        let file = serde_yaml::from_str::<TreeFile>(content)
            .map_err(|e| TabgenError::Config(format!("YAML parse error: {}", e)))?;
        tree_file_to_program(file)
    }
}

fn tree_file_to_program(file: TreeFile) -> Result<Program, TabgenError> {
    let root_name = file.command.name.clone().unwrap_or_else(|| file.prog.clone());
    let root = raw_to_node(root_name, file.command)?;

    Ok(Program {
        prog: file.prog,
        root_prefix: file.root_prefix,
        preamble: file.preamble,
        settings: file.settings.unwrap_or_default(),
        root,
    })
}

fn raw_to_node(name: String, raw: RawCommand) -> Result<CommandNode, TabgenError> {
    let options = raw
        .options
        .into_iter()
        .map(|option| raw_to_option(&name, option))
        .collect::<Result<Vec<_>, _>>()?;

    let mut positionals = Vec::with_capacity(raw.positionals.len());
    for positional in raw.positionals {
        positionals.push(raw_to_positional(&name, positional)?);
    }

    let mut subcommands = Vec::new();
    match raw.subcommands {
        RawSubcommands::Map(map) => {
            for (child_name, child) in map {
                subcommands.push(raw_to_node(child_name, child.unwrap_or_default())?);
            }
        }
        RawSubcommands::List(list) => {
            for child in list {
                let child_name = child.name.clone().ok_or_else(|| {
                    TabgenError::Config(format!(
                        "Subcommand of '{}' is missing 'name'",
                        name
                    ))
                })?;
                subcommands.push(raw_to_node(child_name, child)?);
            }
        }
    }

    Ok(CommandNode {
        name,
        options,
        positionals,
        subcommands,
        hidden: raw.hidden,
    })
}

fn raw_to_option(command: &str, raw: RawOption) -> Result<OptionalArgument, TabgenError> {
    match raw {
        RawOption::Single(flag) => Ok(OptionalArgument::new([flag])),
        RawOption::Flags(flags) => Ok(OptionalArgument::new(flags)),
        RawOption::Full {
            flags,
            choices,
            complete,
            hidden,
        } => {
            let label = flags.last().cloned().unwrap_or_default();
            Ok(OptionalArgument {
                option_strings: flags,
                choices,
                complete: parse_hint(complete, command, &label)?,
                hidden,
            })
        }
    }
}

fn parse_hint(
    value: Option<String>,
    command: &str,
    arg: &str,
) -> Result<Option<PathHint>, TabgenError> {
    value
        .map(|value| {
            PathHint::from_str(&value).map_err(|e| {
                TabgenError::Config(format!("Argument '{}.{}': {}", command, arg, e))
            })
        })
        .transpose()
}

fn raw_to_positional(command: &str, raw: RawPositional) -> Result<PositionalSpec, TabgenError> {
    match raw {
        RawPositional::Dest(dest) => Ok(PositionalSpec::new(dest)),
        RawPositional::Full {
            dest,
            choices,
            complete,
            hidden,
        } => {
            let complete = parse_hint(complete, command, &dest)?;

            Ok(PositionalSpec {
                dest,
                choices,
                complete,
                hidden,
            })
        }
    }
}
