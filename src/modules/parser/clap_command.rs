//! Command trees from clap definitions

use clap::{Arg, Command, ValueHint};
use tabgen_core::{CommandNode, OptionalArgument, PositionalSpec, Program};
use tabgen_types::{PathHint, PathKind};
use tracing::debug;

/// Build a program from a clap command definition.
///
/// The command is built first so clap's generated `--help`/`--version` flags,
/// propagated global arguments and the `help` subcommand are included. The
/// root's visible option strings become the top-level options; its arguments
/// marked `global` plus `--help` become the global options.
pub fn from_clap(command: &Command) -> Program {
    let mut command = command.clone();
    command.build();

    let prog = command
        .get_bin_name()
        .unwrap_or_else(|| command.get_name())
        .to_string();
    let root = command_to_node(&command);

    let mut program = Program::new(prog, root);
    program.settings.top_level_options = program.root.option_strings().map(str::to_string).collect();
    program.settings.global_options = global_options(&command);
    program
}

fn global_options(command: &Command) -> Vec<String> {
    command
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
        .filter(|arg| arg.is_global_set() || arg.get_id().as_str() == "help")
        .filter_map(optional)
        .flat_map(|option| option.option_strings)
        .collect()
}

fn command_to_node(command: &Command) -> CommandNode {
    let mut node = CommandNode::new(command.get_name());
    node.hidden = command.is_hide_set();

    for arg in command.get_arguments() {
        if arg.is_positional() {
            node.positionals.push(positional(arg));
        } else if let Some(option) = optional(arg) {
            node.options.push(option);
        }
    }

    for sub in command.get_subcommands() {
        debug!("clap subcommand: {} {}", command.get_name(), sub.get_name());
        node.subcommands.push(command_to_node(sub));
    }

    node
}

/// Short spellings first, then long ones, as `-f --force`
fn optional(arg: &Arg) -> Option<OptionalArgument> {
    let mut option_strings: Vec<String> = Vec::new();
    if let Some(shorts) = arg.get_short_and_visible_aliases() {
        option_strings.extend(shorts.into_iter().map(|c| format!("-{}", c)));
    }
    if let Some(longs) = arg.get_long_and_visible_aliases() {
        option_strings.extend(longs.into_iter().map(|l| format!("--{}", l)));
    }

    if option_strings.is_empty() {
        return None;
    }

    // Flags have no argument to complete
    let (choices, complete) = if arg.get_action().takes_values() {
        let choices = arg
            .get_possible_values()
            .iter()
            .filter(|value| !value.is_hide_set())
            .map(|value| value.get_name().to_string())
            .collect();
        (choices, path_hint(arg))
    } else {
        (Vec::new(), None)
    };

    Some(OptionalArgument {
        option_strings,
        choices,
        complete,
        hidden: arg.is_hide_set(),
    })
}

fn positional(arg: &Arg) -> PositionalSpec {
    PositionalSpec {
        dest: arg.get_id().as_str().to_string(),
        choices: Vec::new(),
        complete: path_hint(arg),
        hidden: arg.is_hide_set(),
    }
}

fn path_hint(arg: &Arg) -> Option<PathHint> {
    match arg.get_value_hint() {
        ValueHint::FilePath | ValueHint::AnyPath | ValueHint::ExecutablePath => {
            Some(PathHint::optional(PathKind::File))
        }
        ValueHint::DirPath => Some(PathHint::optional(PathKind::Directory)),
        _ => None,
    }
}
