//! Bash completion script emitter

use std::collections::HashMap;

use tabgen_core::{child_identifier, DefinitionRecord, Program, TabgenError};
use tabgen_types::Shell;
use tracing::debug;

use crate::backend::ShellBackend;
use crate::walker::TreeWalker;

const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shell code that performs the completion at runtime.
///
/// `{root}` and `{pattern}` are substituted; nothing else varies with the input.
const RUNTIME: &str = r#"# $1=word being completed
{root}_compgen_files() {
  compgen -f -- "$1"
}

# $1=word being completed
{root}_compgen_dirs() {
  compgen -d -S '/' -- "$1"
}

# $1=word being completed
{root}_compgen_project_files() {
  compgen -f -X '!{pattern}' -- "$1"
  compgen -d -S '/' -- "$1"  # recurse into subdirs
}

# $1=command word
{root}_replace_hyphen() {
  echo "${1//[-. ]/_}"
}

# $1=node identifier
{root}_node_words() {
  if [ "$1" = "{root}" ]; then
    echo "${{root}_commands}"
  else
    echo "${!1}"
  fi
}

# $1=node identifier, $2=word being completed
{root}_compgen_node() {
  local compgen_var="${1}_COMPGEN"
  local compgen_func="${!compgen_var}"
  local words
  words="$({root}_node_words "$1")"

  case "$2" in
    -*)
      if [ "$1" = "{root}" ]; then
        COMPREPLY=($(compgen -W "${{root}_options}" -- "$2"))
      else
        COMPREPLY=($(compgen -W "${{root}_global_options} ${words}" -- "$2"))
      fi
      ;;
    *)
      COMPREPLY=($(compgen -W "${words}" -X '-*' -- "$2"))
      if [ -n "${compgen_func}" ]; then
        COMPREPLY+=($("${compgen_func}" "$2"))
      fi
      ;;
  esac
}

# $1=node identifier, $2=option, $3=word being completed
# Falls back to the root node for options declared only there.
{root}_compgen_option() {
  local option_id node choices_var compgen_var
  option_id="$({root}_replace_hyphen "$2")"
  for node in "$1" "{root}"; do
    choices_var="${node}_${option_id}_choices"
    compgen_var="${node}_${option_id}_COMPGEN"
    if [ -n "${!choices_var+set}${!compgen_var+set}" ]; then
      COMPREPLY=($(compgen -W "${!choices_var}" -- "$3"))
      if [ -n "${!compgen_var}" ]; then
        COMPREPLY+=($("${!compgen_var}" "$3"))
      fi
      return 0
    fi
  done
  return 1
}

# Resolve the deepest command named by the typed words, then complete against it
{root}() {
  local word="${COMP_WORDS[COMP_CWORD]}"
  local prev="${COMP_WORDS[COMP_CWORD-1]}"
  local prefix="{root}"
  local candidate this_word i

  COMPREPLY=()

  for (( i=1; i < COMP_CWORD; i++ )); do
    this_word="${COMP_WORDS[i]}"
    case "$this_word" in
      -*) continue ;;
    esac
    if [[ " $({root}_node_words "$prefix") " != *" ${this_word} "* ]]; then
      continue
    fi
    candidate="${prefix}_$({root}_replace_hyphen "$this_word")"
    if [ -n "${!candidate+set}" ]; then
      prefix="$candidate"
    fi
  done

  case "$prev" in
    -*)
      if {root}_compgen_option "$prefix" "$prev" "$word"; then
        return 0
      fi
      ;;
  esac

  {root}_compgen_node "$prefix" "$word"
  return 0
}

complete -o filenames -F {root} {prog}
"#;

/// Renders bash completion scripts
#[derive(Debug, Clone, Copy, Default)]
pub struct BashBackend;

impl BashBackend {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the script from already-walked records.
    ///
    /// `records[0]` must be the root record.
    pub fn emit(&self, program: &Program, records: &[DefinitionRecord]) -> Result<String, TabgenError> {
        let root = records.first().ok_or_else(|| {
            TabgenError::MalformedTree("command tree produced no records".to_string())
        })?;
        let root_id = root.identifier.as_str();
        let settings = &program.settings;

        let mut out = String::new();
        out.push_str(&header(program));
        out.push('\n');

        out.push_str(&assignment(&format!("{}_commands", root_id), &root.child_names.join(" ")));
        out.push_str(&assignment(
            &format!("{}_options", root_id),
            &settings.top_level_options.join(" "),
        ));
        out.push_str(&assignment(
            &format!("{}_global_options", root_id),
            &settings.global_options.join(" "),
        ));
        out.push('\n');

        let by_identifier: HashMap<&str, &DefinitionRecord> =
            records.iter().map(|r| (r.identifier.as_str(), r)).collect();
        emit_node(root, root_id, &by_identifier, &mut out)?;

        if let Some(preamble) = program.preamble.as_deref().filter(|p| !p.trim().is_empty()) {
            out.push_str("\n# Custom Preamble\n");
            out.push_str(preamble.trim_end());
            out.push_str("\n# End Custom Preamble\n");
        }

        out.push('\n');
        out.push_str(&runtime(root_id, &program.prog, &settings.project_file_pattern));

        debug!("rendered bash script: {} records, {} bytes", records.len(), out.len());
        Ok(out)
    }
}

impl ShellBackend for BashBackend {
    fn shell(&self) -> Shell {
        Shell::Bash
    }

    fn render(&self, program: &Program) -> Result<String, TabgenError> {
        let root_id = program.root_identifier();
        let records = TreeWalker::new(&program.settings).walk(&program.root, &root_id)?;
        self.emit(program, &records)
    }
}

/// Options line, option value lines, then every child subtree, then the
/// strategy line.
fn emit_node(
    record: &DefinitionRecord,
    root_id: &str,
    by_identifier: &HashMap<&str, &DefinitionRecord>,
    out: &mut String,
) -> Result<(), TabgenError> {
    if let Some(line) = record.options_line() {
        out.push_str(&assignment(&record.identifier, &line));
    }

    for values in &record.option_values {
        let option_id = child_identifier(&record.identifier, &values.option);
        if !values.choices.is_empty() {
            out.push_str(&assignment(
                &format!("{}_choices", option_id),
                &values.choices.join(" "),
            ));
        }
        if let Some(suffix) = values.strategy.helper_suffix() {
            out.push_str(&format!("{}_COMPGEN={}_compgen_{}\n", option_id, root_id, suffix));
        }
    }

    for child in &record.child_names {
        let child_id = child_identifier(&record.identifier, child);
        let child_record = by_identifier.get(child_id.as_str()).ok_or_else(|| {
            TabgenError::MalformedTree(format!("no definition for '{}'", child_id))
        })?;
        emit_node(child_record, root_id, by_identifier, out)?;
    }

    if let Some(suffix) = record.strategy.helper_suffix() {
        out.push_str(&format!(
            "{}_COMPGEN={}_compgen_{}\n",
            record.identifier, root_id, suffix
        ));
    }

    Ok(())
}

fn header(program: &Program) -> String {
    format!(
        "#!/usr/bin/env bash\n\
         # bash completion for {prog}\n\
         #\n\
         # AUTOMATICALLY GENERATED by tabgen {version}. Do not edit.\n\
         #\n\
         # Install:\n\
         #   source <path to this file>\n\
         # or copy it to your bash-completion directory\n\
         # (e.g. /usr/share/bash-completion/completions/{prog}).\n",
        prog = program.prog,
        version = GENERATOR_VERSION,
    )
}

fn runtime(root_id: &str, prog: &str, pattern: &str) -> String {
    RUNTIME
        .replace("{root}", root_id)
        .replace("{pattern}", pattern)
        .replace("{prog}", prog)
}

fn assignment(name: &str, value: &str) -> String {
    format!("{}={}\n", name, quote(value))
}

/// Single-quote a value for bash
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabgen_core::{CommandNode, OptionalArgument, PositionalSpec};
    use tabgen_types::{PathHint, PathKind};

    fn render(program: &Program) -> String {
        BashBackend::new().render(program).unwrap()
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("-f --force"), "'-f --force'");
        assert_eq!(quote("it's"), r"'it'\''s'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_header_and_top_level_variables() {
        let root = CommandNode::new("dvc")
            .with_subcommand(CommandNode::new("status"))
            .with_subcommand(CommandNode::new("add"));
        let script = render(&Program::new("dvc", root));

        assert!(script.starts_with("#!/usr/bin/env bash\n"));
        assert!(script.contains("AUTOMATICALLY GENERATED by tabgen"));
        assert!(script.contains("_dvc_commands='add status'\n"));
        assert!(script.contains("_dvc_options='-h --help -V --version'\n"));
        assert!(script.contains("_dvc_global_options='-h --help -q --quiet -v --verbose'\n"));
        assert!(script.ends_with("complete -o filenames -F _dvc dvc\n"));
    }

    #[test]
    fn test_strategy_line_follows_descendants() {
        let root = CommandNode::new("dvc").with_subcommand(
            CommandNode::new("exp")
                .with_positional(PositionalSpec::new("targets"))
                .with_subcommand(CommandNode::new("show")),
        );
        let script = render(&Program::new("dvc", root));

        let exp = script.find("_dvc_exp=").unwrap();
        let show = script.find("_dvc_exp_show=").unwrap();
        let compgen = script
            .find("_dvc_exp_COMPGEN=_dvc_compgen_project_files")
            .unwrap();
        assert!(exp < show);
        assert!(show < compgen);
    }

    #[test]
    fn test_option_value_lines() {
        let root = CommandNode::new("dvc")
            .with_optional_argument(
                OptionalArgument::new(["--cd"]).with_hint(PathHint::optional(PathKind::Directory)),
            )
            .with_subcommand(
                CommandNode::new("push").with_optional_argument(
                    OptionalArgument::new(["-j", "--jobs"]).with_choices(["1", "2", "4"]),
                ),
            );
        let script = render(&Program::new("dvc", root));

        assert!(script.contains("\n_dvc___cd_COMPGEN=_dvc_compgen_dirs\n_dvc_push='-j --jobs'\n"));
        assert!(script.contains(
            "_dvc_push='-j --jobs'\n_dvc_push__j_choices='1 2 4'\n_dvc_push___jobs_choices='1 2 4'\n"
        ));
        assert!(!script.contains("_dvc_push___jobs_COMPGEN"));
    }

    #[test]
    fn test_runtime_completes_option_values_first() {
        let script = render(&Program::new("dvc", CommandNode::new("dvc")));

        assert!(script.contains("_dvc_compgen_option() {"));
        let option = script
            .find("if _dvc_compgen_option \"$prefix\" \"$prev\" \"$word\"; then")
            .unwrap();
        let node = script.find("  _dvc_compgen_node \"$prefix\" \"$word\"").unwrap();
        assert!(option < node);
    }

    #[test]
    fn test_runtime_uses_root_identifier_and_pattern() {
        let mut program = Program::new("my-tool", CommandNode::new("my-tool"));
        program.settings.project_file_pattern = "*.lock".to_string();
        let script = render(&program);

        assert!(script.contains("_my_tool_compgen_files() {"));
        assert!(script.contains("_my_tool_compgen_dirs() {"));
        assert!(script.contains("_my_tool_replace_hyphen() {"));
        assert!(script.contains("compgen -f -X '!*.lock' -- \"$1\""));
        assert!(script.contains("echo \"${_my_tool_commands}\""));
        assert!(script.contains("complete -o filenames -F _my_tool my-tool\n"));
        assert!(!script.contains("{root}"));
        assert!(!script.contains("{pattern}"));
    }

    #[test]
    fn test_custom_preamble() {
        let program = Program::new("dvc", CommandNode::new("dvc"))
            .with_preamble("_dvc_remotes() {\n  dvc remote list\n}\n");
        let script = render(&program);

        let start = script.find("# Custom Preamble\n_dvc_remotes() {").unwrap();
        let end = script.find("}\n# End Custom Preamble\n").unwrap();
        let helpers = script.find("_dvc_compgen_files() {").unwrap();
        assert!(start < end);
        assert!(end < helpers);
    }

    #[test]
    fn test_blank_preamble_is_omitted() {
        let program = Program::new("dvc", CommandNode::new("dvc")).with_preamble("  \n");
        assert!(!render(&program).contains("Custom Preamble"));
    }

    #[test]
    fn test_emit_requires_records() {
        let program = Program::new("dvc", CommandNode::new("dvc"));
        let err = BashBackend::new().emit(&program, &[]).unwrap_err();
        assert!(matches!(err, TabgenError::MalformedTree(_)));
    }
}
