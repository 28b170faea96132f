//! Generator settings

use serde::{Deserialize, Serialize};

const DEFAULT_TOP_LEVEL_OPTIONS: &[&str] = &["-h", "--help", "-V", "--version"];
const DEFAULT_GLOBAL_OPTIONS: &[&str] = &["-h", "--help", "-q", "--quiet", "-v", "--verbose"];
const DEFAULT_PROJECT_FILE_PATTERN: &str = "*.dvc";

/// Destination-name fragments that mark a positional as not path-like:
/// a revision, a URL, a free-form argument list, a name, an option key,
/// a value, and a subcommand token.
const DEFAULT_DENYLIST: &[&str] = &["rev", "url", "args", "name", "option", "value", "command"];

/// Destination names that refer to project-tracked files
const DEFAULT_PROJECT_MARKERS: &[&str] = &["target", "targets"];

/// Settings that shape the generated script
///
/// Every field can be left out of a tree file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Options offered when completing the first word with a leading `-`
    pub top_level_options: Vec<String>,

    /// Options valid everywhere; dropped from every per-command option list
    pub global_options: Vec<String>,

    /// Glob matching files tracked by the project (e.g. `*.dvc`)
    pub project_file_pattern: String,

    /// Destination-name fragments that suppress path completion
    pub denylist: Vec<String>,

    /// Destination names that select project-file completion
    pub project_markers: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_level_options: to_strings(DEFAULT_TOP_LEVEL_OPTIONS),
            global_options: to_strings(DEFAULT_GLOBAL_OPTIONS),
            project_file_pattern: DEFAULT_PROJECT_FILE_PATTERN.to_string(),
            denylist: to_strings(DEFAULT_DENYLIST),
            project_markers: to_strings(DEFAULT_PROJECT_MARKERS),
        }
    }
}

impl Settings {
    /// Returns true if the option is part of the global option set
    pub fn is_global(&self, option: &str) -> bool {
        self.global_options.iter().any(|g| g == option)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
