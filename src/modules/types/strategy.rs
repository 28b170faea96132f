//! Completion strategy definitions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hint::{PathHint, PathKind};

/// How the positional arguments of a command should be completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStrategy {
    /// No suggestions
    #[default]
    None,
    /// Any filesystem path
    GenericPath,
    /// Files tracked by the project (matching the project file pattern) and directories
    ProjectFile,
    /// Directories only. Only reachable through an explicit path hint.
    Directory,
}

impl fmt::Display for CompletionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionStrategy::None => write!(f, "none"),
            CompletionStrategy::GenericPath => write!(f, "generic_path"),
            CompletionStrategy::ProjectFile => write!(f, "project_file"),
            CompletionStrategy::Directory => write!(f, "directory"),
        }
    }
}

impl CompletionStrategy {
    /// Suffix of the shell helper function implementing this strategy.
    ///
    /// Returns `None` when nothing should be emitted.
    pub fn helper_suffix(&self) -> Option<&'static str> {
        match self {
            CompletionStrategy::None => None,
            CompletionStrategy::GenericPath => Some("files"),
            CompletionStrategy::ProjectFile => Some("project_files"),
            CompletionStrategy::Directory => Some("dirs"),
        }
    }
}

/// Explicit path hints map onto strategies by kind alone
impl From<PathHint> for CompletionStrategy {
    fn from(hint: PathHint) -> Self {
        match hint.kind {
            PathKind::File => CompletionStrategy::GenericPath,
            PathKind::Directory => CompletionStrategy::Directory,
        }
    }
}
