//! Explicit path completion hints for positional arguments

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of path a positional accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    File,
    #[serde(alias = "dir")]
    Directory,
}

/// Whether a hint overrides the name-based heuristic or only backs it up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Always applies, whatever the destination name suggests
    Required,
    /// Applies only when the heuristic finds nothing to complete
    #[default]
    Optional,
}

/// File or directory completion tag attached to a positional argument
///
/// Written as `file`, `dir` or `directory`; a trailing `!` marks the hint as
/// [`Requirement::Required`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathHint {
    pub kind: PathKind,
    #[serde(default)]
    pub requirement: Requirement,
}

impl PathHint {
    pub fn optional(kind: PathKind) -> Self {
        Self {
            kind,
            requirement: Requirement::Optional,
        }
    }

    pub fn required(kind: PathKind) -> Self {
        Self {
            kind,
            requirement: Requirement::Required,
        }
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }
}

impl fmt::Display for PathHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            PathKind::File => "file",
            PathKind::Directory => "dir",
        };
        if self.is_required() {
            write!(f, "{}!", kind)
        } else {
            write!(f, "{}", kind)
        }
    }
}

impl FromStr for PathHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (name, requirement) = match trimmed.strip_suffix('!') {
            Some(name) => (name, Requirement::Required),
            None => (trimmed, Requirement::Optional),
        };
        let kind = match name.to_lowercase().as_str() {
            "file" | "files" => PathKind::File,
            "dir" | "dirs" | "directory" => PathKind::Directory,
            _ => return Err(format!("Unknown path hint: {}", s)),
        };
        Ok(Self { kind, requirement })
    }
}
