//! Shell selector definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shells a completion script can be requested for
///
/// Only [`Shell::Bash`] has a backend; the other selectors exist so callers get
/// an explicit "unsupported" error instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    /// GNU bash
    Bash,
    /// Z shell
    Zsh,
    /// fish
    Fish,
    /// PowerShell
    #[serde(alias = "pwsh")]
    PowerShell,
    /// Elvish
    Elvish,
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
            Shell::PowerShell => write!(f, "powershell"),
            Shell::Elvish => write!(f, "elvish"),
        }
    }
}

impl FromStr for Shell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            "powershell" | "pwsh" => Ok(Shell::PowerShell),
            "elvish" => Ok(Shell::Elvish),
            _ => Err(format!("Unknown shell: {}", s)),
        }
    }
}

impl Shell {
    /// Returns all known shell selectors
    pub fn all() -> &'static [Shell] {
        &[
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Elvish,
        ]
    }
}
