//! Shell backend trait and registry

use tabgen_core::{Program, TabgenError};
use tabgen_types::Shell;

use crate::bash::BashBackend;

/// A renderer of completion scripts for one shell
///
/// Backends are pure: the same program always renders to the same text, and
/// an error means no text at all.
pub trait ShellBackend: Send + Sync {
    /// Shell this backend renders for
    fn shell(&self) -> Shell;

    /// Render the complete script for the program
    fn render(&self, program: &Program) -> Result<String, TabgenError>;
}

/// Shells that have a backend
pub fn supported_shells() -> &'static [Shell] {
    &[Shell::Bash]
}

/// Look up the backend for a shell
pub fn backend_for(shell: Shell) -> Result<Box<dyn ShellBackend>, TabgenError> {
    match shell {
        Shell::Bash => Ok(Box::new(BashBackend::new())),
        other => Err(unsupported(&other.to_string())),
    }
}

/// Look up the backend for a shell given by name
pub fn backend_named(name: &str) -> Result<Box<dyn ShellBackend>, TabgenError> {
    let shell: Shell = name.parse().map_err(|_| unsupported(name))?;
    backend_for(shell)
}

fn unsupported(name: &str) -> TabgenError {
    let supported: Vec<String> = supported_shells().iter().map(|s| s.to_string()).collect();
    TabgenError::UnsupportedShell(format!(
        "{} (supported: {})",
        name,
        supported.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_backend_available() {
        let backend = backend_for(Shell::Bash).unwrap();
        assert_eq!(backend.shell(), Shell::Bash);
    }

    #[test]
    fn test_other_shells_unsupported() {
        for shell in Shell::all().iter().filter(|s| **s != Shell::Bash) {
            let err = backend_for(*shell).err().unwrap();
            assert!(matches!(err, TabgenError::UnsupportedShell(_)));
            assert!(err.to_string().contains("supported: bash"));
        }
    }

    #[test]
    fn test_backend_named() {
        assert!(backend_named("BASH").is_ok());
        assert!(matches!(
            backend_named("zsh").err().unwrap(),
            TabgenError::UnsupportedShell(_)
        ));
        let err = backend_named("cmd.exe").err().unwrap();
        assert!(err.to_string().contains("cmd.exe"));
    }
}
