//! Error types for tabgen

use thiserror::Error;

/// Main error type for tabgen operations
#[derive(Error, Debug)]
pub enum TabgenError {
    /// Requested shell has no backend
    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),

    /// Command tree cannot be turned into a correct completion script
    #[error("Malformed command tree: {0}")]
    MalformedTree(String),

    /// Tree file reading or parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tree file validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TabgenError {
    /// Process exit code for this error (sysexits-style)
    pub fn exit_code(&self) -> i32 {
        match self {
            TabgenError::UnsupportedShell(_) => 64,
            TabgenError::MalformedTree(_) | TabgenError::Validation(_) => 65,
            TabgenError::Config(_) => 66,
            TabgenError::Io(_) => 74,
            TabgenError::Json(_) => 70,
        }
    }
}

/// Result type alias using TabgenError
pub type Result<T> = std::result::Result<T, TabgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(TabgenError::UnsupportedShell("zsh".into()).exit_code(), 64);
        assert_eq!(TabgenError::MalformedTree("dup".into()).exit_code(), 65);
        assert_eq!(TabgenError::Config("missing".into()).exit_code(), 66);
    }

    #[test]
    fn test_error_messages() {
        let err = TabgenError::UnsupportedShell("fish".into());
        assert_eq!(err.to_string(), "Unsupported shell: fish");

        let err = TabgenError::MalformedTree("choice 'x' has no subcommand".into());
        assert_eq!(
            err.to_string(),
            "Malformed command tree: choice 'x' has no subcommand"
        );
    }
}
