//! Error types for codex.

use thiserror::Error;

/// The main error type for codex operations.
#[derive(Debug, Error)]
pub enum CodexError {
    /// The builder asked for an engine the registry does not know.
    #[error("Unknown engine: '{0}'")]
    UnknownEngine(String),

    /// The selected engine cannot express a node in the tree.
    #[error("Engine '{engine}' does not support {construct}")]
    Unsupported {
        engine: String,
        construct: &'static str,
    },

    /// The tree itself has a shape no engine can render.
    #[error("Unrenderable tree: {0}")]
    Unrenderable(String),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution error.
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed configuration file.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodexError {
    /// Create an unsupported-construct error for the given engine.
    pub fn unsupported(engine: impl Into<String>, construct: &'static str) -> Self {
        Self::Unsupported {
            engine: engine.into(),
            construct,
        }
    }

    /// Create an unrenderable-tree error.
    pub fn unrenderable(message: impl Into<String>) -> Self {
        Self::Unrenderable(message.into())
    }
}

/// Result type alias for codex operations.
pub type CodexResult<T> = Result<T, CodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodexError::unsupported("mysql", "INTERSECT");
        assert_eq!(err.to_string(), "Engine 'mysql' does not support INTERSECT");

        let err = CodexError::UnknownEngine("oracle".to_string());
        assert_eq!(err.to_string(), "Unknown engine: 'oracle'");
    }
}
