//! codex configuration
//!
//! ```toml
//! engine = "postgres"
//! database_url = "postgres://localhost/app"
//! max_connections = 5
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{CodexError, CodexResult};
use crate::transpiler::DEFAULT_ENGINE;

/// File name looked up in the working directory and the user config dir.
pub const CONFIG_FILE: &str = "codex.toml";

/// Main configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodexConfig {
    /// Engine key builders select by default
    pub engine: String,

    /// Database connection URL (only needed to execute queries)
    pub database_url: Option<String>,

    /// Pool size for [`Session`](crate::engine::Session)
    pub max_connections: u32,
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            database_url: None,
            max_connections: 5,
        }
    }
}

impl CodexConfig {
    /// Create a new configuration builder
    pub fn builder() -> CodexConfigBuilder {
        CodexConfigBuilder::default()
    }

    pub fn from_toml_str(content: &str) -> CodexResult<Self> {
        let config: CodexConfig = toml::from_str(content)?;
        if config.max_connections == 0 {
            return Err(CodexError::Config("max_connections must be at least 1".into()));
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> CodexResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// `<config dir>/codex/codex.toml`
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("codex").join(CONFIG_FILE))
    }

    /// Load from `explicit` if given, otherwise `./codex.toml`, otherwise the
    /// user config file, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> CodexResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates = std::iter::once(PathBuf::from(CONFIG_FILE)).chain(Self::user_path());
        for path in candidates {
            if path.exists() {
                debug!(path = %path.display(), "loading config");
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }
}

/// Builder for CodexConfig
#[derive(Debug, Default)]
pub struct CodexConfigBuilder {
    config: CodexConfig,
}

impl CodexConfigBuilder {
    pub fn engine(mut self, key: impl Into<String>) -> Self {
        self.config.engine = key.into();
        self
    }

    /// Set the database URL
    pub fn database(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    pub fn max_connections(mut self, n: u32) -> Self {
        self.config.max_connections = n.max(1);
        self
    }

    /// Build the configuration
    pub fn build(self) -> CodexConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_toml() {
        let config = CodexConfig::from_toml_str(r#"engine = "mysql""#).unwrap();
        assert_eq!(config.engine, "mysql");
        assert_eq!(config.database_url, None);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_zero_connections_rejected() {
        let err = CodexConfig::from_toml_str("max_connections = 0").unwrap_err();
        assert!(matches!(err, CodexError::Config(_)));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = CodexConfig::from_toml_str("engine = ").unwrap_err();
        assert!(matches!(err, CodexError::Toml(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = CodexConfig::load(Some(Path::new("/nonexistent/codex.toml"))).unwrap_err();
        assert!(matches!(err, CodexError::Io(_)));
    }

    #[test]
    fn test_builder() {
        let config = CodexConfig::builder()
            .engine("sqlite")
            .database("sqlite::memory:")
            .max_connections(0)
            .build();
        assert_eq!(config.engine, "sqlite");
        assert_eq!(config.database_url.as_deref(), Some("sqlite::memory:"));
        assert_eq!(config.max_connections, 1);
    }
}
