use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::error::{CodexError, CodexResult};
use crate::transpiler::sql::generic::GenericVisitor;
use crate::transpiler::sql::mysql::MysqlVisitor;
use crate::transpiler::sql::postgres::PostgresVisitor;
use crate::transpiler::sql::sqlite::SqliteVisitor;
use crate::transpiler::traits::Visitor;

/// Engine used when a builder never selected one.
pub const DEFAULT_ENGINE: &str = "to_sql";

/// Built-in engines, usable anywhere an engine key is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Generic,
    Postgres,
    MySQL,
    SQLite,
}

impl Dialect {
    pub fn key(&self) -> &'static str {
        match self {
            Dialect::Generic => DEFAULT_ENGINE,
            Dialect::Postgres => "postgres",
            Dialect::MySQL => "mysql",
            Dialect::SQLite => "sqlite",
        }
    }

    pub fn visitor(&self) -> Box<dyn Visitor> {
        match self {
            Dialect::Generic => Box::new(GenericVisitor),
            Dialect::Postgres => Box::new(PostgresVisitor),
            Dialect::MySQL => Box::new(MysqlVisitor),
            Dialect::SQLite => Box::new(SqliteVisitor),
        }
    }
}

impl AsRef<str> for Dialect {
    fn as_ref(&self) -> &str {
        self.key()
    }
}

/// Maps engine keys to visitors.
///
/// Registration consumes and returns the registry, so once it is shared
/// behind an `Arc` it can no longer change.
pub struct VisitorRegistry {
    visitors: HashMap<String, Box<dyn Visitor>>,
}

static SHARED: LazyLock<Arc<VisitorRegistry>> =
    LazyLock::new(|| Arc::new(VisitorRegistry::default()));

impl VisitorRegistry {
    /// A registry with no engines at all.
    pub fn empty() -> Self {
        Self {
            visitors: HashMap::new(),
        }
    }

    /// The process-wide default registry with every built-in dialect.
    pub fn shared() -> Arc<VisitorRegistry> {
        Arc::clone(&SHARED)
    }

    pub fn register(mut self, key: impl Into<String>, visitor: impl Visitor + 'static) -> Self {
        self.visitors.insert(key.into(), Box::new(visitor));
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.visitors.contains_key(key)
    }

    pub fn get(&self, key: &str) -> CodexResult<&dyn Visitor> {
        self.visitors
            .get(key)
            .map(|v| &**v)
            .ok_or_else(|| CodexError::UnknownEngine(key.to_string()))
    }

    /// Registered keys, sorted.
    pub fn engines(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.visitors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for VisitorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for dialect in [
            Dialect::Generic,
            Dialect::Postgres,
            Dialect::MySQL,
            Dialect::SQLite,
        ] {
            registry.visitors.insert(dialect.key().to_string(), dialect.visitor());
        }
        registry
    }
}

impl std::fmt::Debug for VisitorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitorRegistry")
            .field("engines", &self.engines())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_engines() {
        let registry = VisitorRegistry::default();
        assert_eq!(registry.engines(), vec!["mysql", "postgres", "sqlite", "to_sql"]);
    }

    #[test]
    fn test_unknown_engine_is_error() {
        let registry = VisitorRegistry::empty();
        assert!(matches!(
            registry.get("to_sql"),
            Err(CodexError::UnknownEngine(key)) if key == "to_sql"
        ));
    }
}
