//! Builders that own a statement tree and mutate it through chained calls.
//!
//! Builders are not synchronized. Every mutator takes `&mut self`, so callers
//! sharing one across threads must serialize access themselves.

pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use delete::DeleteManager;
pub use insert::InsertManager;
pub use select::SelectManager;
pub use update::UpdateManager;

use std::sync::Arc;

use tracing::{debug, trace};

use crate::ast::Statement;
use crate::error::CodexResult;
use crate::transpiler::{DEFAULT_ENGINE, VisitorRegistry};

/// The registry a builder renders with and the engine it selected.
#[derive(Debug, Clone)]
pub(crate) struct EngineSelection {
    registry: Arc<VisitorRegistry>,
    engine: Option<String>,
}

impl EngineSelection {
    pub(crate) fn new(registry: Arc<VisitorRegistry>) -> Self {
        Self {
            registry,
            engine: None,
        }
    }

    /// Select `key` if the registry knows it; otherwise keep the current choice.
    pub(crate) fn select(&mut self, key: &str) {
        if self.registry.contains(key) {
            self.engine = Some(key.to_string());
        } else {
            trace!(engine = key, "ignoring unregistered engine");
        }
    }

    pub(crate) fn key(&self) -> &str {
        self.engine.as_deref().unwrap_or(DEFAULT_ENGINE)
    }

    pub(crate) fn render(&self, statement: Statement<'_>) -> CodexResult<String> {
        let key = self.key();
        let sql = self.registry.get(key)?.accept(statement)?;
        debug!(engine = key, kind = statement.kind(), %sql, "rendered statement");
        Ok(sql)
    }
}
