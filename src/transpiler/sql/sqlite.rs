use crate::error::{CodexError, CodexResult};
use crate::transpiler::traits::Visitor;

/// SQLite Visitor.
pub struct SqliteVisitor;

impl SqliteVisitor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqliteVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for SqliteVisitor {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn bool_literal(&self, val: bool) -> String {
        if val { "1".to_string() } else { "0".to_string() }
    }

    fn limit_offset(&self, limit: Option<usize>, offset: Option<usize>) -> String {
        // SQLite only accepts OFFSET after a LIMIT; -1 means unbounded.
        match (limit, offset) {
            (Some(l), Some(o)) => format!(" LIMIT {} OFFSET {}", l, o),
            (Some(l), None) => format!(" LIMIT {}", l),
            (None, Some(o)) => format!(" LIMIT -1 OFFSET {}", o),
            (None, None) => String::new(),
        }
    }

    fn wrap_set_operand(&self, _sql: String) -> CodexResult<String> {
        // SQLite has no parenthesized compound operands.
        Err(CodexError::unsupported(
            self.name(),
            "ORDER BY/LIMIT/OFFSET on a compound SELECT operand",
        ))
    }
}
