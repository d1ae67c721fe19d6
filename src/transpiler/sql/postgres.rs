use crate::transpiler::traits::Visitor;

/// PostgreSQL Visitor.
pub struct PostgresVisitor;

impl PostgresVisitor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PostgresVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for PostgresVisitor {
    fn name(&self) -> &str {
        "postgres"
    }

    fn bool_literal(&self, val: bool) -> String {
        if val { "true".to_string() } else { "false".to_string() }
    }
}
