use crate::transpiler::traits::Visitor;

/// The default engine: ANSI-style SQL with double-quoted identifiers.
pub struct GenericVisitor;

impl GenericVisitor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenericVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for GenericVisitor {
    fn name(&self) -> &str {
        "to_sql"
    }
}
