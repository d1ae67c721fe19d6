use std::sync::Arc;

use crate::ast::{Column, Expr, Operand, Relation, Statement, UpdateStatement};
use crate::error::CodexResult;
use crate::managers::EngineSelection;
use crate::transpiler::{ToSql, VisitorRegistry};

/// Manages a tree that renders to a SQL UPDATE statement.
#[derive(Debug, Clone)]
pub struct UpdateManager {
    tree: UpdateStatement,
    selection: EngineSelection,
}

impl UpdateManager {
    pub fn new(relation: Relation, registry: Arc<VisitorRegistry>) -> Self {
        Self {
            tree: UpdateStatement {
                relation,
                assignments: Vec::new(),
                wheres: Vec::new(),
            },
            selection: EngineSelection::new(registry),
        }
    }

    pub fn tree(&self) -> &UpdateStatement {
        &self.tree
    }

    /// Append `column = value` to the SET list.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Expr>) -> &mut Self {
        self.tree
            .assignments
            .push((Column::new(column), value.into()));
        self
    }

    /// Append a WHERE condition, grouped. Conditions are ANDed.
    pub fn filter(&mut self, expr: impl Into<Operand>) -> &mut Self {
        self.tree
            .wheres
            .push(Expr::grouping(expr.into().into_literal()));
        self
    }

    pub fn engine(&mut self, key: impl AsRef<str>) -> &mut Self {
        self.selection.select(key.as_ref());
        self
    }
}

impl ToSql for UpdateManager {
    fn to_sql(&self) -> CodexResult<String> {
        self.selection.render(Statement::Update(&self.tree))
    }
}
