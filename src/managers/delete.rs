use std::sync::Arc;

use crate::ast::{DeleteStatement, Expr, Operand, Relation, Statement};
use crate::error::CodexResult;
use crate::managers::EngineSelection;
use crate::transpiler::{ToSql, VisitorRegistry};

/// Manages a tree that renders to a SQL DELETE statement.
#[derive(Debug, Clone)]
pub struct DeleteManager {
    tree: DeleteStatement,
    selection: EngineSelection,
}

impl DeleteManager {
    pub fn new(relation: Relation, registry: Arc<VisitorRegistry>) -> Self {
        Self {
            tree: DeleteStatement {
                relation,
                wheres: Vec::new(),
            },
            selection: EngineSelection::new(registry),
        }
    }

    pub fn tree(&self) -> &DeleteStatement {
        &self.tree
    }

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

impl ToSql for DeleteManager {
    fn to_sql(&self) -> CodexResult<String> {
        self.selection.render(Statement::Delete(&self.tree))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_delete_everything() {
        let sessions = crate::table("sessions");
        assert_eq!(sessions.delete().to_sql().unwrap(), r#"DELETE FROM "sessions""#);
    }

    #[test]
    fn test_delete_mysql_quoting() {
        let sessions = crate::table("sessions");
        let sql = sessions
            .delete()
            .filter(sessions.attr("expired").eq(true))
            .engine(Dialect::MySQL)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DELETE FROM `sessions` WHERE (`sessions`.`expired` = 1)");
    }
}
