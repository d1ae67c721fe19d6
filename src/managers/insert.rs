use std::sync::Arc;

use crate::ast::{Column, Expr, InsertStatement, Relation, Statement};
use crate::error::CodexResult;
use crate::managers::EngineSelection;
use crate::transpiler::{ToSql, VisitorRegistry};

/// Manages a tree that renders to a SQL INSERT statement.
#[derive(Debug, Clone)]
pub struct InsertManager {
    tree: InsertStatement,
    selection: EngineSelection,
}

impl InsertManager {
    pub fn new(relation: Relation, registry: Arc<VisitorRegistry>) -> Self {
        Self {
            tree: InsertStatement {
                relation,
                columns: Vec::new(),
                values: Vec::new(),
            },
            selection: EngineSelection::new(registry),
        }
    }

    pub fn tree(&self) -> &InsertStatement {
        &self.tree
    }

    /// Append target column names.
    pub fn columns<I, T>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tree
            .columns
            .extend(columns.into_iter().map(|name| Column::new(name)));
        self
    }

    /// Append one row of values.
    pub fn values<I, T>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expr>,
    {
        self.tree.values.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub fn engine(&mut self, key: impl AsRef<str>) -> &mut Self {
        self.selection.select(key.as_ref());
        self
    }
}

impl ToSql for InsertManager {
    fn to_sql(&self) -> CodexResult<String> {
        self.selection.render(Statement::Insert(&self.tree))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_insert_rows() {
        let users = crate::table("users");
        let sql = users
            .insert()
            .columns(["name", "admin"])
            .values([Expr::from("ada"), Expr::from(true)])
            .values([Expr::from("o'neil"), Expr::from(false)])
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            r#"INSERT INTO "users" ("name", "admin") VALUES ('ada', TRUE), ('o''neil', FALSE)"#
        );
    }

    #[test]
    fn test_insert_without_values_is_error() {
        let users = crate::table("users");
        let err = users.insert().columns(["name"]).to_sql().unwrap_err();
        assert!(matches!(err, CodexError::Unrenderable(_)));
    }
}
