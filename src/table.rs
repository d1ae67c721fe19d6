//! The DSL entry point: `table(name)` and the [`Accessor`] it returns.

use std::sync::Arc;

use crate::ast::{Attribute, Expr, Operand, Relation};
use crate::managers::{DeleteManager, InsertManager, SelectManager, UpdateManager};
use crate::transpiler::VisitorRegistry;

/// Create an accessor over a new relation, rendering with the shared default
/// registry.
///
/// # Example
///
/// ```
/// use codex::prelude::*;
///
/// let users = codex::table("users");
/// let sql = users.select().filter(users.attr("id").eq(1)).to_sql().unwrap();
/// assert_eq!(sql, r#"SELECT "users".* FROM "users" WHERE ("users"."id" = 1)"#);
/// ```
pub fn table(name: impl Into<String>) -> Accessor {
    table_with_registry(name, VisitorRegistry::shared())
}

/// Like [`table`], with an explicit registry for every builder it creates.
pub fn table_with_registry(name: impl Into<String>, registry: Arc<VisitorRegistry>) -> Accessor {
    Accessor {
        relation: Relation::new(name),
        registry,
    }
}

/// A binding to one relation that produces attributes scoped to it.
#[derive(Debug, Clone)]
pub struct Accessor {
    relation: Relation,
    registry: Arc<VisitorRegistry>,
}

impl Accessor {
    /// Build an attribute on this relation.
    ///
    /// A string is read as a column name; a node is wrapped as-is.
    pub fn attr(&self, target: impl Into<Operand>) -> Attribute {
        Attribute::new(target.into().into_column(), self.relation.clone())
    }

    /// `"relation".*`
    pub fn star(&self) -> Attribute {
        self.attr(Expr::Star)
    }

    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    pub fn registry(&self) -> &Arc<VisitorRegistry> {
        &self.registry
    }

    pub fn select(&self) -> SelectManager {
        SelectManager::new(self.relation.clone(), Arc::clone(&self.registry))
    }

    pub fn insert(&self) -> InsertManager {
        InsertManager::new(self.relation.clone(), Arc::clone(&self.registry))
    }

    pub fn update(&self) -> UpdateManager {
        UpdateManager::new(self.relation.clone(), Arc::clone(&self.registry))
    }

    pub fn delete(&self) -> DeleteManager {
        DeleteManager::new(self.relation.clone(), Arc::clone(&self.registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Column;

    #[test]
    fn test_attr_from_name() {
        let users = table("users");
        let attr = users.attr("id");
        assert_eq!(*attr.subject, Expr::Column(Column::new("id")));
        assert_eq!(attr.relation.name(), "users");
    }

    #[test]
    fn test_attr_wraps_node_directly() {
        let users = table("users");
        assert_eq!(*users.star().subject, Expr::Star);

        let nested = users.attr(users.attr("id"));
        assert!(matches!(*nested.subject, Expr::Attribute(_)));
    }

    #[test]
    fn test_attr_is_repeatable() {
        let users = table("users");
        assert_eq!(users.attr("email"), users.attr("email"));
    }
}
