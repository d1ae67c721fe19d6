use std::sync::Arc;

use tracing::trace;

use crate::ast::*;
use crate::error::CodexResult;
use crate::managers::EngineSelection;
use crate::transpiler::{ToSql, VisitorRegistry};

/// Manages a tree that renders to a SQL SELECT statement.
///
/// Project/filter/join/on/group/having act on the current core; order, limit,
/// offset and set operations act on the statement.
#[derive(Debug, Clone)]
pub struct SelectManager {
    tree: SelectStatement,
    context: usize,
    selection: EngineSelection,
}

impl SelectManager {
    pub fn new(relation: Relation, registry: Arc<VisitorRegistry>) -> Self {
        Self {
            tree: SelectStatement::new(relation),
            context: 0,
            selection: EngineSelection::new(registry),
        }
    }

    /// The statement tree as built so far.
    pub fn tree(&self) -> &SelectStatement {
        &self.tree
    }

    /// Key of the engine `to_sql` will use.
    pub fn engine_key(&self) -> &str {
        self.selection.key()
    }

    fn core(&mut self) -> &mut SelectCore {
        &mut self.tree.cores[self.context]
    }

    /// Append projections in call order. Raw strings are literal SQL.
    pub fn project<I, T>(&mut self, projections: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        let core = self.core();
        for projection in projections {
            core.projections.push(projection.into().into_literal());
        }
        self
    }

    /// Drop the current core's projections, so it renders `"relation".*` again
    /// unless new ones are added.
    pub fn clear_projections(&mut self) -> &mut Self {
        self.core().projections.clear();
        self
    }

    /// Append a WHERE condition, grouped. Conditions are ANDed.
    pub fn filter(&mut self, expr: impl Into<Operand>) -> &mut Self {
        let expr = Expr::grouping(expr.into().into_literal());
        self.core().wheres.push(expr);
        self
    }

    pub fn offset(&mut self, skip: usize) -> &mut Self {
        self.tree.offset = Some(skip);
        self
    }

    pub fn limit(&mut self, take: usize) -> &mut Self {
        self.tree.limit = Some(take);
        self
    }

    pub fn inner_join(&mut self, table: impl Into<JoinTarget>) -> &mut Self {
        self.join(JoinKind::Inner, table.into())
    }

    /// `LEFT OUTER JOIN`
    pub fn outer_join(&mut self, table: impl Into<JoinTarget>) -> &mut Self {
        self.join(JoinKind::Outer, table.into())
    }

    pub fn cross_join(&mut self, table: impl Into<JoinTarget>) -> &mut Self {
        self.join(JoinKind::Cross, table.into())
    }

    fn join(&mut self, kind: JoinKind, target: JoinTarget) -> &mut Self {
        match target.relation() {
            Some(relation) => self.core().source.joins.push(Join::new(kind, relation)),
            None => trace!(?kind, "ignoring join on a non-table node"),
        }
        self
    }

    /// Attach an ON predicate to the most recently added join.
    ///
    /// Does nothing when there is no join yet or the last join takes no ON.
    /// Calling it again replaces the predicate on that same join.
    pub fn on(&mut self, expr: impl Into<Operand>) -> &mut Self {
        let Some(last) = self.core().source.joins.last_mut() else {
            trace!("ignoring on() without a pending join");
            return self;
        };
        if !last.kind.accepts_on() {
            trace!(kind = ?last.kind, "ignoring on() for a join without an ON slot");
            return self;
        }
        last.on = Some(On(expr.into().into_literal()));
        self
    }

    pub fn order(&mut self, expr: impl Into<Operand>) -> &mut Self {
        self.tree.orders.push(expr.into().into_literal());
        self
    }

    pub fn group<I, T>(&mut self, groupings: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        let core = self.core();
        for group in groupings {
            core.groups.push(group.into().into_literal());
        }
        self
    }

    /// Replace the current core's HAVING clause.
    pub fn having(&mut self, expr: impl Into<Operand>) -> &mut Self {
        self.core().having = Some(expr.into().into_literal());
        self
    }

    /// `self UNION other`. The other builder's tree moves into this one.
    pub fn union(&mut self, other: SelectManager) -> &mut Self {
        self.combine(SetOp::Union, other)
    }

    pub fn intersect(&mut self, other: SelectManager) -> &mut Self {
        self.combine(SetOp::Intersect, other)
    }

    pub fn except(&mut self, other: SelectManager) -> &mut Self {
        self.combine(SetOp::Except, other)
    }

    fn combine(&mut self, op: SetOp, other: SelectManager) -> &mut Self {
        self.tree.combinator = Some(Combinator {
            op,
            right: Box::new(other.tree),
        });
        self
    }

    /// Select the rendering engine. Unregistered keys are ignored.
    pub fn engine(&mut self, key: impl AsRef<str>) -> &mut Self {
        self.selection.select(key.as_ref());
        self
    }

    /// `LIMIT 1`
    pub fn first(&mut self) -> &mut Self {
        self.limit(1)
    }

    /// Filter the current core's relation on its `id` column, `LIMIT 1`.
    pub fn find(&mut self, id: impl Into<Expr>) -> &mut Self {
        let relation = self.core().relation().clone();
        let id_attr = Attribute::new(Expr::Column(Column::new("id")), relation);
        self.filter(id_attr.eq(id)).limit(1)
    }
}

impl ToSql for SelectManager {
    /// Renders a copy of the tree in which empty projection lists select
    /// `"relation".*`; the builder itself is left untouched.
    fn to_sql(&self) -> CodexResult<String> {
        let tree = self.tree.with_default_projections();
        self.selection.render(Statement::Select(&tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;

    #[test]
    fn test_on_without_join_is_noop() {
        let users = table("users");
        let mut q = users.select();
        q.on(users.attr("id").eq(1));
        assert!(q.tree().cores[0].source.joins.is_empty());
    }

    #[test]
    fn test_on_after_cross_join_is_noop() {
        let users = table("users");
        let roles = table("roles");
        let mut q = users.select();
        q.cross_join(&roles).on("1 = 1");
        assert_eq!(q.tree().cores[0].source.joins[0].on, None);
    }

    #[test]
    fn test_join_ignores_non_table_node() {
        let users = table("users");
        let mut q = users.select();
        q.inner_join(Expr::Star);
        assert!(q.tree().cores[0].source.joins.is_empty());
    }

    #[test]
    fn test_having_replaces() {
        let users = table("users");
        let mut q = users.select();
        q.having("COUNT(*) > 1").having("COUNT(*) > 2");
        assert_eq!(q.tree().cores[0].having, Some(Expr::literal("COUNT(*) > 2")));
    }

    #[test]
    fn test_engine_ignores_unknown_key() {
        let users = table("users");
        let mut q = users.select();
        q.engine("mysql").engine("oracle");
        assert_eq!(q.engine_key(), "mysql");
    }

    #[test]
    fn test_to_sql_does_not_mutate_tree() {
        let users = table("users");
        let mut q = users.select();
        q.to_sql().unwrap();
        assert!(q.tree().cores[0].projections.is_empty());

        q.project([users.attr("id")]);
        assert_eq!(q.to_sql().unwrap(), r#"SELECT "users"."id" FROM "users""#);
    }
}
