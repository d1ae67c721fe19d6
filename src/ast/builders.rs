//! Fluent predicate and modifier builders.
//!

use crate::ast::{
    AggregateFunc, Attribute, Column, Expr, Literal, NullCheck, Operator, SortOrder,
};

/// Extension trait adding fluent methods to expression-like nodes.
///
/// # Example
/// ```ignore
/// let users = codex::table("users");
/// users.attr("id").eq(1)                      // "users"."id" = 1
/// users.attr("age").gt(18).and(users.attr("active").eq(true))
/// ```
pub trait ExprExt: Sized {
    fn into_expr(self) -> Expr;

    fn eq(self, other: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::Eq, other)
    }

    fn not_eq(self, other: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::NotEq, other)
    }

    fn gt(self, other: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::Gt, other)
    }

    fn gt_eq(self, other: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::GtEq, other)
    }

    fn lt(self, other: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::Lt, other)
    }

    fn lt_eq(self, other: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::LtEq, other)
    }

    fn like(self, pattern: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::Like, pattern)
    }

    fn not_like(self, pattern: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::NotLike, pattern)
    }

    /// `expr IN (a, b, c)`
    fn in_list<I, T>(self, items: I) -> Expr
    where
        I: IntoIterator<Item = T>,
        T: Into<Expr>,
    {
        let list = Expr::List(items.into_iter().map(Into::into).collect());
        Expr::binary(self.into_expr(), Operator::In, list)
    }

    fn not_in_list<I, T>(self, items: I) -> Expr
    where
        I: IntoIterator<Item = T>,
        T: Into<Expr>,
    {
        let list = Expr::List(items.into_iter().map(Into::into).collect());
        Expr::binary(self.into_expr(), Operator::NotIn, list)
    }

    fn is_null(self) -> Expr {
        Expr::NullCheck {
            expr: Box::new(self.into_expr()),
            check: NullCheck::IsNull,
        }
    }

    fn is_not_null(self) -> Expr {
        Expr::NullCheck {
            expr: Box::new(self.into_expr()),
            check: NullCheck::IsNotNull,
        }
    }

    fn and(self, other: impl Into<Expr>) -> Expr {
        Expr::binary(self.into_expr(), Operator::And, other)
    }

    /// OR is always grouped so it binds tighter than a surrounding AND.
    fn or(self, other: impl Into<Expr>) -> Expr {
        Expr::grouping(Expr::binary(self.into_expr(), Operator::Or, other))
    }

    fn not(self) -> Expr {
        Expr::Not(Box::new(self.into_expr()))
    }

    fn asc(self) -> Expr {
        Expr::Ordering {
            expr: Box::new(self.into_expr()),
            order: SortOrder::Asc,
        }
    }

    fn desc(self) -> Expr {
        Expr::Ordering {
            expr: Box::new(self.into_expr()),
            order: SortOrder::Desc,
        }
    }

    /// `expr AS "alias"`
    fn alias(self, alias: &str) -> Expr {
        Expr::Aliased {
            expr: Box::new(self.into_expr()),
            alias: alias.to_string(),
        }
    }

    fn count(self) -> Expr {
        aggregate(AggregateFunc::Count, self.into_expr(), false)
    }

    fn count_distinct(self) -> Expr {
        aggregate(AggregateFunc::Count, self.into_expr(), true)
    }

    fn sum(self) -> Expr {
        aggregate(AggregateFunc::Sum, self.into_expr(), false)
    }

    fn average(self) -> Expr {
        aggregate(AggregateFunc::Avg, self.into_expr(), false)
    }

    fn minimum(self) -> Expr {
        aggregate(AggregateFunc::Min, self.into_expr(), false)
    }

    fn maximum(self) -> Expr {
        aggregate(AggregateFunc::Max, self.into_expr(), false)
    }
}

fn aggregate(func: AggregateFunc, expr: Expr, distinct: bool) -> Expr {
    Expr::Aggregate {
        func,
        expr: Box::new(expr),
        distinct,
    }
}

impl ExprExt for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl ExprExt for Attribute {
    fn into_expr(self) -> Expr {
        Expr::Attribute(self)
    }
}

impl ExprExt for Column {
    fn into_expr(self) -> Expr {
        Expr::Column(self)
    }
}

impl ExprExt for Literal {
    fn into_expr(self) -> Expr {
        Expr::Literal(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Relation, Value};

    fn id() -> Attribute {
        Attribute::new(Expr::Column(Column::new("id")), Relation::new("users"))
    }

    #[test]
    fn test_eq_builds_binary() {
        let e = id().eq(1);
        assert_eq!(
            e,
            Expr::Binary {
                left: Box::new(Expr::Attribute(id())),
                op: Operator::Eq,
                right: Box::new(Expr::Value(Value::Int(1))),
            }
        );
    }

    #[test]
    fn test_or_is_grouped() {
        let e = id().eq(1).or(id().eq(2));
        assert!(matches!(e, Expr::Grouping(_)));
    }

    #[test]
    fn test_in_list_collects() {
        let e = id().in_list([1, 2, 3]);
        match e {
            Expr::Binary { op, right, .. } => {
                assert_eq!(op, Operator::In);
                assert!(matches!(*right, Expr::List(ref items) if items.len() == 3));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
