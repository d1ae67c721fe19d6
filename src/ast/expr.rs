use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ast::{AggregateFunc, NullCheck, Operator, SortOrder, Value};

/// A named table or source in a FROM clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    name: String,
}

impl Relation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A bare column name with no relation scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Raw SQL inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal(pub String);

/// A column (or any node) scoped to a relation.
///
/// Renders as `"relation"."column"`; a star subject renders `"relation".*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub subject: Box<Expr>,
    pub relation: Relation,
}

impl Attribute {
    pub fn new(subject: Expr, relation: Relation) -> Self {
        Self {
            subject: Box::new(subject),
            relation,
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// `*`
    Star,
    Column(Column),
    Attribute(Attribute),
    Literal(Literal),
    Value(Value),
    /// Parenthesized inner expression.
    Grouping(Box<Expr>),
    Binary {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
    NullCheck {
        expr: Box<Expr>,
        check: NullCheck,
    },
    Not(Box<Expr>),
    /// Comma-separated list, rendered inside parentheses (`IN (1, 2)`).
    List(Vec<Expr>),
    Aggregate {
        func: AggregateFunc,
        expr: Box<Expr>,
        distinct: bool,
    },
    Ordering {
        expr: Box<Expr>,
        order: SortOrder,
    },
    Aliased {
        expr: Box<Expr>,
        alias: String,
    },
}

impl Expr {
    pub fn literal(sql: impl Into<String>) -> Self {
        Expr::Literal(Literal(sql.into()))
    }

    pub fn grouping(inner: impl Into<Expr>) -> Self {
        Expr::Grouping(Box::new(inner.into()))
    }

    pub fn binary(left: impl Into<Expr>, op: Operator, right: impl Into<Expr>) -> Self {
        Expr::Binary {
            left: Box::new(left.into()),
            op,
            right: Box::new(right.into()),
        }
    }
}

impl From<Attribute> for Expr {
    fn from(a: Attribute) -> Self {
        Expr::Attribute(a)
    }
}

impl From<Column> for Expr {
    fn from(c: Column) -> Self {
        Expr::Column(c)
    }
}

impl From<Literal> for Expr {
    fn from(l: Literal) -> Self {
        Expr::Literal(l)
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        Expr::Value(v)
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Value(b.into())
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::Value(n.into())
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Value(n.into())
    }
}

impl From<u32> for Expr {
    fn from(n: u32) -> Self {
        Expr::Value(n.into())
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Value(n.into())
    }
}

/// Strings on the value side of a comparison are quoted values, not raw SQL.
impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::Value(s.into())
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::Value(s.into())
    }
}

impl From<NaiveDateTime> for Expr {
    fn from(ts: NaiveDateTime) -> Self {
        Expr::Value(ts.into())
    }
}

/// Input accepted wherever the builder takes "a string or a node".
///
/// A raw string is resolved once, at the call site that receives it: the
/// accessor reads it as a column name, builder clauses read it as literal SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Raw(String),
    Node(Expr),
}

impl Operand {
    /// Resolve as a clause fragment: raw strings become [`Literal`]s.
    pub fn into_literal(self) -> Expr {
        match self {
            Operand::Raw(sql) => Expr::Literal(Literal(sql)),
            Operand::Node(expr) => expr,
        }
    }

    /// Resolve as a column reference: raw strings become [`Column`]s.
    pub fn into_column(self) -> Expr {
        match self {
            Operand::Raw(name) => Expr::Column(Column { name }),
            Operand::Node(expr) => expr,
        }
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Raw(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Raw(s)
    }
}

impl From<Expr> for Operand {
    fn from(e: Expr) -> Self {
        Operand::Node(e)
    }
}

impl From<Attribute> for Operand {
    fn from(a: Attribute) -> Self {
        Operand::Node(Expr::Attribute(a))
    }
}

impl From<Column> for Operand {
    fn from(c: Column) -> Self {
        Operand::Node(Expr::Column(c))
    }
}

impl From<Literal> for Operand {
    fn from(l: Literal) -> Self {
        Operand::Node(Expr::Literal(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_resolution() {
        assert_eq!(
            Operand::from("id").into_column(),
            Expr::Column(Column::new("id"))
        );
        assert_eq!(
            Operand::from("COUNT(*)").into_literal(),
            Expr::literal("COUNT(*)")
        );
        assert_eq!(Operand::from(Expr::Star).into_column(), Expr::Star);
    }

    #[test]
    fn test_str_into_expr_is_value() {
        let e: Expr = "bob".into();
        assert_eq!(e, Expr::Value(Value::String("bob".to_string())));
    }
}
