//! The statement tree.
//!
//! Nodes are plain values owned by their parent slot. Builders in
//! [`crate::managers`] assemble them; visitors in [`crate::transpiler`] render
//! them.

pub mod builders;
pub mod dml;
pub mod expr;
pub mod joins;
pub mod operators;
pub mod select;
pub mod values;

pub use self::builders::ExprExt;
pub use self::dml::{DeleteStatement, InsertStatement, Statement, UpdateStatement};
pub use self::expr::{Attribute, Column, Expr, Literal, Operand, Relation};
pub use self::joins::{Join, JoinSource, JoinTarget, On};
pub use self::operators::{AggregateFunc, JoinKind, NullCheck, Operator, SetOp, SortOrder};
pub use self::select::{Combinator, SelectCore, SelectStatement};
pub use self::values::Value;
