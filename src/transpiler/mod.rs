//! SQL rendering for the statement tree.
//!
//! A [`VisitorRegistry`] maps engine keys to [`Visitor`]s; builders look their
//! engine up at render time.

pub mod dialect;
pub mod sql;
pub mod traits;


pub use dialect::{DEFAULT_ENGINE, Dialect, VisitorRegistry};
pub use traits::Visitor;

use crate::error::CodexResult;

/// Trait for rendering a builder's tree to SQL.
pub trait ToSql {
    /// Render with the builder's selected engine.
    fn to_sql(&self) -> CodexResult<String>;
}
