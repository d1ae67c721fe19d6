//! # codex: SQL as a tree
//!
//! codex builds SQL statements as an in-memory tree through a fluent API and
//! renders them with a dialect-aware visitor. It is not an ORM: it stops at
//! the SQL string (the optional [`engine::Session`] can run it).
//!
//! ## Quick Example
//!
//! ```
//! use codex::prelude::*;
//!
//! let users = codex::table("users");
//! let mut query = users.select();
//! query
//!     .project([users.attr("id"), users.attr("email")])
//!     .filter(users.attr("id").eq(1));
//!
//! assert_eq!(
//!     query.to_sql().unwrap(),
//!     r#"SELECT "users"."id", "users"."email" FROM "users" WHERE ("users"."id" = 1)"#
//! );
//! ```
//!
//! ## Engines
//!
//! | Key       | Identifiers | Booleans      | OFFSET without LIMIT |
//! |-----------|-------------|---------------|----------------------|
//! | `to_sql`  | `"x"`       | `TRUE`/`FALSE`| `OFFSET n`           |
//! | `postgres`| `"x"`       | `true`/`false`| `OFFSET n`           |
//! | `sqlite`  | `"x"`       | `1`/`0`       | `LIMIT -1 OFFSET n`  |
//! | `mysql`   | `` `x` ``   | `1`/`0`       | `LIMIT 2^64-1 OFFSET n` |

pub mod ast;
pub mod config;
pub mod engine;
pub mod error;
pub mod managers;
pub mod table;
pub mod transpiler;

pub use table::{table, table_with_registry, Accessor};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::CodexConfig;
    pub use crate::engine::{Record, Session};
    pub use crate::error::*;
    pub use crate::managers::{DeleteManager, InsertManager, SelectManager, UpdateManager};
    pub use crate::table::{table, table_with_registry, Accessor};
    pub use crate::transpiler::{Dialect, ToSql, Visitor, VisitorRegistry};
}
