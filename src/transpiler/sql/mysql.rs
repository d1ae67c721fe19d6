use crate::ast::SetOp;
use crate::transpiler::traits::Visitor;

/// MySQL Visitor.
pub struct MysqlVisitor;

impl MysqlVisitor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MysqlVisitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest row count MySQL accepts, used when only OFFSET is given.
const MYSQL_MAX_ROWS: u64 = 18446744073709551615;

impl Visitor for MysqlVisitor {
    fn name(&self) -> &str {
        "mysql"
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("`{}`", name.replace('`', "``"))
    }

    fn bool_literal(&self, val: bool) -> String {
        if val { "1".to_string() } else { "0".to_string() }
    }

    fn limit_offset(&self, limit: Option<usize>, offset: Option<usize>) -> String {
        match (limit, offset) {
            (Some(l), Some(o)) => format!(" LIMIT {} OFFSET {}", l, o),
            (Some(l), None) => format!(" LIMIT {}", l),
            (None, Some(o)) => format!(" LIMIT {} OFFSET {}", MYSQL_MAX_ROWS, o),
            (None, None) => String::new(),
        }
    }

    fn supports_set_op(&self, op: SetOp) -> bool {
        matches!(op, SetOp::Union)
    }
}
