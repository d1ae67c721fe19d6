use serde::{Deserialize, Serialize};

use crate::ast::{Column, Expr, Relation, SelectStatement};

/// `INSERT INTO relation (columns) VALUES (...), (...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    pub relation: Relation,
    pub columns: Vec<Column>,
    pub values: Vec<Vec<Expr>>,
}

/// `UPDATE relation SET column = value, ... WHERE ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatement {
    pub relation: Relation,
    pub assignments: Vec<(Column, Expr)>,
    pub wheres: Vec<Expr>,
}

/// `DELETE FROM relation WHERE ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStatement {
    pub relation: Relation,
    pub wheres: Vec<Expr>,
}

/// Any statement a visitor can accept.
#[derive(Debug, Clone, Copy)]
pub enum Statement<'a> {
    Select(&'a SelectStatement),
    Insert(&'a InsertStatement),
    Update(&'a UpdateStatement),
    Delete(&'a DeleteStatement),
}

impl Statement<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
        }
    }
}
