//! Visitor trait: the shared tree walk plus dialect hooks.

use crate::ast::*;
use crate::error::{CodexError, CodexResult};

/// Dialect-specific SQL rendering.
///
/// Implementors override the hooks (quoting, booleans, LIMIT/OFFSET, join
/// keywords, set-operation support); the `visit_*` walk is shared.
pub trait Visitor: Send + Sync {
    /// Engine name used in error messages.
    fn name(&self) -> &str;

    /// Quote an identifier (table or column name).
    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// Get the boolean literal (TRUE/FALSE vs 1/0).
    fn bool_literal(&self, val: bool) -> String {
        if val { "TRUE".to_string() } else { "FALSE".to_string() }
    }

    fn limit_offset(&self, limit: Option<usize>, offset: Option<usize>) -> String {
        let mut sql = String::new();
        if let Some(n) = limit {
            sql.push_str(&format!(" LIMIT {}", n));
        }
        if let Some(n) = offset {
            sql.push_str(&format!(" OFFSET {}", n));
        }
        sql
    }

    fn join_keyword(&self, kind: JoinKind) -> CodexResult<&'static str> {
        Ok(match kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Outer => "LEFT OUTER JOIN",
            JoinKind::Cross => "CROSS JOIN",
        })
    }

    fn supports_set_op(&self, _op: SetOp) -> bool {
        true
    }

    /// Wrap a set-operation operand that carries its own ORDER BY, LIMIT or
    /// OFFSET, so those clauses stay bound to the operand.
    fn wrap_set_operand(&self, sql: String) -> CodexResult<String> {
        Ok(format!("({})", sql))
    }

    /// Render a whole statement. Either the full text or an error, never a
    /// partial string.
    fn accept(&self, statement: Statement<'_>) -> CodexResult<String> {
        match statement {
            Statement::Select(stmt) => self.visit_select_statement(stmt),
            Statement::Insert(stmt) => self.visit_insert(stmt),
            Statement::Update(stmt) => self.visit_update(stmt),
            Statement::Delete(stmt) => self.visit_delete(stmt),
        }
    }

    fn visit_select_statement(&self, stmt: &SelectStatement) -> CodexResult<String> {
        if stmt.cores.is_empty() {
            return Err(CodexError::unrenderable("select statement has no cores"));
        }

        let set_op = stmt.combinator.as_ref().map(|c| c.op);
        if let Some(op) = set_op {
            if !self.supports_set_op(op) {
                let construct = match op {
                    SetOp::Union => "UNION",
                    SetOp::Intersect => "INTERSECT",
                    SetOp::Except => "EXCEPT",
                };
                return Err(CodexError::unsupported(self.name(), construct));
            }
        }

        let cores: Vec<String> = stmt
            .cores
            .iter()
            .map(|core| self.visit_core(core))
            .collect::<CodexResult<_>>()?;

        let mut sql = match (cores.len(), set_op) {
            (1, _) => cores.join(""),
            (_, Some(op)) => cores.join(&format!(" {} ", op)),
            (_, None) => {
                return Err(CodexError::unrenderable(
                    "multiple select cores require a combinator",
                ));
            }
        };

        if !stmt.orders.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.visit_list(&stmt.orders)?);
        }

        sql.push_str(&self.limit_offset(stmt.limit, stmt.offset));

        if let Some(combinator) = &stmt.combinator {
            if stmt.has_modifiers() {
                sql = self.wrap_set_operand(sql)?;
            }
            let right = &*combinator.right;
            let mut right_sql = self.visit_select_statement(right)?;
            // A right operand with its own combinator wrapped itself already.
            if right.combinator.is_none() && right.has_modifiers() {
                right_sql = self.wrap_set_operand(right_sql)?;
            }
            sql.push_str(&format!(" {} ", combinator.op));
            sql.push_str(&right_sql);
        }

        Ok(sql)
    }

    fn visit_core(&self, core: &SelectCore) -> CodexResult<String> {
        if core.projections.is_empty() {
            return Err(CodexError::unrenderable("select core has no projections"));
        }

        let mut sql = String::from("SELECT ");
        sql.push_str(&self.visit_list(&core.projections)?);

        // FROM
        sql.push_str(" FROM ");
        sql.push_str(&self.visit_relation(&core.source.relation)?);

        // JOINS
        for join in &core.source.joins {
            sql.push(' ');
            sql.push_str(self.join_keyword(join.kind)?);
            sql.push(' ');
            sql.push_str(&self.visit_relation(&join.relation)?);
            if let Some(On(expr)) = &join.on {
                sql.push_str(" ON ");
                sql.push_str(&self.visit_expr(expr)?);
            }
        }

        if !core.wheres.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.visit_conjunction(&core.wheres)?);
        }

        if !core.groups.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.visit_list(&core.groups)?);
        }

        if let Some(having) = &core.having {
            sql.push_str(" HAVING ");
            sql.push_str(&self.visit_expr(having)?);
        }

        Ok(sql)
    }

    fn visit_insert(&self, stmt: &InsertStatement) -> CodexResult<String> {
        if stmt.values.is_empty() {
            return Err(CodexError::unrenderable("insert has no values"));
        }

        let mut sql = String::from("INSERT INTO ");
        sql.push_str(&self.visit_relation(&stmt.relation)?);

        if !stmt.columns.is_empty() {
            let cols: Vec<String> = stmt
                .columns
                .iter()
                .map(|c| self.quote_identifier(&c.name))
                .collect();
            sql.push_str(" (");
            sql.push_str(&cols.join(", "));
            sql.push(')');
        }

        let rows: Vec<String> = stmt
            .values
            .iter()
            .map(|row| self.visit_list(row).map(|r| format!("({})", r)))
            .collect::<CodexResult<_>>()?;
        sql.push_str(" VALUES ");
        sql.push_str(&rows.join(", "));

        Ok(sql)
    }

    fn visit_update(&self, stmt: &UpdateStatement) -> CodexResult<String> {
        if stmt.assignments.is_empty() {
            return Err(CodexError::unrenderable("update has no assignments"));
        }

        let mut sql = String::from("UPDATE ");
        sql.push_str(&self.visit_relation(&stmt.relation)?);

        let sets: Vec<String> = stmt
            .assignments
            .iter()
            .map(|(col, value)| {
                self.visit_expr(value)
                    .map(|v| format!("{} = {}", self.quote_identifier(&col.name), v))
            })
            .collect::<CodexResult<_>>()?;
        sql.push_str(" SET ");
        sql.push_str(&sets.join(", "));

        if !stmt.wheres.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.visit_conjunction(&stmt.wheres)?);
        }

        Ok(sql)
    }

    fn visit_delete(&self, stmt: &DeleteStatement) -> CodexResult<String> {
        let mut sql = String::from("DELETE FROM ");
        sql.push_str(&self.visit_relation(&stmt.relation)?);

        if !stmt.wheres.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.visit_conjunction(&stmt.wheres)?);
        }

        Ok(sql)
    }

    fn visit_relation(&self, relation: &Relation) -> CodexResult<String> {
        if relation.name().is_empty() {
            return Err(CodexError::unrenderable("relation name is empty"));
        }
        Ok(self.quote_identifier(relation.name()))
    }

    fn visit_expr(&self, expr: &Expr) -> CodexResult<String> {
        Ok(match expr {
            Expr::Star => "*".to_string(),
            Expr::Column(col) => self.quote_identifier(&col.name),
            Expr::Attribute(attr) => {
                let subject = match &*attr.subject {
                    Expr::Star => "*".to_string(),
                    Expr::Column(col) => self.quote_identifier(&col.name),
                    other => self.visit_expr(other)?,
                };
                format!("{}.{}", self.visit_relation(&attr.relation)?, subject)
            }
            Expr::Literal(Literal(sql)) => sql.clone(),
            Expr::Value(value) => self.visit_value(value)?,
            Expr::Grouping(inner) => format!("({})", self.visit_expr(inner)?),
            Expr::Binary { left, op, right } => {
                // `= NULL` never matches; compare with IS [NOT] NULL instead.
                if let (Operator::Eq | Operator::NotEq, Expr::Value(Value::Null)) = (op, &**right) {
                    let suffix = match op {
                        Operator::Eq => "IS NULL",
                        _ => "IS NOT NULL",
                    };
                    return Ok(format!("{} {}", self.visit_expr(left)?, suffix));
                }
                if let (Operator::In | Operator::NotIn, Expr::List(items)) = (op, &**right) {
                    if items.is_empty() {
                        return Err(CodexError::unrenderable("IN list is empty"));
                    }
                }
                format!(
                    "{} {} {}",
                    self.visit_expr(left)?,
                    op.as_sql(),
                    self.visit_expr(right)?
                )
            }
            Expr::NullCheck { expr, check } => {
                let suffix = match check {
                    NullCheck::IsNull => "IS NULL",
                    NullCheck::IsNotNull => "IS NOT NULL",
                };
                format!("{} {}", self.visit_expr(expr)?, suffix)
            }
            Expr::Not(inner) => match &**inner {
                Expr::Grouping(_) => format!("NOT {}", self.visit_expr(inner)?),
                _ => format!("NOT ({})", self.visit_expr(inner)?),
            },
            Expr::List(items) => format!("({})", self.visit_list(items)?),
            Expr::Aggregate {
                func,
                expr,
                distinct,
            } => {
                let inner = self.visit_expr(expr)?;
                if *distinct {
                    format!("{}(DISTINCT {})", func, inner)
                } else {
                    format!("{}({})", func, inner)
                }
            }
            Expr::Ordering { expr, order } => format!("{} {}", self.visit_expr(expr)?, order),
            Expr::Aliased { expr, alias } => format!(
                "{} AS {}",
                self.visit_expr(expr)?,
                self.quote_identifier(alias)
            ),
        })
    }

    fn visit_value(&self, value: &Value) -> CodexResult<String> {
        Ok(match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => self.bool_literal(*b),
            Value::Int(n) => n.to_string(),
            Value::Float(n) if !n.is_finite() => {
                return Err(CodexError::unrenderable("non-finite float"));
            }
            Value::Float(n) => n.to_string(),
            Value::String(s) => Value::quote_str(s),
            Value::Timestamp(ts) => {
                Value::quote_str(&ts.format("%Y-%m-%d %H:%M:%S%.f").to_string())
            }
        })
    }

    /// Comma-separated rendering of a node list.
    fn visit_list(&self, items: &[Expr]) -> CodexResult<String> {
        let parts: Vec<String> = items
            .iter()
            .map(|item| self.visit_expr(item))
            .collect::<CodexResult<_>>()?;
        Ok(parts.join(", "))
    }

    fn visit_conjunction(&self, items: &[Expr]) -> CodexResult<String> {
        let parts: Vec<String> = items
            .iter()
            .map(|item| self.visit_expr(item))
            .collect::<CodexResult<_>>()?;
        Ok(parts.join(" AND "))
    }
}
