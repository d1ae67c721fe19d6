use serde::{Deserialize, Serialize};

use crate::ast::{Attribute, Expr, JoinSource, Relation, SetOp};

/// One SELECT clause-set: projections, FROM, WHERE, GROUP BY, HAVING.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectCore {
    pub projections: Vec<Expr>,
    pub source: JoinSource,
    pub wheres: Vec<Expr>,
    pub groups: Vec<Expr>,
    pub having: Option<Expr>,
}

impl SelectCore {
    pub fn new(relation: Relation) -> Self {
        Self {
            projections: Vec::new(),
            source: JoinSource::new(relation),
            wheres: Vec::new(),
            groups: Vec::new(),
            having: None,
        }
    }

    pub fn relation(&self) -> &Relation {
        &self.source.relation
    }
}

/// A set operation whose left operand is the statement that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combinator {
    pub op: SetOp,
    pub right: Box<SelectStatement>,
}

/// Root of a SELECT tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub cores: Vec<SelectCore>,
    pub orders: Vec<Expr>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub combinator: Option<Combinator>,
}

impl SelectStatement {
    /// A statement seeded with a single core over `relation`.
    pub fn new(relation: Relation) -> Self {
        Self {
            cores: vec![SelectCore::new(relation)],
            orders: Vec::new(),
            limit: None,
            offset: None,
            combinator: None,
        }
    }

    /// Whether ORDER BY, LIMIT or OFFSET is set on this statement.
    pub fn has_modifiers(&self) -> bool {
        !self.orders.is_empty() || self.limit.is_some() || self.offset.is_some()
    }

    /// Copy of this tree in which every core without projections selects
    /// `"relation".*`. Combinator operands are filled in too.
    pub fn with_default_projections(&self) -> Self {
        let mut tree = self.clone();
        tree.fill_default_projections();
        tree
    }

    fn fill_default_projections(&mut self) {
        for core in &mut self.cores {
            if core.projections.is_empty() {
                let star = Attribute::new(Expr::Star, core.relation().clone());
                core.projections.push(Expr::Attribute(star));
            }
        }
        if let Some(combinator) = &mut self.combinator {
            combinator.right.fill_default_projections();
        }
    }
}
