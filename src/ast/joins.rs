use serde::{Deserialize, Serialize};

use crate::ast::{Expr, JoinKind, Relation};
use crate::table::Accessor;

/// Join predicate wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct On(pub Expr);

/// A join definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    pub relation: Relation,
    /// `None` until [`SelectManager::on`](crate::managers::SelectManager::on) fills it.
    #[serde(default)]
    pub on: Option<On>,
}

impl Join {
    pub fn new(kind: JoinKind, relation: Relation) -> Self {
        Self {
            kind,
            relation,
            on: None,
        }
    }
}

/// The FROM clause of a core: the root relation plus its joins, in call order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinSource {
    pub relation: Relation,
    pub joins: Vec<Join>,
}

impl JoinSource {
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            joins: Vec::new(),
        }
    }
}

/// Anything a join call may be handed.
///
/// Only accessors and relations name a table; other nodes are accepted so the
/// chain keeps compiling and running, but they add no join.
#[derive(Debug, Clone)]
pub enum JoinTarget {
    Accessor(Accessor),
    Relation(Relation),
    Node(Expr),
}

impl JoinTarget {
    pub fn relation(self) -> Option<Relation> {
        match self {
            JoinTarget::Accessor(accessor) => Some(accessor.relation().clone()),
            JoinTarget::Relation(relation) => Some(relation),
            JoinTarget::Node(_) => None,
        }
    }
}

impl From<Accessor> for JoinTarget {
    fn from(a: Accessor) -> Self {
        JoinTarget::Accessor(a)
    }
}

impl From<&Accessor> for JoinTarget {
    fn from(a: &Accessor) -> Self {
        JoinTarget::Accessor(a.clone())
    }
}

impl From<Relation> for JoinTarget {
    fn from(r: Relation) -> Self {
        JoinTarget::Relation(r)
    }
}

impl From<&Relation> for JoinTarget {
    fn from(r: &Relation) -> Self {
        JoinTarget::Relation(r.clone())
    }
}

impl From<Expr> for JoinTarget {
    fn from(e: Expr) -> Self {
        JoinTarget::Node(e)
    }
}
