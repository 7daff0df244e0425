//! Expression tree and evaluation.

use std::fmt;

use crate::GroupSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Expr {
    Contains(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub(super) fn evaluate(&self, groups: &GroupSet) -> bool {
        match self {
            Self::Contains(group) => groups.contains(group),
            Self::Not(inner) => !inner.evaluate(groups),
            Self::And(lhs, rhs) => lhs.evaluate(groups) && rhs.evaluate(groups),
            Self::Or(lhs, rhs) => lhs.evaluate(groups) || rhs.evaluate(groups),
        }
    }
}

// Binary nodes are always parenthesised so the rendered text re-parses to
// the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(group) => write!(f, "#user.contains('{group}')"),
            Self::Not(inner) => write!(f, "not {inner}"),
            Self::And(lhs, rhs) => write!(f, "({lhs} and {rhs})"),
            Self::Or(lhs, rhs) => write!(f, "({lhs} or {rhs})"),
        }
    }
}
