//! Membership expression language used by `custom-expression`.
//!
//! The language is deliberately closed: membership tests combined with
//! `and`, `or`, `not` and parentheses.
//!
//! ```text
//! expr     := or
//! or       := and ("or" and)*
//! and      := unary ("and" unary)*
//! unary    := "not" unary | primary
//! primary  := "(" expr ")" | contains
//! contains := "#user.contains('" group "')"
//! ```
//!
//! `and` binds tighter than `or`, both associate to the left, and keywords
//! are lowercase. Anything outside the grammar is rejected rather than
//! evaluated.
//!
//! # Examples
//!
//! ```rust
//! use config_resolver::{Expression, GroupSet};
//!
//! let expr = Expression::parse("#user.contains('a') and not(#user.contains('b'))")?;
//! assert!(expr.evaluate(&GroupSet::from_groups(["a"])));
//! assert!(!expr.evaluate(&GroupSet::from_groups(["a", "b"])));
//! # Ok::<_, config_resolver::ExpressionError>(())
//! ```

mod ast;
mod error;
mod lexer;
mod parser;

use std::fmt;

use crate::GroupSet;

use ast::Expr;

pub use error::{ExpressionError, ExpressionErrorKind};

/// A parsed membership expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    root: Expr,
}

impl Expression {
    /// Parse `text` into an expression.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] of kind [`ExpressionErrorKind::Syntax`]
    /// for malformed structure and [`ExpressionErrorKind::Semantic`] for
    /// operators or identifiers outside the language.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        parser::parse(text).map(|root| Self { root })
    }

    /// Evaluate the expression against a membership set.
    #[must_use]
    pub fn evaluate(&self, groups: &GroupSet) -> bool {
        self.root.evaluate(groups)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl std::str::FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse and evaluate `text` in one step.
///
/// # Errors
///
/// Propagates any [`ExpressionError`] raised while parsing.
pub fn evaluate_expression(text: &str, groups: &GroupSet) -> Result<bool, ExpressionError> {
    Expression::parse(text).map(|expr| expr.evaluate(groups))
}

#[cfg(test)]
mod tests;
