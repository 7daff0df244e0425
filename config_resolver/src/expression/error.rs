//! Diagnostics raised by the expression lexer and parser.

use thiserror::Error;

/// Broad category of an [`ExpressionError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpressionErrorKind {
    /// The expression is structurally malformed.
    Syntax,
    /// The expression uses an operator or identifier outside the language.
    Semantic,
}

/// Error produced while parsing a membership expression.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message} at offset {position}")]
pub struct ExpressionError {
    kind: ExpressionErrorKind,
    position: usize,
    message: String,
}

impl ExpressionError {
    pub(super) fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ExpressionErrorKind::Syntax,
            position,
            message: message.into(),
        }
    }

    pub(super) fn semantic(position: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ExpressionErrorKind::Semantic,
            position,
            message: message.into(),
        }
    }

    /// Whether the error is structural or semantic.
    #[must_use]
    pub const fn kind(&self) -> ExpressionErrorKind {
        self.kind
    }

    /// Byte offset in the expression text where the problem was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Human-readable description without the offset.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
