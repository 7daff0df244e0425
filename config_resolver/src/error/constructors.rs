//! Constructors for `ResolverError`.

use crate::{ConfigFormat, ExpressionError, ExpressionErrorKind};

use super::ResolverError;

impl ResolverError {
    /// Construct a parse error for text read as `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_resolver::{ConfigFormat, ResolverError};
    /// let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    /// let e = ResolverError::parse(ConfigFormat::Json, source);
    /// assert!(matches!(e, ResolverError::Parse { format: ConfigFormat::Json, .. }));
    /// ```
    #[must_use]
    pub fn parse(
        format: ConfigFormat,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Parse {
            format,
            source: source.into(),
        }
    }

    /// Construct a validation error for `key`.
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Attach the offending expression text to a parser diagnostic, routing it
    /// to the syntax or semantic variant by its kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_resolver::{Expression, ResolverError};
    /// let source = Expression::parse("#user.contains('a') && #user.contains('b')").unwrap_err();
    /// let e = ResolverError::expression("#user.contains('a') && #user.contains('b')", source);
    /// assert!(matches!(e, ResolverError::ExpressionSemantic { .. }));
    /// ```
    #[must_use]
    pub fn expression(expression: impl Into<String>, source: ExpressionError) -> Self {
        let text = expression.into();
        match source.kind() {
            ExpressionErrorKind::Syntax => Self::ExpressionSyntax {
                expression: text,
                source,
            },
            ExpressionErrorKind::Semantic => Self::ExpressionSemantic {
                expression: text,
                source,
            },
        }
    }

    /// Returns `true` when the error originates from a custom expression.
    #[must_use]
    pub const fn is_expression_error(&self) -> bool {
        matches!(
            self,
            Self::ExpressionSyntax { .. } | Self::ExpressionSemantic { .. }
        )
    }
}

impl From<figment::Error> for ResolverError {
    fn from(e: figment::Error) -> Self {
        Self::Options(Box::new(e))
    }
}
