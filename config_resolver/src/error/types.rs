//! Primary error enum for resolution flows.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::{ConfigFormat, ExpressionError};

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolverError {
    /// A stateful resolve was attempted before any configuration was stored.
    #[error(
        "config to resolve is not set; call `set_config_to_resolve` or use a `*_from` entry point"
    )]
    ConfigNotSet,

    /// The configuration text could not be parsed.
    #[error("failed to parse {format} configuration: {source}")]
    Parse {
        /// Format the text was parsed as.
        format: ConfigFormat,
        /// Underlying error reported by the codec.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The parsed configuration is structurally invalid.
    #[error("invalid config: '{key}' {message}")]
    Validation {
        /// Configuration key that failed validation.
        key: String,
        /// Human-readable explanation of the validation failure.
        message: String,
    },

    /// A custom expression is malformed.
    #[error("custom expression `{expression}` is malformed: {source}")]
    ExpressionSyntax {
        /// Expression text as written in the rule.
        expression: String,
        /// Parser diagnostic.
        #[source]
        source: ExpressionError,
    },

    /// A custom expression uses an unsupported operator or identifier.
    #[error("custom expression `{expression}` is not supported: {source}")]
    ExpressionSemantic {
        /// Expression text as written in the rule.
        expression: String,
        /// Parser diagnostic.
        #[source]
        source: ExpressionError,
    },

    /// The resolved tree could not be rendered or decoded into the target type.
    #[error("failed to serialise resolved config: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Resolver options could not be loaded.
    #[error("failed to load resolver options: {0}")]
    Options(#[from] Box<FigmentError>),
}
