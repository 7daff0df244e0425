//! Group-aware configuration resolution.
//!
//! A configuration document carries a tree of `default-properties` and an
//! ordered list of `override-rules`. Each rule decides, from the requesting
//! user's group memberships, whether its dot-path overrides are merged into
//! the tree. The resolved tree is returned as JSON text or decoded into a
//! caller-defined type.
//!
//! ```rust
//! use config_resolver::resolve_config_from;
//!
//! let config = r#"{
//!     "override-rules": [
//!         {
//!             "user-is-in-any-group": ["group-d"],
//!             "override": {"property2.property2-1": true}
//!         }
//!     ],
//!     "default-properties": {"property1": 1, "property2": {"property2-1": false}}
//! }"#;
//!
//! let resolved = resolve_config_from(config, ["group-d"])?;
//! assert_eq!(resolved, r#"{"property1":1,"property2":{"property2-1":true}}"#);
//! # Ok::<_, config_resolver::ResolverError>(())
//! ```

mod error;
mod expression;
mod format;
mod groups;
mod matcher;
mod model;
mod options;
mod overrides;
mod resolver;
mod result_ext;

pub use error::ResolverError;
pub use expression::{Expression, ExpressionError, ExpressionErrorKind, evaluate_expression};
pub use format::ConfigFormat;
pub use groups::GroupSet;
pub use matcher::{MatchCriterion, matching_criterion, rule_matches};
pub use model::{OverrideRule, ResolverConfig};
pub use options::{ENV_PREFIX, ResolverOptions};
pub use overrides::{MAX_PATH_SEGMENTS, apply_overrides, override_property};
pub use resolver::{
    ConfigResolver, JsonConfigResolver, resolve_config_from, resolve_config_from_as,
    resolve_value,
};
pub use result_ext::ResolverResultExt;

/// Result alias used throughout the resolver.
pub type ResolverResult<T> = Result<T, ResolverError>;
