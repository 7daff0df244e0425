//! Resolution entry points.
//!
//! [`resolve_value`] is the stateless core: it parses the document, validates
//! the defaults and applies every matching rule in declaration order. The
//! [`ConfigResolver`] trait layers the stored-config convenience API over it.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::format::render_json;
use crate::{
    ConfigFormat, GroupSet, ResolverConfig, ResolverError, ResolverOptions, ResolverResult,
    ResolverResultExt, apply_overrides, matching_criterion,
};

/// Resolve `config` for a user in `groups`, returning the resolved tree.
///
/// The first error aborts the whole resolve; no partial tree is returned.
///
/// # Errors
///
/// - [`ResolverError::Parse`] when `config` is not valid `format` text.
/// - [`ResolverError::Validation`] when `default-properties` is missing or
///   not an object.
/// - [`ResolverError::ExpressionSyntax`] / [`ResolverError::ExpressionSemantic`]
///   when a rule's custom expression is evaluated and rejected.
/// - [`ResolverError::Validation`] when a matching rule's override path has
///   more than [`crate::MAX_PATH_SEGMENTS`] segments.
pub fn resolve_value<G, S>(
    config: &str,
    groups: G,
    format: ConfigFormat,
) -> ResolverResult<Map<String, Value>>
where
    G: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed: ResolverConfig = format.parse(config)?;
    let mut tree = parsed.take_default_properties()?;
    let membership = GroupSet::from_groups(groups);
    debug!(
        rules = parsed.override_rules.len(),
        groups = membership.len(),
        %format,
        "resolving config"
    );

    for (index, rule) in parsed.override_rules.into_iter().enumerate() {
        match matching_criterion(&rule, &membership)? {
            Some(criterion) => {
                debug!(
                    rule = index,
                    %criterion,
                    overrides = rule.overrides.len(),
                    "override rule matched"
                );
                apply_overrides(&mut tree, rule.overrides)?;
            }
            None => trace!(rule = index, "override rule did not match"),
        }
    }
    Ok(tree)
}

/// Resolve JSON `config` for `groups` and render the result as compact JSON.
///
/// # Errors
///
/// As [`resolve_value`], plus [`ResolverError::Serialization`] if rendering
/// fails.
pub fn resolve_config_from<G, S>(config: &str, groups: G) -> ResolverResult<String>
where
    G: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tree = resolve_value(config, groups, ConfigFormat::Json)?;
    render_json(&tree, false)
}

/// Resolve JSON `config` for `groups` and decode the result into `T`.
///
/// Field names follow the same mapping as the input, so `T` typically uses
/// `#[serde(rename = "...")]` or `rename_all = "kebab-case"` for hyphenated
/// keys.
///
/// # Errors
///
/// As [`resolve_value`], plus [`ResolverError::Serialization`] when the tree
/// does not fit `T`.
pub fn resolve_config_from_as<T, G, S>(config: &str, groups: G) -> ResolverResult<T>
where
    T: DeserializeOwned,
    G: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tree = resolve_value(config, groups, ConfigFormat::Json)?;
    serde_json::from_value(Value::Object(tree)).into_resolver()
}

/// Resolves configuration for a set of user groups.
///
/// The stateful methods read the config stored by
/// [`ConfigResolver::set_config_to_resolve`]; the `*_from` methods take the
/// config per call and touch no stored state.
pub trait ConfigResolver {
    /// Store `config` for later stateful resolves. No validation happens here.
    fn set_config_to_resolve(&mut self, config: impl Into<String>);

    /// The stored config text, if any.
    fn config_to_resolve(&self) -> Option<&str>;

    /// Resolve `config` for `groups` and render the result as text.
    ///
    /// # Errors
    ///
    /// Any [`ResolverError`] raised while parsing, matching or rendering.
    fn resolve_config_from<G, S>(&self, config: &str, groups: G) -> ResolverResult<String>
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Resolve `config` for `groups` and decode the result into `T`.
    ///
    /// # Errors
    ///
    /// Any [`ResolverError`] raised while parsing, matching or decoding.
    fn resolve_config_from_as<T, G, S>(&self, config: &str, groups: G) -> ResolverResult<T>
    where
        T: DeserializeOwned,
        G: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Resolve the stored config for `groups` and render the result as text.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::ConfigNotSet`] when no config, or an empty
    /// one, was stored, otherwise as [`ConfigResolver::resolve_config_from`].
    fn resolve_config<G, S>(&self, groups: G) -> ResolverResult<String>
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = stored_config(self)?;
        self.resolve_config_from(config, groups)
    }

    /// Resolve the stored config for `groups` and decode the result into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::ConfigNotSet`] when no config, or an empty
    /// one, was stored, otherwise as [`ConfigResolver::resolve_config_from_as`].
    fn resolve_config_as<T, G, S>(&self, groups: G) -> ResolverResult<T>
    where
        T: DeserializeOwned,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = stored_config(self)?;
        self.resolve_config_from_as(config, groups)
    }
}

/// The stored config, treating empty text as unset.
fn stored_config<R: ConfigResolver + ?Sized>(resolver: &R) -> ResolverResult<&str> {
    resolver
        .config_to_resolve()
        .filter(|config| !config.is_empty())
        .ok_or(ResolverError::ConfigNotSet)
}

/// Resolver producing JSON output from configuration text.
///
/// Storing a config requires `&mut self`; share an instance across threads
/// behind a lock, or fix the config up front with
/// [`JsonConfigResolver::with_config`] and only read afterwards.
///
/// # Examples
///
/// ```rust
/// use config_resolver::{ConfigResolver, JsonConfigResolver, ResolverError};
///
/// let mut resolver = JsonConfigResolver::new();
/// assert!(matches!(resolver.resolve_config(["a"]), Err(ResolverError::ConfigNotSet)));
///
/// resolver.set_config_to_resolve(r#"{"default-properties": {"x": 1}}"#);
/// assert_eq!(resolver.resolve_config(["a"])?, r#"{"x":1}"#);
/// # Ok::<_, ResolverError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonConfigResolver {
    options: ResolverOptions,
    config: Option<String>,
}

impl JsonConfigResolver {
    /// Create a resolver with default options and no stored config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with `options` and no stored config.
    #[must_use]
    pub const fn with_options(options: ResolverOptions) -> Self {
        Self {
            options,
            config: None,
        }
    }

    /// Store `config` at construction time.
    #[must_use]
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Options in effect for this resolver.
    #[must_use]
    pub const fn options(&self) -> &ResolverOptions {
        &self.options
    }
}

impl ConfigResolver for JsonConfigResolver {
    fn set_config_to_resolve(&mut self, config: impl Into<String>) {
        self.config = Some(config.into());
    }

    fn config_to_resolve(&self) -> Option<&str> {
        self.config.as_deref()
    }

    fn resolve_config_from<G, S>(&self, config: &str, groups: G) -> ResolverResult<String>
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tree = resolve_value(config, groups, self.options.format)?;
        render_json(&tree, self.options.pretty)
    }

    fn resolve_config_from_as<T, G, S>(&self, config: &str, groups: G) -> ResolverResult<T>
    where
        T: DeserializeOwned,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tree = resolve_value(config, groups, self.options.format)?;
        serde_json::from_value(Value::Object(tree)).into_resolver()
    }
}
