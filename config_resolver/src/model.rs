//! Wire schema for resolver input.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{ResolverError, ResolverResult};

/// Key holding the default property tree.
pub(crate) const DEFAULT_PROPERTIES_KEY: &str = "default-properties";

/// Parsed configuration document.
///
/// Both fields use kebab-case keys on the wire: `override-rules` and
/// `default-properties`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolverConfig {
    /// Rules evaluated in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub override_rules: Vec<OverrideRule>,

    /// Default property tree. Required; must be an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_properties: Option<Value>,
}

impl ResolverConfig {
    /// Take the default property tree out of the config so it can serve as
    /// the working tree.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Validation`] when `default-properties` is
    /// missing, `null` or not an object.
    pub fn take_default_properties(&mut self) -> ResolverResult<Map<String, Value>> {
        match self.default_properties.take() {
            Some(Value::Object(map)) => Ok(map),
            None | Some(Value::Null) => Err(ResolverError::validation(
                DEFAULT_PROPERTIES_KEY,
                "is missing",
            )),
            Some(other) => Err(ResolverError::validation(
                DEFAULT_PROPERTIES_KEY,
                format!("must be an object, found {}", value_kind(&other)),
            )),
        }
    }
}

/// A single conditional override.
///
/// The four criteria are independent: the rule applies when any populated
/// criterion holds. Empty criteria never match on their own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OverrideRule {
    /// Groups the user must all belong to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_is_in_all_groups: Vec<String>,

    /// Groups of which the user must belong to at least one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_is_in_any_group: Vec<String>,

    /// Groups the user must belong to none of.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_is_none_of_the_groups: Vec<String>,

    /// Membership expression, for example
    /// `#user.contains('a') and not #user.contains('b')`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_expression: Option<String>,

    /// Values to write into the working tree, keyed by dot path.
    #[serde(default, rename = "override", deserialize_with = "null_as_default")]
    pub overrides: Map<String, Value>,
}

impl OverrideRule {
    /// Returns the custom expression when it is present and non-empty.
    #[must_use]
    pub fn active_expression(&self) -> Option<&str> {
        self.custom_expression
            .as_deref()
            .filter(|expression| !expression.is_empty())
    }

    /// Returns `true` when no criterion is populated, so the rule can never
    /// match.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.user_is_in_all_groups.is_empty()
            && self.user_is_in_any_group.is_empty()
            && self.user_is_none_of_the_groups.is_empty()
            && self.active_expression().is_none()
    }
}

/// Treat an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
