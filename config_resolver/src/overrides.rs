//! Dot-path overrides applied onto the working tree.
//!
//! Overrides are addressed by `.`-separated paths. Intermediate segments are
//! created as empty objects when absent and replace any non-object value that
//! stands in the way; the final segment is always overwritten. Applying
//! overrides one after another means a later write wins wherever paths
//! overlap.

use serde_json::{Map, Value};

use crate::{ResolverError, ResolverResult};

/// Maximum number of `.`-separated segments in an override path.
pub const MAX_PATH_SEGMENTS: usize = 64;

/// Write `value` at the dot path `path` inside `tree`.
///
/// Behaviour:
/// - Missing intermediate keys are created as empty objects.
/// - Intermediate values that are not objects are replaced by empty objects,
///   discarding what was there.
/// - The final segment is set unconditionally, whatever it held before.
/// - Segments are split on every `.`, so `"a..b"` addresses the empty key
///   between the dots.
///
/// # Errors
///
/// Returns [`ResolverError::Validation`] naming `path` when it has more than
/// [`MAX_PATH_SEGMENTS`] segments. `tree` is left untouched in that case.
///
/// # Examples
///
/// ```rust
/// use config_resolver::override_property;
/// use serde_json::{Map, Value, json};
///
/// let mut tree = Map::new();
/// override_property(&mut tree, "a.b.c", json!(1))?;
/// assert_eq!(Value::Object(tree.clone()), json!({"a": {"b": {"c": 1}}}));
///
/// // Scalars in the way are replaced by objects.
/// override_property(&mut tree, "a.b.c.d", json!(true))?;
/// assert_eq!(Value::Object(tree), json!({"a": {"b": {"c": {"d": true}}}}));
/// # Ok::<_, config_resolver::ResolverError>(())
/// ```
pub fn override_property(
    tree: &mut Map<String, Value>,
    path: &str,
    value: Value,
) -> ResolverResult<()> {
    let segments = path.split('.').count();
    if segments > MAX_PATH_SEGMENTS {
        return Err(ResolverError::validation(
            path,
            format!("has {segments} path segments; at most {MAX_PATH_SEGMENTS} are allowed"),
        ));
    }
    write_path(tree, path, value);
    Ok(())
}

fn write_path(tree: &mut Map<String, Value>, path: &str, value: Value) {
    let Some((head, rest)) = path.split_once('.') else {
        tree.insert(path.to_owned(), value);
        return;
    };

    let child = tree
        .entry(head)
        .or_insert_with(|| Value::Object(Map::new()));
    if !child.is_object() {
        *child = Value::Object(Map::new());
    }

    if let Value::Object(map) = child {
        write_path(map, rest, value);
    }
}

/// Apply every `(path, value)` pair of `overrides` to `tree` in turn.
///
/// The iteration order of `overrides` is unspecified, so overlapping paths
/// within a single map (for example `a.b` and `a.b.c`) have no defined
/// outcome. Disjoint paths commute.
///
/// # Errors
///
/// Stops at the first path rejected by [`override_property`]; overrides
/// applied before it remain in `tree`.
///
/// # Examples
///
/// ```rust
/// use config_resolver::apply_overrides;
/// use serde_json::{Map, Value, json};
///
/// let Value::Object(mut tree) = json!({"x": 5, "keep": [1, 2]}) else { unreachable!() };
/// let Value::Object(overrides) = json!({"x.y": 7, "z": null}) else { unreachable!() };
/// apply_overrides(&mut tree, overrides)?;
/// assert_eq!(Value::Object(tree), json!({"x": {"y": 7}, "keep": [1, 2], "z": null}));
/// # Ok::<_, config_resolver::ResolverError>(())
/// ```
pub fn apply_overrides(
    tree: &mut Map<String, Value>,
    overrides: Map<String, Value>,
) -> ResolverResult<()> {
    for (path, value) in overrides {
        tracing::trace!(%path, "applying override");
        override_property(tree, &path, value)?;
    }
    Ok(())
}
