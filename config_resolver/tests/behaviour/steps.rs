//! Step definitions for the override-rule scenarios.

use anyhow::{Context, Result, anyhow, ensure};
use config_resolver::{ConfigResolver, JsonConfigResolver, ResolverError};
use rstest_bdd_macros::{given, then, when};
use serde_json::{Map, Value, json};
use test_helpers::text::{split_list, unquote};

use crate::fixtures::ResolveContext;

fn parse_value(raw: &str) -> Result<Value> {
    let text = unquote(raw);
    serde_json::from_str(text).with_context(|| format!("parse step value {text}"))
}

fn push_rule(
    resolve_context: &ResolveContext,
    criterion: &str,
    criterion_value: Value,
    path: &str,
    value: &str,
) -> Result<()> {
    let mut overrides = Map::new();
    overrides.insert(unquote(path).to_owned(), parse_value(value)?);
    let mut rule = Map::new();
    rule.insert(criterion.to_owned(), criterion_value);
    rule.insert("override".to_owned(), Value::Object(overrides));

    let mut rules = resolve_context.rules.take().unwrap_or_default();
    rules.push(Value::Object(rule));
    resolve_context.rules.set(rules);
    Ok(())
}

fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(tree, |node, segment| node.get(segment))
}

#[given("default properties {defaults}")]
fn default_properties(resolve_context: &ResolveContext, defaults: String) -> Result<()> {
    let value = parse_value(&defaults)?;
    ensure!(value.is_object(), "default properties must be an object");
    resolve_context.defaults.set(value);
    Ok(())
}

#[given("the default properties are removed")]
fn remove_defaults(resolve_context: &ResolveContext) {
    drop(resolve_context.defaults.take());
}

#[given("a rule requiring all of {groups} that sets {path} to {value}")]
fn all_groups_rule(
    resolve_context: &ResolveContext,
    groups: String,
    path: String,
    value: String,
) -> Result<()> {
    push_rule(
        resolve_context,
        "user-is-in-all-groups",
        json!(split_list(&groups)),
        &path,
        &value,
    )
}

#[given("a rule requiring any of {groups} that sets {path} to {value}")]
fn any_group_rule(
    resolve_context: &ResolveContext,
    groups: String,
    path: String,
    value: String,
) -> Result<()> {
    push_rule(
        resolve_context,
        "user-is-in-any-group",
        json!(split_list(&groups)),
        &path,
        &value,
    )
}

#[given("a rule requiring none of {groups} that sets {path} to {value}")]
fn none_of_the_groups_rule(
    resolve_context: &ResolveContext,
    groups: String,
    path: String,
    value: String,
) -> Result<()> {
    push_rule(
        resolve_context,
        "user-is-none-of-the-groups",
        json!(split_list(&groups)),
        &path,
        &value,
    )
}

#[given("a rule with expression {expression} that sets {path} to {value}")]
fn expression_rule(
    resolve_context: &ResolveContext,
    expression: String,
    path: String,
    value: String,
) -> Result<()> {
    push_rule(
        resolve_context,
        "custom-expression",
        json!(unquote(&expression)),
        &path,
        &value,
    )
}

#[given("the user belongs to {groups}")]
fn user_groups(resolve_context: &ResolveContext, groups: String) {
    resolve_context.groups.set(split_list(&groups));
}

#[given("the user has no groups")]
fn no_groups(resolve_context: &ResolveContext) {
    resolve_context.groups.set(Vec::new());
}

#[when("the config is resolved")]
fn resolve(resolve_context: &ResolveContext) -> Result<()> {
    let mut document = Map::new();
    document.insert(
        "override-rules".to_owned(),
        Value::Array(resolve_context.rules.take().unwrap_or_default()),
    );
    if let Some(defaults) = resolve_context.defaults.take() {
        document.insert("default-properties".to_owned(), defaults);
    }
    let text = serde_json::to_string(&Value::Object(document))?;
    let groups = resolve_context.groups.take().unwrap_or_default();

    let resolver = JsonConfigResolver::new().with_config(text);
    resolve_context
        .outcome
        .set(resolver.resolve_config_as::<Value, _, _>(&groups));
    Ok(())
}

#[then("property {path} is {value}")]
fn property_is(resolve_context: &ResolveContext, path: String, value: String) -> Result<()> {
    let tree = resolve_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("config was not resolved"))?
        .map_err(|err| anyhow!("resolution failed: {err}"))?;
    let expected = parse_value(&value)?;
    let key = unquote(&path);
    let actual =
        lookup(&tree, key).ok_or_else(|| anyhow!("property {key} missing from {tree}"))?;
    ensure!(
        *actual == expected,
        "property {key}: expected {expected}, got {actual}"
    );
    resolve_context.outcome.set(Ok(tree));
    Ok(())
}

#[then("resolution fails with a {kind} error")]
fn resolution_fails(resolve_context: &ResolveContext, kind: String) -> Result<()> {
    let outcome = resolve_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("config was not resolved"))?;
    let err = match outcome {
        Ok(tree) => return Err(anyhow!("expected a {kind} error, resolved {tree}")),
        Err(err) => err,
    };
    let matched = match kind.as_str() {
        "syntax" => matches!(err, ResolverError::ExpressionSyntax { .. }),
        "semantic" => matches!(err, ResolverError::ExpressionSemantic { .. }),
        "validation" => matches!(err, ResolverError::Validation { .. }),
        "parse" => matches!(err, ResolverError::Parse { .. }),
        other => return Err(anyhow!("unknown error kind '{other}'")),
    };
    ensure!(matched, "expected a {kind} error, got {err:?}");
    Ok(())
}
