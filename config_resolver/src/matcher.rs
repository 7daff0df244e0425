//! Decides whether an override rule applies to a membership set.

use std::fmt;

use crate::{Expression, GroupSet, OverrideRule, ResolverError, ResolverResult};

/// Criterion that caused a rule to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchCriterion {
    /// `user-is-in-all-groups` held.
    AllGroups,
    /// `user-is-in-any-group` held.
    AnyGroup,
    /// `user-is-none-of-the-groups` held.
    NoneOfTheGroups,
    /// `custom-expression` evaluated to `true`.
    CustomExpression,
}

impl fmt::Display for MatchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AllGroups => "user-is-in-all-groups",
            Self::AnyGroup => "user-is-in-any-group",
            Self::NoneOfTheGroups => "user-is-none-of-the-groups",
            Self::CustomExpression => "custom-expression",
        })
    }
}

/// Return the first criterion of `rule` satisfied by `groups`.
///
/// Criteria are checked in the order all-groups, any-group, none-of-the-groups,
/// custom expression. A criterion whose list or expression is empty is
/// inactive and never satisfied.
///
/// # Errors
///
/// Returns [`ResolverError::ExpressionSyntax`] or
/// [`ResolverError::ExpressionSemantic`] when the custom expression is reached
/// and fails to parse.
///
/// # Examples
///
/// ```rust
/// use config_resolver::{GroupSet, MatchCriterion, OverrideRule, matching_criterion};
///
/// let rule = OverrideRule {
///     user_is_in_all_groups: vec!["a".into(), "z".into()],
///     user_is_in_any_group: vec!["b".into()],
///     ..OverrideRule::default()
/// };
/// let groups = GroupSet::from_groups(["a", "b"]);
/// assert_eq!(matching_criterion(&rule, &groups)?, Some(MatchCriterion::AnyGroup));
/// # Ok::<_, config_resolver::ResolverError>(())
/// ```
pub fn matching_criterion(
    rule: &OverrideRule,
    groups: &GroupSet,
) -> ResolverResult<Option<MatchCriterion>> {
    if !rule.user_is_in_all_groups.is_empty() && groups.contains_all(&rule.user_is_in_all_groups) {
        return Ok(Some(MatchCriterion::AllGroups));
    }
    if groups.contains_any(&rule.user_is_in_any_group) {
        return Ok(Some(MatchCriterion::AnyGroup));
    }
    if !rule.user_is_none_of_the_groups.is_empty()
        && !groups.contains_any(&rule.user_is_none_of_the_groups)
    {
        return Ok(Some(MatchCriterion::NoneOfTheGroups));
    }
    let Some(text) = rule.active_expression() else {
        return Ok(None);
    };
    let expression =
        Expression::parse(text).map_err(|source| ResolverError::expression(text, source))?;
    Ok(expression
        .evaluate(groups)
        .then_some(MatchCriterion::CustomExpression))
}

/// Returns `true` when any active criterion of `rule` holds for `groups`.
///
/// # Errors
///
/// Propagates expression errors from [`matching_criterion`].
pub fn rule_matches(rule: &OverrideRule, groups: &GroupSet) -> ResolverResult<bool> {
    matching_criterion(rule, groups).map(|criterion| criterion.is_some())
}
