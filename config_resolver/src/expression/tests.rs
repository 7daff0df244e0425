//! Unit tests for parsing and evaluating membership expressions.

use rstest::{fixture, rstest};

use super::{Expression, ExpressionErrorKind, evaluate_expression};
use crate::GroupSet;

#[fixture]
fn groups_ab() -> GroupSet {
    GroupSet::from_groups(["a", "b"])
}

fn eval(text: &str, groups: &[&str]) -> bool {
    match evaluate_expression(text, &GroupSet::from_groups(groups)) {
        Ok(value) => value,
        Err(err) => panic!("{text:?} should evaluate: {err}"),
    }
}

#[rstest]
#[case(&["a", "b"], true)]
#[case(&["a"], false)]
#[case(&[], false)]
fn conjunction_requires_both_groups(#[case] groups: &[&str], #[case] expected: bool) {
    assert_eq!(
        eval("#user.contains('a') and #user.contains('b')", groups),
        expected
    );
}

#[rstest]
#[case(&["a"], true)]
#[case(&["b"], true)]
#[case(&["c"], false)]
fn disjunction_requires_either_group(#[case] groups: &[&str], #[case] expected: bool) {
    assert_eq!(
        eval("#user.contains('a') or #user.contains('b')", groups),
        expected
    );
}

#[rstest]
#[case("not #user.contains('a')", &["a"], false)]
#[case("not #user.contains('a')", &["b"], true)]
#[case("not(#user.contains('a'))", &["b"], true)]
#[case("not not #user.contains('a')", &["a"], true)]
#[case("not (#user.contains('a') or #user.contains('b'))", &["c"], true)]
fn negation(#[case] text: &str, #[case] groups: &[&str], #[case] expected: bool) {
    assert_eq!(eval(text, groups), expected);
}

#[rstest]
#[case("#user.contains('a') or #user.contains('b') and #user.contains('c')", &["a"], true)]
#[case("(#user.contains('a') or #user.contains('b')) and #user.contains('c')", &["a"], false)]
#[case("not #user.contains('a') and #user.contains('b')", &["b"], true)]
#[case("not #user.contains('a') and #user.contains('b')", &["a", "b"], false)]
fn and_binds_tighter_than_or(#[case] text: &str, #[case] groups: &[&str], #[case] expected: bool) {
    assert_eq!(eval(text, groups), expected);
}

#[rstest]
fn whitespace_is_flexible(groups_ab: GroupSet) {
    let text = "\t( #user.contains( 'a' )and#user.contains('b') )\n";
    assert_eq!(evaluate_expression(text, &groups_ab), Ok(true));
}

#[rstest]
fn display_renders_canonical_form() -> Result<(), super::ExpressionError> {
    let expr = Expression::parse(
        "not #user.contains('a') or #user.contains('b') and #user.contains('c')",
    )?;
    let rendered = expr.to_string();
    assert_eq!(
        rendered,
        "(not #user.contains('a') or (#user.contains('b') and #user.contains('c')))"
    );
    assert_eq!(Expression::parse(&rendered)?, expr);
    Ok(())
}

#[rstest]
fn parses_through_from_str(groups_ab: GroupSet) -> Result<(), super::ExpressionError> {
    let expr: Expression = "#user.contains('b')".parse()?;
    assert!(expr.evaluate(&groups_ab));
    Ok(())
}

#[rstest]
#[case("", ExpressionErrorKind::Syntax, 0)]
#[case("   ", ExpressionErrorKind::Syntax, 0)]
#[case("#user.contains('a') and", ExpressionErrorKind::Syntax, 23)]
#[case("and #user.contains('a')", ExpressionErrorKind::Syntax, 0)]
#[case("(#user.contains('a')", ExpressionErrorKind::Syntax, 20)]
#[case("#user.contains('a'))", ExpressionErrorKind::Syntax, 19)]
#[case("#user.contains('a') #user.contains('b')", ExpressionErrorKind::Syntax, 20)]
#[case("()", ExpressionErrorKind::Syntax, 1)]
#[case("not", ExpressionErrorKind::Syntax, 3)]
#[case("#user.contains('a') and true", ExpressionErrorKind::Semantic, 24)]
#[case("#user.contains('a') == #user.contains('b')", ExpressionErrorKind::Semantic, 20)]
#[case("#user.contains('a') xor #user.contains('b')", ExpressionErrorKind::Semantic, 20)]
fn malformed_expressions_are_rejected(
    #[case] text: &str,
    #[case] kind: ExpressionErrorKind,
    #[case] position: usize,
) {
    let err = Expression::parse(text).expect_err("expression should be rejected");
    assert_eq!(err.kind(), kind, "unexpected kind for {text:?}: {err}");
    assert_eq!(err.position(), position, "unexpected offset for {text:?}: {err}");
}

#[rstest]
fn malformed_tail_is_reported_even_when_head_decides(groups_ab: GroupSet) {
    let result = evaluate_expression("#user.contains('a') or (#user.contains('b'", &groups_ab);
    assert!(result.is_err());
}

#[rstest]
fn deep_nesting_is_bounded() {
    let text = format!("{}#user.contains('a'){}", "(".repeat(200), ")".repeat(200));
    let err = Expression::parse(&text).expect_err("nesting should be bounded");
    assert_eq!(err.kind(), ExpressionErrorKind::Syntax);
}

#[rstest]
fn moderate_nesting_is_accepted(groups_ab: GroupSet) {
    let text = format!("{}#user.contains('a'){}", "(".repeat(32), ")".repeat(32));
    assert_eq!(evaluate_expression(&text, &groups_ab), Ok(true));
}
