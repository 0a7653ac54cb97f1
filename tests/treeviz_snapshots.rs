//! Snapshot tests for the tree and source formatters

use rstest::rstest;
use vyxal_front::vyxal::ast::{to_source, to_treeviz_str, to_treeviz_str_with_width};
use vyxal_front::vyxal::parser::parse_source;

fn treeviz(source: &str) -> String {
    to_treeviz_str(&parse_source(source).unwrap())
}

#[test]
fn test_loop_and_conditional() {
    insta::assert_snapshot!(treeviz("(x|v+)[a|b]"), @r"
    ├─ For: var x
    │ └─ MonadicModifier: v
    │   └─ Leaf: +
    └─ If: 2 branch(es)
      ├─ Branch: #0
      │ └─ Leaf: a
      └─ Branch: #1
        └─ Leaf: b
    ");
}

#[test]
fn test_function_with_lambda_body() {
    insta::assert_snapshot!(treeviz("@f:a:*|λ2|+;;°f;"), @r"
    ├─ FunctionDef: f:a:*
    │ └─ Lambda: arity 2
    │   └─ Leaf: +
    └─ FunctionRef: f
    ");
}

#[test]
fn test_map_sugar_with_modifier() {
    insta::assert_snapshot!(treeviz("ƛ₌1 2;"), @r"
    ├─ Lambda: arity 1
    │ └─ DyadicModifier: ₌
    │   ├─ Leaf: 1
    │   └─ Leaf: 2
    └─ Leaf: M
    ");
}

#[test]
fn test_label_truncation() {
    let program = parse_source("`abcdefgh`").unwrap();
    assert_eq!(
        to_treeviz_str_with_width(&program, 4),
        "└─ Leaf: `abc...\n"
    );
}

#[rstest]
#[case("1 2+", "1 2 +")]
#[case("ƛ2*;", "λ1|2 *; M")]
#[case("(i|i,)", "(i|i ,)")]
#[case("[a|b", "[a|b]")]
#[case("@f:x:2|x;@f;", "@f:x:2|x; @f;")]
#[case("⟨1|2⟩", "⟨1|2⟩")]
#[case("v+‡ab", "v + λ1|a b;")]
#[case("λ(a)|+;", "λ()|+;")]
#[case("λ@f;|x;", "λ@;|x;")]
fn test_source_rendering(#[case] source: &str, #[case] expected: &str) {
    let program = parse_source(source).unwrap();
    let rendered = to_source(&program);
    assert_eq!(rendered, expected);
    assert_eq!(parse_source(&rendered).unwrap(), program);
}
