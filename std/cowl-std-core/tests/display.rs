///
/// # Display Formatting Tests
///
/// Snapshots of how numbers and other values render as display strings.
///

use cowl_std_core::{Any, concat, double_to_display};

fn render(cases: &[(&str, f64)]) -> String {
    cases
        .iter()
        .map(|(label, x)| format!("{label} => {}", double_to_display(*x)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_number_display_table() {
    let table = render(&[
        ("zero", 0.0),
        ("negative zero", -0.0),
        ("nan", f64::NAN),
        ("infinity", f64::INFINITY),
        ("negative infinity", f64::NEG_INFINITY),
        ("one and a half", 1.5),
        ("integer", 42.0),
        ("negative", -7.25),
        ("tenth", 0.1),
        ("sum of tenths", 0.1 + 0.2),
        ("large", 1e21),
        ("just below large", 123456789012345680000.0),
        ("small", 1e-7),
        ("just above small", 0.000001),
    ]);
    insta::assert_snapshot!(table, @r"
    zero => 0
    negative zero => 0
    nan => NaN
    infinity => Infinity
    negative infinity => -Infinity
    one and a half => 1.5
    integer => 42
    negative => -7.25
    tenth => 0.1
    sum of tenths => 0.30000000000000004
    large => 1e+21
    just below large => 123456789012345680000
    small => 1e-7
    just above small => 0.000001
    ");
}

#[test]
fn test_concatenated_display() {
    let text = concat([
        Any::static_str("score: "),
        Any::Num(99.5),
        Any::static_str(" / done: "),
        Any::Bool(false),
    ]);
    insta::assert_snapshot!(text.to_string(), @"score: 99.5 / done: false");
}
