use patmatch::{extract, parse, MatchError, Number, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn v(j: serde_json::Value) -> Value {
    serde_json::from_value(j).unwrap()
}

/// Bound values in binding order.
fn bound(pattern: &str, value: serde_json::Value) -> Vec<Value> {
    parse(pattern, &v(value))
        .unwrap()
        .unwrap_or_else(|| panic!("{pattern} did not match"))
        .into_values()
}

#[rstest]
#[case(json!(0), "10")]
#[case(json!(0), "-10")]
#[case(json!(0), "1.0")]
#[case(json!(0.0), "10")]
#[case(json!(5), "1.0")]
#[case(json!(5.3), "-10")]
#[case(json!(true), "false")]
#[case(json!("true"), "true")]
#[case(json!(false), "true")]
#[case(json!("false"), "false")]
#[case(json!("10"), "10")]
#[case(json!(10), "\"10\"")]
#[case(json!("some value"), "\"not a matching pattern\"")]
#[case(json!("not an array"), "[]")]
#[case(json!([1]), "[]")]
#[case(json!([1, 2]), "[1, 2, 3]")]
#[case(json!([1, 2, 3]), "[a, b]")]
#[case(json!([1]), "[[]]")]
#[case(json!([[1]]), "[[a, b]]")]
#[case(json!("not an array"), "(x:xs)")]
#[case(json!([]), "(x:xs)")]
#[case(json!([1]), "([a, b]:xs)")]
#[case(json!([1]), "all@[a, b]")]
#[case(json!([1, 2]), "(x:[])")]
#[case(json!("toto"), "0")]
#[case(json!("toto"), "0.0")]
#[case(json!("toto"), "[a, b, c]")]
#[case(json!("toto"), "all@(x:xs)")]
#[case(json!(null), "[]")]
fn structural_mismatch_is_not_an_error(#[case] value: serde_json::Value, #[case] pattern: &str) {
    assert_eq!(parse(pattern, &v(value)).unwrap(), None);
}

#[rstest]
#[case(json!(0), "0")]
#[case(json!(10), "10")]
#[case(json!(-10), "-10")]
#[case(json!(10), "10.0")]
#[case(json!(10.0), "10")]
#[case(json!(0.0), "0.0")]
#[case(json!(1.42), "1.42")]
#[case(json!(-1.42), "-1.42")]
#[case(json!("test"), "\"test\"")]
#[case(json!("test"), "'test'")]
#[case(json!("test test"), "'test test'")]
#[case(json!(""), "\"\"")]
#[case(json!(true), "true")]
#[case(json!(true), "True")]
#[case(json!(false), "FALSE")]
fn constants_match_with_no_bindings(#[case] value: serde_json::Value, #[case] pattern: &str) {
    let bindings = parse(pattern, &v(value)).unwrap().unwrap();
    assert!(bindings.is_empty());
}

#[rstest]
#[case(json!("test"))]
#[case(json!(10))]
#[case(json!([1, 2, 3, 4]))]
#[case(json!(true))]
#[case(json!(null))]
fn identifier_and_wildcard_take_anything(#[case] value: serde_json::Value) {
    let value = v(value);
    for name in ["a", "longIdentifier"] {
        let bindings = parse(name, &value).unwrap().unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.get(name), Some(&value));
    }
    assert!(parse("_", &value).unwrap().unwrap().is_empty());
}

#[rstest]
#[case(json!([]), "[]", json!([]))]
#[case(json!([1]), "[a]", json!([1]))]
#[case(json!([1, 2, 3, 4]), "[a, b, c, d]", json!([1, 2, 3, 4]))]
#[case(json!([1, 2, 3, 4]), "[a, 2, c, d]", json!([1, 3, 4]))]
#[case(json!([1, 2, 3, 4]), "[a, b, _, d]", json!([1, 2, 4]))]
#[case(json!([[1, 2], [3, 4]]), "[[a, b], [c, d]]", json!([1, 2, 3, 4]))]
#[case(json!([[1, 2], [3, 4]]), "[[_, b], [c, d]]", json!([2, 3, 4]))]
#[case(json!([[1, 2], [3, 4]]), "[[a, b], [c, 4]]", json!([1, 2, 3]))]
#[case(json!([[1, [2, 3], 4]]), "[[a, [b, c], 4]]", json!([1, 2, 3]))]
#[case(json!([[[[[1]]]], 2]), "[[[[[a]]]], b]", json!([1, 2]))]
#[case(json!([[[[[1]], 2]], 3]), "[[[[[1]], a]], b]", json!([2, 3]))]
#[case(json!(["x", true]), "[\"x\", flag]", json!([true]))]
fn arrays_bind_pairwise(
    #[case] value: serde_json::Value,
    #[case] pattern: &str,
    #[case] expected: serde_json::Value,
) {
    assert_eq!(bound(pattern, value), v(expected).as_list().unwrap());
}

#[rstest]
#[case(json!([1]), "(x:xs)", json!([1, []]))]
#[case(json!([1]), "(_:xs)", json!([[]]))]
#[case(json!([1, 2, 3, 4]), "(x:xs)", json!([1, [2, 3, 4]]))]
#[case(json!([1, 2, 3, 4]), "(x:y:xs)", json!([1, 2, [3, 4]]))]
#[case(json!([1, 2, 3, 4]), "(x:y:z:xs)", json!([1, 2, 3, [4]]))]
#[case(json!([1, 2, 3, 4]), "(x:2:z:xs)", json!([1, 3, [4]]))]
#[case(json!([1, 2, 3, 4]), "(x:y:_:xs)", json!([1, 2, [4]]))]
#[case(json!([1, [2, 3, 4]]), "[a, (x:xs)]", json!([1, 2, [3, 4]]))]
#[case(json!([[1, 2, 3], 4]), "((x:xs):ys)", json!([1, [2, 3], [4]]))]
#[case(json!([1]), "(x:[])", json!([1]))]
#[case(json!([1, 2, 3]), "(x:[a, b])", json!([1, 2, 3]))]
#[case(json!([1]), "(x:_)", json!([1]))]
#[case(json!([1, 2, 3]), "(x:(y:ys))", json!([1, 2, [3]]))]
fn cons_splits_heads_from_tail(
    #[case] value: serde_json::Value,
    #[case] pattern: &str,
    #[case] expected: serde_json::Value,
) {
    assert_eq!(bound(pattern, value), v(expected).as_list().unwrap());
}

#[rstest]
#[case(json!([1]), "all@(x:xs)", json!([[1], 1, []]))]
#[case(json!([1, 2, 3]), "all@(x:xs)", json!([[1, 2, 3], 1, [2, 3]]))]
#[case(json!([]), "all@a", json!([[], []]))]
#[case(json!([]), "all@_", json!([[]]))]
#[case(json!([1, 2, 3]), "all@a", json!([[1, 2, 3], [1, 2, 3]]))]
#[case(json!([]), "all@[]", json!([[]]))]
#[case(json!([1, 2, 3]), "all@[a, b, c]", json!([[1, 2, 3], 1, 2, 3]))]
#[case(json!([[1, 2], 3]), "[p@(h:t), n]", json!([[1, 2], 1, [2], 3]))]
fn as_binds_whole_value_first(
    #[case] value: serde_json::Value,
    #[case] pattern: &str,
    #[case] expected: serde_json::Value,
) {
    assert_eq!(bound(pattern, value), v(expected).as_list().unwrap());
}

#[test]
fn bindings_keep_first_appearance_order() {
    let bindings = parse("all@(x:y:xs)", &v(json!([1, 2, 3, 4])))
        .unwrap()
        .unwrap();
    let names: Vec<&str> = bindings.names().collect();
    assert_eq!(names, vec!["all", "x", "y", "xs"]);
    assert_eq!(bindings.get("xs"), Some(&v(json!([3, 4]))));
}

#[rstest]
#[case("(x:x)", json!([1, 2]), "x")]
#[case("(x:y:x)", json!([1, 2, 3, 4]), "x")]
#[case("[a, a]", json!([1, 2]), "a")]
#[case("[a, b, a]", json!([1, 2, 3]), "a")]
#[case("all@(all:xs)", json!([1, 2, 3, 4]), "all")]
#[case("all@(x:all)", json!([1, 2, 3, 4]), "all")]
#[case("all@(all:all)", json!([1, 2, 3, 4]), "all")]
#[case("[x@a, x@b]", json!([1, 2]), "x")]
fn duplicate_names_are_fatal(
    #[case] pattern: &str,
    #[case] value: serde_json::Value,
    #[case] name: &str,
) {
    let err = parse(pattern, &v(value)).unwrap_err();
    assert_eq!(
        err,
        MatchError::DuplicateBinding {
            names: vec![name.to_string()]
        }
    );
}

#[test]
fn duplicate_check_runs_at_merge_time() {
    // The second `a` is never reached once the literal fails.
    assert_eq!(parse("[a, 2, a]", &v(json!([1, 3, 1]))).unwrap(), None);
}

#[test]
fn duplicate_error_message_names_the_identifier() {
    let err = parse("(x:x)", &v(json!([1, 2]))).unwrap_err();
    assert_eq!(err.to_string(), "non unique identifiers: x");
}

#[test]
fn as_law_binds_the_matched_value_itself() {
    let value = v(json!([[1, 2], [3]]));
    let bindings = parse("whole@[inner@(a:b), c]", &value).unwrap().unwrap();
    assert_eq!(bindings.get("whole"), Some(&value));
    assert_eq!(bindings.get("inner"), Some(&v(json!([1, 2]))));
    assert_eq!(bindings.get("b"), Some(&v(json!([2]))));
}

#[test]
fn invalid_sub_pattern_is_fatal_even_on_kind_mismatch() {
    let err = parse("[a, , b]", &v(json!("not a list"))).unwrap_err();
    assert!(matches!(err, MatchError::InvalidPattern { .. }));
}

#[test]
fn extract_returns_name_keyed_bindings() {
    let map = extract("[a, (x:xs)]", &v(json!([1, [2, 3]])))
        .unwrap()
        .unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["a"], Value::from(1));
    assert_eq!(map["xs"], Value::from(vec![3]));

    assert_eq!(extract("[a]", &v(json!([1, 2]))).unwrap(), None);
}

#[test]
fn objects_are_not_values() {
    assert!(serde_json::from_value::<Value>(json!({"a": 1})).is_err());
}

#[test]
fn bindings_iterate_as_pairs() {
    let bindings = parse("[a, b]", &v(json!(["x", 2]))).unwrap().unwrap();
    let borrowed: Vec<(&str, &Value)> = bindings.iter().collect();
    assert_eq!(borrowed, vec![("a", &Value::from("x")), ("b", &Value::from(2))]);

    assert!(bindings.contains("a"));
    assert!(!bindings.contains("c"));

    let owned: Vec<(String, Value)> = bindings.into_iter().collect();
    assert_eq!(owned[1], ("b".to_string(), Value::from(2)));
}

#[test]
fn int_float_equality_is_exact() {
    assert_eq!(Number::Int(10), Number::Float(10.0));
    assert_eq!(Number::Float(10.0), Number::Int(10));
    assert_ne!(Number::Int(10), Number::Float(10.5));

    // 2^53 + 1 rounds to 2^53 as f64, but the two are distinct numbers.
    let big = Number::Int(9_007_199_254_740_993);
    assert_ne!(big, Number::Float(9_007_199_254_740_992.0));
    assert_ne!(Number::Float(9_007_199_254_740_992.0), big);
    assert_ne!(Number::Int(i64::MAX), Number::Float(9_223_372_036_854_775_808.0));

    let pattern = "9007199254740992.0";
    assert_eq!(parse(pattern, &Value::from(9_007_199_254_740_993i64)).unwrap(), None);
    assert!(parse(pattern, &Value::from(9_007_199_254_740_992i64)).unwrap().is_some());
}
