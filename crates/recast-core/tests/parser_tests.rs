//! Contract tests for the hand-rolled JSON parser.

use recast_core::{parse, parse_document, parse_with, ParserOptions, RecastError, Value};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    Value::Object(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

// ============================================================================
// Scalars (permissive entry point)
// ============================================================================

#[test]
fn parse_null() {
    assert_eq!(parse("null").unwrap(), Value::Null);
}

#[test]
fn parse_bools() {
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
}

#[test]
fn parse_integer() {
    assert_eq!(parse("42").unwrap(), Value::Int(42));
    assert_eq!(parse("-7").unwrap(), Value::Int(-7));
    assert_eq!(parse("0").unwrap(), Value::Int(0));
}

#[test]
fn parse_float() {
    assert_eq!(parse("3.14").unwrap(), Value::Float(3.14));
    assert_eq!(parse("-0.5").unwrap(), Value::Float(-0.5));
}

#[test]
fn int_float_distinction_is_lexical() {
    // Same numeric value, different literals, different variants.
    assert_eq!(parse("5").unwrap(), Value::Int(5));
    assert_eq!(parse("5.0").unwrap(), Value::Float(5.0));
    assert_ne!(parse("5").unwrap(), parse("5.0").unwrap());
}

#[test]
fn exponent_marker_classifies_as_float() {
    assert_eq!(parse("5e2").unwrap(), Value::Float(500.0));
    assert_eq!(parse("1E3").unwrap(), Value::Float(1000.0));
    assert_eq!(parse("2.5e-1").unwrap(), Value::Float(0.25));
}

#[test]
fn parse_string() {
    assert_eq!(parse(r#""hello""#).unwrap(), Value::Str("hello".into()));
    assert_eq!(parse(r#""""#).unwrap(), Value::Str(String::new()));
}

#[test]
fn parse_string_decodes_escaped_quotes_only() {
    assert_eq!(
        parse(r#""say \"hi\"""#).unwrap(),
        Value::Str(r#"say "hi""#.into())
    );
    // Other escape pairs are preserved verbatim, not decoded.
    assert_eq!(parse(r#""a\nb""#).unwrap(), Value::Str(r"a\nb".into()));
    assert_eq!(parse(r#""a\tb""#).unwrap(), Value::Str(r"a\tb".into()));
}

#[test]
fn parse_string_keeps_inner_whitespace_verbatim() {
    assert_eq!(
        parse("\"  spaced\tout  \"").unwrap(),
        Value::Str("  spaced\tout  ".into())
    );
    // A raw newline inside a string literal is kept as-is.
    assert_eq!(parse("\"two\nlines\"").unwrap(), Value::Str("two\nlines".into()));
}

// ============================================================================
// Containers and ordering
// ============================================================================

#[test]
fn parse_flat_object() {
    let value = parse(r#"{"name": "Alice", "age": 30}"#).unwrap();
    assert_eq!(
        value,
        obj(vec![
            ("name", Value::Str("Alice".into())),
            ("age", Value::Int(30)),
        ])
    );
}

#[test]
fn parse_empty_containers() {
    assert_eq!(parse("{}").unwrap(), Value::Object(vec![]));
    assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(parse("[{}, []]").unwrap(), Value::Array(vec![
        Value::Object(vec![]),
        Value::Array(vec![]),
    ]));
}

#[test]
fn object_key_order_is_preserved() {
    let value = parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn array_element_order_is_preserved() {
    let value = parse(r#"[3, 1, 2]"#).unwrap();
    assert_eq!(
        value,
        Value::Array(vec![Value::Int(3), Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn parse_nested_structures() {
    let text = r#"
        {
            "server": {"host": "localhost", "ports": [8080, 8081]},
            "debug": false,
            "tags": ["a", {"deep": [true, null]}]
        }
    "#;
    let value = parse(text).unwrap();
    assert_eq!(
        value.get("server").unwrap().get("host").unwrap(),
        &Value::Str("localhost".into())
    );
    assert_eq!(
        value.get("server").unwrap().get("ports").unwrap(),
        &Value::Array(vec![Value::Int(8080), Value::Int(8081)])
    );
    assert_eq!(
        value.get("tags").unwrap().as_array().unwrap()[1].get("deep"),
        Some(&Value::Array(vec![Value::Bool(true), Value::Null]))
    );
}

#[test]
fn duplicate_keys_last_write_wins_in_place() {
    let value = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    // The duplicate overwrites the value but keeps the first-seen position.
    assert_eq!(value, obj(vec![("a", Value::Int(3)), ("b", Value::Int(2))]));
}

#[test]
fn whitespace_between_tokens_is_insignificant() {
    let dense = r#"{"a":[1,2],"b":{"c":"d e"}}"#;
    let airy = "  {\r\n\t\"a\" : [ 1 ,\n 2 ] , \"b\" : { \"c\" : \"d e\" }\n}  ";
    assert_eq!(parse(dense).unwrap(), parse(airy).unwrap());
}

// ============================================================================
// Strict document root
// ============================================================================

#[test]
fn parse_document_accepts_object_and_array_roots() {
    assert!(parse_document(r#"{"a": 1}"#).is_ok());
    assert!(parse_document("[1, 2]").is_ok());
    assert!(parse_document("  \n[1]").is_ok());
}

#[test]
fn parse_document_rejects_bare_scalars() {
    for text in ["5", "\"hi\"", "true", "null"] {
        let err = parse_document(text).unwrap_err();
        assert!(matches!(err, RecastError::Parse { .. }), "{text}: {err}");
    }
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn empty_input_fails() {
    assert!(matches!(parse("").unwrap_err(), RecastError::Parse { .. }));
    assert!(matches!(parse("   \n").unwrap_err(), RecastError::Parse { .. }));
}

#[test]
fn unterminated_object_fails() {
    let err = parse(r#"{"a": 1"#).unwrap_err();
    assert!(matches!(err, RecastError::Parse { .. }));
}

#[test]
fn unterminated_array_fails() {
    assert!(parse("[1, 2").is_err());
}

#[test]
fn unterminated_string_fails() {
    assert!(parse(r#""never ends"#).is_err());
    assert!(parse(r#"{"key: 1}"#).is_err());
}

#[test]
fn missing_colon_fails() {
    let err = parse(r#"{"a" 1}"#).unwrap_err();
    match err {
        RecastError::Parse { message, .. } => {
            assert!(message.contains("':'"), "unexpected message: {message}")
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn invalid_object_key_fails() {
    assert!(parse("{1: 2}").is_err());
    assert!(parse("{a: 2}").is_err());
}

#[test]
fn malformed_literals_fail() {
    assert!(parse("tru").is_err());
    assert!(parse("True").is_err());
    assert!(parse("NULL").is_err());
}

#[test]
fn malformed_numbers_fail_at_parse_time() {
    // The greedy scan accepts these spans, strict conversion rejects them.
    assert!(parse("1.2.3").is_err());
    assert!(parse("--5").is_err());
    assert!(parse("+").is_err());
    assert!(parse("[1, 5..0]").is_err());
}

#[test]
fn trailing_garbage_fails() {
    assert!(parse("{} x").is_err());
    assert!(parse("1 2").is_err());
    assert!(parse(r#"{"a": 1}{"b": 2}"#).is_err());
}

#[test]
fn parse_errors_carry_position_and_short_snippet() {
    let text = r#"{"a": @bcdefghijklmnopqrstuvwxyz}"#;
    match parse(text).unwrap_err() {
        RecastError::Parse {
            position, snippet, ..
        } => {
            assert_eq!(position, 6);
            assert!(snippet.chars().count() <= 20);
            assert!(snippet.starts_with('@'));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

// ============================================================================
// Depth guard
// ============================================================================

#[test]
fn depth_limit_is_enforced() {
    let options = ParserOptions { max_depth: 3 };
    assert!(parse_with("[[[1]]]", &options).is_ok());
    let err = parse_with("[[[[1]]]]", &options).unwrap_err();
    assert!(matches!(err, RecastError::DepthExceeded { limit: 3, .. }));
}

#[test]
fn default_depth_limit_rejects_adversarial_nesting() {
    let deep = "[".repeat(100_000);
    assert!(matches!(
        parse(&deep).unwrap_err(),
        RecastError::DepthExceeded { .. }
    ));
}

#[test]
fn mixed_nesting_counts_both_container_kinds() {
    let options = ParserOptions { max_depth: 2 };
    assert!(parse_with(r#"{"a": [1]}"#, &options).is_ok());
    assert!(parse_with(r#"{"a": [{}]}"#, &options).is_err());
}

// ============================================================================
// Cross-check against serde_json on escape-free documents
// ============================================================================

/// Convert a parsed tree into `serde_json::Value` for oracle comparison.
fn to_serde(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Value::from(*f),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_serde).collect()),
        Value::Object(pairs) => serde_json::Value::Object(
            pairs
                .iter()
                .map(|(k, v)| (k.clone(), to_serde(v)))
                .collect(),
        ),
    }
}

#[test]
fn agrees_with_serde_json_on_escape_free_input() {
    let text = r#"
        {
            "id": 17,
            "ratio": 0.25,
            "name": "deimos",
            "ok": true,
            "missing": null,
            "tags": ["a", "b c", 3],
            "nested": {"empty": {}, "list": []}
        }
    "#;
    let ours = to_serde(&parse(text).unwrap());
    let theirs: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(ours, theirs);
}
