//! Decode-boundary tests: JSON text in, [`Value`] tree out.
//!
//! The parser itself is `serde_json`; what these tests pin down is the
//! conversion contract on our side of the boundary: number classification,
//! insertion-order preservation, and error surfacing.

use jsonrope_core::{decode, Error, Key, Value};

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn decode_null() {
    assert_eq!(decode("null").unwrap(), Value::Null);
}

#[test]
fn decode_bools() {
    assert_eq!(decode("true").unwrap(), Value::Bool(true));
    assert_eq!(decode("false").unwrap(), Value::Bool(false));
}

#[test]
fn decode_integers() {
    assert_eq!(decode("42").unwrap(), Value::Int(42));
    assert_eq!(decode("-7").unwrap(), Value::Int(-7));
    assert_eq!(decode("0").unwrap(), Value::Int(0));
}

#[test]
fn decode_u64_range_integers() {
    assert_eq!(
        decode("18446744073709551615").unwrap(),
        Value::Int(i128::from(u64::MAX))
    );
}

#[test]
fn decode_floats() {
    assert_eq!(decode("3.14").unwrap(), Value::Float(3.14));
    // A decimal point forces the float variant even for whole values.
    assert_eq!(decode("1.0").unwrap(), Value::Float(1.0));
    assert_eq!(decode("1e3").unwrap(), Value::Float(1000.0));
}

#[test]
fn decode_strings() {
    assert_eq!(decode(r#""hello""#).unwrap(), Value::from("hello"));
    assert_eq!(decode(r#""""#).unwrap(), Value::from(""));
}

#[test]
fn decode_string_escapes() {
    assert_eq!(decode("\"a\\nb\"").unwrap(), Value::from("a\nb"));
    assert_eq!(decode("\"\\u00e9\"").unwrap(), Value::from("\u{e9}"));
    assert_eq!(decode("\"\\uD83D\\uDE00\"").unwrap(), Value::from("\u{1f600}"));
}

// ============================================================================
// Compounds
// ============================================================================

#[test]
fn decode_arrays() {
    assert_eq!(decode("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(
        decode("[1,2,3]").unwrap(),
        Value::from(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

#[test]
fn decode_object_preserves_insertion_order() {
    let doc = decode(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    let Value::Object(pairs) = doc else {
        panic!("expected object")
    };
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.text()).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn decode_object_keys_are_strings() {
    let doc = decode(r#"{"k":null}"#).unwrap();
    let Value::Object(pairs) = doc else {
        panic!("expected object")
    };
    assert_eq!(pairs[0].0, Key::Str("k".to_string()));
}

#[test]
fn decode_nested_structure() {
    let doc = decode(r#"{"a":{"b":[{"c":1}]}}"#).unwrap();
    let expected = Value::object([(
        "a",
        Value::object([("b", Value::from(vec![Value::object([("c", Value::Int(1))])]))]),
    )]);
    assert_eq!(doc, expected);
}

#[test]
fn decode_duplicate_keys_last_wins() {
    // serde_json's map semantics: the later pair overwrites. The decoder
    // does not reconstruct duplicates; only the encoder can produce them.
    let doc = decode(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(doc, Value::object([("a", Value::Int(2))]));
}

// ============================================================================
// Input shapes
// ============================================================================

#[test]
fn decode_accepts_byte_slices_and_owned_buffers() {
    let text = r#"{"n":1}"#;
    let expected = Value::object([("n", Value::Int(1))]);
    assert_eq!(decode(text.as_bytes()).unwrap(), expected);
    assert_eq!(decode(text.as_bytes().to_vec()).unwrap(), expected);
}

#[test]
fn decode_tolerates_surrounding_whitespace() {
    assert_eq!(decode("  [1]\n").unwrap(), Value::from(vec![Value::Int(1)]));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn decode_rejects_malformed_input() {
    for bad in ["", "{", "[1,", r#"{"a"}"#, "nul", "'single'"] {
        let err = decode(bad).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "input {bad:?}");
    }
}

#[test]
fn decode_rejects_trailing_garbage() {
    assert!(matches!(decode("1 2").unwrap_err(), Error::Parse(_)));
}

#[test]
fn decode_rejects_invalid_utf8_bytes() {
    assert!(matches!(
        decode(&[0x22, 0xFF, 0x22][..]).unwrap_err(),
        Error::Parse(_)
    ));
}
