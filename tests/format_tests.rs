//! Surface-format tests: exact encoded text, decoding of each array
//! shape, quoting boundaries and the strict-mode error catalogue.

use toon_codec::{decode, encode, toon, DecodeOptions, Delimiter, EncodeOptions, Error, Value};

fn enc(value: &Value) -> String {
    encode(value, &EncodeOptions::default())
}

fn dec(input: &str) -> Value {
    decode(input, &DecodeOptions::default()).unwrap()
}

#[test]
fn nested_object_with_inline_array() {
    let value = toon!({"user": {
        "id": 123,
        "name": "Ada",
        "tags": ["reading", "gaming"],
        "active": true,
        "prefs": []
    }});

    let expected = "\
user:
  id: 123
  name: Ada
  tags[2]: reading,gaming
  active: true
  prefs[0]:";
    assert_eq!(enc(&value), expected);
    assert_eq!(dec(expected), value);
}

#[test]
fn tabular_preferred_over_list() {
    let value = toon!({"items": [
        {"sku": "A1", "qty": 2, "price": 9.99},
        {"sku": "B2", "qty": 1, "price": 14.5}
    ]});

    let expected = "items[2]{sku,qty,price}:\n  A1,2,9.99\n  B2,1,14.5";
    assert_eq!(enc(&value), expected);
    assert_eq!(dec(expected), value);
}

#[test]
fn list_fallback_on_heterogeneous_keys() {
    let value = toon!({"items": [
        {"id": 1, "name": "First"},
        {"id": 2, "name": "Second", "extra": true}
    ]});

    let expected = "\
items[2]:
  - id: 1
    name: First
  - id: 2
    name: Second
    extra: true";
    assert_eq!(enc(&value), expected);
    assert_eq!(dec(expected), value);
}

#[test]
fn ambiguous_strings_are_quoted() {
    let value = toon!({"v": "true", "n": "42"});
    assert_eq!(enc(&value), "v: \"true\"\nn: \"42\"");
    assert_eq!(dec("v: \"true\"\nn: \"42\""), value);
}

#[test]
fn custom_delimiter_scopes_quoting() {
    let value = toon!({"items": [{"id": 1, "note": "a,b"}]});
    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);

    let expected = "items[1\t]{id\tnote}:\n  1\ta,b";
    assert_eq!(encode(&value, &options), expected);
    assert_eq!(dec(expected), value);
}

#[test]
fn strict_indent_not_multiple() {
    let err = decode("a:\n   b: 1", &DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::IndentNotMultiple {
            line: 2,
            indent: 3,
            indent_size: 2
        }
    ));

    let lenient = DecodeOptions::new().with_strict(false);
    assert_eq!(
        decode("a:\n   b: 1", &lenient).unwrap(),
        toon!({"a": {"b": 1}})
    );
}

#[test]
fn strict_blank_in_array() {
    let input = "items[3]:\n  - a\n\n  - b\n  - c";
    let err = decode(input, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::BlankInArray { line: 3 }));

    let lenient = DecodeOptions::new().with_strict(false);
    assert_eq!(
        decode(input, &lenient).unwrap(),
        toon!({"items": ["a", "b", "c"]})
    );
}

#[test]
fn empty_array_forms() {
    assert_eq!(enc(&toon!([])), "[0]:");
    assert_eq!(dec("[0]:"), toon!([]));
    assert_eq!(enc(&toon!({"items": []})), "items[0]:");
    assert_eq!(dec("items[0]:"), toon!({"items": []}));
}

#[test]
fn numeric_looking_strings_round_trip_quoted() {
    for s in ["true", "false", "null", "05", "-3.14", "1e-6"] {
        let value = toon!({ "v": (s) });
        let text = enc(&value);
        assert!(text.contains('"'), "{} must be quoted, got {}", s, text);
        assert_eq!(dec(&text), value, "round-trip failed for {}", s);
    }
}

#[test]
fn inactive_delimiters_stay_bare() {
    let value = toon!({"v": ["a|b"]});
    assert_eq!(enc(&value), "v[1]: a|b");

    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(encode(&value, &options), "v[1|]: \"a|b\"");
}

#[test]
fn length_marker_emitted_and_accepted() {
    let value = toon!({"tags": ["a", "b", "c"]});
    let options = EncodeOptions::new().with_length_marker();
    let text = encode(&value, &options);
    assert_eq!(text, "tags[#3]: a,b,c");
    assert_eq!(dec(&text), value);
    assert_eq!(dec("tags[3]: a,b,c"), value);
}

#[test]
fn delimiter_independence_of_semantics() {
    let value = toon!({
        "name": "x,y|z",
        "nums": [1, 2, 3],
        "rows": [{"a": "p|q", "b": "r,s"}, {"a": "t", "b": "u"}]
    });

    let mut decoded = Vec::new();
    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        decoded.push(dec(&encode(&value, &options)));
    }
    assert_eq!(decoded[0], value);
    assert_eq!(decoded[1], value);
    assert_eq!(decoded[2], value);
}

#[test]
fn strict_acceptance_implies_lenient_acceptance() {
    let inputs = [
        "a: 1\nb:\n  c: 2",
        "items[2]{x}:\n  1\n  2",
        "tags[3]: a,b,c",
        "list[2]:\n  - n: 1\n  - n: 2",
    ];
    let lenient = DecodeOptions::new().with_strict(false);
    for input in inputs {
        let strict_value = decode(input, &DecodeOptions::default()).unwrap();
        let lenient_value = decode(input, &lenient).unwrap();
        assert_eq!(strict_value, lenient_value, "diverged on {:?}", input);
    }
}

#[test]
fn root_primitives() {
    assert_eq!(enc(&Value::from(42)), "42");
    assert_eq!(dec("42"), Value::from(42));
    assert_eq!(enc(&Value::from("hi")), "hi");
    assert_eq!(dec("hi"), Value::from("hi"));
    assert_eq!(enc(&Value::Null), "null");
    assert_eq!(dec("null"), Value::Null);
}

#[test]
fn empty_object_encodes_to_empty_string() {
    assert_eq!(enc(&toon!({})), "");
    assert!(matches!(
        decode("", &DecodeOptions::default()),
        Err(Error::EmptyInput)
    ));
}

#[test]
fn escape_alphabet_round_trips() {
    let value = toon!({"text": "line1\nline2\ttab \"quote\" back\\slash\rret"});
    let text = enc(&value);
    assert_eq!(
        text,
        "text: \"line1\\nline2\\ttab \\\"quote\\\" back\\\\slash\\rret\""
    );
    assert_eq!(dec(&text), value);
}

#[test]
fn unicode_passes_through_unescaped() {
    let value = toon!({"msg": "héllo 世界 👋"});
    assert_eq!(enc(&value), "msg: héllo 世界 👋");
    assert_eq!(dec("msg: héllo 世界 👋"), value);
}

#[test]
fn invalid_escape_is_a_decode_error() {
    let err = decode("v: \"a\\qb\"", &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidEscape { line: 1, escape: 'q' }));
}

#[test]
fn unterminated_string_is_a_decode_error() {
    let err = decode("v: \"abc", &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnterminatedString { line: 1 }));
}

#[test]
fn length_mismatches() {
    assert!(matches!(
        decode("tags[2]: a,b,c", &DecodeOptions::default()).unwrap_err(),
        Error::LengthMismatch {
            expected: 2,
            found: 3,
            ..
        }
    ));
    assert!(matches!(
        decode("items[2]:\n  - a", &DecodeOptions::default()).unwrap_err(),
        Error::LengthMismatch {
            expected: 2,
            found: 1,
            ..
        }
    ));
}

#[test]
fn tabular_width_and_delimiter_mismatches() {
    assert!(matches!(
        decode("rows[1]{a,b}:\n  1,2,3", &DecodeOptions::default()).unwrap_err(),
        Error::TabularWidthMismatch {
            line: 2,
            expected: 2,
            found: 3
        }
    ));
    assert!(matches!(
        decode("rows[1]{a,b}:\n  1|2", &DecodeOptions::default()).unwrap_err(),
        Error::DelimiterMismatch {
            line: 2,
            declared: ','
        }
    ));
}

#[test]
fn list_item_with_array_first_field() {
    let value = toon!({"items": [{"tags": [1, 2], "name": "x"}]});
    let text = enc(&value);
    assert_eq!(text, "items[1]:\n  - tags[2]: 1,2\n      name: x");
    assert_eq!(dec(&text), value);
}

#[test]
fn list_item_with_tabular_first_field() {
    let value = toon!({"items": [
        {"rows": [{"x": 1}, {"x": 2}], "name": "y"}
    ]});
    let text = enc(&value);
    assert_eq!(
        text,
        "items[1]:\n  - rows[2]{x}:\n      1\n      2\n      name: y"
    );
    assert_eq!(dec(&text), value);
}

#[test]
fn nested_arrays_as_list_items() {
    let value = toon!({"grid": [[1, 2], ["a", "b"], []]});
    let text = enc(&value);
    assert_eq!(text, "grid[3]:\n  - [2]: 1,2\n  - [2]: a,b\n  - [0]:");
    assert_eq!(dec(&text), value);
}

#[test]
fn deeply_nested_structures_round_trip() {
    let value = toon!({
        "a": {"b": {"c": {"d": [1, {"e": "f"}]}}},
        "list": [
            {"obj": {"x": 1}, "tail": [true, null]},
            "plain"
        ]
    });
    let text = enc(&value);
    assert_eq!(dec(&text), value);
}

#[test]
fn keys_needing_quotes_round_trip() {
    let value = toon!({
        "my key": 1,
        "2nd": "x",
        "a:b": [1, 2],
        "": "empty key"
    });
    let text = enc(&value);
    assert_eq!(dec(&text), value);
}

#[test]
fn custom_indent_width() {
    let value = toon!({"a": {"b": 1}});
    let options = EncodeOptions::new().with_indent(4);
    let text = encode(&value, &options);
    assert_eq!(text, "a:\n    b: 1");

    let decode_options = DecodeOptions::new().with_indent(4);
    assert_eq!(decode(&text, &decode_options).unwrap(), value);
}

#[test]
fn empty_strings_in_arrays() {
    let value = toon!({"v": ["", "a", ""]});
    let text = enc(&value);
    assert_eq!(text, "v[3]: \"\",a,\"\"");
    assert_eq!(dec(&text), value);
}

#[test]
fn carriage_return_survives_as_content() {
    // `\r` is not stripped by the scanner; quoted values keep it exact
    let value = toon!({"v": "a\rb"});
    let text = enc(&value);
    assert_eq!(dec(&text), value);
}
