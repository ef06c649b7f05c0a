use toon_codec::{encode, toon, EncodeOptions, Map, Number, Value};

#[test]
fn macro_primitives() {
    assert_eq!(toon!(null), Value::Null);
    assert_eq!(toon!(true), Value::Bool(true));
    assert_eq!(toon!(false), Value::Bool(false));
    assert_eq!(toon!(42), Value::Number(Number::Integer(42)));
    assert_eq!(toon!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(toon!("hello"), Value::String("hello".to_string()));
}

#[test]
fn macro_arrays() {
    assert_eq!(toon!([]), Value::Array(vec![]));

    let arr = toon!([1, "two", null, [true]]);
    match arr {
        Value::Array(items) => {
            assert_eq!(items.len(), 4);
            assert_eq!(items[0], Value::from(1));
            assert_eq!(items[1], Value::from("two"));
            assert_eq!(items[2], Value::Null);
            assert_eq!(items[3], Value::Array(vec![Value::Bool(true)]));
        }
        other => panic!("expected array, got {:?}", other),
    }
}

#[test]
fn macro_objects() {
    assert_eq!(toon!({}), Value::Object(Map::new()));

    let obj = toon!({
        "name": "Ada",
        "age": 36,
        "nested": {"ok": true}
    });
    let map = obj.as_object().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("name"), Some(&Value::from("Ada")));
    assert_eq!(map.get("age"), Some(&Value::from(36)));
    assert!(map.get("nested").unwrap().is_object());
}

#[test]
fn macro_preserves_key_order() {
    let obj = toon!({"z": 1, "a": 2, "m": 3});
    let keys: Vec<_> = obj.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn macro_output_encodes_directly() {
    let value = toon!({"id": 1, "tags": ["a", "b"]});
    assert_eq!(
        encode(&value, &EncodeOptions::default()),
        "id: 1\ntags[2]: a,b"
    );
}

#[test]
fn macro_interpolates_expressions() {
    let name = "Ada".to_string();
    let value = toon!({ "name": (name.clone()), "len": (name.len()) });
    let map = value.as_object().unwrap();
    assert_eq!(map.get("name"), Some(&Value::from("Ada")));
    assert_eq!(map.get("len"), Some(&Value::from(3)));
}
