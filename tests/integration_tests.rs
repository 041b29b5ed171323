use pathcrud::{get, get_or, insert, nested, parse, remove, set, validate, Accessor, Error, Value};

// --- validation ------------------------------------------------------------

#[test]
fn test_validate_rejects_empty_path() {
    assert!(matches!(validate(""), Err(Error::InvalidPath { .. })));
}

#[test]
fn test_validate_normalizes_bare_first_part() {
    assert_eq!(validate("foo").unwrap().normalized(), "[\"foo\"]");
    assert_eq!(validate("[\"foo\"]").unwrap().normalized(), "[\"foo\"]");
}

#[test]
fn test_validate_rejects_malformed_paths() {
    assert!(validate("foo[a]").is_err());
    assert!(validate(".foo;").is_err());
    assert!(validate("[abc123]").is_err());
}

#[test]
fn test_validate_rejects_malicious_paths() {
    assert!(validate("[\"foo\"]=2;console.log(\"hi\");a={};a[\"foo\"]").is_err());
    assert!(validate("['foo']=2;console.log('hi');a={};a['foo']").is_err());
}

#[test]
fn test_validate_allows_arbitrary_quoted_keys() {
    for path in ["[\"foo-bar;baz+15\"]", "['foo-bar;baz+15']"] {
        assert_eq!(validate(path).unwrap().normalized(), path);
    }
}

// --- insertion -------------------------------------------------------------

#[test]
fn test_insert_values_of_each_type() {
    let mut object = nested!({});
    insert(&mut object, "s", "bar".into()).unwrap();
    insert(&mut object, "n", 123.into()).unwrap();
    insert(&mut object, "b", false.into()).unwrap();
    insert(&mut object, "a", nested!([1, 2, 3])).unwrap();
    insert(&mut object, "o", nested!({ "works": "yup" })).unwrap();

    assert_eq!(get(&object, "s").unwrap().as_str(), Some("bar"));
    assert_eq!(get(&object, "n").unwrap().as_i64(), Some(123));
    assert_eq!(get(&object, "b").unwrap().as_bool(), Some(false));
    assert_eq!(get(&object, "a").unwrap().as_array().unwrap().len(), 3);
    assert_eq!(get(&object, "o.works").unwrap().as_str(), Some("yup"));
}

#[test]
fn test_insert_refuses_occupied_path() {
    let mut object = nested!({ "foo": "bar" });
    assert_eq!(
        insert(&mut object, "foo", "yolo".into()),
        Err(Error::already_exists("foo"))
    );
    assert_eq!(get(&object, "foo").unwrap().as_str(), Some("bar"));
}

#[test]
fn test_insert_deep_requires_existing_layers() {
    let mut object = nested!({});
    assert!(insert(&mut object, "foo.bar.baz", "yolo".into()).is_err());
    assert_eq!(object, nested!({}));
}

// --- retrieval -------------------------------------------------------------

#[test]
fn test_get_works_with_arrays_and_objects() {
    assert_eq!(get(&nested!([1, 2, 3]), "[1]").unwrap().as_i64(), Some(2));
    assert_eq!(
        get(&nested!({ "a": 1, "b": 2 }), "[\"b\"]").unwrap().as_i64(),
        Some(2)
    );
}

fn complex_object() -> Value {
    nested!({
        "foo": ["bar", "baz"],
        "boozle": { "zoo": [0, [1, { "zak": "zoozle" }], 3, 4] }
    })
}

#[test]
fn test_get_with_mixed_nesting() {
    let data = complex_object();
    assert_eq!(get(&data, "[\"foo\"][1]").unwrap().as_str(), Some("baz"));
    assert_eq!(
        get(&data, "[\"boozle\"][\"zoo\"][0]").unwrap().as_i64(),
        Some(0)
    );
    assert_eq!(
        get(&data, "[\"boozle\"][\"zoo\"][1][1][\"zak\"]")
            .unwrap()
            .as_str(),
        Some("zoozle")
    );
}

#[test]
fn test_get_with_dot_notation() {
    let data = complex_object();
    assert_eq!(get(&data, "foo[1]").unwrap().as_str(), Some("baz"));
    assert_eq!(get(&data, "boozle.zoo[0]").unwrap().as_i64(), Some(0));
    assert_eq!(
        get(&data, "boozle.zoo[1][1].zak").unwrap().as_str(),
        Some("zoozle")
    );
}

#[test]
fn test_get_default_return_value() {
    let empty = nested!({});
    assert_eq!(
        get_or(&empty, "foo", "baz".into()).unwrap().as_str(),
        Some("baz")
    );
    // Deep traversal errors also yield the default.
    assert_eq!(
        get_or(&empty, "foo[1].baz[\"bar\"]", "baz".into())
            .unwrap()
            .as_str(),
        Some("baz")
    );
}

#[test]
fn test_get_without_default_fails() {
    let empty = nested!({});
    assert_eq!(get(&empty, "foo"), Err(Error::not_found("foo")));
    assert_eq!(
        get(&empty, "foo.bar.baz[1]"),
        Err(Error::not_found("foo.bar.baz[1]"))
    );
}

// --- update ----------------------------------------------------------------

#[test]
fn test_set_each_value_type() {
    let mut object = nested!({ "foo": "bar" });

    set(&mut object, "[\"foo\"]", "baz".into()).unwrap();
    assert_eq!(get(&object, "foo").unwrap().as_str(), Some("baz"));

    set(&mut object, "[\"foo\"]", 2.into()).unwrap();
    assert_eq!(get(&object, "foo").unwrap().as_i64(), Some(2));

    set(&mut object, "[\"foo\"]", false.into()).unwrap();
    assert_eq!(get(&object, "foo").unwrap().as_bool(), Some(false));

    set(&mut object, "[\"foo\"]", nested!(["baz"])).unwrap();
    assert_eq!(get(&object, "foo[0]").unwrap().as_str(), Some("baz"));

    set(&mut object, "[\"foo\"]", nested!({ "beep": "boop" })).unwrap();
    assert_eq!(get(&object, "foo.beep").unwrap().as_str(), Some("boop"));
}

#[test]
fn test_set_several_layers_down() {
    let mut object = nested!({
        "foo": { "bar": [1, { "baz": "goodbye" }] },
        "yes": "no"
    });

    set(&mut object, "[\"foo\"][\"bar\"][1][\"baz\"]", "hello".into()).unwrap();
    assert_eq!(get(&object, "foo.bar[1].baz").unwrap().as_str(), Some("hello"));
    assert_eq!(get(&object, "foo.bar[0]").unwrap().as_i64(), Some(1));
    assert_eq!(get(&object, "yes").unwrap().as_str(), Some("no"));

    set(&mut object, "foo.bar[1].baz", "again".into()).unwrap();
    assert_eq!(get(&object, "foo.bar[1].baz").unwrap().as_str(), Some("again"));
}

#[test]
fn test_set_invalid_object_path_combination() {
    let mut object = nested!({});
    assert!(set(&mut object, "fop.bar.baz", "foo".into()).is_err());
    assert_eq!(object, nested!({}));
}

// --- removal ---------------------------------------------------------------

#[test]
fn test_remove_object_entry() {
    let mut object = nested!({ "foo": "bar" });
    remove(&mut object, "[\"foo\"]").unwrap();
    assert!(get(&object, "foo").is_err());
}

#[test]
fn test_remove_with_dot_notation() {
    let mut object = nested!({ "foo": "bar" });
    remove(&mut object, "foo").unwrap();
    assert!(get(&object, "foo").is_err());

    let mut object = nested!({ "foo": "bar" });
    remove(&mut object, ".foo").unwrap();
    assert!(get(&object, "foo").is_err());
}

#[test]
fn test_remove_missing_deep_value_fails() {
    let mut object = nested!({});
    assert!(remove(&mut object, "foo.bar.baz[1]").is_err());
}

#[test]
fn test_remove_is_sparse_not_splice() {
    let mut object = nested!({
        "bar": { "baz": [0, 1, 2, "zoo", { "foo": "foo", "bar": "bar" }] }
    });

    remove(&mut object, ".bar.baz[4][\"bar\"]").unwrap();
    remove(&mut object, ".bar.baz[3]").unwrap();

    for i in 0..3 {
        assert_eq!(
            get(&object, &format!("bar.baz[{}]", i)).unwrap().as_i64(),
            Some(i)
        );
    }
    assert_eq!(
        get(&object, "bar.baz[3]"),
        Err(Error::not_found("bar.baz[3]"))
    );
    assert_eq!(get(&object, "bar.baz[4].foo").unwrap().as_str(), Some("foo"));
    assert!(get(&object, "bar.baz[4].bar").is_err());
}

// --- round trips & interop -------------------------------------------------

#[test]
fn test_set_then_get_returns_set_value() {
    let mut data = nested!({ "a": { "b": [null] } });
    let value = nested!({ "deep": [1, 2] });
    set(&mut data, "a.b[0]", value.clone()).unwrap();
    assert_eq!(get(&data, "a.b[0]").unwrap(), &value);
}

#[test]
fn test_insert_succeeds_exactly_where_get_fails() {
    let mut data = nested!({ "present": 1, "items": [0] });

    for path in ["present", "items[0]"] {
        assert!(get(&data, path).is_ok());
        assert!(matches!(
            insert(&mut data, path, 9.into()),
            Err(Error::AlreadyExists { .. })
        ));
    }
    for path in ["absent", "items[5]"] {
        assert!(get(&data, path).is_err());
        insert(&mut data, path, 9.into()).unwrap();
        assert_eq!(get(&data, path).unwrap().as_i64(), Some(9));
    }
}

#[test]
fn test_quoted_keys_keep_interior_escapes() {
    // Tokenized keys keep their backslashes, so the stored key does too.
    let mut data = nested!({});
    set(&mut data, "[\"a\\\"b\"]", 1.into()).unwrap();
    assert_eq!(get(&data, "[\"a\\\"b\"]").unwrap().as_i64(), Some(1));

    let parsed = parse(&validate("[\"a\\\"b\"]").unwrap()).unwrap();
    assert_eq!(parsed.segments(), &[Accessor::Key("a\\\"b".to_string())]);
}

#[test]
fn test_crud_over_json_loaded_container() {
    let mut data: Value =
        serde_json::from_str(r#"{"users":[{"name":"Alice","tags":["admin"]}],"count":1}"#).unwrap();

    assert_eq!(get(&data, "users[0].name").unwrap().as_str(), Some("Alice"));
    set(&mut data, "users[0].name", "Bob".into()).unwrap();
    insert(&mut data, "users[0].active", true.into()).unwrap();
    remove(&mut data, "users[0].tags[0]").unwrap();

    let json = serde_json::to_string(&data).unwrap();
    assert_eq!(
        json,
        r#"{"users":[{"name":"Bob","tags":[null],"active":true}],"count":1}"#
    );
}
