//! Property-based tests for the path pipeline.
//!
//! These complement the integration tests by checking grammar and traversal
//! guarantees across generated inputs: identifier validation, index
//! round-trips, normalization idempotence, and set-then-get coherence.

use proptest::prelude::*;
use pathcrud::{get, nested, parse, set, validate, Accessor, Value};

proptest! {
    // Any grammar identifier is a valid dot segment and normalizes to itself.
    #[test]
    fn prop_identifier_dot_segment(ident in "[A-Za-z_$][A-Za-z0-9_$]{0,15}") {
        let path = format!(".{}", ident);
        let validated = validate(&path).unwrap();
        prop_assert_eq!(validated.normalized(), path.as_str());
        prop_assert!(validated.first_part().is_none());

        let parsed = parse(&validated).unwrap();
        prop_assert_eq!(parsed.segments(), &[Accessor::Key(ident)]);
    }

    // Any non-negative integer is a valid index segment and tokenizes back.
    #[test]
    fn prop_index_segment_roundtrip(n in any::<usize>()) {
        let path = format!("[{}]", n);
        let parsed = parse(&validate(&path).unwrap()).unwrap();
        prop_assert_eq!(parsed.segments(), &[Accessor::Index(n)]);
    }

    // Normalization is idempotent: validating a normalized path changes nothing.
    #[test]
    fn prop_normalization_idempotent(raw in "[A-Za-z0-9 ;+'-]{1,20}") {
        let first = validate(&raw).unwrap();
        let second = validate(first.normalized()).unwrap();
        prop_assert_eq!(second.normalized(), first.normalized());
    }

    // Formatting never double-escapes an already-escaped quote.
    #[test]
    fn prop_escaping_idempotent(before in "[a-z]{0,5}", after in "[a-z]{0,5}") {
        let raw = format!("{}\\\"{}", before, after);
        let validated = validate(&raw).unwrap();
        prop_assert_eq!(validated.normalized(), format!("[\"{}\"]", raw));
    }

    // Unescaped quotes gain exactly one backslash.
    #[test]
    fn prop_unescaped_quotes_get_escaped(before in "[a-z]{0,5}", after in "[a-z]{0,5}") {
        let raw = format!("{}\"{}", before, after);
        let validated = validate(&raw).unwrap();
        prop_assert_eq!(
            validated.normalized(),
            format!("[\"{}\\\"{}\"]", before, after)
        );
    }

    // set followed by get returns the value that was set.
    #[test]
    fn prop_set_then_get(key in "[A-Za-z_$][A-Za-z0-9_$]{0,10}", n in any::<i64>()) {
        let mut container = nested!({});
        let path = format!(".{}", key);
        set(&mut container, &path, n.into()).unwrap();
        prop_assert_eq!(get(&container, &path).unwrap(), &Value::from(n));
    }

    // set through an existing intermediate, at array and object leaves.
    #[test]
    fn prop_set_then_get_deep(idx in 0usize..8, n in any::<i64>()) {
        let mut container = nested!({ "inner": { "items": [] } });
        let path = format!("inner.items[{}]", idx);
        set(&mut container, &path, n.into()).unwrap();
        prop_assert_eq!(get(&container, &path).unwrap(), &Value::from(n));

        // Slots before the written index are holes, absent on read.
        for hole in 0..idx {
            let hole_path = format!("inner.items[{}]", hole);
            prop_assert!(get(&container, &hole_path).is_err());
        }
    }
}
