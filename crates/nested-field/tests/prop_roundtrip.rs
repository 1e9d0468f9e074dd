/// Property-based tests for the reader and writer.
///
/// Uses `proptest` to generate random documents, paths and scalar values, and
/// checks the invariants callers rely on:
///
/// - `set` then `get` on the same path yields the value that was set, also
///   through indexed parent segments
/// - a failed `set` leaves the document untouched
/// - a path whose first key is missing is an absence, never an error
/// - setting the same value twice leaves the document unchanged
/// - an index at or past a sequence's end is always an error
/// - a scalar in the middle of a path is always a type mismatch
use nested_field::{get, set, Map, Path, PathError, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Keys never contain `[` or `.`, so they parse back as plain segments.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_-]{0,11}").unwrap()
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9f64..1.0e9f64).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec("[a-z]{0,6}", 0..4).prop_map(Value::StringSequence),
            prop::collection::vec((arb_key(), inner), 0..4)
                .prop_map(|pairs| Value::Map(pairs.into_iter().collect())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Map> {
    prop::collection::vec((arb_key(), arb_value()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn arb_plain_path() -> impl Strategy<Value = Path> {
    prop::collection::vec(arb_key(), 1..5).prop_map(|keys| Path::parse(keys).unwrap())
}

/// Parent segments may carry an index (`key[N]`); the last one is plain.
fn arb_path() -> impl Strategy<Value = Path> {
    let parent = (arb_key(), prop::option::of(0usize..3)).prop_map(|(key, index)| match index {
        Some(index) => format!("{key}[{index}]"),
        None => key,
    });
    (prop::collection::vec(parent, 0..4), arb_key()).prop_map(|(mut segments, last)| {
        segments.push(last);
        Path::parse(segments).unwrap()
    })
}

/// Documents whose sequences hold maps, so indexed parents can resolve.
fn arb_nested_document() -> impl Strategy<Value = Map> {
    let leaf = arb_scalar();
    let tree = leaf.prop_recursive(3, 32, 4, |inner| {
        let map = prop::collection::vec((arb_key(), inner), 0..4)
            .prop_map(|pairs| pairs.into_iter().collect::<Map>())
            .boxed();
        prop_oneof![
            map.clone().prop_map(Value::Map),
            prop::collection::vec(map.clone().prop_map(Value::Map), 0..3).prop_map(Value::Sequence),
            prop::collection::vec(map, 0..3).prop_map(Value::MapSequence),
        ]
    });
    prop::collection::vec((arb_key(), tree), 0..6).prop_map(|pairs| pairs.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Whenever `set` succeeds, reading the same path returns the value.
    #[test]
    fn set_then_get_roundtrips(doc in arb_document(), path in arb_path(), value in arb_scalar()) {
        let mut doc = doc;
        if set(&mut doc, value.clone(), &path).is_ok() {
            let root = Value::Map(doc);
            let got = get(&root, &path).unwrap();
            prop_assert_eq!(got.map(|r| r.to_value()), Some(value));
        }
    }

    /// Same as above on documents where indexed parents usually resolve.
    #[test]
    fn set_then_get_roundtrips_through_sequences(
        doc in arb_nested_document(),
        path in arb_path(),
        value in arb_scalar(),
    ) {
        let mut doc = doc;
        if set(&mut doc, value.clone(), &path).is_ok() {
            let root = Value::Map(doc);
            let got = get(&root, &path);
            prop_assert_eq!(got.map(|r| r.map(|r| r.to_value())), Ok(Some(value)));
        }
    }

    /// A failed `set` never modifies the document.
    #[test]
    fn failed_set_leaves_document_untouched(doc in arb_nested_document(), path in arb_path()) {
        let mut written = doc.clone();
        if set(&mut written, Value::from("v"), &path).is_err() {
            prop_assert_eq!(written, doc);
        }
    }

    /// On a document made only of maps, `set` never fails.
    #[test]
    fn set_on_empty_document_always_succeeds(path in arb_plain_path(), value in arb_scalar()) {
        let mut doc = Map::new();
        prop_assert!(set(&mut doc, value.clone(), &path).is_ok());
        let root = Value::Map(doc);
        prop_assert_eq!(get(&root, &path).unwrap().map(|r| r.to_value()), Some(value));
    }

    /// A missing first key is an absence regardless of what follows.
    #[test]
    fn missing_first_key_is_absent(doc in arb_document(), path in arb_path()) {
        let first = path.segments()[0].key().to_owned();
        let mut doc = doc;
        doc.shift_remove(&first);
        let root = Value::Map(doc);
        prop_assert_eq!(get(&root, &path), Ok(None));
    }

    /// Setting the same value at the same path twice is idempotent.
    #[test]
    fn set_twice_is_idempotent(doc in arb_document(), path in arb_path(), value in arb_scalar()) {
        let mut once = doc;
        let first = set(&mut once, value.clone(), &path);
        let mut twice = once.clone();
        let second = set(&mut twice, value, &path);
        prop_assert_eq!(first.is_ok(), second.is_ok());
        prop_assert_eq!(once, twice);
    }

    /// Indexing at or beyond the end of a sequence is an error, not an absence.
    #[test]
    fn index_past_end_is_error(items in prop::collection::vec(arb_scalar(), 0..5), extra in 0usize..3) {
        let len = items.len();
        let mut root = Map::new();
        root.insert("items".into(), Value::Sequence(items));
        let root = Value::Map(root);

        let path = Path::parse([format!("items[{}]", len + extra)]).unwrap();
        let err = get(&root, &path).unwrap_err();
        prop_assert!(
            matches!(err, PathError::IndexOutOfRange { len: l, .. } if l == len),
            "unexpected error: {:?}", err
        );
    }

    /// Continuing past a non-null scalar is a type mismatch.
    #[test]
    fn scalar_intermediate_is_mismatch(key in arb_key(), rest in arb_key(), value in arb_scalar()) {
        prop_assume!(!value.is_null());
        let mut root = Map::new();
        root.insert(key.clone(), value);
        let root = Value::Map(root);

        let path = Path::parse([key, rest]).unwrap();
        let is_mismatch = matches!(get(&root, &path), Err(PathError::TypeMismatch { .. }));
        prop_assert!(is_mismatch);
    }
}
