//! Recursive removal of a named field from a JSON tree.

use serde_json::Value;

/// Remove every direct occurrence of `field` from every object in `tree`.
///
/// Objects are visited at every nesting depth, including inside arrays.
/// Removal is order-preserving, so the remaining keys of a touched object
/// keep their positions. Returns the number of fields removed; running the
/// same strip a second time removes nothing.
pub fn strip_field(tree: &mut Value, field: &str) -> usize {
    match tree {
        Value::Object(map) => {
            let mut removed = usize::from(map.shift_remove(field).is_some());
            for value in map.values_mut() {
                removed += strip_field(value, field);
            }
            removed
        }
        Value::Array(items) => items.iter_mut().map(|item| strip_field(item, field)).sum(),
        // Scalars are leaves.
        _ => 0,
    }
}

/// Count direct occurrences of `field` across every object in `tree`.
pub fn count_field(tree: &Value, field: &str) -> usize {
    match tree {
        Value::Object(map) => {
            usize::from(map.contains_key(field))
                + map.values().map(|value| count_field(value, field)).sum::<usize>()
        }
        Value::Array(items) => items.iter().map(|item| count_field(item, field)).sum(),
        _ => 0,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Map;

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("(employees|[a-z]{1,6})", inner), 0..4).prop_map(
                    |entries| {
                        let mut map = Map::new();
                        for (key, value) in entries {
                            map.insert(key, value);
                        }
                        Value::Object(map)
                    }
                ),
            ]
        })
    }

    proptest! {
        /// Property: stripping twice yields the same tree as stripping once
        #[test]
        fn test_strip_idempotent(mut tree in arb_json()) {
            strip_field(&mut tree, "employees");
            let once = tree.clone();
            strip_field(&mut tree, "employees");
            prop_assert_eq!(tree, once);
        }

        /// Property: no occurrence of the target field survives a strip
        #[test]
        fn test_strip_removes_everything(mut tree in arb_json()) {
            strip_field(&mut tree, "employees");
            prop_assert_eq!(count_field(&tree, "employees"), 0);
        }

        /// Property: removed count equals found minus remaining
        #[test]
        fn test_strip_count_accounting(tree in arb_json()) {
            let found = count_field(&tree, "employees");
            let mut stripped = tree.clone();
            let removed = strip_field(&mut stripped, "employees");
            let remaining = count_field(&stripped, "employees");
            prop_assert_eq!(removed, found - remaining);
        }

        /// Property: stripping a key the tree never contains changes nothing
        #[test]
        fn test_strip_absent_field_is_noop(tree in arb_json()) {
            // Generated keys are lowercase; this one can never occur.
            let mut stripped = tree.clone();
            let removed = strip_field(&mut stripped, "NEVER_PRESENT");
            prop_assert_eq!(removed, 0);
            prop_assert_eq!(stripped, tree);
        }
    }
}
