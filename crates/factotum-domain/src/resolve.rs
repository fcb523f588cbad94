//! Read and write navigation over JSON trees.

use serde_json::{Map, Value};

use crate::path::{DataPath, PathSegment};

/// Resolve `path` against `tree`, returning the addressed node.
///
/// Descends left to right. A `Key` segment requires the current node to be an
/// object containing that key; an `IndexByName` segment requires an object
/// whose key holds an array, and selects the first element whose `name` field
/// equals the selector (exact string match, first match wins). Any
/// unsatisfied segment yields `None`; resolution never faults and has no side
/// effects.
pub fn resolve<'a>(tree: &'a Value, path: &DataPath) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.segments() {
        current = step(current, segment)?;
    }
    Some(current)
}

/// Write `meta.source.url` and `meta.verifiedDate` onto the node at `path`.
///
/// Navigation follows the same segment rules as [`resolve`]. The addressed
/// node must be an object; a `meta` object and `meta.source` object are
/// created if absent (a non-object value under either name is replaced), and
/// exactly the two leaf fields are overwritten. Every other field of the node
/// and its ancestors is left untouched.
///
/// Returns `false` on any navigation failure or non-object target, leaving
/// the tree unmodified.
pub fn set_meta(tree: &mut Value, path: &DataPath, url: &str, verified_date: &str) -> bool {
    let mut current = tree;
    for segment in path.segments() {
        current = match step_mut(current, segment) {
            Some(node) => node,
            None => return false,
        };
    }

    let Some(node) = current.as_object_mut() else {
        return false;
    };

    let meta = ensure_object(node, "meta");
    {
        let source = ensure_object(meta, "source");
        source.insert("url".to_string(), Value::String(url.to_string()));
    }
    meta.insert(
        "verifiedDate".to_string(),
        Value::String(verified_date.to_string()),
    );

    true
}

fn step<'a>(node: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match segment {
        PathSegment::Key(key) => node.as_object()?.get(key),
        PathSegment::IndexByName { key, name } => {
            let items = node.as_object()?.get(key)?.as_array()?;
            items
                .iter()
                .find(|item| item.get("name").and_then(Value::as_str) == Some(name.as_str()))
        }
    }
}

fn step_mut<'a>(node: &'a mut Value, segment: &PathSegment) -> Option<&'a mut Value> {
    match segment {
        PathSegment::Key(key) => node.as_object_mut()?.get_mut(key),
        PathSegment::IndexByName { key, name } => {
            let items = node.as_object_mut()?.get_mut(key)?.as_array_mut()?;
            items
                .iter_mut()
                .find(|item| item.get("name").and_then(Value::as_str) == Some(name.as_str()))
        }
    }
}

fn ensure_object<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(inner) => inner,
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Value {
        json!({
            "national": {
                "digitalInfrastructure": {
                    "subseaCables": {
                        "summary": "connectivity hub",
                        "cables": [
                            { "name": "EllaLink", "landing": "Sines" },
                            { "name": "2Africa", "landing": "Carcavelos" },
                            { "name": "EllaLink", "landing": "duplicate" }
                        ]
                    }
                }
            },
            "cities": {
                "lisbon": {
                    "stemGraduates": { "value": 9100 }
                }
            }
        })
    }

    #[test]
    fn test_resolve_plain_path() {
        let tree = sample_tree();
        let path = DataPath::parse("cities.lisbon.stemGraduates").unwrap();
        assert_eq!(resolve(&tree, &path), Some(&json!({ "value": 9100 })));
    }

    #[test]
    fn test_resolve_bracket_selects_first_match() {
        let tree = sample_tree();
        let path =
            DataPath::parse("national.digitalInfrastructure.subseaCables.cables[EllaLink]")
                .unwrap();
        let node = resolve(&tree, &path).unwrap();
        // Two elements are named EllaLink; the first wins.
        assert_eq!(node.get("landing"), Some(&json!("Sines")));
    }

    #[test]
    fn test_resolve_missing_key() {
        let tree = sample_tree();
        let path = DataPath::parse("cities.porto.stemGraduates").unwrap();
        assert_eq!(resolve(&tree, &path), None);
    }

    #[test]
    fn test_resolve_through_non_object() {
        let tree = sample_tree();
        // stemGraduates.value is a number; descending further must fail.
        let path = DataPath::parse("cities.lisbon.stemGraduates.value.deeper").unwrap();
        assert_eq!(resolve(&tree, &path), None);
    }

    #[test]
    fn test_resolve_bracket_on_non_array() {
        let tree = sample_tree();
        let path = DataPath::parse("national.digitalInfrastructure.subseaCables[EllaLink]")
            .unwrap();
        assert_eq!(resolve(&tree, &path), None);
    }

    #[test]
    fn test_resolve_bracket_no_matching_element() {
        let tree = sample_tree();
        let path =
            DataPath::parse("national.digitalInfrastructure.subseaCables.cables[Equiano]")
                .unwrap();
        assert_eq!(resolve(&tree, &path), None);
    }

    #[test]
    fn test_set_meta_creates_nested_fields() {
        let mut tree = sample_tree();
        let path = DataPath::parse("cities.lisbon.stemGraduates").unwrap();

        assert!(set_meta(&mut tree, &path, "https://example.org/stats", "2026-08-23"));

        let node = resolve(&tree, &path).unwrap();
        assert_eq!(
            node.pointer("/meta/source/url"),
            Some(&json!("https://example.org/stats"))
        );
        assert_eq!(
            node.pointer("/meta/verifiedDate"),
            Some(&json!("2026-08-23"))
        );
        // Sibling fields survive.
        assert_eq!(node.get("value"), Some(&json!(9100)));
    }

    #[test]
    fn test_set_meta_through_bracket_segment() {
        let mut tree = sample_tree();
        let path = DataPath::parse("national.digitalInfrastructure.subseaCables.cables[2Africa]")
            .unwrap();

        assert!(set_meta(&mut tree, &path, "https://example.org/cables", "2026-08-23"));

        let node = resolve(&tree, &path).unwrap();
        assert_eq!(
            node.pointer("/meta/source/url"),
            Some(&json!("https://example.org/cables"))
        );
        assert_eq!(node.get("landing"), Some(&json!("Carcavelos")));
    }

    #[test]
    fn test_set_meta_overwrites_previous_values() {
        let mut tree = sample_tree();
        let path = DataPath::parse("cities.lisbon.stemGraduates").unwrap();

        assert!(set_meta(&mut tree, &path, "https://old.example.org", "2026-01-01"));
        assert!(set_meta(&mut tree, &path, "https://new.example.org", "2026-08-23"));

        let node = resolve(&tree, &path).unwrap();
        assert_eq!(
            node.pointer("/meta/source/url"),
            Some(&json!("https://new.example.org"))
        );
        assert_eq!(
            node.pointer("/meta/verifiedDate"),
            Some(&json!("2026-08-23"))
        );
    }

    #[test]
    fn test_set_meta_preserves_other_meta_fields() {
        let mut tree = json!({
            "metric": {
                "value": 42,
                "meta": {
                    "confidence": "high",
                    "source": { "archived": true }
                }
            }
        });
        let path = DataPath::parse("metric").unwrap();

        assert!(set_meta(&mut tree, &path, "https://example.org", "2026-08-23"));

        assert_eq!(tree.pointer("/metric/meta/confidence"), Some(&json!("high")));
        assert_eq!(
            tree.pointer("/metric/meta/source/archived"),
            Some(&json!(true))
        );
        assert_eq!(
            tree.pointer("/metric/meta/source/url"),
            Some(&json!("https://example.org"))
        );
    }

    #[test]
    fn test_set_meta_fails_on_missing_path() {
        let mut tree = sample_tree();
        let before = tree.clone();
        let path = DataPath::parse("cities.braga.stemGraduates").unwrap();

        assert!(!set_meta(&mut tree, &path, "https://example.org", "2026-08-23"));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_set_meta_fails_on_non_object_target() {
        let mut tree = sample_tree();
        let before = tree.clone();
        // Resolves to a number, which cannot carry a meta block.
        let path = DataPath::parse("cities.lisbon.stemGraduates.value").unwrap();

        assert!(!set_meta(&mut tree, &path, "https://example.org", "2026-08-23"));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_set_meta_succeeds_wherever_resolve_does() {
        let mut tree = sample_tree();
        for raw in [
            "national.digitalInfrastructure.subseaCables",
            "national.digitalInfrastructure.subseaCables.cables[EllaLink]",
            "cities.lisbon.stemGraduates",
        ] {
            let path = DataPath::parse(raw).unwrap();
            assert!(resolve(&tree, &path).is_some(), "{} should resolve", raw);
            assert!(
                set_meta(&mut tree, &path, "https://example.org", "2026-08-23"),
                "{} should accept meta",
                raw
            );
        }
    }
}
