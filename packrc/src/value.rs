//! Composition of opaque configuration values.
//!
//! Keys the schema does not know about are carried as raw JSON values and
//! merged with the same rules the typed fields follow: nested records merge
//! recursively, ordered sequences concatenate, and everything else is
//! replaced by the overriding value. The operation is permissive by design.
//! A type mismatch between base and override is not an error; the override
//! wins outright.

use serde_json::Value;

/// Merge an overriding value into a target value, in place.
///
/// # Merging Rules
///
/// - Record into record: field-by-field recursive merge
/// - Sequence into sequence: target's elements followed by the source's
///   (order preserved, no de-duplication)
/// - Anything else: the source value replaces the target outright
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let mut target = json!({"output": {"path": "/a"}});
/// packrc::value::merge_into(&mut target, json!({"output": {"filename": "[name].js"}}));
/// assert_eq!(target, json!({"output": {"path": "/a", "filename": "[name].js"}}));
/// ```
pub fn merge_into(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                match target_map.get_mut(&key) {
                    Some(slot) => merge_into(slot, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target_seq), Value::Array(mut source_seq)) => {
            target_seq.append(&mut source_seq);
        }
        (slot, value) => *slot = value,
    }
}

/// Merge two values, returning the composed result.
///
/// Pure counterpart of [`merge_into`]; neither input is observable after the
/// call, so the merge can reuse their allocations.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let merged = packrc::value::merge(json!({"plugins": [1]}), json!({"plugins": [2]}));
/// assert_eq!(merged, json!({"plugins": [1, 2]}));
/// ```
#[must_use]
pub fn merge(base: Value, source: Value) -> Value {
    let mut merged = base;
    merge_into(&mut merged, source);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_only_keys_preserved() {
        let merged = merge(json!({"a": 1, "b": 2}), json!({"b": 3}));
        assert_eq!(merged, json!({"a": 1, "b": 3}));
    }

    #[test]
    fn test_override_only_keys_adopted() {
        let merged = merge(json!({}), json!({"devtool": "source-map"}));
        assert_eq!(merged, json!({"devtool": "source-map"}));
    }

    #[test]
    fn test_nested_records_merge_recursively() {
        let merged = merge(
            json!({"output": {"path": "/a"}}),
            json!({"output": {"filename": "[name].js"}}),
        );
        assert_eq!(
            merged,
            json!({"output": {"path": "/a", "filename": "[name].js"}})
        );
    }

    #[test]
    fn test_sequences_concatenate() {
        let merged = merge(json!({"plugins": ["P1"]}), json!({"plugins": ["P2"]}));
        assert_eq!(merged, json!({"plugins": ["P1", "P2"]}));
    }

    #[test]
    fn test_type_mismatch_override_wins() {
        // No merge is attempted between a record and a scalar.
        let merged = merge(json!({"node": {"crypto": "empty"}}), json!({"node": false}));
        assert_eq!(merged, json!({"node": false}));

        let merged = merge(json!({"plugins": ["P1"]}), json!({"plugins": "none"}));
        assert_eq!(merged, json!({"plugins": "none"}));
    }

    #[test]
    fn test_merge_with_empty_record_is_identity() {
        let base = json!({"output": {"path": "/dist"}, "plugins": [1, 2]});
        let merged = merge(base.clone(), json!({}));
        assert_eq!(merged, base);
    }

    #[test]
    fn test_deeply_nested_merge() {
        let merged = merge(
            json!({"devServer": {"watchOptions": {"poll": 1000}}}),
            json!({"devServer": {"watchOptions": {"aggregateTimeout": 300}, "port": 3000}}),
        );
        assert_eq!(
            merged,
            json!({
                "devServer": {
                    "watchOptions": {"poll": 1000, "aggregateTimeout": 300},
                    "port": 3000,
                }
            })
        );
    }
}
