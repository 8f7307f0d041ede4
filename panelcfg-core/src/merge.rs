//! Structural deep merge over JSON values
//!
//! Merge semantics:
//! - Objects: deep-merge by key, but only when both sides are objects
//! - Arrays: REPLACE (never concatenated or merged by index)
//! - Scalars and null: override
//!
//! Anything written into the target is a fresh copy of the source, so the
//! result never shares storage with the source value.

use serde_json::{Map, Value};

/// Deep merges `source` into `target` in place and returns `target`.
///
/// For every key of `source`: when both the source value and the existing
/// target value are objects, the two are merged recursively. In every other
/// case the target key is replaced wholesale by a deep copy of the source
/// value.
pub fn deep_merge<'a>(
    target: &'a mut Map<String, Value>,
    source: &Map<String, Value>,
) -> &'a mut Map<String, Value> {
    for (key, value) in source {
        if let (Some(Value::Object(existing)), Value::Object(nested)) = (target.get_mut(key), value)
        {
            deep_merge(existing, nested);
            continue;
        }
        target.insert(key.clone(), deep_merge_value(None, value));
    }
    target
}

/// Merges a single value over an optional existing value.
///
/// `existing` is `None` when there is no prior value; the result is then a
/// deep copy of `value`. An existing object is merged into only when `value`
/// is itself an object; otherwise the existing value is discarded.
#[must_use]
pub fn deep_merge_value(existing: Option<Value>, value: &Value) -> Value {
    match value {
        Value::Object(source) => {
            let mut target = match existing {
                Some(Value::Object(map)) => map,
                _ => Map::new(),
            };
            deep_merge(&mut target, source);
            Value::Object(target)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| deep_merge_value(None, item))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Returns an independently owned deep copy of `value`.
#[must_use]
pub fn deep_clone(value: &Value) -> Value {
    deep_merge_value(None, value)
}

/// Deep merges `source` over an arbitrary target value.
///
/// Unlike [`deep_merge`] the target does not have to be an object; a
/// non-object target is simply replaced.
pub fn deep_merge_into(target: &mut Value, source: &Value) {
    let existing = std::mem::take(target);
    *target = deep_merge_value(Some(existing), source);
}

/// Copies the top-level keys of `source` over `target` without recursing.
///
/// Nested objects of `target` are replaced, not merged.
pub fn shallow_extend<'a>(
    target: &'a mut Map<String, Value>,
    source: &Map<String, Value>,
) -> &'a mut Map<String, Value> {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
    target
}

/// Merges several layers in order (first is base, last has highest precedence).
#[must_use]
pub fn merge_layers<I>(layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    layers.into_iter().fold(Value::Null, |mut merged, layer| {
        deep_merge_into(&mut merged, &layer);
        merged
    })
}
