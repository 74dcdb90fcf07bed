//! Conversion between nested trees and single-level maps keyed by full paths.

use super::value::{Map, Value};

/// Flattens `tree` into a map from joined paths to leaves.
///
/// Scalars and empty containers are leaves. Non-empty containers are
/// expanded, list entries keyed by their index.
pub fn flatten(tree: &Map, delimiter: &str) -> Map {
    let mut flat = Map::new();
    for (key, value) in tree {
        flatten_into(&mut flat, key.clone(), value, delimiter);
    }
    flat
}

fn flatten_into(flat: &mut Map, prefix: String, value: &Value, delimiter: &str) {
    match value {
        Value::Map(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(flat, format!("{prefix}{delimiter}{key}"), child, delimiter);
            }
        }
        Value::List(items) if !items.is_empty() => {
            for (idx, child) in items.iter().enumerate() {
                flatten_into(flat, format!("{prefix}{delimiter}{idx}"), child, delimiter);
            }
        }
        leaf => {
            flat.insert(prefix, leaf.clone());
        }
    }
}

/// Re-nests a flattened map on `delimiter`.
///
/// A rebuilt map whose keys are exactly `0..n` becomes a list. When a key is
/// both a leaf and a parent of other keys, the nested entries win.
pub fn unflatten(flat: &Map, delimiter: &str) -> Map {
    let mut root = Map::new();
    for (key, value) in flat {
        let segments: Vec<&str> = if delimiter.is_empty() {
            vec![key.as_str()]
        } else {
            key.split(delimiter).collect()
        };
        insert_at(&mut root, &segments, value.clone());
    }

    root.into_iter()
        .map(|(key, value)| (key, relist(value)))
        .collect()
}

fn insert_at(map: &mut Map, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    if rest.is_empty() {
        if !matches!(map.get(*first), Some(Value::Map(nested)) if !nested.is_empty()) {
            map.insert((*first).to_string(), value);
        }
        return;
    }

    let entry = map
        .entry((*first).to_string())
        .or_insert_with(|| Value::Map(Map::new()));
    if !matches!(entry, Value::Map(_)) {
        *entry = Value::Map(Map::new());
    }
    if let Value::Map(nested) = entry {
        insert_at(nested, rest, value);
    }
}

/// Turns maps keyed `"0".."n-1"` back into lists, bottom-up.
fn relist(value: Value) -> Value {
    match value {
        Value::Map(map) if !map.is_empty() => {
            let map: Map = map.into_iter().map(|(k, v)| (k, relist(v))).collect();
            let sequential = (0..map.len()).all(|idx| map.contains_key(&idx.to_string()));
            if sequential {
                let mut entries: Vec<(usize, Value)> = map
                    .into_iter()
                    .filter_map(|(k, v)| k.parse::<usize>().ok().map(|idx| (idx, v)))
                    .collect();
                entries.sort_by_key(|(idx, _)| *idx);
                Value::List(entries.into_iter().map(|(_, v)| v).collect())
            } else {
                Value::Map(map)
            }
        }
        other => other,
    }
}
