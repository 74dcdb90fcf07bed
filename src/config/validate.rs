//! Rejection of keys that would be ambiguous under dot-notation.
//!
//! A key such as `"x.y"` cannot be told apart from `x` containing `y` once
//! paths are split on dots, so trees carrying such keys are refused up front.

use super::path::DELIMITER;
use super::value::{Map, Value};
use super::ConfigError;

/// Separator between ancestors in a reported ownership path.
const OWNERSHIP_SEPARATOR: &str = " => ";

/// How a tree was admitted into a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// The tree was walked and contains no dotted keys.
    Checked,
    /// The caller vouched for the tree and the walk was skipped.
    Assumed,
}

/// Fails with every dotted key in `tree`, in depth-first discovery order.
///
/// The input is assumed finite and acyclic, which owned [`Value`] trees
/// always are.
pub fn validate(tree: &Map) -> Result<Validity, ConfigError> {
    let mut dotted = Vec::new();
    find_dotted_in_map(tree, &mut Vec::new(), &mut dotted);

    if dotted.is_empty() {
        Ok(Validity::Checked)
    } else {
        tracing::debug!(count = dotted.len(), "configuration contains dotted keys");
        Err(ConfigError::ContainsDottedKeys(dotted))
    }
}

fn find_dotted_in_map(map: &Map, path: &mut Vec<String>, dotted: &mut Vec<String>) {
    for (key, value) in map {
        path.push(key.clone());
        if key.contains(DELIMITER) {
            dotted.push(path.join(OWNERSHIP_SEPARATOR));
        }
        find_dotted(value, path, dotted);
        path.pop();
    }
}

fn find_dotted(value: &Value, path: &mut Vec<String>, dotted: &mut Vec<String>) {
    match value {
        Value::Map(map) => find_dotted_in_map(map, path, dotted),
        Value::List(items) => {
            for (idx, item) in items.iter().enumerate() {
                path.push(idx.to_string());
                find_dotted(item, path, dotted);
                path.pop();
            }
        }
        _ => {}
    }
}
