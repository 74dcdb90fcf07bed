//! Path resolution through a configuration tree.
//!
//! Walks `a.b.c` one segment at a time. Failures report how far the walk got,
//! and when a scalar sits where a container was needed, what that scalar was.

use super::path::Path;
use super::value::{Map, Value};
use super::ConfigError;

/// Returns the value stored at `key` under `root`.
pub fn resolve<'t>(root: &'t Map, key: &str) -> Result<&'t Value, ConfigError> {
    let path = Path::parse(key)?;
    let segments = path.segments();

    let (first, rest) = segments.split_first().expect("path is non-empty");

    let not_found = |depth: usize| ConfigError::KeyNotFound {
        key: path.as_str().to_string(),
        path: path.prefix(depth),
        found: None,
    };

    let mut current = root.get(*first).ok_or_else(|| not_found(1))?;

    for (idx, segment) in rest.iter().enumerate() {
        // `current` sits at depth idx + 1 and more segments remain.
        if !current.is_container() {
            return Err(ConfigError::KeyNotFound {
                key: path.as_str().to_string(),
                path: path.prefix(idx + 1),
                found: Some(current.to_string()),
            });
        }

        current = current.child(segment).ok_or_else(|| not_found(idx + 2))?;
    }

    Ok(current)
}
