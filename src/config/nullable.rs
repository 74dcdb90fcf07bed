//! The nullable accessor view.

use std::sync::Arc;

use super::flatten::flatten;
use super::resolve::resolve;
use super::validate::Validity;
use super::value::{Kind, Map, Value};
use super::view::Config;
use super::ConfigError;

static EMPTY_MAP: Map = Map::new();

/// Typed accessors that treat a stored null as "no value".
///
/// Every accessor returns `Ok(None)` when the value at the path is null.
/// Paths that do not resolve and values of the wrong kind are still errors:
///
/// ```
/// use typed_config::{Config, ConfigError, Map, Value};
///
/// let mut tree = Map::new();
/// tree.insert("timeout".into(), Value::Null);
/// let config = Config::new(tree)?;
///
/// assert_eq!(config.nullable().int("timeout")?, None);
/// assert!(config.nullable().int("retries").is_err());
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NullableConfig {
    tree: Arc<Map>,
    validity: Validity,
}

impl NullableConfig {
    pub(super) fn new(tree: Arc<Map>, validity: Validity) -> Self {
        Self { tree, validity }
    }

    /// The value at `key`, whatever its kind. A stored null is `Value::Null`.
    pub fn raw(&self, key: &str) -> Result<&Value, ConfigError> {
        resolve(&self.tree, key)
    }

    pub fn string(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        self.present(key)?.map(|v| expect_string(key, v)).transpose()
    }

    pub fn bool(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        self.present(key)?.map(|v| expect_bool(key, v)).transpose()
    }

    pub fn int(&self, key: &str) -> Result<Option<i64>, ConfigError> {
        self.present(key)?.map(|v| expect_int(key, v)).transpose()
    }

    pub fn float(&self, key: &str) -> Result<Option<f64>, ConfigError> {
        self.present(key)?.map(|v| expect_float(key, v)).transpose()
    }

    pub fn list(&self, key: &str) -> Result<Option<&[Value]>, ConfigError> {
        self.present(key)?.map(|v| expect_list(key, v)).transpose()
    }

    pub fn map(&self, key: &str) -> Result<Option<&Map>, ConfigError> {
        self.present(key)?.map(|v| expect_map(key, v)).transpose()
    }

    /// A strict view over a copy of the map at `key`, or `None` if it is null.
    pub fn config(&self, key: &str) -> Result<Option<Config>, ConfigError> {
        Ok(self
            .map(key)?
            .map(|map| Config::scoped(map.clone(), self.validity)))
    }

    /// Whether `key` resolves to anything, null included.
    pub fn contains(&self, key: &str) -> Result<bool, ConfigError> {
        match self.raw(key) {
            Ok(_) => Ok(true),
            Err(ConfigError::KeyNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Borrows the backing tree.
    pub fn as_tree(&self) -> &Map {
        &self.tree
    }

    /// Returns a copy of the backing tree.
    pub fn to_tree(&self) -> Map {
        (*self.tree).clone()
    }

    /// Flattens the tree into a map keyed by full paths joined with `delimiter`.
    pub fn to_flat(&self, delimiter: &str) -> Map {
        flatten(&self.tree, delimiter)
    }

    fn present(&self, key: &str) -> Result<Option<&Value>, ConfigError> {
        let value = self.raw(key)?;
        Ok((!value.is_null()).then_some(value))
    }
}

fn mismatch(key: &str, expected: Kind, value: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.trim().to_string(),
        expected,
        found: value.kind(),
    }
}

pub(super) fn expect_string<'v>(key: &str, value: &'v Value) -> Result<&'v str, ConfigError> {
    value
        .as_str()
        .ok_or_else(|| mismatch(key, Kind::String, value))
}

pub(super) fn expect_bool(key: &str, value: &Value) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| mismatch(key, Kind::Bool, value))
}

pub(super) fn expect_int(key: &str, value: &Value) -> Result<i64, ConfigError> {
    value.as_int().ok_or_else(|| mismatch(key, Kind::Int, value))
}

pub(super) fn expect_float(key: &str, value: &Value) -> Result<f64, ConfigError> {
    value.as_float().ok_or_else(|| mismatch(key, Kind::Float, value))
}

/// A list, or an empty map read as an empty list.
pub(super) fn expect_list<'v>(key: &str, value: &'v Value) -> Result<&'v [Value], ConfigError> {
    match value {
        Value::List(items) => Ok(items),
        Value::Map(map) if map.is_empty() => Ok(&[]),
        other => Err(mismatch(key, Kind::List, other)),
    }
}

/// A map, or an empty list read as an empty map.
pub(super) fn expect_map<'v>(key: &str, value: &'v Value) -> Result<&'v Map, ConfigError> {
    match value {
        Value::Map(map) => Ok(map),
        Value::List(items) if items.is_empty() => Ok(&EMPTY_MAP),
        other => Err(mismatch(key, Kind::Map, other)),
    }
}
