use std::sync::Arc;

use super::builder::ConfigBuilder;
use super::nullable::{
    expect_bool, expect_float, expect_int, expect_list, expect_map, expect_string, NullableConfig,
};
use super::validate::Validity;
use super::value::{Map, Value};
use super::ConfigError;

/// Strictly typed, read-only access to a validated configuration tree.
///
/// Values are addressed by dot-delimited paths. Every accessor fails when the
/// path does not resolve or when the value has another kind, null included.
/// For optional settings, use the companion [`nullable`](Self::nullable)
/// view, which shares the same tree.
///
/// ## Example
///
/// ```
/// use typed_config::{Config, ConfigError};
///
/// let table: toml::Table = toml::from_str(
///     r#"
///     [ports]
///     http = 80
///     "#,
/// ).unwrap();
/// let config = Config::builder().with_value(table).build()?;
///
/// assert_eq!(config.int("ports.http")?, 80);
/// assert!(config.string("ports.http").is_err());
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    nullable: NullableConfig,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates `tree` and wraps it.
    ///
    /// Fails with [`ConfigError::ContainsDottedKeys`] if any key, at any
    /// depth, contains a dot.
    pub fn new(tree: Map) -> Result<Self, ConfigError> {
        Self::builder().with_tree(tree).build()
    }

    /// Wraps a tree that has already been validated or vouched for.
    pub(super) fn scoped(tree: Map, validity: Validity) -> Self {
        Self {
            nullable: NullableConfig::new(Arc::new(tree), validity),
        }
    }

    /// The nullable view over this same tree.
    pub fn nullable(&self) -> &NullableConfig {
        &self.nullable
    }

    /// The value at `key`, whatever its kind.
    pub fn raw(&self, key: &str) -> Result<&Value, ConfigError> {
        self.nullable.raw(key)
    }

    pub fn string(&self, key: &str) -> Result<&str, ConfigError> {
        expect_string(key, self.raw(key)?)
    }

    pub fn bool(&self, key: &str) -> Result<bool, ConfigError> {
        expect_bool(key, self.raw(key)?)
    }

    pub fn int(&self, key: &str) -> Result<i64, ConfigError> {
        expect_int(key, self.raw(key)?)
    }

    pub fn float(&self, key: &str) -> Result<f64, ConfigError> {
        expect_float(key, self.raw(key)?)
    }

    /// The list at `key`. An empty map counts as an empty list.
    pub fn list(&self, key: &str) -> Result<&[Value], ConfigError> {
        expect_list(key, self.raw(key)?)
    }

    /// The map at `key`. An empty list counts as an empty map.
    pub fn map(&self, key: &str) -> Result<&Map, ConfigError> {
        expect_map(key, self.raw(key)?)
    }

    /// A view scoped to the map at `key`.
    ///
    /// The sub-tree is copied and not validated again: it is part of a tree
    /// that already was.
    pub fn config(&self, key: &str) -> Result<Config, ConfigError> {
        let map = self.map(key)?;
        tracing::trace!(key, entries = map.len(), "creating scoped config view");
        Ok(Config::scoped(map.clone(), self.validity()))
    }

    /// Whether `key` resolves. Malformed paths are still errors.
    pub fn contains(&self, key: &str) -> Result<bool, ConfigError> {
        self.nullable.contains(key)
    }

    /// How the backing tree was admitted.
    pub fn validity(&self) -> Validity {
        self.nullable.validity()
    }

    pub fn as_tree(&self) -> &Map {
        self.nullable.as_tree()
    }

    /// Returns a copy of the backing tree.
    pub fn to_tree(&self) -> Map {
        self.nullable.to_tree()
    }

    /// Flattens the tree into a map keyed by full paths joined with
    /// `delimiter`. Empty lists and maps appear as leaves.
    pub fn to_flat(&self, delimiter: &str) -> Map {
        self.nullable.to_flat(delimiter)
    }
}

impl TryFrom<Map> for Config {
    type Error = ConfigError;

    fn try_from(tree: Map) -> Result<Self, Self::Error> {
        Config::new(tree)
    }
}
