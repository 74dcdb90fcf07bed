use super::validate::{validate, Validity};
use super::value::{Map, Value};
use super::view::Config;
use super::ConfigError;

/// Builder for a [`Config`] over an already-parsed tree.
///
/// The tree is checked once for keys containing a dot, which dot-notation
/// paths could not address. Trees known to be clean (for instance, cached
/// copies of a tree that already passed) can skip the walk with
/// [`assume_valid`](Self::assume_valid). Nothing re-checks them afterwards,
/// so only pass trusted data that way.
///
/// ## Example
///
/// ```
/// use typed_config::{Config, ConfigError, Map, Validity, Value};
///
/// let mut tree = Map::new();
/// tree.insert("name".into(), Value::from("svc"));
///
/// let config = Config::builder()
///     .with_tree(tree.clone())
///     .build()?;
/// assert_eq!(config.validity(), Validity::Checked);
///
/// let cached = Config::builder()
///     .with_tree(config.to_tree())
///     .assume_valid(true)
///     .build()?;
/// assert_eq!(cached.validity(), Validity::Assumed);
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigBuilder {
    tree: Option<Value>,
    assume_valid: bool,
}

impl ConfigBuilder {
    /// Sets the tree to wrap.
    pub fn with_tree(mut self, tree: Map) -> Self {
        self.tree = Some(Value::Map(tree));
        self
    }

    /// Sets the tree from any value convertible into one, such as a parsed
    /// `toml::Table`. The value must be a map.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.tree = Some(value.into());
        self
    }

    /// Skips the dotted-key walk when `true`.
    pub fn assume_valid(mut self, assume_valid: bool) -> Self {
        self.assume_valid = assume_valid;
        self
    }

    /// Validates the tree (unless assumed valid) and builds the view.
    ///
    /// Without a tree, builds an empty configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let tree = match self.tree {
            Some(Value::Map(map)) => map,
            Some(other) => return Err(ConfigError::NotAMap(other.kind())),
            None => Map::new(),
        };

        let validity = if self.assume_valid {
            Validity::Assumed
        } else {
            validate(&tree)?
        };

        tracing::debug!(entries = tree.len(), ?validity, "built config view");
        Ok(Config::scoped(tree, validity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::value::Kind;

    fn dotted_tree() -> Map {
        let mut inner = Map::new();
        inner.insert("b".into(), Value::Int(0));
        inner.insert("c.d".into(), Value::from("Nope"));

        let mut tree = Map::new();
        tree.insert("a".into(), Value::Map(inner));
        tree.insert("invalid.key".into(), Value::from("It's got ze dots!"));
        tree
    }

    #[test]
    fn test_build_rejects_dotted_keys() {
        let err = Config::builder().with_tree(dotted_tree()).build().unwrap_err();

        assert!(err.to_string().contains("Configuration array contains dotted keys"));
        assert_eq!(err.errors(), &["a => c.d", "invalid.key"]);
    }

    #[test]
    fn test_assume_valid_skips_walk() {
        let config = Config::builder()
            .with_tree(dotted_tree())
            .assume_valid(true)
            .build()
            .unwrap();

        assert_eq!(config.validity(), Validity::Assumed);
        assert_eq!(config.int("a.b").unwrap(), 0);
        assert_eq!(config.to_tree(), dotted_tree());
    }

    #[test]
    fn test_assume_valid_is_inherited_by_sub_views() {
        let config = Config::builder()
            .with_tree(dotted_tree())
            .assume_valid(true)
            .build()
            .unwrap();

        assert_eq!(config.config("a").unwrap().validity(), Validity::Assumed);
    }

    #[test]
    fn test_with_value_from_toml() {
        let table: toml::Table = toml::from_str("[ports]\nhttp = 80").unwrap();
        let config = Config::builder().with_value(table).build().unwrap();

        assert_eq!(config.int("ports.http").unwrap(), 80);
        assert_eq!(config.validity(), Validity::Checked);
    }

    #[test]
    fn test_with_value_rejects_non_map_root() {
        let err = Config::builder()
            .with_value(Value::List(vec![]))
            .build()
            .unwrap_err();

        assert_eq!(err, ConfigError::NotAMap(Kind::List));
    }

    #[test]
    fn test_empty_builder_builds_empty_config() {
        let config = Config::builder().build().unwrap();

        assert!(config.to_tree().is_empty());
        assert!(!config.contains("anything").unwrap());
    }

    #[test]
    fn test_rebuilding_from_exported_tree_is_stable() {
        let mut tree = Map::new();
        tree.insert("name".into(), Value::from("svc"));

        let first = Config::new(tree).unwrap();
        let second = Config::new(first.to_tree()).unwrap();

        assert_eq!(first.to_tree(), second.to_tree());
        assert_eq!(second.validity(), Validity::Checked);
    }
}
