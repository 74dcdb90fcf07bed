use thiserror::Error;

use super::value::Kind;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{reason}")]
    InvalidPath { path: String, reason: String },

    /// `path` is the sub-path of `key` where resolution stopped. `found` is
    /// the rendered scalar sitting at `path` when it blocked further descent.
    #[error("{}", not_found_message(.key, .path, .found.as_deref()))]
    KeyNotFound {
        key: String,
        path: String,
        found: Option<String>,
    },

    #[error("Configuration array contains dotted keys:\n\n{}", .0.join("\n"))]
    ContainsDottedKeys(Vec<String>),

    #[error("Expected {expected} at '{key}', but found {found}")]
    TypeMismatch {
        key: String,
        expected: Kind,
        found: Kind,
    },

    #[error("configuration root must be a map, got {0}")]
    NotAMap(Kind),
}

fn not_found_message(key: &str, path: &str, found: Option<&str>) -> String {
    match found {
        None => format!("Couldn't find key '{key}' in the array. No value found at: '{path}'"),
        Some(found) => format!("Couldn't find key '{key}'. Encountered value '{found}' at: '{path}'"),
    }
}

impl ConfigError {
    /// Every offending ownership path of a [`ConfigError::ContainsDottedKeys`].
    pub fn errors(&self) -> &[String] {
        match self {
            ConfigError::ContainsDottedKeys(paths) => paths,
            _ => &[],
        }
    }

    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_messages() {
        let missing = ConfigError::KeyNotFound {
            key: "a.somewhat.nested.string".into(),
            path: "a.somewhat.nested".into(),
            found: None,
        };
        assert_eq!(
            missing.to_string(),
            "Couldn't find key 'a.somewhat.nested.string' in the array. No value found at: 'a.somewhat.nested'"
        );

        let blocked = ConfigError::KeyNotFound {
            key: "expect.to.find".into(),
            path: "expect.to".into(),
            found: Some("5".into()),
        };
        assert_eq!(
            blocked.to_string(),
            "Couldn't find key 'expect.to.find'. Encountered value '5' at: 'expect.to'"
        );
    }

    #[test]
    fn test_dotted_keys_message_lists_every_path() {
        let err = ConfigError::ContainsDottedKeys(vec!["a => c.d".into(), "invalid.key".into()]);
        let message = err.to_string();

        assert!(message.starts_with("Configuration array contains dotted keys"));
        assert!(message.contains("a => c.d\ninvalid.key"));
        assert_eq!(err.errors().len(), 2);
    }
}
