//! Dot-delimited lookup paths.

use super::ConfigError;

/// The only syntactically special character in a path.
pub const DELIMITER: char = '.';

/// A parsed lookup path such as `"ports.http"`.
///
/// Segments are matched literally, so `"spaces are.fine"` has the two
/// segments `"spaces are"` and `"fine"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    /// Parses `raw`, ignoring surrounding whitespace.
    pub fn parse(raw: &'a str) -> Result<Self, ConfigError> {
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(ConfigError::invalid_path(
                raw,
                "Config key cannot be an empty string.",
            ));
        }

        if raw.contains("..") {
            return Err(ConfigError::invalid_path(
                raw,
                format!("Key '{raw}' is invalid. Keys cannot contain consecutive dots."),
            ));
        }

        let segments: Vec<&str> = raw.split(DELIMITER).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::invalid_path(
                raw,
                format!("Key '{raw}' is invalid. Keys cannot start or end with a dot."),
            ));
        }

        Ok(Self { raw, segments })
    }

    /// The trimmed path as given.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Never empty for a parsed path.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// The sub-path made of the first `len` segments.
    pub fn prefix(&self, len: usize) -> String {
        self.segments[..len.min(self.segments.len())].join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_segments() {
        let path = Path::parse("  a.somewhat.deeply ").unwrap();
        assert_eq!(path.as_str(), "a.somewhat.deeply");
        assert_eq!(path.segments(), &["a", "somewhat", "deeply"]);
        assert_eq!(path.prefix(2), "a.somewhat");
    }

    #[test]
    fn test_single_segment() {
        let path = Path::parse("flag").unwrap();
        assert_eq!(path.segments(), &["flag"]);
        assert_eq!(path.prefix(1), "flag");
    }

    #[test]
    fn test_spaces_are_literal() {
        let path = Path::parse("spaces are.actually fine").unwrap();
        assert_eq!(path.segments(), &["spaces are", "actually fine"]);
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(
            Path::parse(""),
            Err(ConfigError::InvalidPath { .. })
        ));
        assert!(matches!(
            Path::parse("   "),
            Err(ConfigError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_consecutive_dots_rejected() {
        let err = Path::parse("this..is.not.allowed").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Key 'this..is.not.allowed' is invalid. Keys cannot contain consecutive dots."
        );
    }

    #[test]
    fn test_edge_dots_rejected() {
        assert!(matches!(
            Path::parse(".a"),
            Err(ConfigError::InvalidPath { .. })
        ));
        assert!(matches!(
            Path::parse("a."),
            Err(ConfigError::InvalidPath { .. })
        ));
    }
}
