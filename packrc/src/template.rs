//! Filename pattern templates.
//!
//! Output filenames are template strings carrying bracketed placeholder
//! tokens such as `[name]` or `[id]`. The tokens are substituted by the
//! consuming bundler, never here; this module only recognizes them so that
//! validation and display can reason about a pattern.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A filename pattern template, e.g. `"[name].js"` or `"[id].chunk.js"`.
///
/// Any string is a valid template. Tokens this system does not know about
/// are passed through opaquely to the consuming tool.
///
/// # Examples
///
/// ```
/// use packrc::FilenameTemplate;
///
/// let template = FilenameTemplate::new("[name]-[hash].js");
/// assert_eq!(template.tokens(), vec!["name", "hash"]);
/// assert!(template.has_token("name"));
/// assert!(!template.is_static());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    /// Creates a template from a pattern string.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Returns the raw pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Returns the placeholder token names in the pattern, in order.
    ///
    /// A token is a non-empty bracketed segment; unbalanced brackets are
    /// treated as literal text.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens = Vec::new();
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('[') {
            let after = &rest[open + 1..];
            match after.find(']') {
                Some(close) if close > 0 => {
                    tokens.push(&after[..close]);
                    rest = &after[close + 1..];
                }
                Some(close) => rest = &after[close + 1..],
                None => break,
            }
        }

        tokens
    }

    /// Whether the pattern contains the named placeholder token.
    #[must_use]
    pub fn has_token(&self, name: &str) -> bool {
        self.tokens().contains(&name)
    }

    /// Whether the pattern contains no placeholder tokens at all.
    ///
    /// A static pattern names a single fixed file, which is fine for one
    /// entry point but collides as soon as there are several.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.tokens().is_empty()
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FilenameTemplate {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for FilenameTemplate {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_in_order() {
        let template = FilenameTemplate::new("assets/[name]-[hash][extname]");
        assert_eq!(template.tokens(), vec!["name", "hash", "extname"]);
    }

    #[test]
    fn test_entry_and_chunk_patterns() {
        assert!(FilenameTemplate::new("[name].js").has_token("name"));
        assert!(FilenameTemplate::new("[name].map").has_token("name"));
        assert!(FilenameTemplate::new("[id].chunk.js").has_token("id"));
    }

    #[test]
    fn test_static_pattern() {
        let template = FilenameTemplate::new("bundle.js");
        assert!(template.is_static());
        assert!(template.tokens().is_empty());
    }

    #[test]
    fn test_unbalanced_brackets_are_literal() {
        assert!(FilenameTemplate::new("[name.js").is_static());
        assert!(FilenameTemplate::new("name].js").is_static());
        // Empty brackets are not a token.
        assert!(FilenameTemplate::new("[].js").is_static());
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let template = FilenameTemplate::new("[contenthash].bundle.js");
        assert_eq!(template.tokens(), vec!["contenthash"]);
    }

    #[test]
    fn test_display_and_pattern() {
        let template = FilenameTemplate::new("ac_[name]");
        assert_eq!(template.pattern(), "ac_[name]");
        assert_eq!(template.to_string(), "ac_[name]");
    }

    #[test]
    fn test_serde_transparent() {
        let template: FilenameTemplate = serde_yaml::from_str("\"[name].js\"").unwrap();
        assert_eq!(template, FilenameTemplate::new("[name].js"));

        let yaml = serde_yaml::to_string(&template).unwrap();
        assert!(yaml.contains("[name].js"));
    }
}
