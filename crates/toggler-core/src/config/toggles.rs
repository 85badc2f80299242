//! In-memory model of `toggles.toml`
//!
//! The document is a table of scopes keyed by file type. Each scope holds an
//! ordered list of toggle groups and, optionally, the names of other scopes
//! it extends:
//!
//! ```toml
//! cpp.extends = ["c"]
//! cpp.toggles = [["true", "false"], ["public", "private", "protected"]]
//! global.toggles = [["get", "set"], ["enable", "disable"]]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the scope that is searched after every file type
pub const GLOBAL_SCOPE: &str = "global";

/// Parsed toggle configuration: scope name to [`Scope`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleConfig {
    scopes: HashMap<String, Scope>,
}

/// A named section of the configuration (a file type or `global`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    /// Scopes searched before this one, in listed order
    pub extends: Vec<String>,

    /// Groups of interchangeable words, in declaration order
    pub toggles: Vec<ToggleGroup>,
}

/// Ordered words that cycle into one another
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleGroup(Vec<String>);

impl ToggleConfig {
    /// Parse a configuration from TOML source text
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Look up a scope by name
    pub fn scope(&self, name: &str) -> Option<&Scope> {
        self.scopes.get(name)
    }

    /// Look up a scope, returning the stored key alongside it
    pub fn scope_entry(&self, name: &str) -> Option<(&str, &Scope)> {
        self.scopes
            .get_key_value(name)
            .map(|(key, scope)| (key.as_str(), scope))
    }

    /// The `extends` list of a scope, empty when the scope is absent
    pub fn extends_of(&self, name: &str) -> &[String] {
        self.scope(name)
            .map(|scope| scope.extends.as_slice())
            .unwrap_or_default()
    }

    /// The `global` fallback scope, if configured
    pub fn global(&self) -> Option<&Scope> {
        self.scope(GLOBAL_SCOPE)
    }

    /// Number of scopes defined
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl FromIterator<(String, Scope)> for ToggleConfig {
    fn from_iter<I: IntoIterator<Item = (String, Scope)>>(iter: I) -> Self {
        Self {
            scopes: iter.into_iter().collect(),
        }
    }
}

impl Scope {
    /// Create a scope from groups and an extends list
    pub fn new(toggles: Vec<ToggleGroup>, extends: Vec<String>) -> Self {
        Self { extends, toggles }
    }
}

impl ToggleGroup {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the first element equal to `word`
    ///
    /// With `case_insensitive` set, both sides are compared with ASCII case
    /// folding.
    pub fn position(&self, word: &str, case_insensitive: bool) -> Option<usize> {
        self.0.iter().position(|candidate| {
            if case_insensitive {
                candidate.eq_ignore_ascii_case(word)
            } else {
                candidate == word
            }
        })
    }

    /// Element following `index`, wrapping from the last to the first
    ///
    /// Returns `None` only for an empty group.
    pub fn successor(&self, index: usize) -> Option<&str> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0[(index + 1) % self.0.len()].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scopes_and_extends() {
        let config = ToggleConfig::from_toml_str(
            r#"
            cpp.extends = ["c"]
            cpp.toggles = [["true", "false"], ["public", "private", "protected"]]
            global.toggles = [["get", "set"]]
            "#,
        )
        .unwrap();

        assert_eq!(config.len(), 2);
        let cpp = config.scope("cpp").unwrap();
        assert_eq!(cpp.extends, vec!["c".to_string()]);
        assert_eq!(cpp.toggles.len(), 2);
        assert_eq!(cpp.toggles[1].words(), ["public", "private", "protected"]);
        assert!(config.global().unwrap().extends.is_empty());
    }

    #[test]
    fn test_parse_table_form() {
        let config = ToggleConfig::from_toml_str(
            r#"
            [rust]
            extends = ["c", "cpp"]
            toggles = [
              ["let", "const"],
              ["pub", "pub(crate)"],
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.extends_of("rust"), ["c", "cpp"]);
        assert_eq!(config.scope("rust").unwrap().toggles.len(), 2);
    }

    #[test]
    fn test_scope_without_toggles_is_empty() {
        let config = ToggleConfig::from_toml_str(r#"lua.extends = ["global"]"#).unwrap();
        let lua = config.scope("lua").unwrap();
        assert!(lua.toggles.is_empty());
        assert_eq!(lua.extends, vec!["global".to_string()]);
    }

    #[test]
    fn test_extends_of_missing_scope() {
        let config = ToggleConfig::default();
        assert!(config.extends_of("python").is_empty());
        assert!(config.is_empty());
    }

    #[test]
    fn test_rejects_non_string_words() {
        assert!(ToggleConfig::from_toml_str("cpp.toggles = [[1, 2]]").is_err());
        assert!(ToggleConfig::from_toml_str("cpp = 3").is_err());
    }

    #[test]
    fn test_group_position_and_successor() {
        let group = ToggleGroup::new(["public", "private", "protected"]);

        assert_eq!(group.position("private", false), Some(1));
        assert_eq!(group.position("PRIVATE", false), None);
        assert_eq!(group.position("PRIVATE", true), Some(1));

        assert_eq!(group.successor(0), Some("private"));
        assert_eq!(group.successor(2), Some("public"));
    }

    #[test]
    fn test_degenerate_groups() {
        let single = ToggleGroup::new(["only"]);
        assert_eq!(single.successor(0), Some("only"));

        let empty = ToggleGroup::default();
        assert_eq!(empty.position("anything", true), None);
        assert_eq!(empty.successor(0), None);
    }

    #[test]
    fn test_duplicate_words_use_first_position() {
        let group = ToggleGroup::new(["on", "off", "on"]);
        assert_eq!(group.position("on", false), Some(0));
    }
}
