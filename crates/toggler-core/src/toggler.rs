//! The toggle pipeline: resolve scopes, match the word, restore its casing

use crate::casing::CaseStyle;
use crate::config::ToggleConfig;
use crate::matcher::{Lookup, ToggleMatcher};
use crate::resolver::ScopeResolver;

/// Switches for the toggle pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOptions {
    /// Fold case when matching and mirror the input's case style on output.
    /// When off, matching is exact and stored casing is returned verbatim.
    pub case_insensitive: bool,
    /// Search the scopes listed in the file type's `extends`
    pub follow_extends: bool,
    /// Search each scope at most once
    pub dedupe_scopes: bool,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            follow_extends: true,
            dedupe_scopes: true,
        }
    }
}

/// Result of toggling a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The word was found; `word` is the successor in the input's case style
    Next { word: String, scope: String },
    /// No reachable group contains the word; `word` is the input unchanged
    Unchanged { word: String },
}

impl Toggle {
    pub fn is_found(&self) -> bool {
        matches!(self, Toggle::Next { .. })
    }

    /// Text to write back in place of the input word
    pub fn output(&self) -> &str {
        match self {
            Toggle::Next { word, .. } | Toggle::Unchanged { word } => word.as_str(),
        }
    }
}

/// Configured toggle engine
#[derive(Debug, Clone)]
pub struct Toggler {
    config: ToggleConfig,
    options: ToggleOptions,
}

impl Toggler {
    pub fn new(config: ToggleConfig, options: ToggleOptions) -> Self {
        Self { config, options }
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn options(&self) -> ToggleOptions {
        self.options
    }

    /// Toggle `word` as it appears in a file of type `filetype`
    ///
    /// Surrounding whitespace is ignored for the lookup.
    pub fn toggle(&self, filetype: &str, word: &str) -> Toggle {
        let search_word = word.trim();
        let scopes = ScopeResolver::new(&self.config)
            .follow_extends(self.options.follow_extends)
            .dedupe(self.options.dedupe_scopes)
            .resolve(filetype);

        let lookup = ToggleMatcher::new(&self.config)
            .case_insensitive(self.options.case_insensitive)
            .find_next(&scopes, search_word);

        match lookup {
            Lookup::Found(m) => {
                let next = if self.options.case_insensitive {
                    CaseStyle::classify(search_word).apply(m.next)
                } else {
                    m.next.to_string()
                };
                tracing::info!(filetype, from = search_word, to = %next, scope = m.scope, "toggled");
                Toggle::Next {
                    word: next,
                    scope: m.scope.to_string(),
                }
            }
            Lookup::NotFound => Toggle::Unchanged {
                word: word.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggler(source: &str) -> Toggler {
        Toggler::new(
            ToggleConfig::from_toml_str(source).unwrap(),
            ToggleOptions::default(),
        )
    }

    const CPP: &str = r#"
        cpp.toggles = [["true", "false"]]
        global.toggles = [["get", "set"]]
    "#;

    #[test]
    fn test_end_to_end_cpp() {
        let toggler = toggler(CPP);

        let result = toggler.toggle("cpp", "true");
        assert_eq!(
            result,
            Toggle::Next {
                word: "false".to_string(),
                scope: "cpp".to_string(),
            }
        );

        let result = toggler.toggle("cpp", "get");
        assert_eq!(result.output(), "set");
        assert!(matches!(result, Toggle::Next { ref scope, .. } if scope == "global"));

        let result = toggler.toggle("cpp", "foo");
        assert!(!result.is_found());
        assert_eq!(result.output(), "foo");
    }

    #[test]
    fn test_first_listed_extend_wins() {
        let toggler = toggler(
            r#"
            a.extends = ["b", "c"]
            a.toggles = [["w", "from-a"]]
            b.toggles = [["w", "from-b"]]
            c.toggles = [["w", "from-c"]]
            "#,
        );
        assert_eq!(toggler.toggle("a", "w").output(), "from-b");
    }

    #[test]
    fn test_missing_extended_scope_is_ignored() {
        let toggler = toggler(
            r#"
            a.extends = ["ghost"]
            a.toggles = [["yes", "no"]]
            "#,
        );
        assert_eq!(toggler.toggle("a", "yes").output(), "no");
    }

    #[test]
    fn test_case_reconstruction() {
        let toggler = toggler(r#"global.toggles = [["enable", "disable"]]"#);

        assert_eq!(toggler.toggle("any", "ENABLE").output(), "DISABLE");
        assert_eq!(toggler.toggle("any", "Enable").output(), "Disable");
        assert_eq!(toggler.toggle("any", "enable").output(), "disable");
    }

    #[test]
    fn test_exact_mode_keeps_stored_casing() {
        let config = ToggleConfig::from_toml_str(r#"global.toggles = [["On", "off"]]"#).unwrap();
        let toggler = Toggler::new(
            config,
            ToggleOptions {
                case_insensitive: false,
                ..ToggleOptions::default()
            },
        );

        assert_eq!(toggler.toggle("any", "On").output(), "off");
        assert!(!toggler.toggle("any", "ON").is_found());
        assert_eq!(toggler.toggle("any", "off").output(), "On");
    }

    #[test]
    fn test_without_extends() {
        let config = ToggleConfig::from_toml_str(
            r#"
            a.extends = ["b"]
            b.toggles = [["left", "right"]]
            "#,
        )
        .unwrap();
        let toggler = Toggler::new(
            config,
            ToggleOptions {
                follow_extends: false,
                ..ToggleOptions::default()
            },
        );

        assert!(!toggler.toggle("a", "left").is_found());
    }

    #[test]
    fn test_input_is_trimmed_for_lookup() {
        let toggler = toggler(CPP);
        assert_eq!(toggler.toggle("cpp", "true\n").output(), "false");

        let miss = toggler.toggle("cpp", " foo\n");
        assert_eq!(miss.output(), " foo\n");
    }
}
