//! Toggle matching: finds the first group containing a word and its successor

use crate::config::ToggleConfig;

/// Where a word was found and what follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Scope whose group matched
    pub scope: &'a str,
    /// Index of the group within the scope's `toggles`
    pub group: usize,
    /// Index of the input word within the group
    pub position: usize,
    /// Successor element in its stored casing
    pub next: &'a str,
}

/// Outcome of a toggle lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(Match<'a>),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// The successor word, if any
    pub fn next_word(&self) -> Option<&'a str> {
        match self {
            Lookup::Found(m) => Some(m.next),
            Lookup::NotFound => None,
        }
    }
}

/// Scans scopes in order, and groups in declaration order within each scope
#[derive(Debug, Clone, Copy)]
pub struct ToggleMatcher<'a> {
    config: &'a ToggleConfig,
    case_insensitive: bool,
}

impl<'a> ToggleMatcher<'a> {
    /// Matcher with case-insensitive comparison
    pub fn new(config: &'a ToggleConfig) -> Self {
        Self {
            config,
            case_insensitive: true,
        }
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Find `word` in the first matching `(scope, group)` pair
    ///
    /// Scope names with no entry in the configuration are skipped.
    pub fn find_next(&self, scopes: &[&str], word: &str) -> Lookup<'a> {
        for &name in scopes {
            let Some((scope_name, scope)) = self.config.scope_entry(name) else {
                tracing::trace!(scope = name, "scope not configured, skipping");
                continue;
            };
            tracing::debug!(scope = scope_name, word, "checking scope");

            for (group_index, group) in scope.toggles.iter().enumerate() {
                let Some(position) = group.position(word, self.case_insensitive) else {
                    continue;
                };
                let Some(next) = group.successor(position) else {
                    continue;
                };

                tracing::debug!(
                    scope = scope_name,
                    group = group_index,
                    next,
                    "word matched"
                );
                return Lookup::Found(Match {
                    scope: scope_name,
                    group: group_index,
                    position,
                    next,
                });
            }
        }

        tracing::debug!(word, "word not found in toggles");
        Lookup::NotFound
    }
}
