//! Scope resolution: which scopes are searched for a file type, and in what order

use crate::config::{GLOBAL_SCOPE, ToggleConfig};

/// Computes the search order `extends(S) ++ [S] ++ ["global"]`
#[derive(Debug, Clone, Copy)]
pub struct ScopeResolver<'a> {
    config: &'a ToggleConfig,
    follow_extends: bool,
    dedupe: bool,
}

impl<'a> ScopeResolver<'a> {
    /// Resolver that follows `extends` and drops repeated scope names
    pub fn new(config: &'a ToggleConfig) -> Self {
        Self {
            config,
            follow_extends: true,
            dedupe: true,
        }
    }

    /// When disabled, `extends` lists are ignored entirely
    pub fn follow_extends(mut self, follow: bool) -> Self {
        self.follow_extends = follow;
        self
    }

    /// When enabled, only the first occurrence of each scope name is kept
    pub fn dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Ordered scope names to search for `filetype`
    ///
    /// Extends are read one level deep only. Names that have no scope in the
    /// configuration are still listed; the matcher skips them.
    pub fn resolve<'b>(&self, filetype: &'b str) -> Vec<&'b str>
    where
        'a: 'b,
    {
        let extends: &'b [String] = if self.follow_extends {
            self.config.extends_of(filetype)
        } else {
            &[]
        };

        let mut order: Vec<&'b str> = Vec::with_capacity(extends.len() + 2);
        let candidates = extends
            .iter()
            .map(String::as_str)
            .chain([filetype, GLOBAL_SCOPE]);

        for name in candidates {
            if self.dedupe && order.contains(&name) {
                continue;
            }
            order.push(name);
        }

        tracing::trace!(filetype, ?order, "resolved scope search order");
        order
    }
}
