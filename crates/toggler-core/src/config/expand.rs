//! Shell-style expansion of configuration paths
//!
//! Supports a leading `~`, `$VAR`, `${VAR}` and `$$` for a literal dollar
//! sign. A `$` not followed by a variable name is kept as-is.

use crate::error::TogglerError;
use crate::result::Result;
use std::path::PathBuf;

/// Expand `~` and environment variables in `raw` using the process environment
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    expand_with(raw, |name| std::env::var(name).ok(), dirs::home_dir)
}

/// Expand `raw` with explicit variable and home directory lookups
pub fn expand_with<V, H>(raw: &str, lookup: V, home: H) -> Result<PathBuf>
where
    V: Fn(&str) -> Option<String>,
    H: FnOnce() -> Option<PathBuf>,
{
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    if rest == "~" || rest.starts_with("~/") {
        let home = home().ok_or_else(|| {
            TogglerError::config_error(format!(
                "cannot expand `~` in path `{raw}`: home directory is unknown"
            ))
        })?;
        out.push_str(&home.to_string_lossy());
        rest = &rest[1..];
    }

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            out.push('$');
            rest = tail;
            continue;
        }

        let (name, tail) = if let Some(braced) = after.strip_prefix('{') {
            let end = braced.find('}').ok_or_else(|| {
                TogglerError::config_error(format!("unterminated `${{` in path `{raw}`"))
            })?;
            (&braced[..end], &braced[end + 1..])
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], &after[end..])
        };

        if name.is_empty() {
            out.push('$');
            rest = after;
            continue;
        }

        let value = lookup(name).ok_or_else(|| {
            TogglerError::config_error(format!(
                "undefined environment variable `{name}` in path `{raw}`"
            ))
        })?;
        tracing::trace!(variable = name, "expanded path variable");
        out.push_str(&value);
        rest = tail;
    }

    out.push_str(rest);
    Ok(PathBuf::from(out))
}
