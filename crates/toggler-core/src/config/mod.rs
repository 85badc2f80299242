//! Configuration system for toggler
//!
//! The toggle file (`toggles.toml`) maps file types to groups of
//! interchangeable words:
//!
//! ```toml
//! c.toggles = [["&&", "||"]]
//!
//! cpp.extends = ["c"]
//! cpp.toggles = [["true", "false"], ["public", "private", "protected"]]
//!
//! global.toggles = [["get", "set"], ["enable", "disable"]]
//! ```
//!
//! ## Discovery
//!
//! An explicit path (`--config` or `TOGGLER_CONFIG`) wins. Otherwise
//! `toggles.toml` in the working directory is used, then
//! `<config dir>/toggler/toggles.toml`. Paths may contain `~` and
//! environment variables such as `$HOME`.
//!
//! ## Inheritance
//!
//! `extends` lists scopes searched before the file type's own groups. It is
//! a single level: the extended scopes' own `extends` are not followed.

mod expand;
mod loader;
mod toggles;

pub use expand::{expand_path, expand_with};
pub use loader::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, ConfigLoader};
pub use toggles::{GLOBAL_SCOPE, Scope, ToggleConfig, ToggleGroup};
