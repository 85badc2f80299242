//! Toggler Core
//!
//! Cycles a word through configured groups of alternatives (`true` ↔
//! `false`, `get` ↔ `set`), scoped by file type with a `global` fallback.
//! This crate provides configuration loading, scope resolution, matching
//! and case-style reconstruction.

pub mod casing;
pub mod config;
pub mod error;
pub mod matcher;
pub mod resolver;
pub mod result;
pub mod toggler;

// Re-export commonly used types
pub use casing::CaseStyle;
pub use config::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, ConfigLoader, GLOBAL_SCOPE, Scope, ToggleConfig, ToggleGroup,
};
pub use error::{ErrorKind, TogglerError};
pub use matcher::{Lookup, Match, ToggleMatcher};
pub use resolver::ScopeResolver;
pub use result::Result;
pub use toggler::{Toggle, ToggleOptions, Toggler};

/// Initialize the tracing subscriber for logging
///
/// Events go to stderr so stdout carries only the toggled word. `RUST_LOG`
/// takes precedence over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
