//! Output and reporting
//!
//! Stdout only ever receives the word to substitute, without a trailing
//! newline, so editors can replace text in place. Everything else goes to
//! stderr.

use colored::*;
use std::fmt::Display;
use std::io::{self, Write};

/// Write `word` to stdout without a newline
pub fn write_word(word: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(word.as_bytes())?;
    handle.flush()
}

/// Report a lookup miss on stderr
pub fn report_miss(filetype: &str, word: &str) {
    eprintln!(
        "{} word not found in toggles ({} `{}`)",
        "warning:".yellow().bold(),
        filetype.dimmed(),
        word.trim()
    );
}

/// Report a fatal error on stderr
pub fn report_error(err: impl Display) {
    eprintln!("{} {}", "error:".red().bold(), err);
}
