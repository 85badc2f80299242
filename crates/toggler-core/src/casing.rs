//! Case-style classification and reconstruction
//!
//! The style is read from the word the user typed and re-applied to the
//! matched successor, so `ENABLE` becomes `DISABLE` and `Enable` becomes
//! `Disable` whatever casing the toggle file stores.

/// Casing style of an input word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseStyle {
    /// Second character uppercase: `ENABLE`, `TRue`
    Scream,
    /// First character uppercase only: `Enable`
    Title,
    /// Anything else: `enable`, `eNABLE`
    #[default]
    Lower,
}

impl CaseStyle {
    /// Classify `word`
    ///
    /// Words shorter than two characters are never [`CaseStyle::Scream`].
    pub fn classify(word: &str) -> Self {
        let mut chars = word.chars();
        let first = chars.next();
        let second = chars.next();

        if second.is_some_and(char::is_uppercase) {
            CaseStyle::Scream
        } else if first.is_some_and(char::is_uppercase) {
            CaseStyle::Title
        } else {
            CaseStyle::Lower
        }
    }

    /// Re-case `raw` in this style
    pub fn apply(self, raw: &str) -> String {
        match self {
            CaseStyle::Scream => raw.to_uppercase(),
            CaseStyle::Title => {
                let mut chars = raw.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            CaseStyle::Lower => raw.to_string(),
        }
    }
}
