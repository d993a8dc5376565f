//! Raw message patterns and the resource files they are loaded from.
//!
//! A [`MessageBundle`] maps message keys to unresolved patterns. Bundles are
//! filled from `.properties` files named after a prefix and a [`Locale`],
//! most general file first, so `FreeColMessages_en_US.properties` overrides
//! `FreeColMessages_en.properties`, which overrides
//! `FreeColMessages.properties`.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::Locale;

mod properties;
mod sources;

pub use sources::ResourceSources;

/// File name prefix of the base game's message resources.
pub const BASE_PREFIX: &str = "FreeColMessages";

/// File name prefix of mod-specific message resources.
pub const MOD_PREFIX: &str = "ModMessages";

/// Extension shared by all message resources.
pub const PROPERTIES_SUFFIX: &str = ".properties";

/// Candidate resource file names for `prefix` and `locale`, most general first.
///
/// # Examples
///
/// ```rust
/// use freecol_messages::{Locale, message_file_names};
///
/// assert_eq!(
///     message_file_names("FreeColMessages", &Locale::parse("en_US")),
///     [
///         "FreeColMessages.properties",
///         "FreeColMessages_en.properties",
///         "FreeColMessages_en_US.properties",
///     ]
/// );
/// ```
#[must_use]
pub fn message_file_names(prefix: &str, locale: &Locale) -> Vec<String> {
    locale
        .file_suffixes()
        .into_iter()
        .map(|suffix| format!("{prefix}{suffix}{PROPERTIES_SUFFIX}"))
        .collect()
}

/// Message keys mapped to their raw patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBundle {
    entries: HashMap<String, String>,
}

impl MessageBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses properties text into a fresh bundle.
    #[must_use]
    pub fn from_properties(text: &str) -> Self {
        let mut bundle = Self::new();
        bundle.merge_properties(text);
        bundle
    }

    /// Raw pattern stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` when `key` has a pattern.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `pattern` under `key`, returning the pattern it replaced.
    pub fn insert(&mut self, key: impl Into<String>, pattern: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), pattern.into())
    }

    /// Number of keys in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the bundle holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key and pattern pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, pattern)| (key.as_str(), pattern.as_str()))
    }

    /// Parses properties text over the bundle; later keys win.
    ///
    /// Returns the number of entries read.
    pub fn merge_properties(&mut self, text: &str) -> usize {
        let mut count = 0;
        for (key, value) in properties::parse(text) {
            self.entries.insert(key.to_owned(), value);
            count += 1;
        }
        count
    }

    /// Copies every entry of `other` over the bundle.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}

impl FromIterator<(String, String)> for MessageBundle {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, String)> for MessageBundle {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for MessageBundle {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &["ModMessages.properties"])]
    #[case("de", &["ModMessages.properties", "ModMessages_de.properties"])]
    #[case(
        "en_US_POSIX",
        &[
            "ModMessages.properties",
            "ModMessages_en.properties",
            "ModMessages_en_US.properties",
            "ModMessages_en_US_POSIX.properties",
        ]
    )]
    fn file_names_follow_locale_parts(#[case] tag: &str, #[case] expected: &[&str]) {
        assert_eq!(message_file_names(MOD_PREFIX, &Locale::parse(tag)), expected);
    }

    #[rstest]
    fn later_properties_override_earlier_keys() {
        let mut bundle = MessageBundle::from_properties("a=1\nb=2");
        let read = bundle.merge_properties("b=3\nc=4");
        assert_eq!(read, 2);
        assert_eq!(bundle.get("a"), Some("1"));
        assert_eq!(bundle.get("b"), Some("3"));
        assert_eq!(bundle.get("c"), Some("4"));
        assert_eq!(bundle.len(), 3);
    }

    #[rstest]
    fn merge_layers_other_bundles() {
        let mut base: MessageBundle = [(String::from("a"), String::from("base"))]
            .into_iter()
            .collect();
        base.merge(MessageBundle::from_properties("a=mod\nb=new"));
        assert_eq!(base.get("a"), Some("mod"));
        assert!(base.contains_key("b"));
    }
}
