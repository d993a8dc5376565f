//! Locale identifiers in the `language_COUNTRY_VARIANT` form used by
//! resource file names.

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::{MessagesError, MessagesResult};

/// Language, country, and variant of a resource locale.
///
/// The language is stored lowercase and the country uppercase; the variant
/// keeps the caller's spelling so `en_US_POSIX` maps onto
/// `FreeColMessages_en_US_POSIX.properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    /// Builds a locale from its parts.
    #[must_use]
    pub fn new(language: &str, country: &str, variant: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: country.to_ascii_uppercase(),
            variant: variant.to_owned(),
        }
    }

    /// Splits a tag such as `en_US_POSIX` or `pt-BR` into its parts.
    ///
    /// This never fails: empty parts are kept empty, so `en__POSIX` has a
    /// variant but no country. Use [`str::parse`] to validate the tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freecol_messages::Locale;
    ///
    /// let locale = Locale::parse("en_US_POSIX");
    /// assert_eq!(locale.language(), "en");
    /// assert_eq!(locale.country(), "US");
    /// assert_eq!(locale.variant(), "POSIX");
    /// assert_eq!(locale.to_string(), "en_US_POSIX");
    /// ```
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let mut parts = tag.trim().splitn(3, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.next().unwrap_or_default();
        Self::new(language, country, variant)
    }

    /// Lowercase ISO language code; empty for the root locale.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase ISO country code, possibly empty.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Variant, possibly empty.
    #[must_use]
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Resource file name suffixes from most general to most specific.
    ///
    /// The root suffix (`""`) always comes first; each further entry adds the
    /// next non-empty part.
    #[must_use]
    pub fn file_suffixes(&self) -> Vec<String> {
        let mut suffixes = vec![String::new()];
        if self.language.is_empty() {
            return suffixes;
        }
        suffixes.push(format!("_{}", self.language));
        if !self.country.is_empty() {
            suffixes.push(format!("_{}_{}", self.language, self.country));
        }
        if !self.variant.is_empty() {
            suffixes.push(format!("_{}_{}_{}", self.language, self.country, self.variant));
        }
        suffixes
    }

    /// Converts to a BCP 47 language identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::InvalidLocale`] when the parts are not valid
    /// BCP 47 subtags.
    pub fn to_language_identifier(&self) -> MessagesResult<LanguageIdentifier> {
        let tag = [self.language(), self.country(), self.variant()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        tag.parse().map_err(|err: unic_langid::LanguageIdentifierError| {
            MessagesError::InvalidLocale {
                value: self.to_string(),
                message: err.to_string(),
            }
        })
    }
}

impl FromStr for Locale {
    type Err = MessagesError;

    /// Validates `s` as a BCP 47 tag (accepting `_` separators) before
    /// splitting it with [`Locale::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .replace('_', "-")
            .parse::<LanguageIdentifier>()
            .map_err(|err| MessagesError::InvalidLocale {
                value: s.to_owned(),
                message: err.to_string(),
            })?;
        Ok(Self::parse(s))
    }
}

impl From<&LanguageIdentifier> for Locale {
    fn from(id: &LanguageIdentifier) -> Self {
        let variant = id
            .variants()
            .map(|variant| variant.as_str().to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join("_");
        Self::new(
            id.language.as_str(),
            id.region.as_ref().map_or("", |region| region.as_str()),
            &variant,
        )
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}
