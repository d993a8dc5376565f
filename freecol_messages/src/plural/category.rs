//! The six CLDR plural categories.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// CLDR plural category.
///
/// The declaration order is the evaluation order used by
/// [`DefaultNumberRule`](super::DefaultNumberRule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Zero items (Arabic, Latvian, Welsh).
    Zero,
    /// Singular.
    One,
    /// Dual.
    Two,
    /// Paucal forms (Slavic languages, Arabic).
    Few,
    /// Larger counts in languages that distinguish them.
    Many,
    /// Everything else; never carries an explicit rule.
    Other,
}

/// Returned when a category name is not one of the six CLDR names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plural category '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category in evaluation order.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// Lowercase CLDR name, as used for choice-format keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}
