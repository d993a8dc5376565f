//! Primary error enum for the message engine.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type MessagesResult<T> = Result<T, MessagesError>;

/// Errors surfaced while building plural rules, reading resources, or
/// gathering configuration.
///
/// Message lookups never return these: missing keys and malformed choice
/// spans degrade to the key or the surrounding text and are only logged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MessagesError {
    /// A CLDR rule or relation could not be parsed.
    #[error("invalid plural rule '{rule}': {message}")]
    RuleSyntax {
        /// Rule text (or the remaining relation tokens) that failed to parse.
        rule: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// The CLDR plural rule document was malformed.
    #[error("invalid CLDR plural data: {message}")]
    PluralsXml {
        /// Explanation reported by the XML reader or the rule classifier.
        message: String,
    },

    /// A resource file existed but could not be read.
    #[error("resource file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the filesystem.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration could not be gathered from its providers.
    #[error("failed to gather configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// A locale tag was rejected.
    #[error("invalid locale '{value}': {message}")]
    InvalidLocale {
        /// Tag supplied by the caller.
        value: String,
        /// Explanation reported by the language identifier parser.
        message: String,
    },
}
