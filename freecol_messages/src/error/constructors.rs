//! Constructors shared by the parsing and loading helpers.

use std::error::Error;

use camino::Utf8Path;

use super::MessagesError;

impl MessagesError {
    /// Builds a [`MessagesError::RuleSyntax`] for `rule`.
    pub(crate) fn rule_syntax(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RuleSyntax {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Replaces the rule text recorded on a syntax error, keeping the message.
    ///
    /// Relations only see their own tokens; the enclosing rule reattaches the
    /// full text so the error points at the whole definition.
    #[must_use]
    pub(crate) fn with_rule(self, rule: &str) -> Self {
        match self {
            Self::RuleSyntax { message, .. } => Self::rule_syntax(rule, message),
            other => other,
        }
    }

    /// Builds a [`MessagesError::PluralsXml`].
    pub(crate) fn plurals_xml(message: impl Into<String>) -> Self {
        Self::PluralsXml {
            message: message.into(),
        }
    }

    /// Builds a [`MessagesError::File`] for `path`.
    pub(crate) fn file(path: &Utf8Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: err.into(),
        }
    }

    /// Wraps a figment failure as [`MessagesError::Config`].
    pub(crate) fn config(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
