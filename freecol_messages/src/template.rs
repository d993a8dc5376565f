//! Structured message composition.

use std::fmt;

/// A message described structurally rather than as a flat string.
///
/// Game code builds these and hands them to
/// [`Messages::message_template`](crate::Messages::message_template), which
/// resolves every nested template against the active bundle.
///
/// # Examples
///
/// ```rust
/// use freecol_messages::StringTemplate;
///
/// let template = StringTemplate::template("model.unit.arrive")
///     .add_key("%unit%", "model.unit.freeColonist")
///     .add_amount("%number%", 3);
/// assert_eq!(
///     template.replacement("%number%"),
///     Some(&StringTemplate::name("3"))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringTemplate {
    /// Literal text that is never looked up.
    Name {
        /// Text passed through unchanged.
        id: String,
    },
    /// A single message key, resolved without template context.
    Key {
        /// Message key.
        id: String,
    },
    /// Children resolved independently and joined with `separator`.
    ///
    /// A label without children resolves `separator` as a message key.
    Label {
        /// Text placed between resolved children.
        separator: String,
        /// Templates to resolve and join.
        children: Vec<Self>,
    },
    /// A keyed pattern whose `%variable%` placeholders are replaced.
    Template {
        /// Message key holding the pattern.
        id: String,
        /// Key used when `id` is missing from the bundle.
        default_id: Option<String>,
        /// Placeholder (including the `%` signs) and its replacement.
        replacements: Vec<(String, Self)>,
    },
}

impl StringTemplate {
    /// Literal text.
    #[must_use]
    pub fn name(id: impl Into<String>) -> Self {
        Self::Name { id: id.into() }
    }

    /// Reference to a message key.
    #[must_use]
    pub fn key(id: impl Into<String>) -> Self {
        Self::Key { id: id.into() }
    }

    /// Empty label joining its children with `separator`.
    #[must_use]
    pub fn label(separator: impl Into<String>) -> Self {
        Self::Label {
            separator: separator.into(),
            children: Vec::new(),
        }
    }

    /// Pattern template for message key `id`.
    #[must_use]
    pub fn template(id: impl Into<String>) -> Self {
        Self::Template {
            id: id.into(),
            default_id: None,
            replacements: Vec::new(),
        }
    }

    /// Sets the key used when the template's own key is missing.
    ///
    /// Only templates carry a default; other variants are returned unchanged.
    #[must_use]
    pub fn with_default_id(mut self, default: impl Into<String>) -> Self {
        match &mut self {
            Self::Template { default_id, .. } => *default_id = Some(default.into()),
            other => tracing::warn!(template = %other, "only templates carry a default id"),
        }
        self
    }

    /// Replaces `key` with literal text.
    #[must_use]
    pub fn add_name(self, key: &str, value: impl Into<String>) -> Self {
        self.add_string_template(key, Self::name(value))
    }

    /// Replaces `key` with the resolution of message key `id`.
    #[must_use]
    pub fn add_key(self, key: &str, id: impl Into<String>) -> Self {
        self.add_string_template(key, Self::key(id))
    }

    /// Replaces `key` with a number, which also drives `plural` selectors.
    #[must_use]
    pub fn add_amount(self, key: &str, amount: impl fmt::Display) -> Self {
        self.add_string_template(key, Self::name(amount.to_string()))
    }

    /// Replaces `key` with a nested template.
    ///
    /// Labels ignore `key` and append `replacement` as a child; names and
    /// keys take no replacements and are returned unchanged.
    #[must_use]
    pub fn add_string_template(mut self, key: &str, replacement: Self) -> Self {
        match &mut self {
            Self::Template { replacements, .. } => {
                replacements.push((key.to_owned(), replacement));
            }
            Self::Label { children, .. } => children.push(replacement),
            Self::Name { id } | Self::Key { id } => {
                tracing::warn!(id = %id, key, "names and keys take no replacements");
            }
        }
        self
    }

    /// Appends literal text to a label.
    #[must_use]
    pub fn add_child_name(self, value: impl Into<String>) -> Self {
        self.add_string_template("", Self::name(value))
    }

    /// Appends a message key to a label.
    #[must_use]
    pub fn add_child_key(self, id: impl Into<String>) -> Self {
        self.add_string_template("", Self::key(id))
    }

    /// Appends a nested template to a label.
    #[must_use]
    pub fn add_child(self, child: Self) -> Self {
        self.add_string_template("", child)
    }

    /// Key (or separator, for labels) identifying the template.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Name { id } | Self::Key { id } | Self::Template { id, .. } => id,
            Self::Label { separator, .. } => separator,
        }
    }

    /// Replacement registered for placeholder `key` on a template.
    ///
    /// The first registration wins when a placeholder was added twice.
    #[must_use]
    pub fn replacement(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Template { replacements, .. } => replacements
                .iter()
                .find(|(placeholder, _)| placeholder == key)
                .map(|(_, replacement)| replacement),
            _ => None,
        }
    }
}

impl fmt::Display for StringTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name { id } => write!(f, "NAME {id}"),
            Self::Key { id } => write!(f, "KEY {id}"),
            Self::Label {
                separator,
                children,
            } => {
                write!(f, "LABEL {separator:?} [")?;
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str("]")
            }
            Self::Template {
                id,
                default_id,
                replacements,
            } => {
                write!(f, "TEMPLATE {id}")?;
                if let Some(default) = default_id {
                    write!(f, " (default {default})")?;
                }
                f.write_str(" [")?;
                for (index, (key, replacement)) in replacements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={replacement}")?;
                }
                f.write_str("]")
            }
        }
    }
}
