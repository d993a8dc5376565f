//! Language code to grammatical-number lookup, read from CLDR data.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use camino::Utf8Path;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{Category, DefaultNumberRule, NumberRule, Rule};
use crate::{MessagesError, MessagesResult};

const EMBEDDED_PLURALS: &str = include_str!("../../data/plurals.xml");

static EMBEDDED: LazyLock<Arc<PluralRegistry>> = LazyLock::new(|| {
    let mut registry = PluralRegistry::new();
    if let Err(err) = registry.read_from_xml(EMBEDDED_PLURALS) {
        tracing::error!(error = %err, "embedded CLDR plural data is invalid");
    }
    Arc::new(registry)
});

/// Grammatical-number rules keyed by ISO language code.
///
/// The registry is filled once from a CLDR `plurals.xml` document and is
/// read-only afterwards. Unknown languages resolve to [`NumberRule::Other`].
#[derive(Debug, Default)]
pub struct PluralRegistry {
    numbers: HashMap<String, Arc<NumberRule>>,
}

impl PluralRegistry {
    /// Creates an empty, uninitialised registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared registry parsed from the CLDR data bundled with the crate.
    ///
    /// The document is parsed on first use and cached for the life of the
    /// process.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freecol_messages::{Category, PluralRegistry};
    ///
    /// let registry = PluralRegistry::embedded();
    /// assert_eq!(registry.number_for_language("en").category(1.0), Category::One);
    /// assert_eq!(registry.number_for_language("ja").category(1.0), Category::Other);
    /// ```
    #[must_use]
    pub fn embedded() -> Arc<Self> {
        Arc::clone(&EMBEDDED)
    }

    /// Builds a registry from a CLDR plural rule document.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::PluralsXml`] for malformed XML or unknown
    /// categories and [`MessagesError::RuleSyntax`] for malformed rules.
    pub fn from_xml(xml: &str) -> MessagesResult<Self> {
        let mut registry = Self::new();
        registry.read_from_xml(xml)?;
        Ok(registry)
    }

    /// Reads a CLDR plural rule document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::File`] when the file cannot be read, otherwise
    /// the errors of [`PluralRegistry::from_xml`].
    pub fn from_file(path: &Utf8Path) -> MessagesResult<Self> {
        let xml = crate::fs_helpers::read_file(path)?;
        Self::from_xml(&xml)
    }

    /// Parses `xml` into the registry unless it already holds rules.
    ///
    /// The registry is only extended once the whole document has parsed, so
    /// a failure leaves it unchanged.
    ///
    /// # Errors
    ///
    /// See [`PluralRegistry::from_xml`].
    pub fn read_from_xml(&mut self, xml: &str) -> MessagesResult<()> {
        if self.is_initialized() {
            tracing::debug!("plural rules already loaded; skipping");
            return Ok(());
        }
        let numbers = parse_plurals(xml)?;
        tracing::debug!(languages = numbers.len(), "loaded CLDR plural rules");
        self.numbers.extend(numbers);
        Ok(())
    }

    /// Returns `true` once any language has been registered.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.numbers.is_empty()
    }

    /// Classifier for `language`, or [`NumberRule::Other`] when unknown.
    #[must_use]
    pub fn number_for_language(&self, language: &str) -> Arc<NumberRule> {
        self.numbers
            .get(language)
            .cloned()
            .unwrap_or_else(|| Arc::new(NumberRule::Other))
    }

    /// Registers `number` for `language`, replacing any earlier entry.
    pub fn register(&mut self, language: impl Into<String>, number: Arc<NumberRule>) {
        self.numbers.insert(language.into(), number);
    }

    /// Languages with a registered classifier, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.numbers.keys().map(String::as_str)
    }
}

/// Rules gathered for one `<pluralRules>` element.
struct PendingRules {
    locales: Vec<String>,
    number: DefaultNumberRule,
}

impl PendingRules {
    fn open(element: &BytesStart<'_>) -> MessagesResult<Self> {
        let locales = required_attribute(element, "locales")?
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        Ok(Self {
            locales,
            number: DefaultNumberRule::new(),
        })
    }

    fn add(&mut self, count: &str, text: &str) -> MessagesResult<()> {
        let category: Category = count
            .parse()
            .map_err(|err: super::UnknownCategory| MessagesError::plurals_xml(err.to_string()))?;
        self.number.add_rule(category, Rule::parse(text.trim())?);
        Ok(())
    }

    fn close(self, numbers: &mut HashMap<String, Arc<NumberRule>>) {
        let number = Arc::new(self.number.classify());
        for locale in self.locales {
            numbers.insert(locale, Arc::clone(&number));
        }
    }
}

fn parse_plurals(xml: &str) -> MessagesResult<HashMap<String, Arc<NumberRule>>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut numbers = HashMap::new();
    let mut pending: Option<PendingRules> = None;
    let mut count: Option<String> = None;
    let mut text = String::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(element) => match element.name().as_ref() {
                b"pluralRules" => pending = Some(PendingRules::open(&element)?),
                b"pluralRule" => {
                    count = Some(required_attribute(&element, "count")?);
                    text.clear();
                }
                _ => {}
            },
            Event::Empty(element) => {
                if element.name().as_ref() == b"pluralRules" {
                    PendingRules::open(&element)?.close(&mut numbers);
                }
            }
            Event::Text(content) => {
                if count.is_some() {
                    text.push_str(&content.unescape().map_err(xml_error)?);
                }
            }
            Event::End(element) => match element.name().as_ref() {
                b"pluralRule" => {
                    if let (Some(rules), Some(category)) = (pending.as_mut(), count.take()) {
                        rules.add(&category, &text)?;
                    }
                }
                b"pluralRules" => {
                    if let Some(rules) = pending.take() {
                        rules.close(&mut numbers);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(numbers)
}

fn required_attribute(element: &BytesStart<'_>, name: &str) -> MessagesResult<String> {
    let attribute = element.try_get_attribute(name).map_err(xml_error)?.ok_or_else(|| {
        MessagesError::plurals_xml(format!(
            "<{}> is missing the '{name}' attribute",
            String::from_utf8_lossy(element.name().as_ref())
        ))
    })?;
    let value = attribute.unescape_value().map_err(xml_error)?;
    Ok(value.into_owned())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a map_err adapter for several quick-xml error types"
)]
fn xml_error(err: impl std::fmt::Display) -> MessagesError {
    MessagesError::plurals_xml(err.to_string())
}
