//! Grammatical-number classifiers.

use std::collections::BTreeMap;

use super::{Category, Rule};

const PLURAL_ONE: &str = "n is 1";
const DUAL_TWO: &str = "n is 2";
const ZERO_ONE: &str = "n in 0..1";

/// Classifier built from a CLDR `<pluralRules>` definition.
///
/// Categories are tried in [`Category`] order and the first matching rule
/// wins; values matching no rule fall into [`Category::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultNumberRule {
    rules: BTreeMap<Category, Rule>,
}

impl DefaultNumberRule {
    /// Creates a classifier without rules, which maps everything to `other`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` for `category`, replacing any earlier rule.
    ///
    /// Rules for [`Category::Other`] are ignored: `other` is the implicit
    /// default and never carries an explicit rule.
    pub fn add_rule(&mut self, category: Category, rule: Rule) {
        if category == Category::Other {
            tracing::debug!(rule = %rule, "ignoring explicit rule for category 'other'");
            return;
        }
        self.rules.insert(category, rule);
    }

    /// Rule registered for `category`, if any.
    #[must_use]
    pub fn rule(&self, category: Category) -> Option<&Rule> {
        self.rules.get(&category)
    }

    /// Number of categories carrying a rule.
    #[must_use]
    pub fn count_rules(&self) -> usize {
        self.rules.len()
    }

    /// Category for `value`.
    #[must_use]
    pub fn category(&self, value: f64) -> Category {
        Category::ALL
            .into_iter()
            .find(|category| {
                self.rules
                    .get(category)
                    .is_some_and(|rule| rule.matches(value))
            })
            .unwrap_or(Category::Other)
    }

    /// Replaces common rule shapes with the equivalent canned classifier.
    ///
    /// No rules gives [`NumberRule::Other`]; a lone `one` rule of `n is 1` or
    /// `n in 0..1` gives [`NumberRule::Plural`] or [`NumberRule::ZeroOne`];
    /// `one = n is 1` with `two = n is 2` gives [`NumberRule::Dual`].
    /// Everything else stays a [`NumberRule::Cldr`].
    #[must_use]
    pub fn classify(self) -> NumberRule {
        let rule_text = |category| self.rule(category).map(ToString::to_string);
        match self.count_rules() {
            0 => NumberRule::Other,
            1 => match rule_text(Category::One).as_deref() {
                Some(PLURAL_ONE) => NumberRule::Plural,
                Some(ZERO_ONE) => NumberRule::ZeroOne,
                _ => NumberRule::Cldr(self),
            },
            2 => match (
                rule_text(Category::One).as_deref(),
                rule_text(Category::Two).as_deref(),
            ) {
                (Some(PLURAL_ONE), Some(DUAL_TWO)) => NumberRule::Dual,
                _ => NumberRule::Cldr(self),
            },
            _ => NumberRule::Cldr(self),
        }
    }
}

/// Maps a cardinal value to its grammatical [`Category`] for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NumberRule {
    /// Every value is `other`; the fallback for unknown languages.
    #[default]
    Other,
    /// `1` is `one`, everything else `other` (English-like).
    Plural,
    /// `1` is `one`, `2` is `two`, everything else `other`.
    Dual,
    /// `0` and `1` are `one`, everything else `other` (French-like).
    ZeroOne,
    /// Rules taken verbatim from CLDR.
    Cldr(DefaultNumberRule),
}

impl NumberRule {
    /// Category for `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freecol_messages::{Category, NumberRule};
    ///
    /// assert_eq!(NumberRule::Plural.category(1.0), Category::One);
    /// assert_eq!(NumberRule::Plural.category(0.0), Category::Other);
    /// assert_eq!(NumberRule::Dual.category(2.0), Category::Two);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "canned classifiers compare against exact small integers"
    )]
    pub fn category(&self, value: f64) -> Category {
        match self {
            Self::Other => Category::Other,
            Self::Plural if value == 1.0 => Category::One,
            Self::Dual if value == 1.0 => Category::One,
            Self::Dual if value == 2.0 => Category::Two,
            Self::ZeroOne if value == 0.0 || value == 1.0 => Category::One,
            Self::Plural | Self::Dual | Self::ZeroOne => Category::Other,
            Self::Cldr(rule) => rule.category(value),
        }
    }

    /// Category name for `value`, as used by choice-format keys.
    #[must_use]
    pub fn category_key(&self, value: f64) -> &'static str {
        self.category(value).as_str()
    }
}
