//! Resolution of message keys, templates, and choice spans against a bundle.
//!
//! Everything here degrades instead of failing: missing keys resolve to
//! themselves and malformed spans are logged and dropped.

use crate::{MessageBundle, StringTemplate, TagMap};

mod scan;

use scan::{Choice, Segment};

/// Selector used when a span has none or no template is available.
const DEFAULT_SELECTOR: &str = "default";

/// Borrowed view of a bundle and its selector tags.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolver<'a> {
    bundle: &'a MessageBundle,
    tags: &'a TagMap,
}

impl<'a> Resolver<'a> {
    pub(crate) const fn new(bundle: &'a MessageBundle, tags: &'a TagMap) -> Self {
        Self { bundle, tags }
    }

    /// Resolved, trimmed text for `key`, or `key` itself when it is missing.
    pub(crate) fn message(&self, key: &str) -> String {
        self.bundle.get(key).map_or_else(
            || key.to_owned(),
            |pattern| self.replace_choices(pattern, None).trim().to_owned(),
        )
    }

    pub(crate) fn message_template(&self, template: &StringTemplate) -> String {
        match template {
            StringTemplate::Name { id } => id.clone(),
            StringTemplate::Key { id } => self
                .bundle
                .get(id)
                .map_or_else(|| id.clone(), |pattern| self.replace_choices(pattern, None)),
            StringTemplate::Label {
                separator,
                children,
            } => self.label(separator, children),
            StringTemplate::Template {
                id, default_id, ..
            } => {
                let pattern = self
                    .bundle
                    .get(id)
                    .or_else(|| default_id.as_deref().and_then(|key| self.bundle.get(key)))
                    .unwrap_or(id.as_str());
                self.fill(pattern, template)
            }
        }
    }

    /// Resolves `pattern` with `template` supplying `%variable%` values.
    ///
    /// Choice spans are expanded first; every placeholder left in the result
    /// is then replaced by its resolved replacement.
    pub(crate) fn fill(&self, pattern: &str, template: &StringTemplate) -> String {
        let mut result = self.replace_choices(pattern, Some(template));
        if let StringTemplate::Template { replacements, .. } = template {
            for (key, replacement) in replacements {
                if !key.is_empty() && result.contains(key.as_str()) {
                    result = result.replace(key.as_str(), &self.message_template(replacement));
                }
            }
        }
        result
    }

    fn label(&self, separator: &str, children: &[StringTemplate]) -> String {
        if children.is_empty() {
            return self.message(separator);
        }
        let mut joined = String::new();
        for child in children {
            joined.push_str(separator);
            joined.push_str(&self.message_template(child));
        }
        if joined.len() <= separator.len() {
            tracing::warn!(separator, label = %joined, "label is no longer than its separator");
            return String::new();
        }
        joined.strip_prefix(separator).unwrap_or(joined.as_str()).to_owned()
    }

    /// Expands every `{{tag:selector|...}}` span in `input`.
    pub(crate) fn replace_choices(&self, input: &str, template: Option<&StringTemplate>) -> String {
        let mut output = String::with_capacity(input.len());
        for segment in scan::parse_segments(input) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Choice(choice) => self.resolve_choice(&choice, input, template, &mut output),
                Segment::Malformed { span, problem } => {
                    tracing::warn!(pattern = input, span, "{}; dropping it", problem.describe());
                }
                Segment::Unterminated => {
                    tracing::warn!(pattern = input, "mismatched choice brackets; dropping the rest");
                }
            }
        }
        output
    }

    fn resolve_choice(
        &self,
        choice: &Choice<'_>,
        input: &str,
        template: Option<&StringTemplate>,
        output: &mut String,
    ) {
        let Some(selector) = self.selector_key(choice, input, template) else {
            return;
        };
        match scan::branch_text(choice.body, &selector) {
            Some(branch) => self.push_branch(branch, template, output),
            None => self.fallback(choice, &selector, template, output),
        }
    }

    fn push_branch(&self, branch: &str, template: Option<&StringTemplate>, output: &mut String) {
        if branch.contains("{{") {
            output.push_str(&self.replace_choices(branch, template));
        } else {
            output.push_str(branch);
        }
    }

    /// Branch key selected by the span, or `None` when the span is dropped.
    fn selector_key(
        &self,
        choice: &Choice<'_>,
        input: &str,
        template: Option<&StringTemplate>,
    ) -> Option<String> {
        let selector = choice.selector;
        if selector.is_empty() {
            return Some(DEFAULT_SELECTOR.to_owned());
        }
        if !is_variable(selector) {
            return Some(self.select(choice.tag, selector, input));
        }
        let Some(context) = template else {
            return Some(DEFAULT_SELECTOR.to_owned());
        };
        let Some(replacement) = context.replacement(selector) else {
            tracing::warn!(
                pattern = input,
                variable = selector,
                "no replacement for choice selector; dropping span"
            );
            return None;
        };
        let value = self.message_template(replacement);
        Some(self.select(choice.tag, &value, input))
    }

    fn select(&self, tag: &str, value: &str, context: &str) -> String {
        self.tags
            .get(tag)
            .map_or_else(|| value.to_owned(), |selector| selector.key(value, context))
    }

    /// Handles a span whose body has no branch labelled `selector`.
    ///
    /// In order: a `%variable%` body naming a KEY replacement, a body that is
    /// itself a message key, then a `default=` branch. Anything else is
    /// dropped with a warning.
    fn fallback(
        &self,
        choice: &Choice<'_>,
        selector: &str,
        template: Option<&StringTemplate>,
        output: &mut String,
    ) {
        let body = choice.body;
        if let Some(context) = template.filter(|_| is_variable(body)) {
            self.fallback_through_replacement(body, selector, context, output);
            return;
        }
        if let Some(pattern) = self.bundle.get(body) {
            match scan::choice_value(pattern, selector) {
                Some(value) => output.push_str(value),
                None => tracing::warn!(key = body, selector, "referenced message has no such choice"),
            }
            return;
        }
        if let Some(value) = scan::default_branch(body) {
            tracing::debug!(body, selector, "no branch for selector; using 'default'");
            output.push_str(value);
            return;
        }
        tracing::warn!(
            tag = choice.tag,
            body,
            selector,
            "unknown key or untagged choice and no default; dropping span"
        );
    }

    fn fallback_through_replacement(
        &self,
        variable: &str,
        selector: &str,
        template: &StringTemplate,
        output: &mut String,
    ) {
        let id = match template.replacement(variable) {
            Some(StringTemplate::Key { id }) => id,
            Some(other) => {
                tracing::warn!(
                    variable,
                    replacement = %other,
                    "choice fallback needs a KEY replacement; dropping span"
                );
                return;
            }
            None => {
                tracing::warn!(variable, "no replacement for choice body; dropping span");
                return;
            }
        };
        let Some(raw) = self.bundle.get(id) else {
            tracing::warn!(key = %id, variable, "replacement key is missing; dropping span");
            return;
        };
        let Some(open) = raw.find("{{") else {
            output.push_str(raw);
            return;
        };
        let value = raw
            .get(open..)
            .filter(|choices| choices.contains(selector))
            .and_then(|_| scan::choice_value(raw, selector));
        match value {
            Some(value) => output.push_str(value),
            None => tracing::warn!(key = %id, selector, "replacement message has no such choice"),
        }
    }
}

/// Returns `true` for `%name%` placeholders.
fn is_variable(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('%') && text.ends_with('%')
}

#[cfg(test)]
mod tests;
