//! Turning a choice-format selector into the key of a branch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::plural::{Category, NumberRule};

/// Selectors registered by choice-format tag (`plural` in `{{plural:...}}`).
pub type TagMap = HashMap<String, Arc<dyn Selector>>;

/// Maps the selector of a `{{tag:selector|...}}` block to a branch key.
///
/// `context` is the pattern being resolved; implementations only use it for
/// diagnostics.
pub trait Selector: Send + Sync + fmt::Debug {
    /// Resolves `selector` to the key of the branch that should be used.
    fn key(&self, selector: &str, context: &str) -> String;
}

impl Selector for NumberRule {
    fn key(&self, selector: &str, context: &str) -> String {
        match selector.trim().parse::<f64>() {
            Ok(value) => self.category_key(value).to_owned(),
            Err(err) => {
                tracing::warn!(
                    selector,
                    pattern = context,
                    error = %err,
                    "plural selector is not a number; using 'other'"
                );
                Category::Other.as_str().to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", "one")]
    #[case(" 1 ", "one")]
    #[case("1.0", "one")]
    #[case("5", "other")]
    #[case("1.5", "other")]
    fn number_rules_select_by_category(#[case] selector: &str, #[case] expected: &str) {
        assert_eq!(Selector::key(&NumberRule::Plural, selector, "ctx"), expected);
    }

    #[rstest]
    fn unparsable_selectors_fall_back_to_other() {
        assert_eq!(
            Selector::key(&NumberRule::Plural, "several", "{{plural:several|one=x}}"),
            "other"
        );
    }

    #[rstest]
    fn tag_map_dispatches_through_trait_objects() {
        let mut tags = TagMap::new();
        tags.insert(String::from("plural"), Arc::new(NumberRule::Dual));
        let selector = tags.get("plural").expect("plural tag should be registered");
        assert_eq!(selector.key("2", ""), "two");
    }
}
