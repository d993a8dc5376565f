//! Tests for choice expansion and template resolution.

use std::sync::Arc;

use super::*;
use crate::NumberRule;
use rstest::{fixture, rstest};
use test_helpers::logs::capture_events;

struct Fixture {
    bundle: MessageBundle,
    tags: TagMap,
}

impl Fixture {
    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.bundle, &self.tags)
    }
}

#[fixture]
fn english() -> Fixture {
    let bundle = MessageBundle::from_properties(concat!(
        "greet={{plural:%n%|one=one thing|other=%n% things}}\n",
        "key2={{plural:%amount%|one=singular|other={{tag:|acc=X|default=Y}}}}\n",
        "padded={{plural:1|one=  spaced out  |other=no}}\n",
        "model.unit.colonist={{plural:|one=colonist|other=colonists}}\n",
        "model.unit.soldier=soldier\n",
        "unit.count=%number% {{plural:%number%|%unit%}}\n",
        "unit.direct={{plural:%n%|model.unit.colonist}}\n",
        "fallback.pattern=fallback %x%\n",
        "b=Bee\n",
        "separator.key=joined by key\n",
    ));
    let mut tags = TagMap::new();
    tags.insert(String::from("plural"), Arc::new(NumberRule::Plural));
    Fixture { bundle, tags }
}

#[rstest]
#[case(1, "one thing")]
#[case(5, "5 things")]
#[case(0, "0 things")]
fn simple_choice_follows_plural_category(english: Fixture, #[case] n: i32, #[case] expected: &str) {
    let template = StringTemplate::template("greet").add_amount("%n%", n);
    assert_eq!(english.resolver().message_template(&template), expected);
}

#[rstest]
fn nested_choice_falls_back_to_default(english: Fixture) {
    let template = StringTemplate::template("key2").add_amount("%amount%", 3);
    assert_eq!(english.resolver().message_template(&template), "Y");
}

#[rstest]
fn nested_choice_takes_outer_branch(english: Fixture) {
    let template = StringTemplate::template("key2").add_amount("%amount%", 1);
    assert_eq!(english.resolver().message_template(&template), "singular");
}

#[rstest]
fn missing_keys_resolve_to_themselves(english: Fixture) {
    let resolver = english.resolver();
    assert_eq!(resolver.message("no.such.key"), "no.such.key");
    assert_eq!(
        resolver.message_template(&StringTemplate::key("no.such.key")),
        "no.such.key"
    );
}

#[rstest]
fn message_trims_resolved_text(english: Fixture) {
    assert_eq!(english.resolver().message("padded"), "spaced out");
}

#[rstest]
#[case("plain text", "plain text")]
#[case("{{plural:2|one=a|other=b}}", "b")]
#[case("{{plural:1|one=a|other=b}}", "a")]
#[case("{{tag:|a=x|default=y}}", "y")]
#[case("{{plural:%n%|one=x|default=d}}", "d")]
#[case("a {{nocolon}} b", "a  b")]
#[case("a {{plural:1}} b", "a  b")]
#[case("before {{plural:1|one=x", "before ")]
#[case("{{tag:x|only}}", "")]
#[case("[{{tag:x|a=1|b=2}}]", "[]")]
#[case("{{plural:2|one=a|other=b}} and {{plural:1|one=c|other=d}}", "b and c")]
fn replace_choices_without_template(
    english: Fixture,
    #[case] input: &str,
    #[case] expected: &str,
) {
    assert_eq!(english.resolver().replace_choices(input, None), expected);
}

#[rstest]
fn missing_selector_replacement_drops_span(english: Fixture) {
    let template = StringTemplate::template("t").add_amount("%n%", 1);
    assert_eq!(
        english
            .resolver()
            .replace_choices("x {{plural:%m%|one=a}} y", Some(&template)),
        "x  y"
    );
}

#[rstest]
#[case(1, "A")]
#[case(2, "B")]
fn nested_branch_is_resolved_with_the_same_template(
    english: Fixture,
    #[case] m: i32,
    #[case] expected: &str,
) {
    let template = StringTemplate::template("t")
        .add_amount("%n%", 1)
        .add_amount("%m%", m);
    assert_eq!(
        english.resolver().replace_choices(
            "{{plural:%n%|one={{plural:%m%|one=A|other=B}}|other=C}}",
            Some(&template)
        ),
        expected
    );
}

#[rstest]
#[case(1, "1 colonist")]
#[case(4, "4 colonists")]
fn key_replacement_supplies_the_choices(
    english: Fixture,
    #[case] number: i32,
    #[case] expected: &str,
) {
    let template = StringTemplate::template("unit.count")
        .add_amount("%number%", number)
        .add_key("%unit%", "model.unit.colonist");
    assert_eq!(english.resolver().message_template(&template), expected);
}

#[rstest]
fn key_replacement_without_choices_is_used_verbatim(english: Fixture) {
    let template = StringTemplate::template("unit.count")
        .add_amount("%number%", 2)
        .add_key("%unit%", "model.unit.soldier");
    assert_eq!(english.resolver().message_template(&template), "2 soldier");
}

#[rstest]
fn name_replacement_cannot_supply_choices(english: Fixture) {
    let template = StringTemplate::template("unit.count")
        .add_amount("%number%", 2)
        .add_name("%unit%", "settlers");
    assert_eq!(english.resolver().message_template(&template), "2 ");
}

#[rstest]
#[case(1, "colonist")]
#[case(3, "colonists")]
fn message_key_body_supplies_the_choices(
    english: Fixture,
    #[case] n: i32,
    #[case] expected: &str,
) {
    let template = StringTemplate::template("unit.direct").add_amount("%n%", n);
    assert_eq!(english.resolver().message_template(&template), expected);
}

#[rstest]
fn labels_join_children_with_separator(english: Fixture) {
    let label = StringTemplate::label(", ")
        .add_child_name("a")
        .add_child_key("b")
        .add_child(StringTemplate::template("greet").add_amount("%n%", 2));
    assert_eq!(english.resolver().message_template(&label), "a, Bee, 2 things");
}

#[rstest]
fn empty_label_resolves_its_separator(english: Fixture) {
    let label = StringTemplate::label("separator.key");
    assert_eq!(english.resolver().message_template(&label), "joined by key");
}

#[rstest]
fn templates_fall_back_to_default_id(english: Fixture) {
    let template = StringTemplate::template("missing.pattern")
        .with_default_id("fallback.pattern")
        .add_name("%x%", "used");
    assert_eq!(english.resolver().message_template(&template), "fallback used");
}

#[rstest]
fn templates_without_any_pattern_use_their_id(english: Fixture) {
    let template = StringTemplate::template("missing.%x%").add_name("%x%", "id");
    assert_eq!(english.resolver().message_template(&template), "missing.id");
}

#[rstest]
fn nested_templates_resolve_recursively(english: Fixture) {
    let inner = StringTemplate::template("greet").add_amount("%n%", 1);
    let outer = StringTemplate::template("fallback.pattern").add_string_template("%x%", inner);
    assert_eq!(english.resolver().message_template(&outer), "fallback one thing");
}

#[rstest]
fn names_pass_through_unchanged(english: Fixture) {
    let name = StringTemplate::name("{{plural:1|one=not expanded}}");
    assert_eq!(
        english.resolver().message_template(&name),
        "{{plural:1|one=not expanded}}"
    );
}

#[rstest]
fn resolution_is_idempotent(english: Fixture) {
    let resolver = english.resolver();
    let template = StringTemplate::template("unit.count")
        .add_amount("%number%", 7)
        .add_key("%unit%", "model.unit.colonist");
    let first = resolver.message_template(&template);
    let second = resolver.message_template(&template);
    assert_eq!(first, second);
    assert_eq!(resolver.message("key2"), resolver.message("key2"));
}

#[rstest]
fn labels_no_longer_than_their_separator_warn(english: Fixture) {
    let label = StringTemplate::label(", ").add_child_name("");
    let (text, events) = capture_events(|| english.resolver().message_template(&label));
    assert_eq!(text, "");
    assert_eq!(events.warnings(), ["label is no longer than its separator"]);
}

#[rstest]
fn labels_with_content_do_not_warn(english: Fixture) {
    let label = StringTemplate::label(", ").add_child_name("x");
    let (text, events) = capture_events(|| english.resolver().message_template(&label));
    assert_eq!(text, "x");
    assert!(events.warnings().is_empty());
}

#[rstest]
fn unmatched_unlabelled_bodies_are_dropped_with_a_warning(english: Fixture) {
    let (text, events) =
        capture_events(|| english.resolver().replace_choices("[{{tag:x|only}}]", None));
    assert_eq!(text, "[]");
    assert_eq!(
        events.warnings(),
        ["unknown key or untagged choice and no default; dropping span"]
    );
}
