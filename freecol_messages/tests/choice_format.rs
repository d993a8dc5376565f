//! Choice-format resolution through the public `Messages` API.

use std::sync::Arc;

use freecol_messages::{Locale, MessageBundle, Messages, NumberRule, StringTemplate};
use rstest::{fixture, rstest};

#[fixture]
fn messages() -> Messages {
    let messages = Messages::builder().build();
    messages.install_bundle(
        &Locale::parse("en"),
        MessageBundle::from_properties(concat!(
            "greet={{plural:%n%|one=one thing|other=%n% things}}\n",
            "key2={{plural:%amount%|one=singular|other={{tag:|acc=X|default=Y}}}}\n",
            "model.goods.furs.name={{plural:%amount%|one=fur|other=furs|default=furs}}\n",
            "model.unit.expert=%unit% ({{plural:%amount%|%goods%}})\n",
            "cargo=%amount% %goods%\n",
            "multi=Line one\\nLine two\n",
        )),
    );
    messages
}

#[rstest]
fn missing_keys_pass_through(messages: Messages) {
    assert_eq!(messages.message("no.such.key"), "no.such.key");
}

#[rstest]
#[case(1, "one thing")]
#[case(5, "5 things")]
fn simple_choice_resolves(messages: Messages, #[case] n: i32, #[case] expected: &str) {
    let template = StringTemplate::template("greet").add_amount("%n%", n);
    assert_eq!(messages.message_template(&template), expected);
}

#[rstest]
fn nested_choice_uses_default_branch(messages: Messages) {
    let template = StringTemplate::template("key2").add_amount("%amount%", 3);
    assert_eq!(messages.message_template(&template), "Y");
}

#[rstest]
#[case(1, "1 furs")]
#[case(2, "2 furs")]
fn key_replacements_resolve_without_template_context(
    messages: Messages,
    #[case] amount: i32,
    #[case] expected: &str,
) {
    let template = StringTemplate::template("cargo")
        .add_amount("%amount%", amount)
        .add_key("%goods%", "model.goods.furs.name");
    assert_eq!(messages.message_template(&template), expected);
}

#[rstest]
#[case(1, "Trapper (fur)")]
#[case(7, "Trapper (furs)")]
fn choice_bodies_can_borrow_choices_from_a_key(
    messages: Messages,
    #[case] amount: i32,
    #[case] expected: &str,
) {
    let template = StringTemplate::template("model.unit.expert")
        .add_name("%unit%", "Trapper")
        .add_amount("%amount%", amount)
        .add_key("%goods%", "model.goods.furs.name");
    assert_eq!(messages.message_template(&template), expected);
}

#[rstest]
fn escapes_are_expanded_on_load(messages: Messages) {
    assert_eq!(messages.message("multi"), "Line one\nLine two");
}

#[rstest]
fn resolution_is_repeatable(messages: Messages) {
    let template = StringTemplate::label(" / ")
        .add_child(StringTemplate::template("greet").add_amount("%n%", 2))
        .add_child(StringTemplate::template("key2").add_amount("%amount%", 1))
        .add_child_key("no.such.key");
    let first = messages.message_template(&template);
    assert_eq!(first, "2 things / singular / no.such.key");
    for _ in 0..10 {
        assert_eq!(messages.message_template(&template), first);
    }
}

#[rstest]
fn replace_choices_is_public(messages: Messages) {
    messages.set_grammatical_number(Arc::new(NumberRule::Dual));
    assert_eq!(
        messages.replace_choices("{{plural:2|one=a|two=b|other=c}}!", None),
        "b!"
    );
}
