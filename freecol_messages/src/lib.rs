//! Message bundles and grammatical-number rules for FreeCol.
//!
//! The crate resolves message keys and [`StringTemplate`] values against a
//! layered bundle of `.properties` resources, expanding the
//! `{{tag:selector|key=value|...}}` choice format with per-language CLDR
//! plural rules. [`Messages`] is the context object that owns the active
//! bundle, the selector tags, and the [`PluralRegistry`]; callers construct
//! one per process (or per test) and pass it where strings are needed.
//!
//! ```rust
//! use freecol_messages::{Locale, MessageBundle, Messages, StringTemplate};
//!
//! let mut bundle = MessageBundle::new();
//! bundle.merge_properties("greet={{plural:%n%|one=one thing|other=%n% things}}");
//! let messages = Messages::builder().build();
//! messages.install_bundle(&Locale::parse("en"), bundle);
//!
//! let template = StringTemplate::template("greet").add_amount("%n%", 5);
//! assert_eq!(messages.message_template(&template), "5 things");
//! assert_eq!(messages.message("no.such.key"), "no.such.key");
//! ```

mod bundle;
mod config;
mod error;
mod format;
mod fs_helpers;
mod locale;
mod messages;
pub mod plural;
mod selector;
mod template;

pub use bundle::{
    BASE_PREFIX, MOD_PREFIX, MessageBundle, PROPERTIES_SUFFIX, ResourceSources,
    message_file_names,
};
pub use config::{ENV_PREFIX, MessagesConfig};
pub use error::{MessagesError, MessagesResult};
pub use locale::Locale;
pub use messages::{
    Catalog, DESCRIPTION_SUFFIX, Messages, MessagesBuilder, NAME_SUFFIX, PLURAL_TAG,
    RULER_SUFFIX, SHORT_DESCRIPTION_SUFFIX,
};
pub use plural::{Category, DefaultNumberRule, NumberRule, PluralRegistry, Relation, Rule};
pub use selector::{Selector, TagMap};
pub use template::StringTemplate;
pub use unic_langid::{LanguageIdentifier, langid};
