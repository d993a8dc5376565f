//! The message context: the active catalog and how it is (re)loaded.
//!
//! [`Messages`] publishes an immutable [`Catalog`] behind a
//! `parking_lot::RwLock`. Lookups clone the current `Arc` and resolve without
//! holding the lock; loads build a replacement catalog and swap it in with a
//! single write, so readers never observe a half-loaded bundle.

use std::sync::Arc;

use camino::Utf8PathBuf;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use crate::format::Resolver;
use crate::{
    Locale, MessageBundle, MessagesConfig, MessagesResult, NumberRule, PluralRegistry,
    ResourceSources, Selector, StringTemplate, TagMap,
};

/// Choice-format tag bound to the active locale's grammatical number.
pub const PLURAL_TAG: &str = "plural";

/// Suffix of an object's display name key.
pub const NAME_SUFFIX: &str = ".name";

/// Suffix of an object's long description key.
pub const DESCRIPTION_SUFFIX: &str = ".description";

/// Suffix of an object's short description key.
pub const SHORT_DESCRIPTION_SUFFIX: &str = ".shortDescription";

/// Suffix of a nation's ruler name key.
pub const RULER_SUFFIX: &str = ".ruler";

/// A published bundle together with the locale it was loaded for and the
/// selectors its choice spans may use.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: Locale,
    bundle: Arc<MessageBundle>,
    tags: TagMap,
}

impl Catalog {
    /// Locale the bundle was loaded for.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Raw patterns.
    #[must_use]
    pub fn bundle(&self) -> &MessageBundle {
        &self.bundle
    }

    /// Selectors by choice-format tag.
    #[must_use]
    pub const fn tags(&self) -> &TagMap {
        &self.tags
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.bundle, &self.tags)
    }

    fn with_selector(&self, tag: &str, selector: Arc<dyn Selector>) -> Self {
        let mut tags = self.tags.clone();
        tags.insert(tag.to_owned(), selector);
        Self {
            locale: self.locale.clone(),
            bundle: Arc::clone(&self.bundle),
            tags,
        }
    }
}

/// Message lookup context.
///
/// # Examples
///
/// ```rust
/// use freecol_messages::{Locale, MessageBundle, Messages};
///
/// let messages = Messages::builder().build();
/// messages.install_bundle(
///     &Locale::parse("en"),
///     MessageBundle::from_properties("model.unit.colonist.name=Free Colonist"),
/// );
/// assert_eq!(messages.get_name("model.unit.colonist"), "Free Colonist");
/// assert_eq!(messages.get_description("model.unit.colonist"), "model.unit.colonist.description");
/// ```
#[derive(Debug)]
pub struct Messages {
    catalog: RwLock<Arc<Catalog>>,
    plurals: Arc<PluralRegistry>,
    sources: ResourceSources,
}

impl Messages {
    /// Starts building a context.
    #[must_use]
    pub fn builder() -> MessagesBuilder {
        MessagesBuilder::new()
    }

    /// Builds a context from configuration and loads the base and mod
    /// bundles for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MessagesError::InvalidLocale`] for a malformed locale
    /// and the errors of [`PluralRegistry::from_file`] when a plural rule
    /// file is configured. Unreadable message resources are logged, not
    /// returned.
    pub fn from_config(config: &MessagesConfig) -> MessagesResult<Self> {
        let locale = config.locale()?;
        let mut builder = Self::builder().sources(config.sources());
        if let Some(path) = &config.plurals_file {
            builder = builder.plurals(Arc::new(PluralRegistry::from_file(path)?));
        }
        let messages = builder.build();
        messages.load_message_bundle(&locale);
        messages.load_mod_message_bundle(&locale);
        Ok(messages)
    }

    /// Currently published catalog.
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog.read())
    }

    /// Locale of the published catalog.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.catalog.read().locale.clone()
    }

    /// Registry used to pick the grammatical number for a locale.
    #[must_use]
    pub fn plurals(&self) -> &PluralRegistry {
        &self.plurals
    }

    /// Directories bundles are loaded from.
    #[must_use]
    pub const fn sources(&self) -> &ResourceSources {
        &self.sources
    }

    /// Publishes `bundle` as the catalog for `locale`.
    ///
    /// The `plural` tag is rebound to the grammatical number of the locale's
    /// language; other registered selectors are kept.
    pub fn install_bundle(&self, locale: &Locale, bundle: MessageBundle) {
        let number = self.plurals.number_for_language(locale.language());
        let bundle = Arc::new(bundle);
        tracing::debug!(
            locale = %locale,
            entries = bundle.len(),
            "publishing message catalog"
        );
        let mut guard = self.catalog.write();
        let mut tags = guard.tags.clone();
        tags.insert(PLURAL_TAG.to_owned(), number);
        *guard = Arc::new(Catalog {
            locale: locale.clone(),
            bundle,
            tags,
        });
    }

    /// Replaces the catalog with the base resources for `locale`.
    ///
    /// Resources are read from the i18n directory and then the user
    /// directory, most general file first. Missing files are skipped and
    /// unreadable ones are logged; the previous catalog stays published
    /// until the new one is complete.
    pub fn load_message_bundle(&self, locale: &Locale) {
        let bundle = self.sources.load_base(locale);
        self.install_bundle(locale, bundle);
    }

    /// Layers every mod's resources for `locale` over the published catalog.
    ///
    /// Mod files are read without holding the lock. If another load
    /// publishes a different bundle meanwhile, the layering starts over from
    /// that bundle.
    pub fn load_mod_message_bundle(&self, locale: &Locale) {
        if self.sources.mod_dirs().is_empty() {
            return;
        }
        loop {
            let base = self.catalog();
            let mut layered = MessageBundle::clone(&base.bundle);
            let before = layered.len();
            self.sources.load_mods(locale, &mut layered);

            let mut guard = self.catalog.write();
            if !Arc::ptr_eq(&guard.bundle, &base.bundle) {
                tracing::debug!(locale = %locale, "catalog replaced while loading mods; retrying");
                continue;
            }
            tracing::debug!(
                locale = %locale,
                mods = self.sources.mod_dirs().len(),
                added = layered.len().saturating_sub(before),
                "layered mod messages"
            );
            *guard = Arc::new(Catalog {
                locale: guard.locale.clone(),
                bundle: Arc::new(layered),
                tags: guard.tags.clone(),
            });
            return;
        }
    }

    /// Binds the `plural` tag to `number`.
    pub fn set_grammatical_number(&self, number: Arc<NumberRule>) {
        self.register_selector(PLURAL_TAG, number);
    }

    /// Binds choice-format `tag` to `selector`.
    pub fn register_selector(&self, tag: &str, selector: Arc<dyn Selector>) {
        let guard = self.catalog.upgradable_read();
        let catalog = guard.with_selector(tag, selector);
        *RwLockUpgradableReadGuard::upgrade(guard) = Arc::new(catalog);
    }

    /// Returns `true` when the published bundle has a pattern for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.catalog().bundle.contains_key(key)
    }

    /// Resolved text for `key`, or `key` itself when it is missing.
    #[must_use]
    pub fn message(&self, key: &str) -> String {
        self.catalog().resolver().message(key)
    }

    /// Resolves a structured template.
    #[must_use]
    pub fn message_template(&self, template: &StringTemplate) -> String {
        self.catalog().resolver().message_template(template)
    }

    /// Expands the choice spans in `input`, taking `%variable%` selectors
    /// from `template`.
    #[must_use]
    pub fn replace_choices(&self, input: &str, template: Option<&StringTemplate>) -> String {
        self.catalog().resolver().replace_choices(input, template)
    }

    /// Display name of `id`.
    #[must_use]
    pub fn get_name(&self, id: &str) -> String {
        self.message(&format!("{id}{NAME_SUFFIX}"))
    }

    /// Long description of `id`.
    #[must_use]
    pub fn get_description(&self, id: &str) -> String {
        self.message(&format!("{id}{DESCRIPTION_SUFFIX}"))
    }

    /// Short description of `id`.
    #[must_use]
    pub fn get_short_description(&self, id: &str) -> String {
        self.message(&format!("{id}{SHORT_DESCRIPTION_SUFFIX}"))
    }

    /// Ruler name of nation `id`.
    #[must_use]
    pub fn get_ruler_name(&self, id: &str) -> String {
        self.message(&format!("{id}{RULER_SUFFIX}"))
    }

    /// Resolves `pattern` as if it were stored under a key, with `template`
    /// supplying replacements.
    pub(crate) fn fill(&self, pattern: &str, template: &StringTemplate) -> String {
        self.catalog().resolver().fill(pattern, template)
    }
}

/// Builds a [`Messages`] context.
#[derive(Debug, Default)]
pub struct MessagesBuilder {
    sources: ResourceSources,
    plurals: Option<Arc<PluralRegistry>>,
}

impl MessagesBuilder {
    /// Creates a builder with no resource directories and the embedded
    /// plural rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all resource directories.
    #[must_use]
    pub fn sources(mut self, sources: ResourceSources) -> Self {
        self.sources = sources;
        self
    }

    /// Sets the base i18n directory.
    #[must_use]
    pub fn i18n_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.sources = self.sources.with_i18n_dir(dir);
        self
    }

    /// Sets the user override directory.
    #[must_use]
    pub fn user_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.sources = self.sources.with_user_dir(dir);
        self
    }

    /// Appends a mod directory.
    #[must_use]
    pub fn mod_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.sources = self.sources.with_mod_dir(dir);
        self
    }

    /// Uses `plurals` instead of the embedded CLDR rules.
    #[must_use]
    pub fn plurals(mut self, plurals: Arc<PluralRegistry>) -> Self {
        self.plurals = Some(plurals);
        self
    }

    /// Builds the context with an empty root-locale catalog.
    ///
    /// Nothing is read from disk until a bundle is loaded.
    #[must_use]
    pub fn build(self) -> Messages {
        let plurals = self.plurals.unwrap_or_else(PluralRegistry::embedded);
        let locale = Locale::default();
        let mut tags = TagMap::new();
        tags.insert(
            PLURAL_TAG.to_owned(),
            plurals.number_for_language(locale.language()),
        );
        let catalog = Catalog {
            locale,
            bundle: Arc::default(),
            tags,
        };
        Messages {
            catalog: RwLock::new(Arc::new(catalog)),
            plurals,
            sources: self.sources,
        }
    }
}
