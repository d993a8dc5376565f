//! Directories that contribute message resources and the layered loads
//! across them.

use camino::{Utf8Path, Utf8PathBuf};

use super::{BASE_PREFIX, MOD_PREFIX, MessageBundle, message_file_names};
use crate::Locale;
use crate::fs_helpers::{open_optional_dir, read_optional};

/// Where message resources are read from.
///
/// The base directory holds the game's `FreeColMessages*` files, the user
/// directory may override any of them, and each mod directory contributes
/// `ModMessages*` and `FreeColMessages*` files layered in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSources {
    i18n_dir: Option<Utf8PathBuf>,
    user_dir: Option<Utf8PathBuf>,
    mod_dirs: Vec<Utf8PathBuf>,
}

impl ResourceSources {
    /// Sources with no directories; loads produce empty bundles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base i18n directory.
    #[must_use]
    pub fn with_i18n_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.i18n_dir = Some(dir.into());
        self
    }

    /// Sets the user override directory.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.user_dir = Some(dir.into());
        self
    }

    /// Appends a mod directory; later mods override earlier ones.
    #[must_use]
    pub fn with_mod_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.mod_dirs.push(dir.into());
        self
    }

    /// Base i18n directory, if configured.
    #[must_use]
    pub fn i18n_dir(&self) -> Option<&Utf8Path> {
        self.i18n_dir.as_deref()
    }

    /// User override directory, if configured.
    #[must_use]
    pub fn user_dir(&self) -> Option<&Utf8Path> {
        self.user_dir.as_deref()
    }

    /// Mod directories in load order.
    #[must_use]
    pub fn mod_dirs(&self) -> &[Utf8PathBuf] {
        &self.mod_dirs
    }

    /// Builds the base bundle for `locale` from the i18n and user directories.
    #[must_use]
    pub fn load_base(&self, locale: &Locale) -> MessageBundle {
        let mut bundle = MessageBundle::new();
        for dir in [self.i18n_dir(), self.user_dir()].into_iter().flatten() {
            load_layer(&mut bundle, dir, BASE_PREFIX, locale);
        }
        bundle
    }

    /// Reads every mod's resources for `locale` over `bundle`.
    pub fn load_mods(&self, locale: &Locale, bundle: &mut MessageBundle) {
        for dir in &self.mod_dirs {
            load_layer(bundle, dir, MOD_PREFIX, locale);
            load_layer(bundle, dir, BASE_PREFIX, locale);
        }
    }
}

/// Reads the `prefix` chain for `locale` from `dir` into `bundle`.
///
/// Missing directories and files are skipped. Files that exist but cannot be
/// read are logged and skipped. Returns the number of files read.
pub(crate) fn load_layer(
    bundle: &mut MessageBundle,
    dir: &Utf8Path,
    prefix: &str,
    locale: &Locale,
) -> usize {
    let handle = match open_optional_dir(dir) {
        Ok(Some(handle)) => handle,
        Ok(None) => {
            tracing::debug!(dir = %dir, "message directory does not exist");
            return 0;
        }
        Err(err) => {
            tracing::error!(dir = %dir, error = %err, "failed to open message directory");
            return 0;
        }
    };

    let mut loaded = 0;
    for name in message_file_names(prefix, locale) {
        let path = dir.join(&name);
        match read_optional(&handle, &name, &path) {
            Ok(Some(text)) => {
                let entries = bundle.merge_properties(&text);
                tracing::debug!(path = %path, entries, "loaded message resource");
                loaded += 1;
            }
            Ok(None) => {}
            Err(err) => tracing::error!(error = %err, "skipping unreadable message resource"),
        }
    }
    loaded
}
