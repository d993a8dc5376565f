//! Configuration for where message resources live, gathered with `figment`.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::{Locale, MessagesError, MessagesResult, ResourceSources};

/// Prefix of environment variables overriding configuration fields.
///
/// `FREECOL_MESSAGES_I18N_DIR=data/strings` sets [`MessagesConfig::i18n_dir`].
pub const ENV_PREFIX: &str = "FREECOL_MESSAGES_";

const DEFAULT_LOCALE: &str = "en";

/// Resource locations and the locale to load.
///
/// Values are layered as defaults, then an optional TOML file, then
/// `FREECOL_MESSAGES_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Directory holding the base `FreeColMessages*.properties` files.
    pub i18n_dir: Option<Utf8PathBuf>,
    /// Directory whose resources override the base ones.
    pub user_dir: Option<Utf8PathBuf>,
    /// Mod directories, layered in order over the base bundle.
    pub mod_dirs: Vec<Utf8PathBuf>,
    /// CLDR plural rule document replacing the embedded data.
    pub plurals_file: Option<Utf8PathBuf>,
    /// Locale tag such as `en_US`; defaults to `en`.
    pub locale: Option<String>,
}

impl MessagesConfig {
    /// Gathers configuration from `path` (when given) and the environment.
    ///
    /// A missing file is treated as empty, matching figment's TOML provider.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::Config`] when the file is malformed or a value
    /// has the wrong type.
    pub fn load(path: Option<&Utf8Path>) -> MessagesResult<Self> {
        Self::figment(path).extract().map_err(MessagesError::config)
    }

    /// Provider stack used by [`MessagesConfig::load`].
    #[must_use]
    pub fn figment(path: Option<&Utf8Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = path {
            figment = figment.merge(Toml::file(file.as_std_path()));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Directories named by the configuration.
    #[must_use]
    pub fn sources(&self) -> ResourceSources {
        let mut sources = ResourceSources::new();
        if let Some(dir) = &self.i18n_dir {
            sources = sources.with_i18n_dir(dir.clone());
        }
        if let Some(dir) = &self.user_dir {
            sources = sources.with_user_dir(dir.clone());
        }
        self.mod_dirs
            .iter()
            .fold(sources, |sources, dir| sources.with_mod_dir(dir.clone()))
    }

    /// Configured locale, validated.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::InvalidLocale`] for malformed tags.
    pub fn locale(&self) -> MessagesResult<Locale> {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE).parse()
    }
}
