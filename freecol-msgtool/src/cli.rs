//! Command-line interface definitions for `freecol-msgtool`.

use camino::Utf8PathBuf;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use freecol_messages::{MessagesConfig, MessagesResult};

/// Parsed CLI arguments for `freecol-msgtool`.
#[derive(Debug, Parser)]
#[command(name = "freecol-msgtool")]
#[command(about = "Resolve FreeCol message keys, templates and plural categories")]
#[command(version)]
pub struct Args {
    /// TOML configuration file.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Locale to load, such as `de` or `en_US`.
    #[arg(long, value_name = "locale")]
    pub locale: Option<String>,
    /// Directory holding the base `FreeColMessages*.properties` files.
    #[arg(long, value_name = "path")]
    pub i18n_dir: Option<Utf8PathBuf>,
    /// Directory whose resources override the base ones.
    #[arg(long, value_name = "path")]
    pub user_dir: Option<Utf8PathBuf>,
    /// Mod directory layered over the base bundle (repeatable).
    #[arg(long = "mod-dir", value_name = "path")]
    pub mod_dirs: Vec<Utf8PathBuf>,
    /// CLDR plural rule document replacing the embedded data.
    #[arg(long, value_name = "path")]
    pub plurals_file: Option<Utf8PathBuf>,
    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Loads the configuration file and environment, then applies the flags
    /// given on the command line.
    ///
    /// Mod directories from the command line are appended to configured
    /// ones; every other flag replaces its configured value.
    ///
    /// # Errors
    ///
    /// Returns the configuration errors of [`MessagesConfig::load`].
    pub fn load_config(&self) -> MessagesResult<MessagesConfig> {
        let mut config = MessagesConfig::load(self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }

    /// Applies command-line overrides to `config`.
    pub fn apply(&self, config: &mut MessagesConfig) {
        if let Some(locale) = &self.locale {
            config.locale = Some(locale.clone());
        }
        if let Some(dir) = &self.i18n_dir {
            config.i18n_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.user_dir {
            config.user_dir = Some(dir.clone());
        }
        if let Some(path) = &self.plurals_file {
            config.plurals_file = Some(path.clone());
        }
        config.mod_dirs.extend(self.mod_dirs.iter().cloned());
    }
}

/// Operations offered by `freecol-msgtool`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved text of each key.
    Message {
        /// Message keys to resolve.
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Build a template from flags and print its resolution.
    Template(TemplateArgs),
    /// Print the plural category of each number for a language.
    Plural {
        /// ISO language code, such as `ru`.
        language: String,
        /// Numbers to classify.
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Print the name and descriptions of an object id.
    Describe {
        /// Object id, such as `model.unit.freeColonist`.
        id: String,
    },
}

/// Flags describing a template.
#[derive(Debug, Clone, ClapArgs)]
pub struct TemplateArgs {
    /// Message key holding the pattern.
    pub id: String,
    /// Key used when `id` is missing.
    #[arg(long, value_name = "key")]
    pub default_id: Option<String>,
    /// Literal replacement, as `placeholder=text` (repeatable).
    #[arg(long = "name", value_name = "placeholder=text", value_parser = parse_pair)]
    pub names: Vec<(String, String)>,
    /// Message key replacement, as `placeholder=key` (repeatable).
    #[arg(long = "key", value_name = "placeholder=key", value_parser = parse_pair)]
    pub keys: Vec<(String, String)>,
    /// Numeric replacement, as `placeholder=number` (repeatable).
    #[arg(long = "amount", value_name = "placeholder=number", value_parser = parse_amount)]
    pub amounts: Vec<(String, f64)>,
}

/// Wraps a bare placeholder name in `%` signs; `n` and `%n%` are the same.
#[must_use]
pub fn placeholder(name: &str) -> String {
    if name.len() >= 2 && name.starts_with('%') && name.ends_with('%') {
        name.to_owned()
    } else {
        format!("%{name}%")
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((placeholder(key.trim()), value.to_owned()))
        }
        _ => Err(format!("expected placeholder=value, got '{raw}'")),
    }
}

fn parse_amount(raw: &str) -> Result<(String, f64), String> {
    let (key, value) = parse_pair(raw)?;
    let amount = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("'{value}' is not a number: {err}"))?;
    Ok((key, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[rstest]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[rstest]
    #[case("n=5", Ok((String::from("%n%"), String::from("5"))))]
    #[case("%unit%=model.unit.colonist", Ok((String::from("%unit%"), String::from("model.unit.colonist"))))]
    #[case("=5", Err(String::from("expected placeholder=value, got '=5'")))]
    #[case("n", Err(String::from("expected placeholder=value, got 'n'")))]
    fn pairs_are_split_at_the_first_equals(
        #[case] raw: &str,
        #[case] expected: Result<(String, String), String>,
    ) {
        assert_eq!(parse_pair(raw), expected);
    }

    #[rstest]
    fn amounts_must_be_numbers() {
        assert_eq!(parse_amount("n=2.5"), Ok((String::from("%n%"), 2.5)));
        assert!(parse_amount("n=many").is_err());
    }

    #[rstest]
    fn template_flags_parse() {
        let args = Args::try_parse_from([
            "freecol-msgtool",
            "--locale",
            "de",
            "--mod-dir",
            "mods/a",
            "template",
            "model.unit.arrive",
            "--key",
            "unit=model.unit.colonist",
            "--amount",
            "n=3",
        ])
        .expect("arguments should parse");
        assert_eq!(args.locale.as_deref(), Some("de"));
        match args.command {
            Command::Template(template) => {
                assert_eq!(template.id, "model.unit.arrive");
                assert_eq!(
                    template.keys,
                    [(String::from("%unit%"), String::from("model.unit.colonist"))]
                );
                assert_eq!(template.amounts, [(String::from("%n%"), 3.0)]);
            }
            other => panic!("expected a template command, got {other:?}"),
        }
    }

    #[rstest]
    fn command_line_overrides_configuration() {
        let args = Args::try_parse_from([
            "freecol-msgtool",
            "--i18n-dir",
            "cli/i18n",
            "--mod-dir",
            "cli/mod",
            "message",
            "greeting",
        ])
        .expect("arguments should parse");
        let mut config = MessagesConfig {
            i18n_dir: Some(Utf8PathBuf::from("config/i18n")),
            mod_dirs: vec![Utf8PathBuf::from("config/mod")],
            locale: Some(String::from("fr")),
            ..MessagesConfig::default()
        };
        args.apply(&mut config);
        assert_eq!(config.i18n_dir, Some(Utf8PathBuf::from("cli/i18n")));
        assert_eq!(
            config.mod_dirs,
            [Utf8PathBuf::from("config/mod"), Utf8PathBuf::from("cli/mod")]
        );
        assert_eq!(config.locale.as_deref(), Some("fr"));
    }
}
