//! Execution of `freecol-msgtool` subcommands.

use std::io::Write;
use std::sync::Arc;

use freecol_messages::{Messages, MessagesConfig, PluralRegistry, StringTemplate};
use tracing::{debug, info};

use crate::cli::{Args, Command, TemplateArgs};
use crate::error::MsgtoolError;

/// Loads configuration for `args` and runs its command, writing results
/// to `out`.
///
/// # Errors
///
/// Returns [`MsgtoolError::Messages`] when configuration, the locale, or a
/// plural rule file cannot be loaded and [`MsgtoolError::Output`] when
/// writing fails.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), MsgtoolError> {
    let config = args.load_config()?;
    debug!(?config, "resolved configuration");
    execute(&args.command, &config, out)
}

/// Runs `command` against an already resolved configuration.
///
/// # Errors
///
/// See [`run`].
pub fn execute(
    command: &Command,
    config: &MessagesConfig,
    out: &mut impl Write,
) -> Result<(), MsgtoolError> {
    match command {
        Command::Message { keys } => {
            let messages = load_messages(config)?;
            for key in keys {
                writeln!(out, "{}", messages.message(key))?;
            }
        }
        Command::Template(args) => {
            let messages = load_messages(config)?;
            writeln!(out, "{}", messages.message_template(&build_template(args)))?;
        }
        Command::Plural { language, numbers } => {
            let registry = match &config.plurals_file {
                Some(path) => Arc::new(PluralRegistry::from_file(path)?),
                None => PluralRegistry::embedded(),
            };
            let number = registry.number_for_language(language);
            for value in numbers {
                writeln!(out, "{value}: {}", number.category(*value))?;
            }
        }
        Command::Describe { id } => {
            let messages = load_messages(config)?;
            writeln!(out, "name: {}", messages.get_name(id))?;
            writeln!(out, "short description: {}", messages.get_short_description(id))?;
            writeln!(out, "description: {}", messages.get_description(id))?;
        }
    }
    Ok(())
}

fn load_messages(config: &MessagesConfig) -> Result<Messages, MsgtoolError> {
    let messages = Messages::from_config(config)?;
    info!(
        locale = %messages.locale(),
        keys = messages.catalog().bundle().len(),
        "loaded messages"
    );
    Ok(messages)
}

/// Builds the template described by `args`.
#[must_use]
pub fn build_template(args: &TemplateArgs) -> StringTemplate {
    let mut template = StringTemplate::template(args.id.as_str());
    if let Some(default_id) = &args.default_id {
        template = template.with_default_id(default_id.as_str());
    }
    for (key, value) in &args.names {
        template = template.add_name(key, value.as_str());
    }
    for (key, id) in &args.keys {
        template = template.add_key(key, id.as_str());
    }
    for (key, amount) in &args.amounts {
        template = template.add_amount(key, amount);
    }
    template
}
