//! Helpers for running configuration tests inside a `figment::Jail`.
//!
//! The jail gives each test a private working directory and restores the
//! environment afterwards, so `FREECOL_MESSAGES_*` variables set by one test
//! never leak into another.

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// Failures are converted into `anyhow::Error` values so callers can use the
/// `?` operator without extra boilerplate.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Absolute UTF-8 path of `name` inside the jail's directory.
///
/// # Errors
///
/// Returns a [`figment::Error`] when the jail directory is not valid UTF-8.
pub fn jail_path(jail: &figment::Jail, name: &str) -> figment::error::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(jail.directory().join(name)).map_err(|path| {
        figment::Error::from(format!("non UTF-8 jail path: {}", path.display()))
    })
}

/// Converts any displayable error into a [`figment::Error`].
///
/// Useful for `?` on crate errors inside a jail closure.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a map_err adapter, which passes errors by value"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
