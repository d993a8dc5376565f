//! Error types for `freecol-msgtool`.

use thiserror::Error;

/// Errors surfaced by the `freecol-msgtool` commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MsgtoolError {
    /// Configuration, locale, or plural rule loading failed.
    #[error(transparent)]
    Messages(#[from] freecol_messages::MessagesError),

    /// Writing results failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
