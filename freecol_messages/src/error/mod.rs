//! Error types produced while parsing rules and loading resources.

mod constructors;
mod types;

pub use types::{MessagesError, MessagesResult};
