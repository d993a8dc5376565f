//! Library interface for the `freecol-msgtool` command-line front end.
//!
//! The binary parses [`cli::Args`], installs logging, and hands the parsed
//! command to [`commands::run`], which writes results to any
//! [`std::io::Write`] so the commands can be exercised in tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
