//! Test helpers shared across crates.
//!
//! [`fixtures`] builds throwaway resource directories, [`figment`] wraps
//! `figment::Jail` for configuration tests, and [`logs`] records the
//! diagnostics emitted while a closure runs.

pub mod figment;
pub mod fixtures;
pub mod logs;
