//! Subcommand implementations.

pub mod i18n;
pub mod migrate;
pub mod seed;
