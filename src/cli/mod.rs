//! CLI module
//!
//! Command-line interface for a collection run. There are no subcommands:
//! a bare invocation collects the catalog into `data/apps.json`.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
