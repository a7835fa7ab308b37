//! Tooling Layer
//!
//! The command-line entry points: one-shot subcommands and the interactive
//! menu shell. Everything here is a thin wrapper over [`crate::store`].

pub mod cli;
pub mod shell;

pub use cli::{Cli, CliContext, Commands};
pub use shell::{DialoguerPrompter, Prompter, ScriptedPrompter, Shell};
