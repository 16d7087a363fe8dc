//! Command handlers.  Each submodule implements one subcommand.

pub mod completions;
pub mod new;
