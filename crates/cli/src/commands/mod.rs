//! CLI subcommands.

pub mod catalog;
pub mod section;
pub mod shell;
