//! CLI subcommand implementations.

pub mod apply;
