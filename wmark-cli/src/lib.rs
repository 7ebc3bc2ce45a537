// wmark-cli/src/lib.rs
//
// Library portion of the wmark CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{ApplyArgs, Cli, Commands};
pub use commands::apply::run_apply;
