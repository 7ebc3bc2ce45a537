// ============================================================================
// wmark-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Helper Functions for Logging
//
// The application uses the standard `log` crate with `env_logger` as the
// backend, honoring the RUST_LOG environment variable:
// - RUST_LOG=info (default): Normal operation output
// - RUST_LOG=debug: Adds raw engine log lines and planning details

use std::io::Write;

/// Initializes env_logger with a message-only format.
///
/// Console output is the user interface here, so timestamps and module
/// targets are left to the structured run log instead.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used to generate unique names for run log files.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
