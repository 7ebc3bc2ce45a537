//! Terminal output styling for wmark.
//!
//! Provides consistent output styling with minimal symbols and consistent
//! spacing. All output goes through the `log` facade so RUST_LOG filtering
//! applies uniformly.

use console::style;
use log::{error, info};
use owo_colors::OwoColorize;

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a key-value status line
pub fn print_status(label: &str, value: &str, emphasize: bool) {
    let label = format!("{label}:");
    if should_use_color() && emphasize {
        info!("  {:<18} {}", label, style(value).bold());
    } else {
        info!("  {:<18} {}", label, value);
    }
}

/// Print a processing step
pub fn print_processing(message: &str) {
    if should_use_color() {
        info!("  » {}", style(message).bold());
    } else {
        info!("  » {message}");
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    if should_use_color() {
        info!("  ✓ {}", message.green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    if should_use_color() {
        error!("  ✗ {}", message.red());
    } else {
        error!("  ✗ {message}");
    }
}
