//! Shared diagnostics helpers for consistent, colored output.
//!
//! Warnings go to stderr so stdout stays reserved for the chart snippet.

use colored::Colorize;

/// Print a non-fatal notice with a colored prefix.
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "WARN".yellow().bold(), message.as_ref());
}

/// Format an error message with a colored prefix.
pub fn error_message(message: impl AsRef<str>) -> String {
    format!("{} {}", "ERROR".red().bold(), message.as_ref())
}
