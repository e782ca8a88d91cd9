// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Terminal output helpers.
//!
//! Respects `NO_COLOR`/`FORCE_COLOR`; colors are automatically disabled
//! when output is piped.

use colored::Colorize;

/// Initialize color support and structured logging. Call once at startup.
pub fn init() {
    if std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    } else if std::env::var("FORCE_COLOR").is_ok() {
        colored::control::set_override(true);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
}

pub fn error_label() -> colored::ColoredString {
    "ERROR".red().bold()
}

pub fn prompt() -> colored::ColoredString {
    ">> ".green()
}
