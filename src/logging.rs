//! stderr diagnostics for the binaries.
//!
//! stdout carries JSON payloads and success notices, so the subscriber always
//! writes to stderr. Verbosity comes from `BOOKS_LOG`.

use std::env;
use tracing::Level;

pub const LOG_ENV: &str = "BOOKS_LOG";

pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(Level::WARN);
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn parse_level(raw: &str) -> Option<Level> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
