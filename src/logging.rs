use std::str::FromStr;

use tracing::Level;

/// Falls back to INFO when the configured level is not a tracing level name.
pub fn parse_level(text: &str) -> Level {
    Level::from_str(text.trim()).unwrap_or(Level::INFO)
}

/// Installs the dioxus tracing subscriber at the configured level.
pub fn init(level: &str) {
    if let Err(err) = dioxus::logger::init(parse_level(level)) {
        eprintln!("Warning: Could not initialize logging: {err}");
    }
}
