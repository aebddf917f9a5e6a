//! Configuration loading for the portfolio reader.
//!
//! Settings are loaded from `conf/config.toml` if present. Missing or invalid
//! entries fall back to defaults so the window can still open.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
