//! Configuration management

pub mod settings;

pub use settings::{Cli, ConfigError, KeyBindings, Profile, Settings};
pub use settings::{INTERVAL_STEP_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
