// Domain layer - the life engine
pub mod domain;

// Application layer - pacing, play/pause, camera
pub mod application;

// Configuration - CLI settings and control profiles
pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{AliveSet, Cell, Pattern, Strategy, Viewport, presets};
pub use application::{Camera, GameState};
pub use config::{Cli, ConfigError, Settings};
