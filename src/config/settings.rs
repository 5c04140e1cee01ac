//! Runtime settings, built from the command line and validated once at startup

use clap::{Parser, ValueEnum};
use macroquad::prelude::KeyCode;
use thiserror::Error;

use crate::domain::{Strategy, Viewport};

pub const MIN_INTERVAL_MS: u32 = 0;
pub const MAX_INTERVAL_MS: u32 = 1000;
/// Change applied by one press of the faster/slower keys
pub const INTERVAL_STEP_MS: u32 = 50;

const DEFAULT_CELL_SIZE: u32 = 14;
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 480;
const DEFAULT_DENSITY: f64 = 0.3;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("step interval {0} ms is outside 0..=1000 ms")]
    IntervalOutOfRange(u32),

    #[error("a {width}x{height} window has no room for a single {cell_size}px cell")]
    WindowTooSmall { width: u32, height: u32, cell_size: u32 },

    #[error("a {width}x{height} window is larger than the platform allows")]
    WindowTooLarge { width: u32, height: u32 },

    #[error("density {0} is outside 0.0..=1.0")]
    DensityOutOfRange(f64),
}

/// Control profile. Each bundles key bindings, a default step interval and
/// whether the camera can be panned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Profile {
    /// Fixed view, F/S change speed, Delete clears
    #[default]
    Classic,
    /// Pannable view, arrow keys change speed, C clears
    Camera,
}

impl Profile {
    pub fn default_interval_ms(self) -> u32 {
        match self {
            Profile::Classic => 250,
            Profile::Camera => 100,
        }
    }

    pub fn camera_enabled(self) -> bool {
        matches!(self, Profile::Camera)
    }

    pub fn key_bindings(self) -> KeyBindings {
        match self {
            Profile::Classic => KeyBindings {
                play_pause: KeyCode::Space,
                faster: KeyCode::F,
                slower: KeyCode::S,
                clear: KeyCode::Delete,
                randomize: KeyCode::R,
                toggle_strategy: KeyCode::P,
                reset_camera: None,
                exit: KeyCode::Escape,
            },
            Profile::Camera => KeyBindings {
                play_pause: KeyCode::Space,
                faster: KeyCode::Up,
                slower: KeyCode::Down,
                clear: KeyCode::C,
                randomize: KeyCode::R,
                toggle_strategy: KeyCode::P,
                reset_camera: Some(KeyCode::H),
                exit: KeyCode::Escape,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBindings {
    pub play_pause: KeyCode,
    pub faster: KeyCode,
    pub slower: KeyCode,
    pub clear: KeyCode,
    pub randomize: KeyCode,
    pub toggle_strategy: KeyCode,
    pub reset_camera: Option<KeyCode>,
    pub exit: KeyCode,
}

#[derive(Parser, Debug)]
#[command(name = "viewport_life")]
#[command(about = "Conway's Game of Life on a viewport-bounded sparse grid")]
#[command(version)]
pub struct Cli {
    /// Control profile
    #[arg(short, long, value_enum, default_value_t = Profile::Classic)]
    pub profile: Profile,

    /// Milliseconds between generations (defaults to the profile's)
    #[arg(short, long)]
    pub interval_ms: Option<u32>,

    /// Cell size in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Initial window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Fraction of cells alive after randomizing
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Count neighbors on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub profile: Profile,
    pub keys: KeyBindings,
    pub interval_ms: u32,
    pub cell_size: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub density: f64,
    pub strategy: Strategy,
}

impl Default for Settings {
    fn default() -> Self {
        let profile = Profile::default();
        Self {
            profile,
            keys: profile.key_bindings(),
            interval_ms: profile.default_interval_ms(),
            cell_size: DEFAULT_CELL_SIZE,
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
            density: DEFAULT_DENSITY,
            strategy: Strategy::default(),
        }
    }
}

impl Settings {
    /// Resolve profile defaults and validate
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let settings = Self {
            profile: cli.profile,
            keys: cli.profile.key_bindings(),
            interval_ms: cli
                .interval_ms
                .unwrap_or_else(|| cli.profile.default_interval_ms()),
            cell_size: cli.cell_size,
            window_width: cli.width,
            window_height: cli.height,
            density: cli.density,
            strategy: if cli.parallel { Strategy::Parallel } else { Strategy::Serial },
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.interval_ms) {
            return Err(ConfigError::IntervalOutOfRange(self.interval_ms));
        }
        if i32::try_from(self.window_width).is_err() || i32::try_from(self.window_height).is_err() {
            return Err(ConfigError::WindowTooLarge {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.initial_viewport().cell_bounds().is_none() {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                cell_size: self.cell_size,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        Ok(())
    }

    /// Window size as the windowing backend takes it; saturates for unvalidated settings
    pub fn window_size(&self) -> (i32, i32) {
        (
            i32::try_from(self.window_width).unwrap_or(i32::MAX),
            i32::try_from(self.window_height).unwrap_or(i32::MAX),
        )
    }

    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(self.window_width, self.window_height, self.cell_size)
    }
}
