mod cell;
mod alive_set;
mod viewport;
mod patterns;
mod strategy;
pub mod life;

pub use cell::{Cell, CellState};
pub use alive_set::AliveSet;
pub use viewport::Viewport;
pub use patterns::{Pattern, presets};
pub use strategy::Strategy;
pub use life::{step, step_with, toggle_cell, clear, randomize};
