use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::config::Settings;
use crate::domain::{AliveSet, Viewport};

pub const BACKGROUND: Color = Color::new(0.184, 0.310, 0.310, 1.0); // dark slate gray
const CELL_COLOR: Color = WHITE;
const TEXT_COLOR: Color = Color::new(0.678, 1.0, 0.184, 1.0); // green yellow
const TEXT_SIZE: f32 = 18.0;

/// The window as the engine sees it. The camera offset plays no part here.
pub fn screen_viewport(cell_size: u32) -> Viewport {
    Viewport::new(screen_width() as u32, screen_height() as u32, cell_size)
}

/// Draw alive cells, skipping any whose box is entirely off-screen
pub fn draw_cells(alive: &AliveSet, camera: &Camera, cell_size: f32) {
    let (width, height) = (screen_width(), screen_height());

    for &cell in alive {
        let (x, y) = camera.cell_to_screen(cell, cell_size);
        if x + cell_size < 0.0 || x > width || y + cell_size < 0.0 || y > height {
            continue;
        }
        draw_rectangle(x, y, cell_size, cell_size, CELL_COLOR);
    }
}

/// Status text in the top-left corner
pub fn draw_hud(state: &GameState, settings: &Settings) {
    let lines = [
        (if state.is_playing { "Playing" } else { "Paused" }).to_string(),
        format!("Speed: {} ms", state.interval_ms),
        format!("Generation: {}  Alive: {}", state.generation, state.alive.len()),
        format!(
            "{} | step {:.2} ms | FPS: {}",
            state.strategy.name(),
            state.last_step_time_ms,
            get_fps()
        ),
        format!("Profile: {:?}", settings.profile),
    ];

    lines.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, 10.0, 20.0 + i as f32 * TEXT_SIZE, TEXT_SIZE, TEXT_COLOR);
    });
}
