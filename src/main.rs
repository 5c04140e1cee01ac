use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use macroquad::prelude::*;
use viewport_life::{Camera, Cli, GameState, Settings, input, rendering};

fn window_conf(settings: &Settings) -> Conf {
    let (window_width, window_height) = settings.window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::from_cli(Cli::parse()).context("invalid configuration")?;
    info!(
        "starting with {:?} profile, {} ms interval, {}px cells",
        settings.profile, settings.interval_ms, settings.cell_size
    );

    macroquad::Window::from_config(window_conf(&settings), run(settings));
    Ok(())
}

async fn run(settings: Settings) {
    let mut state = GameState::from_settings(&settings);
    let mut camera = Camera::new();

    loop {
        if input::exit_requested(&settings.keys) {
            info!("exiting after generation {}", state.generation);
            break;
        }

        // Sampled every frame so a window resize culls on the next step
        let viewport = rendering::screen_viewport(settings.cell_size);
        let mouse_pos = mouse_position();

        input::handle_pan(&mut camera, &settings, mouse_pos);
        state = input::handle_mouse_paint(state, &camera, settings.cell_size, mouse_pos);
        state = input::handle_pattern_keys(state, &camera, settings.cell_size, mouse_pos);
        state = input::process_keyboard_input(state, &settings, &mut camera, viewport);

        state = state.tick(get_frame_time(), viewport);

        clear_background(rendering::BACKGROUND);
        rendering::draw_cells(&state.alive, &camera, settings.cell_size as f32);
        rendering::draw_hud(&state, &settings);

        next_frame().await;
    }
}
