use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::config::{KeyBindings, Settings};
use crate::domain::{Viewport, presets};

/// Number keys that stamp the preset with the same index
const PATTERN_KEYS: [KeyCode; 7] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
];

pub fn exit_requested(keys: &KeyBindings) -> bool {
    is_key_pressed(keys.exit)
}

/// Pan with middle mouse button drag, when the profile allows it
pub fn handle_pan(camera: &mut Camera, settings: &Settings, mouse_pos: (f32, f32)) {
    if settings.profile.camera_enabled() && is_mouse_button_down(MouseButton::Middle) {
        camera.drag(mouse_pos);
    } else {
        camera.end_drag();
    }
}

/// Left button paints, right button erases, at the cell under the pointer
pub fn handle_mouse_paint(
    state: GameState,
    camera: &Camera,
    cell_size: u32,
    mouse_pos: (f32, f32),
) -> GameState {
    let cell = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, cell_size as f32);

    if is_mouse_button_down(MouseButton::Left) {
        state.paint(cell)
    } else if is_mouse_button_down(MouseButton::Right) {
        state.erase(cell)
    } else {
        state
    }
}

/// Stamp a preset centered under the pointer
pub fn handle_pattern_keys(
    state: GameState,
    camera: &Camera,
    cell_size: u32,
    mouse_pos: (f32, f32),
) -> GameState {
    let cell = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, cell_size as f32);

    PATTERN_KEYS
        .iter()
        .zip(presets::ALL.iter())
        .fold(state, |s, (key, pattern)| {
            if is_key_pressed(*key) { s.place_pattern(pattern, cell) } else { s }
        })
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    state: GameState,
    settings: &Settings,
    camera: &mut Camera,
    viewport: Viewport,
) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let keys = &settings.keys;
    let actions: [KeyAction; 5] = [
        (keys.play_pause, GameState::toggle_playing),
        (keys.faster, GameState::faster),
        (keys.slower, GameState::slower),
        (keys.clear, GameState::clear),
        (keys.toggle_strategy, GameState::toggle_strategy),
    ];

    let state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    let state = if is_key_pressed(keys.randomize) {
        state.randomize(viewport, settings.density)
    } else {
        state
    };

    if keys.reset_camera.is_some_and(is_key_pressed) {
        camera.reset();
    }

    state
}
