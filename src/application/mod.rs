mod camera;
mod game_state;

pub use camera::Camera;
pub use game_state::GameState;
