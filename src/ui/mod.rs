//! Terminal front end.

pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod params_scene;
pub mod terminal;
