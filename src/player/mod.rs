//! Player module - player entity, character data, and movement.

mod components;
pub mod data;
mod movement;
mod plugin;

pub use components::{Facing, Player};
pub use data::CharacterSheet;
pub use movement::spawn_player;
pub use plugin::PlayerPlugin;
