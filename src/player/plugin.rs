//! Player plugin - character data and movement systems.

use bevy::prelude::*;

use super::data::{load_character_definition, CharacterSheet};
use super::movement;

/// Player plugin - handles the player's data, spawning, and movement.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);

        app.init_resource::<CharacterSheet>()
            .add_systems(Startup, load_character_definition);
    }
}
