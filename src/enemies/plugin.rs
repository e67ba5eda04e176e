//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::{load_enemy_definitions, EnemyRegistry};
use super::spawning::{start_waves, wave_tick, WaveTimer};
use crate::core::{GameState, InRun};
use crate::world::setup_level;

/// Enemy plugin - handles enemy spawning, AI, and death cleanup.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            .init_resource::<WaveTimer>()
            // Definitions are read once at startup
            .add_systems(Startup, load_enemy_definitions)
            // Opening wave needs the level set up first
            .add_systems(OnEnter(InRun), start_waves.after(setup_level))
            // AI runs during gameplay only (frozen while paused)
            .add_systems(
                Update,
                (
                    ai::detect_player,
                    ai::patrol_move,
                    ai::handle_enemy_death,
                    ai::despawn_dead_enemies,
                    wave_tick,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
