//! Oniric Forest, a 2D action game about a kid fighting off sleep.
//!
//! Module layout:
//! - `actor`: health, timed status flags, and the ability cycle
//! - `combat`: contact damage, attack input, and death handling
//! - `core`: app states, shared events, and the score
//! - `enemies`: definitions, patrol AI, and wave spawning
//! - `items`: pickups (hearts and coins)
//! - `player`: Hurtadilla's movement and character sheet
//! - `ui`: menus and the in-game HUD
//! - `world`: level data, geometry, and the camera

pub mod actor;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod items;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Top-level plugin wiring every subsystem together.
pub struct OniricForestPlugin;

impl Plugin for OniricForestPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            world::WorldPlugin,
            player::PlayerPlugin,
            combat::CombatPlugin,
            enemies::EnemyPlugin,
            items::ItemsPlugin,
            ui::UiPlugin,
        ));
    }
}
