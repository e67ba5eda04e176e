//! Items plugin - pickup resolution.

use bevy::prelude::*;

use super::systems::collect_items;
use crate::core::GameState;

/// Items plugin - resolves collectible pickups during gameplay.
pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            collect_items.run_if(in_state(GameState::InGame)),
        );
    }
}
