//! World plugin - level data loading and run setup/teardown.

use bevy::prelude::*;

use super::data::{load_level_definition, LoadedLevel};
use super::spawning::{cleanup_level, setup_level};
use crate::core::InRun;

/// World plugin - loads the level file and builds/tears down the arena.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadedLevel>()
            .add_systems(Startup, load_level_definition)
            .add_systems(OnEnter(InRun), setup_level)
            .add_systems(OnExit(InRun), cleanup_level);
    }
}
