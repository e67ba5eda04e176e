//! Core plugin that sets up game states, events, and the score.

use bevy::prelude::*;

use super::events::*;
use super::score::{accumulate_score, reset_score, Score};
use super::states::{GameState, InRun};

/// Core plugin - must be added first as other plugins depend on it.
///
/// Sets up:
/// - Game states (Loading, MainMenu, InGame, ...)
/// - Global events (DamageEvent, DeathEvent, pickups)
/// - The run score
/// - Pause handling
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_computed_state::<InRun>()
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()
            .add_event::<ItemPickupEvent>()
            .add_event::<CoinCollectedEvent>()
            // Run score
            .init_resource::<Score>()
            .add_systems(OnEnter(InRun), reset_score)
            .add_systems(
                Update,
                accumulate_score.run_if(in_state(GameState::InGame)),
            )
            // Loading state - data files are read in Startup systems,
            // so by the first frame there is nothing left to wait for.
            .add_systems(OnEnter(GameState::Loading), transition_to_main_menu)
            // Pause/unpause with Escape
            .add_systems(
                Update,
                handle_pause_input
                    .run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            );
    }
}

/// Immediately transition from Loading to MainMenu.
fn transition_to_main_menu(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

/// Handle Escape to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
            _ => {}
        }
    }
}
