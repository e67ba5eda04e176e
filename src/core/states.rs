//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time: gameplay
//! systems only tick in `InGame`, menu systems only in their screen.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data files are read
/// - Move to `MainMenu` when loading completes
/// - Enter `InGame` when the player starts a run
/// - `Paused` freezes gameplay but keeps the world visible
/// - `GameOver` when the player dies
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// Player has died
    GameOver,
}

/// Computed state covering an active run (playing or paused).
///
/// Level setup/cleanup and the score are scoped to this, so pausing
/// never tears the world down or resets the run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InRun;

impl ComputedStates for InRun {
    type SourceStates = GameState;

    fn compute(sources: GameState) -> Option<Self> {
        matches!(sources, GameState::InGame | GameState::Paused).then_some(InRun)
    }
}
