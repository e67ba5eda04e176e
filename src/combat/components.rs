//! Combat-related components.

use bevy::prelude::*;

/// Delay between an actor dying and the follow-up (despawn for
/// enemies, the game-over transition for the player).
#[derive(Component)]
pub struct DeathDelay(pub Timer);

impl DeathDelay {
    pub fn new(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}

/// Sprite color saved while a hit-flash tint is applied, restored when
/// the flash window ends.
#[derive(Component)]
pub struct BaseColor(pub Color);
