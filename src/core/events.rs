//! Global events used for cross-system communication.
//!
//! Events keep the collision, damage, and scoring systems decoupled:
//! contact resolution sends `DamageEvent`s, the damage system applies
//! them, and death/pickup listeners react independently.

use bevy::prelude::*;

/// Sent when an entity should take a hit.
///
/// The damage system applies it through `Actor::apply_damage`, which
/// ignores it while the target is invincible or dead.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Hit points removed
    pub amount: u32,
}

/// Sent once when an entity's health reaches 0.
#[derive(Event)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}

/// Sent when the player picks up an item.
#[derive(Event)]
pub struct ItemPickupEvent {
    /// The item entity being picked up
    pub item: Entity,
    /// The player entity
    pub player: Entity,
}

/// Sent when a coin is collected; the score listens for these.
#[derive(Event)]
pub struct CoinCollectedEvent {
    pub value: u32,
}
