//! Combat module - attacks, contact damage, and death handling.

mod components;
mod plugin;
mod systems;

pub use components::DeathDelay;
pub use plugin::CombatPlugin;
pub use systems::CombatSet;
