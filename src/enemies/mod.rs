//! Enemies module - enemy entities, patrol AI, and wave spawning.

mod ai;
mod components;
pub mod data;
mod plugin;
mod spawning;

pub use components::{Enemy, EnemyStats, EnemyType, Patrol};
pub use data::EnemyRegistry;
pub use plugin::EnemyPlugin;
