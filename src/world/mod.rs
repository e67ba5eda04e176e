//! World module - level data and arena construction.

mod data;
mod error;
mod plugin;
mod spawning;

pub use data::{ItemSpawn, LevelDefinition, LoadedLevel, WaveSettings};
pub use error::DataLoadError;
pub use plugin::WorldPlugin;
pub use spawning::{cleanup_level, setup_level, LevelGeometry};
