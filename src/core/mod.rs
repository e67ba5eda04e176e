//! Core game module - states, events, and the run score.
//!
//! This module provides the foundation that all other game systems
//! build upon.

mod events;
mod plugin;
mod score;
mod states;

pub use events::*;
pub use plugin::CorePlugin;
pub use score::Score;
pub use states::{GameState, InRun};
