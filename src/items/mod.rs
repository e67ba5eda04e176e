//! Items module - collectible hearts and coins.

mod components;
mod plugin;
mod systems;

pub use components::{Item, ItemKind};
pub use plugin::ItemsPlugin;
pub use systems::spawn_item;
