pub mod hud;
pub mod plugin;

pub use plugin::UiPlugin;
