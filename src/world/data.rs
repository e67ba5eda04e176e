//! Level data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;
use crate::items::ItemKind;

/// An item placement in the level.
#[derive(Deserialize, Clone, Debug)]
pub struct ItemSpawn {
    pub kind: ItemKind,
    pub pos: (f32, f32),
}

/// Enemy wave settings (initial wave plus optional periodic respawn).
#[derive(Deserialize, Clone, Debug)]
pub struct WaveSettings {
    /// Enemies spawned per wave, cycled over the spawn points.
    pub enemies_per_wave: usize,
    /// Hard cap on enemies alive at once.
    pub max_enemies: usize,
    /// Seconds between waves; 0 means only the initial wave.
    pub spawn_interval: f32,
    /// Enemy types to draw from (one picked at random per spawn).
    pub kinds: Vec<String>,
}

/// Level definition loaded from RON.
#[derive(Deserialize, Clone, Debug)]
pub struct LevelDefinition {
    pub name: String,
    /// Arena half-extents in world units.
    pub half_extents: (f32, f32),
    pub player_spawn: (f32, f32),
    pub enemy_spawn_points: Vec<(f32, f32)>,
    pub items: Vec<ItemSpawn>,
    pub waves: WaveSettings,
}

impl LevelDefinition {
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.player_spawn.0, self.player_spawn.1)
    }
}

/// Resource holding the loaded level, if any.
#[derive(Resource, Default)]
pub struct LoadedLevel(pub Option<LevelDefinition>);

/// Parse a level definition from RON text.
pub fn parse_level(path: &str, contents: &str) -> Result<LevelDefinition, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::parse(path, e))
}

/// Load the level file at startup.
pub fn load_level_definition(mut loaded: ResMut<LoadedLevel>) {
    let path = "assets/data/level.ron";

    if !Path::new(path).exists() {
        error!("{}", DataLoadError::FileNotFound(path.to_string()));
        return;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            error!(
                "{}",
                DataLoadError::ReadError {
                    path: path.to_string(),
                    details: err.to_string(),
                }
            );
            return;
        }
    };

    match parse_level(path, &contents) {
        Ok(level) => {
            info!("Loaded level: {}", level.name);
            loaded.0 = Some(level);
        }
        Err(err) => error!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: &str = r#"
        (
            name: "Test Glade",
            half_extents: (20.0, 12.0),
            player_spawn: (0.0, 0.0),
            enemy_spawn_points: [(5.0, 5.0), (-5.0, -5.0)],
            items: [
                (kind: Heart(heal: 1), pos: (3.0, 0.0)),
                (kind: Coin(value: 10), pos: (-3.0, 0.0)),
            ],
            waves: (
                enemies_per_wave: 3,
                max_enemies: 10,
                spawn_interval: 0.0,
                kinds: ["shade"],
            ),
        )
    "#;

    #[test]
    fn parses_a_level_file() {
        let level = parse_level("level.ron", LEVEL).unwrap();
        assert_eq!(level.name, "Test Glade");
        assert_eq!(level.enemy_spawn_points.len(), 2);
        assert_eq!(level.items.len(), 2);
        assert!(matches!(level.items[0].kind, ItemKind::Heart { heal: 1 }));
        assert_eq!(level.waves.kinds, vec!["shade".to_string()]);
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = parse_level("level.ron", "(name: oops").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }
}
